#![no_main]

use libfuzzer_sys::fuzz_target;

use pairop_core::parse::parse_leading_int;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let value = parse_leading_int(&text);

    // A decimal rendering of the result must parse back to itself.
    assert_eq!(parse_leading_int(&value.to_string()), value);
});
