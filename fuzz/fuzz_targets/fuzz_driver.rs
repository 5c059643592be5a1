#![no_main]

use libfuzzer_sys::fuzz_target;

use pairop_core::operation::Add;
use pairop_lib::app::run_captured;

fuzz_target!(|data: &[u8]| {
    // Split the input on NUL into argument strings
    let args: Vec<String> = data
        .split(|&b| b == 0)
        .map(|part| String::from_utf8_lossy(part).into_owned())
        .collect();

    let (output, code) = run_captured(args, &Add::new()).expect("in-memory writes cannot fail");
    assert_eq!(code, 0);
    assert!(output.ends_with("\r\n"));
});
