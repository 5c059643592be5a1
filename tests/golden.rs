//! Golden file integration tests.
//!
//! Reads tests/testdata/driver_golden.json and verifies the driver prints the
//! recorded output, with exit status 0, for every recorded invocation.

use serde::Deserialize;

use pairop_core::operation::Add;
use pairop_core::parse::parse_leading_int;
use pairop_lib::app::run_captured;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    args: Vec<String>,
    output: String,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/driver_golden.json")
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_file_is_not_empty() {
    assert!(!load_golden().cases.is_empty());
}

#[test]
fn golden_driver_output() {
    for case in load_golden().cases {
        let (output, code) = run_captured(case.args.clone(), &Add::new()).unwrap();
        assert_eq!(output, case.output, "args {:?}", case.args);
        assert_eq!(code, 0, "args {:?}", case.args);
    }
}

#[test]
fn golden_results_match_parser() {
    for case in load_golden().cases {
        if case.args.len() != 3 {
            continue;
        }
        let expected =
            parse_leading_int(&case.args[1]).wrapping_add(parse_leading_int(&case.args[2]));
        assert_eq!(case.output, format!("{expected}\r\n"), "args {:?}", case.args);
    }
}
