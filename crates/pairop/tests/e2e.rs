//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const DIAGNOSTIC: &str = "Only two arguments should be passed on the command line!\r\n";

fn pairop() -> Command {
    Command::cargo_bin("pairop").expect("binary not found")
}

#[test]
fn adds_two_operands() {
    pairop().args(["3", "4"]).assert().success().stdout("7\r\n");
}

#[test]
fn no_arguments() {
    pairop().assert().success().stdout(DIAGNOSTIC);
}

#[test]
fn one_argument() {
    pairop().arg("3").assert().success().stdout(DIAGNOSTIC);
}

#[test]
fn three_arguments() {
    pairop()
        .args(["3", "4", "5"])
        .assert()
        .success()
        .stdout(DIAGNOSTIC);
}

#[test]
fn negative_operand() {
    pairop().args(["-5", "10"]).assert().success().stdout("5\r\n");
}

#[test]
fn non_numeric_operand() {
    pairop().args(["abc", "4"]).assert().success().stdout("4\r\n");
}

#[test]
fn leading_numeral_operand() {
    pairop().args(["12x", "1"]).assert().success().stdout("13\r\n");
}

#[test]
fn empty_operands() {
    pairop().args(["", ""]).assert().success().stdout("0\r\n");
}

#[test]
fn overflowing_operand_wraps() {
    pairop()
        .args(["2147483648", "0"])
        .assert()
        .success()
        .stdout("-2147483648\r\n");
}

#[test]
fn help_is_not_a_flag() {
    pairop()
        .arg("--help")
        .assert()
        .success()
        .stdout(DIAGNOSTIC);
}

#[test]
fn flag_like_operands_are_parsed_as_text() {
    pairop()
        .args(["--version", "9"])
        .assert()
        .success()
        .stdout("9\r\n");
}

#[test]
fn double_dash_is_an_operand() {
    pairop().args(["--", "4"]).assert().success().stdout("4\r\n");
}

#[test]
fn nothing_on_stderr_by_default() {
    pairop()
        .env_remove("RUST_LOG")
        .args(["1", "2"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn debug_logging_stays_off_stdout() {
    pairop()
        .env("RUST_LOG", "debug")
        .args(["1", "2"])
        .assert()
        .success()
        .stdout("3\r\n")
        .stderr(predicate::str::contains("computing"));
}

#[test]
fn module_level_log_directive() {
    pairop()
        .env("RUST_LOG", "pairop_lib=debug")
        .args(["1", "2"])
        .assert()
        .success()
        .stdout("3\r\n")
        .stderr(predicate::str::contains("computing"));
}

#[cfg(unix)]
#[test]
fn non_utf8_operands_keep_numeric_prefix() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    pairop()
        .arg(OsStr::from_bytes(b"\xff12"))
        .arg(OsStr::from_bytes(b"7\xff"))
        .assert()
        .success()
        .stdout("7\r\n");
}

#[test]
fn vertical_tab_before_sign() {
    pairop()
        .args([" \x0b-3", "4"])
        .assert()
        .success()
        .stdout("1\r\n");
}

#[test]
fn repeated_invocations_match() {
    let first = pairop().args(["40", "2"]).output().unwrap();
    let second = pairop().args(["40", "2"]).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stdout, b"42\r\n");
}
