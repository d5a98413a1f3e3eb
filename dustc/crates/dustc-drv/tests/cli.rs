//! CLI-level integration tests (`SPEC_FULL.md` §9).
//!
//! Negative/error-path scenarios live here rather than in `dustc-par`'s
//! unit tests because `raise` terminates the process: `assert_cmd` can
//! observe that exit in a child process without taking down the test
//! binary itself.

use assert_cmd::Command;
use predicates::prelude::*;

fn dustc() -> Command {
    Command::cargo_bin("dustc").unwrap()
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = dustc();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("transpile"));
}

#[test]
fn version_reports_os_and_arch() {
    let mut cmd = dustc();
    cmd.arg("version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(std::env::consts::OS));
}

#[test]
fn tokenize_inline_source() {
    let mut cmd = dustc();
    cmd.args(["tokenize", "x = 1;"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Identifier"))
        .stdout(predicate::str::contains("StmtSep"));
}

#[test]
fn parse_inline_source_prints_ast() {
    let mut cmd = dustc();
    cmd.args(["parse", "int x = 1;"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("declaration:"))
        .stdout(predicate::str::contains("name: x"));
}

#[test]
fn parse_missing_semicolon_exits_nonzero() {
    let mut cmd = dustc();
    cmd.args(["parse", "int x = 1"]);
    cmd.assert().failure().code(1);
}

#[test]
fn parse_unclosed_body_exits_nonzero() {
    let mut cmd = dustc();
    cmd.args(["parse", "if a { x = 1;"]);
    cmd.assert().failure().code(1);
}

#[test]
fn transpile_emits_c_declaration() {
    let mut cmd = dustc();
    cmd.args(["transpile", "int x = 1 + 2;"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("int32_t x = (1+2);"));
}

#[test]
fn tokenize_reads_from_file_with_fp_flag() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("main.dust");
    std::fs::write(&path, "x = 1;").unwrap();

    let mut cmd = dustc();
    cmd.args(["tokenize", "--fp", path.to_str().unwrap()]);
    cmd.assert().success();
}

#[test]
fn no_color_flag_strips_ansi_from_diagnostic() {
    let mut cmd = dustc();
    cmd.args(["--no-color", "parse", "int x = 1"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
