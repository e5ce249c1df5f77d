// Regression tests for the rome binary
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn rome() -> Command {
    let mut cmd = Command::cargo_bin("rome").unwrap();
    cmd.arg("--color").arg("never");
    cmd
}

#[test]
fn cli_parses_numerals() {
    rome()
        .args(["parse", "MMXXIII", "IV"])
        .assert()
        .success()
        .stdout(contains("Result: 2023").and(contains("Result: 4")));
}

#[test]
fn cli_reports_miette_diagnostics_on_error() {
    rome()
        .args(["parse", "IIII"])
        .assert()
        .failure()
        .stderr(contains("rome::tokenize::invalid_repeat_count"));
}

#[test]
fn cli_emits_json() {
    rome()
        .args(["parse", "--json", "XC"])
        .assert()
        .success()
        .stdout(contains(r#""value":90"#));
}

#[test]
fn cli_renders_values() {
    rome()
        .args(["render", "1999", "2023"])
        .assert()
        .success()
        .stdout("MCMXCIX\nMMXXIII\n");

    rome().args(["render", "0"]).assert().failure();
}

#[test]
fn cli_repl_is_the_default() {
    rome()
        .write_stdin("MCMXCIX\nLL\n")
        .assert()
        .success()
        .stdout(
            contains("Write a roman numeral: ")
                .and(contains("Result: 1999"))
                .and(contains("Invalid input: character L cannot appear 2 times in a row")),
        );
}

#[test]
fn cli_refuses_values_too_large_to_render() {
    rome()
        .args(["render", "18446744073709551615"])
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("too large to render"));
}
