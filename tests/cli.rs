// SPDX-License-Identifier: AGPL-3.0-only
// Integration smoke tests for the CLI to ensure end-to-end flows keep working.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn transcodes_stdin_until_terminator() {
    cargo_bin_cmd!("rovar")
        .write_stdin("hej!ignored")
        .assert()
        .success()
        .stdout("hohejoj");
}

#[test]
fn transcodes_stdin_to_end_of_stream() {
    cargo_bin_cmd!("rovar")
        .write_stdin("stora kakor")
        .assert()
        .success()
        .stdout("sostotorora kokakokoror");
}

#[test]
fn empty_stdin_produces_empty_output() {
    cargo_bin_cmd!("rovar")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn preserves_case_and_passes_non_letters_through() {
    cargo_bin_cmd!("rovar")
        .write_stdin("Hej, 123!")
        .assert()
        .success()
        .stdout("HoHejoj, 123");
}

#[test]
fn transcodes_from_file_path() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "kaka!").expect("write temp");
    cargo_bin_cmd!("rovar")
        .arg(file.path())
        .assert()
        .success()
        .stdout("kokakoka");
}

#[test]
fn dash_argument_reads_stdin() {
    cargo_bin_cmd!("rovar")
        .arg("-")
        .write_stdin("bu!")
        .assert()
        .success()
        .stdout("bobu");
}

#[test]
fn terminator_in_first_file_stops_the_run() {
    let mut first = NamedTempFile::new().expect("temp file");
    write!(first, "b!").expect("write temp");
    let mut second = NamedTempFile::new().expect("temp file");
    write!(second, "zz").expect("write temp");
    cargo_bin_cmd!("rovar")
        .arg(first.path())
        .arg(second.path())
        .assert()
        .success()
        .stdout("bob");
}

#[test]
fn terminator_override_is_honoured() {
    cargo_bin_cmd!("rovar")
        .args(["--terminator", "\\x2e"])
        .write_stdin("ab.cd")
        .assert()
        .success()
        .stdout("abob");
}

#[test]
fn missing_file_reports_and_fails() {
    cargo_bin_cmd!("rovar")
        .arg("/nonexistent/rovar-input")
        .assert()
        .failure()
        .stderr(contains("Cannot open"));
}

#[test]
fn version_flag_prints_banner() {
    cargo_bin_cmd!("rovar")
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("rovar").and(contains("commit:")));
}
