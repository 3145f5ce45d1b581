//! End-to-end tests for the `ping_website` binary.
//!
//! Probes go through `--ping echo` or `--ping false` so no network is needed:
//! `echo -c 4 <host>` succeeds and prints the host back, `false` always fails.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn create_test_cmd() -> Command {
	Command::cargo_bin("ping_website").unwrap()
}

#[test]
fn test_help() {
	create_test_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("input_txt").or(predicate::str::contains("INPUT_TXT")));
}

#[test]
fn test_missing_arguments() {
	create_test_cmd()
		.assert()
		.failure();
}

#[test]
fn test_missing_input_file() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("nope.txt");
	let output = dir.path().join("out.csv");

	create_test_cmd()
		.arg(&input)
		.arg(&output)
		.assert()
		.code(1)
		.stderr(predicate::str::contains("nope.txt"));

	assert!(!output.exists(), "output must not be created when input is missing");
}

#[test]
fn test_missing_input_keeps_previous_output() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("nope.txt");
	let output = dir.path().join("out.csv");
	std::fs::write(&output, "previous run\n").unwrap();

	create_test_cmd()
		.arg(&input)
		.arg(&output)
		.assert()
		.failure();

	assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous run\n");
}

#[cfg(unix)]
#[test]
fn test_two_hosts_end_to_end() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("hosts.txt");
	let output = dir.path().join("out.csv");
	std::fs::write(&input, "example.com\nlocalhost").unwrap();

	create_test_cmd()
		.args(["--ping", "false"])
		.arg(&input)
		.arg(&output)
		.assert()
		.success()
		.stderr(predicate::str::contains("example.com"))
		.stderr(predicate::str::contains("localhost"));

	let content = std::fs::read_to_string(&output).unwrap();
	assert_eq!(content, "filename,min,avg,max\nexample.com,,,\nlocalhost,,,\n");
}

#[cfg(unix)]
#[test]
fn test_mixed_success_and_failure() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("hosts.txt");
	let output = dir.path().join("out.csv");
	std::fs::write(&input, "\n  12.345/23.456/34.567\tunparsable.host\n\n0.5/1.25/2.0  ").unwrap();

	create_test_cmd()
		.args(["--ping", "echo"])
		.arg(&input)
		.arg(&output)
		.assert()
		.success()
		.stdout(predicate::str::contains("Results written to"));

	let content = std::fs::read_to_string(&output).unwrap();
	let lines: Vec<&str> = content.lines().collect();
	assert_eq!(lines, vec![
		"filename,min,avg,max",
		"12.345/23.456/34.567,12.345,23.456,34.567",
		"unparsable.host,,,",
		"0.5/1.25/2.0,0.5,1.25,2",
	]);
}

#[cfg(unix)]
#[test]
fn test_parallel_jobs_keep_order() {
	let dir = tempfile::tempdir().unwrap();
	let input = dir.path().join("hosts.txt");
	let output = dir.path().join("out.csv");
	let hosts: Vec<String> = (1..=10).map(|i| format!("{}.5/{}.5/{}.5", i, i, i)).collect();
	std::fs::write(&input, hosts.join("\n")).unwrap();

	create_test_cmd()
		.args(["--ping", "echo", "--jobs", "4", "--summary"])
		.arg(&input)
		.arg(&output)
		.assert()
		.success()
		.stdout(predicate::str::contains("10/10 hosts responded"));

	let mut reader = csv::Reader::from_path(&output).unwrap();
	let names: Vec<String> = reader.records()
		.map(|r| r.unwrap()[0].to_string())
		.collect();
	assert_eq!(names, hosts);
}
