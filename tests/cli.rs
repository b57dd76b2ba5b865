//! End-to-end runs of the `tsp-planner` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const TEXTBOOK: &str = "0,10,15,20\n10,0,35,25\n15,35,0,30\n20,25,30,0\n";

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tsp-planner"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tsp-planner");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for tsp-planner")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn solves_matrix_from_stdin() {
    let output = run(&[], TEXTBOOK);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Cities: 4\n"), "stdout: {}", text);
    assert!(text.contains("Cost: 80\n"), "stdout: {}", text);
    let path = text
        .lines()
        .find_map(|line| line.strip_prefix("Path: "))
        .expect("path line");
    assert!(path.starts_with("0 -> ") && path.ends_with(" -> 0"), "path: {}", path);
    assert_eq!(path.split(" -> ").count(), 5);
}

#[test]
fn dash_reads_stdin() {
    let output = run(&["-"], "0,5\n5,0\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Cities: 2\nCost: 10\nPath: 0 -> 1 -> 0\n");
}

#[test]
fn reports_missing_tour() {
    let output = run(&[], "0,1,1,inf\n1,0,1,inf\n1,1,0,inf\n1,1,1,0\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Cities: 4\nNo tour exists\n");
}

#[test]
fn invalid_matrix_fails() {
    let output = run(&[], "0,1,2\n1,0\n2,1,0\n");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("invalid matrix"), "stderr: {}", err);
    assert!(err.contains("must be square"), "stderr: {}", err);
}

#[test]
fn bad_number_fails() {
    let output = run(&[], "0,x\n1,0\n");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("\"x\""), "stderr: {}", stderr(&output));
}

#[test]
fn too_many_cities_fails() {
    let output = run(&["--max-cities", "3"], TEXTBOOK);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("exceeds the limit of 3"), "stderr: {}", stderr(&output));
}

#[test]
fn json_output() {
    let output = run(&["--json"], "0,5\n5,0\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json output");
    assert_eq!(value["Tour"]["cost"], 10.0);
    assert_eq!(value["Tour"]["path"], serde_json::json!([0, 1, 0]));
}

#[test]
fn json_no_tour() {
    let output = run(&["--json"], "0,inf\n5,0\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output).trim(), "\"NoTour\"");
}

#[test]
fn show_matrix_echoes_input() {
    let output = run(&["--show-matrix"], "0,5\n5,0\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "0  5\n5  0\n\nCities: 2\nCost: 10\nPath: 0 -> 1 -> 0\n");
}

#[test]
fn large_instance_warns_on_stderr() {
    let output = run(&["--warn-threshold", "3"], TEXTBOOK);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("large instance"), "stderr: {}", stderr(&output));
}
