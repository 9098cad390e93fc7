//! Integration tests for the non-interactive command line

use std::io::Write;
use std::process::{Command, Stdio};

/// A 3x3 sheet with `life = 42`, so tests do not depend on a user's
/// ~/.config/sheep/sheep.toml.
fn small_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sheet]\nrows = 3\ncolumns = 3\n\n[built_ins]\nlife = 42").unwrap();
    file
}

fn run_command(args: &[&str], stdin: Option<&str>) -> (String, String, i32) {
    let config = small_config();
    let mut child = Command::new(env!("CARGO_BIN_EXE_sheep"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    if let Some(input) = stdin {
        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
    }
    let output = child.wait_with_output().expect("Failed to wait for command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn test_built_in_and_raw_formula() {
    let (stdout, stderr, code) = run_command(&["-e", "A0: life", "-e", "B1: A1 + 1"], None);
    assert_eq!(code, 0, "{}", stderr);
    assert_eq!(
        stdout,
        "|   | A | B | C |\n\
         |---|---|---|---|\n\
         | 0 | 42 |  |  |\n\
         | 1 |  | A1 + 1 |  |\n\
         | 2 |  |  |  |\n"
    );
}

#[test]
fn test_formula_over_cells() {
    let (stdout, _, code) = run_command(&["-e", "A0: 10", "-e", "A1: 3", "-e", "C2: A0 / A1"], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("| 2 |  |  | 3 |"));
}

#[test]
fn test_parse_failure_exit_code() {
    let (stdout, stderr, code) = run_command(&["-e", "A0: 7", "-e", "A0: 4+"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unable to parse: 4+"));
    // The earlier value survives.
    assert!(stdout.contains("| 0 | 7 |"));
}

#[test]
fn test_out_of_bounds_edit() {
    let (_, stderr, code) = run_command(&["-e", "A7: 1"], None);
    assert_eq!(code, 1);
    assert!(stderr.contains("out of bounds"));
}

#[test]
fn test_malformed_edit_argument() {
    let (_, stderr, code) = run_command(&["-e", "a0 = 1"], None);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("Error:"));
}

#[test]
fn test_edits_from_stdin() {
    let script = "# totals\nA0: 1\nA1: 2\nA2: A0 + A1\n";
    let (stdout, _, code) = run_command(&["-i", "-"], Some(script));
    assert_eq!(code, 0);
    assert!(stdout.contains("| 2 | 3 |"));
}

#[test]
fn test_dependents() {
    let (stdout, _, code) = run_command(
        &["-e", "B2: C2 - 1", "-e", "A0: B2 * 2", "-d", "C2"],
        None,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "A0\nB2\n");
}

#[test]
fn test_markdown_output() {
    let dir = tempfile::tempdir().unwrap();
    let output_file = dir.path().join("sheet.md");
    let output = output_file.to_str().unwrap();

    let (stdout, _, code) = run_command(&["-e", "B0: life * 2", "-o", output], None);
    assert_eq!(code, 0);
    assert!(stdout.contains("Exported to"));

    let content = std::fs::read_to_string(&output_file).unwrap();
    assert!(content.starts_with("# Sheet"));
    assert!(content.contains("| 0 |  | 84 |  |"));
}
