use std::path::PathBuf;

use assert_cmd::Command;

fn polychain() -> Command {
    Command::new(env!("CARGO_BIN_EXE_polychain"))
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let output = polychain().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage: polychain"));
}

#[test]
fn test_cli_prints_chain_for_monomer_and_degree() {
    polychain()
        .args(["*CC*", "3"])
        .assert()
        .success()
        .stdout("*CCCCCC*\n");
}

#[test]
fn test_cli_degree_defaults_to_two() {
    polychain().arg("*CC*").assert().success().stdout("*CCCC*\n");
    polychain()
        .args(["--degree", "1", "*CC*"])
        .assert()
        .success()
        .stdout("*CC*\n");
}

#[test]
fn test_cli_reports_errors_on_stderr() {
    let output = polychain().args(["CC", "2"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: "), "{stderr}");
}

#[test]
fn test_cli_usage_errors_exit_two() {
    for args in [vec![], vec!["*CC*", "0"], vec!["--bogus", "*CC*"], vec!["*CC*", "2", "3"]] {
        let output = polychain().args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(2), "{args:?}");
    }
}

#[test]
fn test_cli_strict_rejects_extra_placeholders() {
    polychain().args(["*CC(C*)*", "2"]).assert().success();
    polychain()
        .args(["--strict", "*CC(C*)*", "2"])
        .assert()
        .code(1);
}

#[test]
fn test_cli_json_output() {
    let output = polychain().args(["--json", "*CC*", "2"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["smiles"], "*CCCC*");
    assert_eq!(value["report"]["removed_markers"], 2);
}

#[test]
fn test_cli_batch_mode() {
    let path = temp_input(
        "polychain_batch_mode.txt",
        "# monomers\n*CC*\n\nCC\n*C*\n",
    );
    let path = path.to_str().unwrap().to_string();

    let output = polychain()
        .args(["--degree", "3", "--batch", &path])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "*CCCCCC*");
    assert!(lines[1].starts_with("Error: "));
    assert_eq!(lines[2], "*CCC*");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_cli_batch_missing_file() {
    polychain()
        .args(["--batch", "/nonexistent/polychain-monomers.txt"])
        .assert()
        .code(1);
}

fn temp_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("{}_{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}
