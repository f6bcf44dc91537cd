// tests/cli.rs

use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn no_argument_prints_usage_and_exits_1_without_writing() {
    let tmp = tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_io500-csv"))
        .current_dir(tmp.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Usage: io500-csv <input_file_path>"));

    // no output files were created
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn converts_a_report_and_exits_0() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("run1.txt");
    fs::write(
        &input,
        "[RESULT] ior-easy-write 12.34 GiB/s : time 387.121 seconds\n\
         [SCORE ] Bandwidth 12.34 GiB/s : IOPS 56.78 kiops : TOTAL 26.47",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_io500-csv"))
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(tmp.path().join("daos_io500_run1.csv").exists());
    assert!(tmp.path().join("daos_io500_score.csv").exists());
    assert!(tmp.path().join("daos_io500_total.csv").exists());
}
