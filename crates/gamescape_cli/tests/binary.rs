use std::process::Command;

fn gamescape() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gamescape"));
    cmd.env("RUST_LOG", "off").env_remove("NO_COLOR");
    cmd
}

#[test]
fn no_game_prints_usage_and_fails() {
    let output = gamescape().output().expect("failed to run gamescape binary");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"), "help missing from stdout: {stdout}");
    assert!(stdout.contains("--matrix"));
}

#[test]
fn malformed_matrix_fails_before_analysis() {
    let output = gamescape()
        .args(["--matrix", "1,2"])
        .output()
        .expect("failed to run gamescape binary");
    assert!(!output.status.success());
    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expected 4 comma-separated values (a,b,c,d), got 2"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Game Analysis"));
}

#[test]
fn non_finite_initial_condition_fails() {
    let output = gamescape()
        .args(["hawk-dove", "--no-color", "--x0", "nan"])
        .output()
        .expect("failed to run gamescape binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("must be finite"));
}

#[test]
fn named_game_succeeds() {
    let output = gamescape()
        .args(["hawk-dove", "--no-color"])
        .output()
        .expect("failed to run gamescape binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Classification: coexistence"));
    assert!(!stdout.contains('\u{1b}'));
}
