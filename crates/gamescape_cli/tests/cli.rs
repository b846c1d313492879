use clap::Parser;
use gamescape_cli::cli::Cli;
use gamescape_cli::{execute, Outcome};

fn run(args: &[&str]) -> Outcome {
    let cli = Cli::try_parse_from(std::iter::once("gamescape").chain(args.iter().copied()))
        .expect("args should parse");
    execute(&cli).expect("execution should succeed")
}

fn printed(args: &[&str]) -> String {
    match run(args) {
        Outcome::Print(text) => text,
        Outcome::Usage => panic!("expected output for {args:?}"),
    }
}

#[test]
fn list_prints_registry() {
    let out = printed(&["--list"]);
    assert!(out.contains("prisoners-dilemma"));
    assert!(out.contains("stag-hunt"));
    assert!(out.contains("hawk-dove"));
}

#[test]
fn named_game_reports_classification() {
    let out = printed(&["prisoners-dilemma", "--no-color"]);
    assert!(out.contains("Classification: dominant-strategy-1"));
    assert!(out.contains("x=0.0000 (all-strategy-1, stable)"));
    assert!(!out.contains('\u{1b}'));
}

#[test]
fn custom_matrix_renders_analysis() {
    let out = printed(&["--matrix", "3,0,5,1", "--no-color"]);
    assert!(out.contains("Fixed Points"));
    assert!(out.contains("dominant-strategy-1"));
}

#[test]
fn stag_hunt_is_coordination() {
    let out = printed(&["stag-hunt", "--no-color"]);
    assert!(out.contains("Classification: coordination"));
    assert!(out.contains("(interior, unstable)"));
}

#[test]
fn flow_width_is_configurable() {
    let out = printed(&["harmony", "--no-color", "--width", "12"]);
    let flow = out
        .lines()
        .find(|line| line.starts_with("  all-D |"))
        .expect("flow line present");
    assert_eq!(flow, "  all-D |o>>>>>>>>>>@| all-C");
}

#[test]
fn json_output_is_parseable() {
    let out = printed(&["coordination", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(json["classification"], "coordination");
    assert_eq!(json["game"], "coordination");
}

#[test]
fn missing_game_requests_usage() {
    assert_eq!(run(&[]), Outcome::Usage);
    assert_eq!(run(&["--no-color"]), Outcome::Usage);
}

#[test]
fn malformed_matrix_is_rejected_before_analysis() {
    let err = Cli::try_parse_from(["gamescape", "--matrix", "1,2,3,4,5"])
        .expect_err("five fields should fail");
    assert!(err.to_string().contains("got 5"));
}
