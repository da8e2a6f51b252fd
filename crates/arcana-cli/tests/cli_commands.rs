#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
#![allow(missing_docs)]

use assert_cmd::Command;
use predicates::prelude::*;

fn arcana() -> Command {
    let mut cmd = Command::cargo_bin("arcana").unwrap();
    cmd.env_remove("TERM_PROGRAM").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = arcana().args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn three_card_draw_labels_positions() {
    arcana()
        .args(["draw", "--spread", "three", "--seed", "42", "--style", "plain"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Past:")
                .and(predicate::str::contains("Present:"))
                .and(predicate::str::contains("Future:"))
                .and(predicate::str::contains("Reversed").not()),
        );
}

#[test]
fn five_card_draw_uses_ordinals() {
    arcana()
        .args(["draw", "-s", "five", "--seed", "3", "--style", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.").and(predicate::str::contains("5.")));
}

#[test]
fn seeded_draws_are_reproducible() {
    let args = ["draw", "--spread", "celticCross", "--reversals", "--seed", "7"];
    assert_eq!(stdout_of(&args), stdout_of(&args));
}

#[test]
fn unknown_spread_fails() {
    arcana()
        .args(["draw", "--spread", "pentagram"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown spread type: pentagram"));
}

#[test]
fn negative_seed_is_rejected() {
    arcana()
        .args(["draw", "--spread", "single", "--seed", "-1"])
        .assert()
        .failure();
}

#[test]
fn json_output_parses() {
    let stdout = stdout_of(&[
        "draw",
        "--spread",
        "celtic",
        "--seed",
        "11",
        "--question",
        "What lies ahead?",
        "--json",
    ]);
    let reading: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reading["spread"], "celticCross");
    assert_eq!(reading["question"], "What lies ahead?");
    assert_eq!(reading["allow_reversals"], false);

    let placements = reading["placements"].as_array().unwrap();
    assert_eq!(placements.len(), 10);
    assert_eq!(placements[0]["label"], "Present/Significator");
    assert_eq!(placements[9]["label"], "Outcome");
}

#[test]
fn question_is_shown() {
    arcana()
        .args(["draw", "--spread", "single", "--question", "Should I go?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Should I go?"));
}

#[test]
fn question_flag_is_trimmed_and_blank_dropped() {
    let stdout = stdout_of(&["draw", "-s", "single", "--question", "  Will it hold?  ", "--json"]);
    let reading: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(reading["question"], "Will it hold?");

    let stdout = stdout_of(&["draw", "-s", "single", "--question", "   ", "--json"]);
    let reading: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(reading.get("question").is_none());
}

#[test]
fn frame_style_draws_card_art() {
    arcana()
        .args(["draw", "--spread", "single", "--seed", "1", "--style", "frame"])
        .assert()
        .success()
        .stdout(predicate::str::contains("┌─────────────┐").and(predicate::str::contains("└─────────────┘")));
}

// ---------------------------------------------------------------------------
// draw (interactive)
// ---------------------------------------------------------------------------

#[test]
fn prompts_when_spread_is_omitted() {
    arcana()
        .args(["draw", "--seed", "5", "--style", "plain"])
        .write_stdin("three\nno\nWhere next?\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Choose a spread"))
        .stdout(
            predicate::str::contains("Where next?")
                .and(predicate::str::contains("Past:"))
                .and(predicate::str::contains("Future:")),
        );
}

#[test]
fn empty_answers_draw_a_single_card() {
    arcana()
        .args(["draw", "--seed", "5", "--style", "plain"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.").and(predicate::str::contains("2.").not()));
}

#[test]
fn prompted_unknown_spread_fails() {
    arcana()
        .args(["draw"])
        .write_stdin("hexagram\nyes\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown spread type: hexagram"));
}

// ---------------------------------------------------------------------------
// spreads
// ---------------------------------------------------------------------------

#[test]
fn spreads_lists_catalog() {
    arcana()
        .arg("spreads")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("single")
                .and(predicate::str::contains("three"))
                .and(predicate::str::contains("five"))
                .and(predicate::str::contains("celticCross"))
                .and(predicate::str::contains("4 spreads")),
        );
}
