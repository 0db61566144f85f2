//! Tests for the headless replay command.

use rewind::run_replay;

#[test]
fn test_replay_winning_game() {
    let output = run_replay(&[0, 4, 1, 3, 2], None, false, false).expect("Replay failed");

    assert!(output.starts_with(" X | X | X\n"));
    assert!(output.contains("\nWinner: X\n"));
    assert!(output.contains("> 6. Go to move #5\n"));
}

#[test]
fn test_replay_with_jump() {
    let output = run_replay(&[0, 4, 1, 3, 2], Some(2), false, false).expect("Replay failed");

    assert!(output.contains("\nNext player: X\n"));
    assert!(output.contains("> 3. Go to move #2\n"));
    // The later boards are still listed.
    assert!(output.contains("  6. Go to move #5\n"));
}

#[test]
fn test_replay_skips_occupied_cells() {
    let output = run_replay(&[4, 4, 0], None, false, false).expect("Replay failed");

    assert!(output.starts_with(" O |   |\n"));
    assert!(output.contains("\nNext player: X\n"));
    assert!(!output.contains("Go to move #3"));
}

#[test]
fn test_replay_rejects_jump_past_history() {
    let err = run_replay(&[0], Some(5), false, false).unwrap_err();
    assert!(err.to_string().contains("Cannot jump to step 5"));
}

#[test]
fn test_replay_json() {
    let output = run_replay(&[4], None, true, false).expect("Replay failed");
    let value: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

    assert_eq!(value["status"]["NextPlayer"], "O");
    assert_eq!(value["moves"][1]["label"], "Go to move #1");
    assert_eq!(value["cells"][4]["mark"], "X");
}
