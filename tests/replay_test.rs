//! Tests for scripted replays.

use tic_tic_boom::{parse_moves, run_replay, GameBoard, Settings, Symbol};

fn replay_text(moves: &str, json: bool) -> String {
    let moves = parse_moves(moves).unwrap();
    let mut output = Vec::new();
    run_replay(&moves, json, &Settings::default(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_replay_reports_each_move() {
    let output = replay_text("O:0,0 O:1,1 X:1,1", false);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "O -> (0,0): O placed at (0,0)");
    assert_eq!(lines[1], "O -> (1,1): It's not O's turn. It's X's turn.");
    assert_eq!(lines[2], "X -> (1,1): X placed at (1,1)");
    assert!(output.ends_with("O's turn\n"));
}

#[test]
fn test_replay_depreciation_win() {
    let output = replay_text("X:0,0 O:1,0 X:0,2 O:2,2 X:1,1 O:0,1 X:2,0", false);
    assert!(output.contains("X placed at (2,0); X's mark at (0,0) was removed. X wins!"));
    assert!(output.contains(".|O|X\n-+-+-\nO|X|.\n-+-+-\nX|.|O"));
    assert!(output.ends_with("Game over! X wins!\n"));
}

#[test]
fn test_replay_json_snapshot_round_trips() {
    let output = replay_text("O:0,0 X:1,1 O:2,2 X:0,2", true);
    let json_start = output.find('{').unwrap();
    let board: GameBoard = serde_json::from_str(&output[json_start..]).unwrap();
    assert_eq!(board.marks_on_board(Symbol::O), 2);
    assert_eq!(board.marks_on_board(Symbol::X), 2);
    assert_eq!(board.current_turn(), Some(Symbol::O));
    assert_eq!(board.history(Symbol::X).len(), 2);
}

#[test]
fn test_empty_replay_prints_fresh_board() {
    let output = replay_text("", false);
    assert!(output.starts_with(".|.|."));
    assert!(output.ends_with("Next move! Either symbol may start.\n"));
}
