//! Plain-text rendering of the board.

use crate::config::Settings;
use tic_tic_boom_core::{GameBoard, Symbol, BOARD_SIZE};

/// Draws the grid with the configured glyphs.
///
/// Cells are padded to the widest glyph so the separators line up.
pub fn render_board(board: &GameBoard, settings: &Settings) -> String {
    let width = board
        .cells()
        .map(|(_, cell)| settings.cell_glyph(cell).chars().count())
        .max()
        .unwrap_or(1);
    let separator = vec!["-".repeat(width); BOARD_SIZE].join("+");

    board
        .grid()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| format!("{:^width$}", settings.cell_glyph(cell)))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join(&format!("\n{}\n", separator))
}

/// Lists each symbol's live marks, oldest first.
pub fn render_histories(board: &GameBoard, settings: &Settings) -> String {
    [Symbol::O, Symbol::X]
        .into_iter()
        .map(|symbol| {
            let marks: Vec<String> = board.history(symbol).iter().map(|c| c.to_string()).collect();
            let listed = if marks.is_empty() {
                "-".to_string()
            } else {
                marks.join(" ")
            };
            format!("{}: {}", settings.glyph_for(symbol), listed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board, optional histories and status, as printed after each command.
pub fn render_frame(board: &GameBoard, settings: &Settings, status: &str) -> String {
    let mut frame = render_board(board, settings);
    if *settings.show_history() {
        frame.push_str("\n\n");
        frame.push_str(&render_histories(board, settings));
    }
    frame.push_str("\n\n");
    frame.push_str(status);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use tic_tic_boom_core::{replay, Move};

    #[test]
    fn test_render_default_glyphs() {
        let (board, _) = replay(&[Move::new(Symbol::O, 0, 0), Move::new(Symbol::X, 2, 2)]);
        let text = render_board(&board, &Settings::default());
        assert_eq!(text, "O|.|.\n-+-+-\n.|.|.\n-+-+-\n.|.|X");
    }

    #[test]
    fn test_render_histories_oldest_first() {
        let (board, _) = replay(&[
            Move::new(Symbol::O, 0, 0),
            Move::new(Symbol::X, 2, 2),
            Move::new(Symbol::O, 1, 1),
        ]);
        assert_eq!(
            render_histories(&board, &Settings::default()),
            "O: (0,0) (1,1)\nX: (2,2)"
        );
        assert_eq!(
            render_histories(&tic_tic_boom_core::GameBoard::new(), &Settings::default()),
            "O: -\nX: -"
        );
    }

    #[test]
    fn test_render_frame_ends_with_status() {
        let board = tic_tic_boom_core::GameBoard::new();
        let frame = render_frame(&board, &Settings::default(), "X's turn");
        assert!(frame.starts_with(".|.|."));
        assert!(frame.contains("O: -"));
        assert!(frame.ends_with("\n\nX's turn"));
    }
}
