//! Text renderers for board dumps.
//!
//! `render_codes` prints the two-character cell codes the layout parser reads
//! back; `render_unicode` is a framed view with file and rank labels.

use crate::game_state::chess_types::*;

/// Rows of two-character codes, top row first, `--` for empty cells.
pub fn render_codes(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE as u8 {
        let line: Vec<String> = (0..BOARD_SIZE as u8)
            .map(|col| match board.piece_at(Square::new(row, col)) {
                Some(piece) => piece.to_string(),
                None => "--".to_owned(),
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Render the board to a Unicode string for terminal output.
pub fn render_unicode(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE as u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE as u8 {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STANDARD_LAYOUT;
    use crate::utils::layout_parser::parse_layout;

    #[test]
    fn code_dump_reads_back_as_same_board() {
        let board = Board::new_game();
        let dump = render_codes(&board);
        let rows: Vec<&str> = dump.lines().collect();
        assert_eq!(rows, STANDARD_LAYOUT);
        assert_eq!(parse_layout(&rows, Color::White), Ok(board));
    }

    #[test]
    fn unicode_view_has_labels_and_pieces() {
        let text = render_unicode(&Board::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
    }
}
