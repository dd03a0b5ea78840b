//! Board construction from text.
//!
//! Two input forms are accepted: eight rows of two-character cell codes
//! (`wR bp --`, top row first), and the piece-placement and side-to-move
//! fields of a FEN string. Castling, en-passant and clock fields are not
//! modelled and are ignored when present.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;

/// Build a board from eight rows of whitespace-separated cell codes.
pub fn parse_layout(rows: &[&str], side_to_move: Color) -> ChessResult<Board> {
    if rows.len() != BOARD_SIZE {
        return Err(ChessError::InvalidLayout(format!(
            "expected {BOARD_SIZE} rows, got {}",
            rows.len()
        )));
    }

    let mut board = Board::new_empty();
    board.side_to_move = side_to_move;

    for (row, line) in rows.iter().enumerate() {
        let codes: Vec<&str> = line.split_whitespace().collect();
        if codes.len() != BOARD_SIZE {
            return Err(ChessError::InvalidLayout(format!(
                "row {row} has {} cells",
                codes.len()
            )));
        }
        for (col, code) in codes.into_iter().enumerate() {
            board.set_piece(Square::new(row as u8, col as u8), parse_cell_code(code)?);
        }
    }

    Ok(board)
}

/// Build a board from a single string of eight rows separated by `/` or
/// newlines, as typed on a command line.
pub fn parse_layout_text(text: &str, side_to_move: Color) -> ChessResult<Board> {
    let rows: Vec<&str> = text
        .split(['/', '\n'])
        .map(str::trim)
        .filter(|row| !row.is_empty())
        .collect();
    parse_layout(&rows, side_to_move)
}

/// Parse `w`/`b` as a side to move.
pub fn parse_side_to_move(text: &str) -> ChessResult<Color> {
    match text {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(ChessError::InvalidSideToMove(other.to_owned())),
    }
}

/// Parse one two-character cell code; `--` is an empty cell.
pub fn parse_cell_code(code: &str) -> ChessResult<Cell> {
    if code == "--" {
        return Ok(None);
    }

    let mut chars = code.chars();
    let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::InvalidPieceCode(code.to_owned()));
    };
    let color = match color {
        'w' => Color::White,
        'b' => Color::Black,
        _ => return Err(ChessError::InvalidPieceCode(code.to_owned())),
    };
    let kind = PieceKind::from_code(kind).ok_or_else(|| ChessError::InvalidPieceCode(code.to_owned()))?;
    Ok(Some(Piece::new(color, kind)))
}

/// Build a board from a FEN string. Only placement and side to move are read.
pub fn parse_fen(fen: &str) -> ChessResult<Board> {
    let mut parts = fen.split_whitespace();
    let placement = parts
        .next()
        .ok_or_else(|| ChessError::InvalidLayout("missing board layout in FEN".to_owned()))?;
    let side_to_move = parts.next().map_or(Ok(Color::White), parse_side_to_move)?;

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(ChessError::InvalidLayout(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::new_empty();
    board.side_to_move = side_to_move;

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| ChessError::InvalidPieceCode(ch.to_string()))?;
            if col >= BOARD_SIZE {
                return Err(ChessError::InvalidLayout("rank has too many files".to_owned()));
            }
            board.set_piece(Square::new(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(ChessError::InvalidLayout(
                "rank does not sum to 8 files".to_owned(),
            ));
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}
