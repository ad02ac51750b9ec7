use enum_map::enum_map;

use crate::force::Force;
use crate::snapshot::{Piece, Snapshot};


pub fn piece(kind: &str, color: Force) -> Piece {
    Piece {
        display_info: (kind.to_owned(), false),
        combined_pieces: vec![],
        color,
    }
}

pub fn combined_piece(base: &str, absorbed: &[&str], is_special: bool, color: Force) -> Piece {
    Piece {
        display_info: (base.to_owned(), is_special),
        combined_pieces: absorbed.iter().map(|kind| (*kind).to_owned()).collect(),
        color,
    }
}

pub fn empty_snapshot() -> Snapshot {
    Snapshot {
        board: vec![vec![None; 8]; 8],
        current_turn: Force::White,
        status_message: String::new(),
        last_move: None,
        captured_pieces: enum_map! { _ => vec![] },
        merge_count: enum_map! { _ => 0 },
    }
}

// The engine's starting position: black on rows 0-1, white on rows 6-7.
pub fn initial_snapshot() -> Snapshot {
    let mut snapshot = empty_snapshot();
    let back_rank = ["R", "N", "B", "Q", "K", "B", "N", "R"];
    for (col, kind) in back_rank.iter().enumerate() {
        snapshot.board[0][col] = Some(piece(kind, Force::Black));
        snapshot.board[7][col] = Some(piece(kind, Force::White));
    }
    for col in 0..8 {
        snapshot.board[1][col] = Some(piece("P", Force::Black));
        snapshot.board[6][col] = Some(piece("P", Force::White));
    }
    snapshot
}
