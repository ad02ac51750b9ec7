use enum_map::EnumMap;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::force::Force;


// One cell's worth of the engine's board payload. `display_info` is the
// engine-chosen `(base_kind, is_special)` pair; `is_special` marks merge
// results that already display as a named combined piece.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Piece {
    pub display_info: (String, bool),
    pub combined_pieces: Vec<String>,
    pub color: Force,
}

impl Piece {
    pub fn is_combined(&self) -> bool { !self.combined_pieces.is_empty() }
}

// The full `GET /state` payload: the single source of truth for one render
// cycle. Replaced wholesale after every request, never patched in place.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Vec<Vec<Option<Piece>>>,
    pub current_turn: Force,
    pub status_message: String,
    #[serde(default)]
    pub last_move: Option<String>,
    pub captured_pieces: EnumMap<Force, Vec<Piece>>,
    #[serde(default)]
    pub merge_count: EnumMap<Force, u32>,
}

impl Snapshot {
    pub fn piece_at(&self, pos: Coord) -> Option<&Piece> {
        self.board
            .get(pos.row.to_zero_based() as usize)?
            .get(pos.col.to_zero_based() as usize)?
            .as_ref()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::{Col, Row};

    // Field-for-field what the engine serializes, including the redundant
    // `piece_type` that the client does not model.
    const STATE_JSON: &str = r#"{
        "board": [
            [{"piece_type": "R", "color": "black", "combined_pieces": [], "display_info": ["R", false]},
             null, null, null, null, null, null,
             {"piece_type": "C", "color": "black", "combined_pieces": ["R", "N"], "display_info": ["C", true]}],
            [null, null, null, null, null, null, null, null],
            [null, null, null, null, null, null, null, null],
            [null, null, null, null, null, null, null, null],
            [null, null, null, null, null, null, null, null],
            [null, null, null, null, null, null, null, null],
            [null, null, null, null, null, null, null, null],
            [{"piece_type": "K", "color": "white", "combined_pieces": [], "display_info": ["K", false]},
             null, null, null, null, null, null, null]
        ],
        "current_turn": "black",
        "merge_count": {"white": 1, "black": 0},
        "last_move": "e2e4",
        "captured_pieces": {
            "white": [{"piece_type": "P", "color": "white", "combined_pieces": [], "display_info": ["P", false]}],
            "black": []
        },
        "status_message": "Check!"
    }"#;

    #[test]
    fn deserializes_engine_state() {
        let snapshot: Snapshot = serde_json::from_str(STATE_JSON).unwrap();
        assert_eq!(snapshot.current_turn, Force::Black);
        assert_eq!(snapshot.status_message, "Check!");
        assert_eq!(snapshot.last_move.as_deref(), Some("e2e4"));
        assert_eq!(snapshot.merge_count[Force::White], 1);
        assert_eq!(snapshot.merge_count[Force::Black], 0);
        assert_eq!(snapshot.captured_pieces[Force::White].len(), 1);
        assert!(snapshot.captured_pieces[Force::Black].is_empty());

        let rook = snapshot.piece_at(Coord::new(Row::_8, Col::A)).unwrap();
        assert_eq!(rook.display_info, ("R".to_owned(), false));
        assert!(!rook.is_combined());

        let chancellor = snapshot.piece_at(Coord::new(Row::_8, Col::H)).unwrap();
        assert_eq!(chancellor.display_info, ("C".to_owned(), true));
        assert!(chancellor.is_combined());

        assert!(snapshot.piece_at(Coord::new(Row::_4, Col::E)).is_none());
    }

    #[test]
    fn merge_count_defaults_to_zero_when_absent() {
        let without_merges = STATE_JSON.replace(r#""merge_count": {"white": 1, "black": 0},"#, "");
        let snapshot: Snapshot = serde_json::from_str(&without_merges).unwrap();
        assert_eq!(snapshot.merge_count[Force::White], 0);
        assert_eq!(snapshot.merge_count[Force::Black], 0);
    }
}
