use strum::EnumIter;

use crate::snapshot::Piece;
use crate::util::as_single_char;


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    // Merge results with their own identity.
    Archbishop,
    Chancellor,
    Amazon,
    GrandChancellor,
}

impl PieceKind {
    pub fn from_algebraic_char(notation: char) -> Option<Self> {
        match notation.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            'A' => Some(PieceKind::Archbishop),
            'C' => Some(PieceKind::Chancellor),
            'M' => Some(PieceKind::Amazon),
            'G' => Some(PieceKind::GrandChancellor),
            _ => None,
        }
    }

    pub fn from_algebraic(notation: &str) -> Option<Self> {
        as_single_char(notation).and_then(Self::from_algebraic_char)
    }

    // The variant kinds have no established pictogram; their letter stands in.
    pub fn to_pictogram(self) -> char {
        use self::PieceKind::*;
        match self {
            Pawn => '♙',
            Knight => '♘',
            Bishop => '♗',
            Rook => '♖',
            Queen => '♕',
            King => '♔',
            Archbishop => 'A',
            Chancellor => 'C',
            Amazon => 'M',
            GrandChancellor => 'G',
        }
    }
}


pub const COMBINED_MARKER: char = '+';
pub const UNKNOWN_GLYPH: char = '?';

// Display symbol for a board cell or a captured-piece tally. Total: any
// unrecognized kind renders as `?` rather than failing the whole frame.
pub fn piece_symbol(piece: &Piece) -> String {
    let (kind, is_special) = (&piece.display_info.0, piece.display_info.1);
    let glyph =
        PieceKind::from_algebraic(kind).map_or(UNKNOWN_GLYPH, PieceKind::to_pictogram);
    let mut symbol = String::from(glyph);
    if piece.is_combined() && !is_special {
        symbol.push(COMBINED_MARKER);
    }
    symbol
}
