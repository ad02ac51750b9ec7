use console::Style;
use itertools::Itertools;

use symbiotic_chess::coord::{Col, Coord, Row, NUM_COLS, NUM_ROWS};
use symbiotic_chess::force::Force;
use symbiotic_chess::piece::piece_symbol;
use symbiotic_chess::snapshot::{Piece, Snapshot};


// Grid geometry, shared by the renderer and the mouse handler.
pub const GRID_ORIGIN_X: u16 = 3;  // past the rank-label column
pub const GRID_ORIGIN_Y: u16 = 1;  // past the file-label line
pub const SQUARE_WIDTH: u16 = 3;


// Rebuilds the whole frame from the snapshot. No diffing: the previous
// frame is simply overdrawn, so two renders of one snapshot are identical.
pub fn render_game(snapshot: &Snapshot, selection: &[Coord]) -> String {
    format!("{}\n{}", render_grid(snapshot, selection), render_panels(snapshot))
}

// Inverse of the grid layout: which board square a terminal cell falls on.
pub fn board_cell_at(column: u16, row: u16) -> Option<Coord> {
    let x = column.checked_sub(GRID_ORIGIN_X)?;
    let y = row.checked_sub(GRID_ORIGIN_Y)?;
    let col = x / SQUARE_WIDTH;
    if col >= NUM_COLS as u16 || y >= NUM_ROWS as u16 {
        return None;
    }
    Some(Coord::new(Row::from_zero_based(y as u8), Col::from_zero_based(col as u8)))
}

fn render_grid(snapshot: &Snapshot, selection: &[Coord]) -> String {
    let mut ret = file_label_line();
    for row in Row::all() {
        let rank_label = format_square(row.to_algebraic());
        ret.push_str(&rank_label);
        for col in Col::all() {
            let coord = Coord::new(row, col);
            let piece = snapshot.piece_at(coord);
            let text = match piece {
                Some(piece) => format!("{:^3}", piece_symbol(piece)),
                None => "   ".to_owned(),
            };
            let parity = ((row.to_zero_based() + col.to_zero_based()) % 2) as usize;
            let style = square_style(piece, parity, selection.contains(&coord));
            ret.push_str(&style.apply_to(text).to_string());
        }
        ret.push_str(&rank_label);
        ret.push('\n');
    }
    ret.push_str(&file_label_line());
    ret
}

fn render_panels(snapshot: &Snapshot) -> String {
    let last_move = match &snapshot.last_move {
        Some(mv) => format!("Last move: {}", mv),
        None => String::new(),
    };
    // Panels are labeled by the capturing side; the engine keys the lists
    // by victim color, hence the opponent lookup.
    let captured_line =
        |capturer: Force| snapshot.captured_pieces[capturer.opponent()].iter().map(piece_symbol).join(" ");
    format!(
        "{:?}'s Turn\n{}\n{}\nCaptured by White: {}\nCaptured by Black: {}\nMerges: White {} / Black {}\n",
        snapshot.current_turn,
        Style::new().yellow().apply_to(&snapshot.status_message),
        last_move,
        captured_line(Force::White),
        captured_line(Force::Black),
        snapshot.merge_count[Force::White],
        snapshot.merge_count[Force::Black],
    )
}

fn square_style(piece: Option<&Piece>, parity: usize, is_selected: bool) -> Style {
    let background = [230, 222][parity];
    let style = match piece.map(|piece| piece.color) {
        Some(Force::White) => Style::new().color256(255).on_color256(background),
        Some(Force::Black) => Style::new().color256(16).on_color256(background),
        None => Style::new().on_color256(background),
    };
    if is_selected {
        style.reverse()
    } else {
        style
    }
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }

fn file_label_line() -> String {
    let labels = Col::all().map(|col| format_square(col.to_algebraic())).join("");
    format!("{}{}{}\n", format_square(' '), labels, format_square(' '))
}
