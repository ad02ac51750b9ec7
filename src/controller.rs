use crate::coord::Coord;
use crate::event::EngineRequest;
use crate::selection::SelectionBuffer;
use crate::snapshot::Snapshot;


pub const MOVE_INPUT_LEN: usize = 4;

// All mutable interaction state in one place: the selection buffer, the
// shared move field and the last snapshot received from the engine. Every
// UI handler goes through these methods; there are no ambient globals.
pub struct Controller {
    snapshot: Option<Snapshot>,
    selection: SelectionBuffer,
    move_input: String,
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            snapshot: None,
            selection: SelectionBuffer::new(),
            move_input: String::new(),
        }
    }

    pub fn snapshot(&self) -> Option<&Snapshot> { self.snapshot.as_ref() }
    pub fn set_snapshot(&mut self, snapshot: Snapshot) { self.snapshot = Some(snapshot); }

    pub fn selected(&self) -> &[Coord] { self.selection.selected() }
    pub fn move_input(&self) -> &str { &self.move_input }

    // Only square-shaped characters reach the move field; action keys are
    // uppercase and handled by the caller.
    pub fn push_input(&mut self, ch: char) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            self.move_input.push(ch);
        }
    }

    pub fn pop_input(&mut self) { self.move_input.pop(); }

    // A second click completes the pair, fills the move field with the joined
    // algebraic squares and dispatches it as a regular move.
    pub fn click_square(&mut self, pos: Coord) -> Option<EngineRequest> {
        let (from, to) = self.selection.click(pos)?;
        self.move_input = format!("{}{}", from.to_algebraic(), to.to_algebraic());
        self.request_move()
    }

    pub fn request_move(&self) -> Option<EngineRequest> {
        let mv = self.checked_input()?;
        Some(EngineRequest::Move { mv })
    }

    pub fn request_merge(&self) -> Option<EngineRequest> {
        let input = self.checked_input()?;
        let (pos1, pos2) = input.split_at(2);
        Some(EngineRequest::Merge { pos1: pos1.to_owned(), pos2: pos2.to_owned() })
    }

    pub fn request_disintegrate(&self) -> Option<EngineRequest> {
        let input = self.checked_input()?;
        let (pos, target_pos) = input.split_at(2);
        Some(EngineRequest::Disintegrate {
            pos: pos.to_owned(),
            target_pos: target_pos.to_owned(),
        })
    }

    pub fn request_reset(&self) -> EngineRequest { EngineRequest::Reset }

    // Mirrors the reset that follows every answered command: selection marks
    // and the move field are cleared together.
    pub fn reset_selection(&mut self) {
        self.selection.reset();
        self.move_input.clear();
    }

    // Shape check only. A well-shaped pair can still be an illegal move;
    // that verdict comes back in the next status message.
    fn checked_input(&self) -> Option<String> {
        (self.move_input.len() == MOVE_INPUT_LEN).then(|| self.move_input.clone())
    }
}
