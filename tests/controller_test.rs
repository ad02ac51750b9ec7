use pretty_assertions::assert_eq;

use symbiotic_chess::controller::Controller;
use symbiotic_chess::coord::{Col, Coord, Row};
use symbiotic_chess::event::EngineRequest;
use symbiotic_chess::test_util::initial_snapshot;


#[test]
fn second_click_fills_the_move_field_and_dispatches_a_move() {
    let mut controller = Controller::new();
    // Grid cell (6, 4) is e2, (4, 4) is e4.
    let e2 = Coord::new(Row::from_zero_based(6), Col::from_zero_based(4));
    let e4 = Coord::new(Row::from_zero_based(4), Col::from_zero_based(4));

    assert_eq!(controller.click_square(e2), None);
    assert_eq!(controller.selected(), &[e2]);

    let request = controller.click_square(e4);
    assert_eq!(request, Some(EngineRequest::Move { mv: "e2e4".to_owned() }));
    assert_eq!(controller.move_input(), "e2e4");
    // The pair is drained as soon as the command is built.
    assert!(controller.selected().is_empty());
}

#[test]
fn same_square_pair_is_forwarded_unchanged() {
    let mut controller = Controller::new();
    let e2 = Coord::new(Row::_2, Col::E);
    assert_eq!(controller.click_square(e2), None);
    assert_eq!(
        controller.click_square(e2),
        Some(EngineRequest::Move { mv: "e2e2".to_owned() })
    );
}

#[test]
fn typed_move_goes_through_the_same_guard() {
    let mut controller = Controller::new();
    for ch in "e2e4".chars() {
        controller.push_input(ch);
    }
    assert_eq!(
        controller.request_move(),
        Some(EngineRequest::Move { mv: "e2e4".to_owned() })
    );
}

#[test]
fn short_or_long_input_builds_no_request() {
    let mut controller = Controller::new();
    for input in ["", "e2", "e2e", "e2e4e"] {
        controller.reset_selection();
        for ch in input.chars() {
            controller.push_input(ch);
        }
        assert_eq!(controller.request_move(), None, "input: {:?}", input);
        assert_eq!(controller.request_merge(), None, "input: {:?}", input);
        assert_eq!(controller.request_disintegrate(), None, "input: {:?}", input);
    }
}

#[test]
fn input_field_accepts_only_square_characters() {
    let mut controller = Controller::new();
    for ch in "e2E$ ♔\n4".chars() {
        controller.push_input(ch);
    }
    assert_eq!(controller.move_input(), "e24");
    controller.pop_input();
    assert_eq!(controller.move_input(), "e2");
}

#[test]
fn merge_splits_the_field_into_two_squares() {
    let mut controller = Controller::new();
    for ch in "e2d2".chars() {
        controller.push_input(ch);
    }
    assert_eq!(
        controller.request_merge(),
        Some(EngineRequest::Merge { pos1: "e2".to_owned(), pos2: "d2".to_owned() })
    );
}

#[test]
fn disintegrate_splits_the_field_into_source_and_target() {
    let mut controller = Controller::new();
    for ch in "e2e4".chars() {
        controller.push_input(ch);
    }
    assert_eq!(
        controller.request_disintegrate(),
        Some(EngineRequest::Disintegrate {
            pos: "e2".to_owned(),
            target_pos: "e4".to_owned(),
        })
    );
}

#[test]
fn reset_is_unconditional() {
    let mut controller = Controller::new();
    assert_eq!(controller.request_reset(), EngineRequest::Reset);

    controller.click_square(Coord::new(Row::_2, Col::E));
    controller.push_input('e');
    controller.reset_selection();
    assert!(controller.selected().is_empty());
    assert_eq!(controller.move_input(), "");
}

#[test]
fn snapshot_is_replaced_wholesale() {
    let mut controller = Controller::new();
    assert!(controller.snapshot().is_none());

    controller.set_snapshot(initial_snapshot());
    let mut next = initial_snapshot();
    next.status_message = "Invalid move.".to_owned();
    controller.set_snapshot(next.clone());
    assert_eq!(controller.snapshot(), Some(&next));
}

#[test]
fn click_during_pending_interaction_extends_the_next_buffer() {
    // A click that lands while a request is outstanding is applied to
    // whatever buffer state exists at click time.
    let mut controller = Controller::new();
    controller.click_square(Coord::new(Row::_2, Col::E));
    controller.reset_selection();  // the in-flight command completed
    assert_eq!(controller.click_square(Coord::new(Row::_7, Col::A)), None);
    assert_eq!(controller.selected(), &[Coord::new(Row::_7, Col::A)]);
}
