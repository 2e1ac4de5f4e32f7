use battleship_client::validator::{accept, is_adjacent, is_colinear};
use battleship_client::{Coordinate, PlacementError, PlacementSession, EventLog, Cell, ShipKind};

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

#[test]
fn test_adjacent_allows_diagonal() {
    assert!(is_adjacent(&[c(0, 0)], c(1, 1)));
    assert!(is_adjacent(&[c(0, 0)], c(0, 1)));
    assert!(!is_adjacent(&[c(0, 0)], c(2, 2)));
    assert!(!is_adjacent(&[c(0, 0)], c(0, 2)));
}

#[test]
fn test_adjacent_empty_ship_accepts_anything() {
    assert!(is_adjacent(&[], c(7, 3)));
}

#[test]
fn test_adjacent_to_any_existing_cell() {
    // Far from the last cell but next to the first one.
    assert!(is_adjacent(&[c(3, 0), c(4, 0), c(5, 0)], c(2, 0)));
}

#[test]
fn test_colinear_horizontal_with_gap() {
    assert!(is_colinear(&[c(0, 0), c(1, 0)], c(3, 0)));
}

#[test]
fn test_colinear_rejects_turn_to_vertical() {
    assert!(!is_colinear(&[c(0, 0), c(1, 0)], c(1, 5)));
}

#[test]
fn test_colinear_vertical_either_direction() {
    assert!(is_colinear(&[c(2, 2), c(2, 3)], c(2, 4)));
    // Downward and upward vertical segments compare equal.
    assert!(is_colinear(&[c(2, 3), c(2, 4)], c(2, 2)));
    assert!(!is_colinear(&[c(2, 2), c(2, 3)], c(3, 4)));
}

#[test]
fn test_colinear_backtracking_along_line() {
    // Going back past the start keeps the same slope, sign of zero aside.
    assert!(is_colinear(&[c(5, 5), c(6, 5)], c(4, 5)));
    assert!(is_colinear(&[c(1, 1), c(2, 2)], c(0, 0)));
}

#[test]
fn test_colinear_diagonals_do_not_mix() {
    assert!(!is_colinear(&[c(0, 0), c(1, 1)], c(2, 0)));
}

#[test]
fn test_colinear_repeated_point_fails() {
    assert!(!is_colinear(&[c(0, 0), c(1, 0)], c(1, 0)));
}

#[test]
fn test_colinear_trivial_below_three_points() {
    assert!(is_colinear(&[], c(9, 9)));
    assert!(is_colinear(&[c(0, 0)], c(9, 9)));
}

fn carrier_with(cells: &[(usize, usize)]) -> PlacementSession<EventLog> {
    let mut session = PlacementSession::new(EventLog::new());
    for &(col, row) in cells {
        session.on_cell_selected(Cell::at(col, row, 10)).unwrap();
    }
    session
}

#[test]
fn test_accept_first_cell_anywhere() {
    let session = carrier_with(&[]);
    assert_eq!(accept(session.ship(ShipKind::Carrier), c(9, 9)), Ok(()));
}

#[test]
fn test_accept_duplicate_single_cell() {
    let session = carrier_with(&[(4, 4)]);
    assert_eq!(
        accept(session.ship(ShipKind::Carrier), c(4, 4)),
        Err(PlacementError::DuplicateCell)
    );
}

#[test]
fn test_accept_duplicate_reported_when_slope_still_matches() {
    // (0,0) -> (1,1) -> (0,0) keeps slope 1, so the duplicate rule decides.
    let session = carrier_with(&[(0, 0), (1, 1)]);
    assert_eq!(
        accept(session.ship(ShipKind::Carrier), c(0, 0)),
        Err(PlacementError::DuplicateCell)
    );
}

#[test]
fn test_accept_colinearity_checked_before_duplicates() {
    let session = carrier_with(&[(0, 0), (1, 0)]);
    assert_eq!(
        accept(session.ship(ShipKind::Carrier), c(1, 0)),
        Err(PlacementError::NotColinear)
    );
}

#[test]
fn test_accept_not_adjacent() {
    let session = carrier_with(&[(0, 0)]);
    assert_eq!(
        accept(session.ship(ShipKind::Carrier), c(2, 2)),
        Err(PlacementError::NotAdjacent)
    );
    let session = carrier_with(&[(0, 0), (1, 0)]);
    assert_eq!(
        accept(session.ship(ShipKind::Carrier), c(3, 0)),
        Err(PlacementError::NotAdjacent)
    );
}

#[test]
fn test_accept_diagonal_ship() {
    let session = carrier_with(&[(0, 0), (1, 1), (2, 2)]);
    assert_eq!(accept(session.ship(ShipKind::Carrier), c(3, 3)), Ok(()));
}
