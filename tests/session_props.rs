use battleship_client::{
    Cell, EventLog, PlacementError, PlacementSession, Selection, FLEET, TOTAL_SHIP_CELLS,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn session_after(clicks: &[(usize, usize)]) -> PlacementSession<EventLog> {
    let mut session = PlacementSession::new(EventLog::new());
    for &(col, row) in clicks {
        let _ = session.on_cell_selected(Cell::at(col, row, 10));
    }
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ship_lengths_never_shrink_or_overflow(
        clicks in prop::collection::vec((0usize..10, 0usize..10), 0..200)
    ) {
        let mut session = PlacementSession::new(EventLog::new());
        let mut before: Vec<usize> = session.ships().iter().map(|s| s.spaces().len()).collect();
        for (col, row) in clicks {
            let _ = session.on_cell_selected(Cell::at(col, row, 10));
            let after: Vec<usize> = session.ships().iter().map(|s| s.spaces().len()).collect();
            for (i, kind) in FLEET.iter().enumerate() {
                prop_assert!(after[i] >= before[i]);
                prop_assert!(after[i] <= kind.length());
            }
            prop_assert_eq!(after.iter().sum::<usize>(), session.placed());
            before = after;
        }
    }

    #[test]
    fn duplicate_always_rejected(
        clicks in prop::collection::vec((0usize..10, 0usize..10), 0..60),
        pick in any::<prop::sample::Index>()
    ) {
        let mut session = session_after(&clicks);
        let Some(kind) = session.active_ship() else {
            return Ok(());
        };
        let spaces = session.ship(kind).spaces().to_vec();
        prop_assume!(!spaces.is_empty());
        let dup = spaces[pick.index(spaces.len())];
        let placed = session.placed();
        let res = session.on_cell_selected(Cell::at(dup.x as usize, dup.y as usize, 10));
        prop_assert!(matches!(
            res,
            Err(PlacementError::DuplicateCell) | Err(PlacementError::NotColinear)
        ));
        if spaces.len() == 1 {
            prop_assert_eq!(res, Err(PlacementError::DuplicateCell));
        }
        prop_assert_eq!(session.placed(), placed);
    }

    #[test]
    fn accepted_cells_touch_their_ship(
        clicks in prop::collection::vec((0usize..10, 0usize..10), 0..200)
    ) {
        let session = session_after(&clicks);
        for ship in session.ships() {
            let spaces = ship.spaces();
            for (i, c) in spaces.iter().enumerate().skip(1) {
                prop_assert!(spaces[..i]
                    .iter()
                    .any(|p| (p.x - c.x).abs() <= 1 && (p.y - c.y).abs() <= 1));
                prop_assert!(!spaces[..i].contains(c));
            }
        }
    }

    #[test]
    fn random_placement_completes_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = PlacementSession::new(EventLog::new());
        prop_assert_eq!(session.auto_place_all(&mut rng), Ok(true));
        prop_assert_eq!(session.placed(), TOTAL_SHIP_CELLS);
        prop_assert!(session.ui().notices().is_empty());

        let mut seen = std::collections::HashSet::new();
        for ship in session.ships() {
            for c in ship.spaces() {
                prop_assert!(c.x >= 0 && c.x < 10 && c.y >= 0 && c.y < 10);
                prop_assert!(seen.insert(*c), "ships overlap at {:?}", c);
            }
        }
    }

    #[test]
    fn random_placement_finishes_partial_ship(
        seed in any::<u64>(),
        start in (2usize..8, 2usize..8),
        vertical in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = PlacementSession::new(EventLog::new());
        let (col, row) = start;
        session.on_cell_selected(Cell::at(col, row, 10)).unwrap();
        let next = if vertical { Cell::at(col, row + 1, 10) } else { Cell::at(col + 1, row, 10) };
        session.on_cell_selected(next).unwrap();

        let placed = session.auto_place_active(&mut rng).unwrap();
        prop_assert!(placed.is_some());
        let carrier = session.ship(FLEET[0]);
        prop_assert!(carrier.is_complete());
        if vertical {
            prop_assert!(carrier.spaces().iter().all(|c| c.x == col as i32));
        } else {
            prop_assert!(carrier.spaces().iter().all(|c| c.y == row as i32));
        }
    }

    #[test]
    fn completed_session_ignores_clicks(seed in any::<u64>(), col in 0usize..10, row in 0usize..10) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = PlacementSession::new(EventLog::new());
        session.auto_place_all(&mut rng).unwrap();
        let ships = session.ships().clone();
        prop_assert_eq!(session.on_cell_selected(Cell::at(col, row, 10)), Ok(Selection::Ignored));
        prop_assert_eq!(session.ships(), &ships);
    }
}
