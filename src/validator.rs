//! Acceptance rules for adding a cell to a ship.
//!
//! A ship grows one cell at a time. A new cell must touch the ship (diagonal
//! contact counts), must not repeat a cell, and once the ship has two cells
//! every further cell must keep the same slope between consecutive cells.

use crate::common::{Coordinate, PlacementError};
use crate::ship::Ship;

/// Slope between two consecutive cells, `dy / dx`.
#[derive(Debug, Clone, Copy)]
enum Slope {
    Finite(f64),
    /// `dx == 0`. All vertical segments share this value.
    Vertical,
    /// Both deltas are zero. Never equal to anything, itself included.
    Undefined,
}

impl Slope {
    fn between(from: Coordinate, to: Coordinate) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        match (dx, dy) {
            (0, 0) => Slope::Undefined,
            (0, _) => Slope::Vertical,
            _ => Slope::Finite(f64::from(dy) / f64::from(dx)),
        }
    }
}

impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Slope::Finite(a), Slope::Finite(b)) => a == b,
            (Slope::Vertical, Slope::Vertical) => true,
            _ => false,
        }
    }
}

/// `true` if `candidate` lies within one step, diagonals included, of any
/// existing cell. An empty ship accepts any cell.
pub fn is_adjacent(existing: &[Coordinate], candidate: Coordinate) -> bool {
    if existing.is_empty() {
        return true;
    }
    existing
        .iter()
        .any(|c| (c.x - candidate.x).abs() <= 1 && (c.y - candidate.y).abs() <= 1)
}

/// `true` if every consecutive pair of `existing` followed by `candidate` has
/// the same slope. Fewer than three points are trivially colinear.
pub fn is_colinear(existing: &[Coordinate], candidate: Coordinate) -> bool {
    if existing.len() < 2 {
        return true;
    }
    let mut points = existing.iter().copied().chain(core::iter::once(candidate));
    let (Some(first), Some(mut prev)) = (points.next(), points.next()) else {
        return true;
    };
    let slope = Slope::between(first, prev);
    for next in points {
        if Slope::between(prev, next) != slope {
            return false;
        }
        prev = next;
    }
    true
}

/// Decide whether `candidate` may be appended to `ship`.
pub fn accept(ship: &Ship, candidate: Coordinate) -> Result<(), PlacementError> {
    let spaces = ship.spaces();
    if spaces.len() >= 2 && !is_colinear(spaces, candidate) {
        return Err(PlacementError::NotColinear);
    }
    if spaces.is_empty() {
        return Ok(());
    }
    if spaces.contains(&candidate) {
        return Err(PlacementError::DuplicateCell);
    }
    if !is_adjacent(spaces, candidate) {
        return Err(PlacementError::NotAdjacent);
    }
    Ok(())
}
