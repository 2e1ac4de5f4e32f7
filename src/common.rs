//! Common types for placement: coordinates, cells and the error taxonomy.

/// Board coordinate: `x` is the column, `y` the row, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A clicked board cell as the UI reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Linear index used by the marker collaborator, `row * width + col`.
    pub index: usize,
}

impl Cell {
    /// Cell at (`col`, `row`) on a board `width` cells wide. The index
    /// saturates at `usize::MAX` instead of wrapping.
    pub const fn at(col: usize, row: usize, width: usize) -> Self {
        Self {
            row,
            col,
            index: row.saturating_mul(width).saturating_add(col),
        }
    }

    /// Column and row as a [`Coordinate`]. Values past `i32::MAX` clamp to
    /// `i32::MAX`.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            i32::try_from(self.col).unwrap_or(i32::MAX),
            i32::try_from(self.row).unwrap_or(i32::MAX),
        )
    }
}

/// Reasons a cell can be refused for the active ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The cell would bend the ship off its line.
    NotColinear,
    /// The ship already occupies the cell.
    DuplicateCell,
    /// The cell does not touch any of the ship's cells.
    NotAdjacent,
}

impl PlacementError {
    /// Text shown to the player when a selection is refused.
    pub fn notice(&self) -> &'static str {
        match self {
            PlacementError::NotColinear => "Ship cells must lie on a straight line.",
            PlacementError::DuplicateCell => "That space is already part of this ship.",
            PlacementError::NotAdjacent => "Invalid space entered.",
        }
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::NotColinear => write!(f, "cell is not colinear with the ship"),
            PlacementError::DuplicateCell => write!(f, "cell is already part of the ship"),
            PlacementError::NotAdjacent => write!(f, "cell is not adjacent to the ship"),
        }
    }
}

/// Errors returned when building the placement submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionError {
    /// Username or victory message was left empty.
    MissingFields,
    /// Submission requested before every ship was placed.
    Incomplete { placed: usize, required: usize },
}

impl core::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SubmissionError::MissingFields => write!(f, "username and victory message are required"),
            SubmissionError::Incomplete { placed, required } => write!(
                f,
                "placement incomplete: {} of {} cells placed",
                placed, required
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for SubmissionError {}
