//! Ship kinds and the cells placed for each ship so far.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coordinate;

/// The four ships of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Number of cells the ship occupies once complete.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Cruiser => 4,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    /// Stable identifier used by the backend (0 = carrier .. 3 = destroyer).
    pub const fn identifier(self) -> usize {
        match self {
            ShipKind::Carrier => 0,
            ShipKind::Cruiser => 1,
            ShipKind::Submarine => 2,
            ShipKind::Destroyer => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "carrier",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Submarine => "submarine",
            ShipKind::Destroyer => "destroyer",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A ship under placement. `spaces` keeps the order cells were selected in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    spaces: Vec<Coordinate>,
}

impl Ship {
    /// An empty ship of the given kind.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            spaces: Vec::with_capacity(kind.length()),
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// Cells placed so far, in selection order.
    pub fn spaces(&self) -> &[Coordinate] {
        &self.spaces
    }

    pub fn remaining(&self) -> usize {
        self.kind.length() - self.spaces.len()
    }

    pub fn is_complete(&self) -> bool {
        self.spaces.len() == self.kind.length()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.spaces.contains(&coord)
    }

    /// Append an already validated cell. Refuses to grow past the ship length.
    pub(crate) fn push(&mut self, coord: Coordinate) -> bool {
        if self.is_complete() {
            return false;
        }
        self.spaces.push(coord);
        true
    }
}
