//! Fleet constants and client configuration.

use crate::ship::ShipKind;

/// Default side length of the square placement board.
pub const BOARD_SIZE: usize = 10;
/// Largest board side. Columns are labelled `A` to `Z`.
pub const MAX_BOARD_SIZE: usize = 26;
pub const NUM_SHIPS: usize = 4;
/// Placement order. Every session walks the fleet in exactly this order.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Cruiser,
    ShipKind::Submarine,
    ShipKind::Destroyer,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// How long transient notices stay on screen.
pub const NOTICE_DURATION_MS: u32 = 2000;

/// How ship coordinates are written into the placement payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShipsEncoding {
    /// Each ship is a JSON array of `{"x":..,"y":..}` records.
    #[default]
    Structured,
    /// Each ship is a single string of `{x:1, y:2}` fragments joined by
    /// commas, as older backends parse it.
    LegacyText,
}

#[cfg(feature = "std")]
pub use self::runtime::*;

#[cfg(feature = "std")]
mod runtime {
    use std::string::String;
    use std::time::Duration;

    use super::{ShipsEncoding, BOARD_SIZE, NOTICE_DURATION_MS};

    /// Default timeout for a single frame write.
    const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(30);

    /// Maximum frame size (1 MB). Placement frames are a few hundred bytes.
    const DEFAULT_MAX_FRAME_SIZE: usize = 1_000_000;

    /// STOMP destinations the backend listens on.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Destinations {
        pub place_ships: String,
        pub window_init: String,
        pub id: String,
    }

    impl Default for Destinations {
        fn default() -> Self {
            Self {
                place_ships: "/app/placeShips".into(),
                window_init: "/app/windowInit".into(),
                id: "/app/id".into(),
            }
        }
    }

    /// Runtime configuration for the placement client.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClientConfig {
        pub board_width: usize,
        pub board_height: usize,
        pub notice_duration_ms: u32,
        pub ships_encoding: ShipsEncoding,
        pub destinations: Destinations,
        pub send_timeout: Duration,
        pub max_frame_size: usize,
    }

    impl Default for ClientConfig {
        fn default() -> Self {
            Self {
                board_width: BOARD_SIZE,
                board_height: BOARD_SIZE,
                notice_duration_ms: NOTICE_DURATION_MS,
                ships_encoding: ShipsEncoding::default(),
                destinations: Destinations::default(),
                send_timeout: DEFAULT_SEND_TIMEOUT,
                max_frame_size: DEFAULT_MAX_FRAME_SIZE,
            }
        }
    }
}
