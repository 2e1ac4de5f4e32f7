//! The placement payload sent to the backend once the fleet is placed.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::common::Coordinate;
use crate::config::NUM_SHIPS;

/// Player name, victory message and every ship's cells in fleet order
/// (carrier, cruiser, submarine, destroyer).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "PascalCase"))]
pub struct SubmissionPayload {
    pub username: String,
    pub victory_message: String,
    pub ships: [Vec<Coordinate>; NUM_SHIPS],
}

/// Render one ship the way older backends expect: `{x:1, y:2},{x:1, y:3}`.
pub fn legacy_ship_text(spaces: &[Coordinate]) -> String {
    let mut out = String::new();
    for (i, c) in spaces.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{{x:{}, y:{}}}", c.x, c.y);
    }
    out
}

#[cfg(feature = "std")]
mod json {
    use std::string::String;

    use serde::Serialize;

    use super::{legacy_ship_text, SubmissionPayload};
    use crate::config::{ShipsEncoding, NUM_SHIPS};

    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct LegacyPayload<'a> {
        username: &'a str,
        victory_message: &'a str,
        ships: [String; NUM_SHIPS],
    }

    impl SubmissionPayload {
        /// Serialize to the JSON body of the place-ships message.
        pub fn to_json(&self, encoding: ShipsEncoding) -> serde_json::Result<String> {
            match encoding {
                ShipsEncoding::Structured => serde_json::to_string(self),
                ShipsEncoding::LegacyText => serde_json::to_string(&LegacyPayload {
                    username: &self.username,
                    victory_message: &self.victory_message,
                    ships: core::array::from_fn(|i| legacy_ship_text(&self.ships[i])),
                }),
            }
        }
    }
}
