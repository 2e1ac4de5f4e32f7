#![cfg(feature = "std")]

//! Messages the client sends to the game server.

use crate::config::{Destinations, ShipsEncoding};
use crate::submission::SubmissionPayload;

/// Body sent with the window-init message.
pub const WINDOW_INIT_BODY: &str = "window";

/// Outbound messages, one per backend destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Completed fleet layout.
    PlaceShips(SubmissionPayload),
    /// Game window opened and ready for updates.
    WindowInit,
    /// Player identifier after sign-in.
    Id(String),
}

impl Outbound {
    /// Destination this message is sent to.
    pub fn destination<'a>(&self, destinations: &'a Destinations) -> &'a str {
        match self {
            Outbound::PlaceShips(_) => &destinations.place_ships,
            Outbound::WindowInit => &destinations.window_init,
            Outbound::Id(_) => &destinations.id,
        }
    }

    /// Frame body, with ships written in `encoding`.
    pub fn body(&self, encoding: ShipsEncoding) -> anyhow::Result<String> {
        match self {
            Outbound::PlaceShips(payload) => payload
                .to_json(encoding)
                .map_err(|e| anyhow::anyhow!("Serialization error: {}", e)),
            Outbound::WindowInit => Ok(WINDOW_INIT_BODY.to_string()),
            Outbound::Id(id) => Ok(id.clone()),
        }
    }

    /// MIME type announced in the frame header.
    pub fn content_type(&self) -> &'static str {
        match self {
            Outbound::PlaceShips(_) => "application/json",
            Outbound::WindowInit | Outbound::Id(_) => "text/plain",
        }
    }
}
