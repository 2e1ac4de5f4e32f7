//! Collaborator interfaces the placement session reports through.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// How a board cell should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    /// Cell accepted for a ship.
    Selected,
    /// Cell that completed the whole fleet.
    Final,
}

/// Shows short-lived notices to the player. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, message: &str, duration_ms: u32);
}

/// Highlights cells on the rendered board by linear index.
pub trait CellMarker {
    fn mark_cell(&mut self, index: usize, mark: CellMark);
}

/// A single collaborator call, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Notice { message: String, duration_ms: u32 },
    Mark { index: usize, mark: CellMark },
}

/// Headless collaborator that records every call in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<UiEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    /// Messages of all recorded notices.
    pub fn notices(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Notice { message, .. } => Some(message.as_str()),
                UiEvent::Mark { .. } => None,
            })
            .collect()
    }

    /// Recorded marks as `(index, mark)` pairs.
    pub fn marks(&self) -> Vec<(usize, CellMark)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                UiEvent::Mark { index, mark } => Some((*index, *mark)),
                UiEvent::Notice { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Notifier for EventLog {
    fn notify(&mut self, message: &str, duration_ms: u32) {
        self.events.push(UiEvent::Notice {
            message: message.to_string(),
            duration_ms,
        });
    }
}

impl CellMarker for EventLog {
    fn mark_cell(&mut self, index: usize, mark: CellMark) {
        self.events.push(UiEvent::Mark { index, mark });
    }
}
