//! Placement session: routes cell selections to the fleet in order.

use alloc::format;
use alloc::string::{String, ToString};
use log::{debug, info, warn};
use rand::Rng;

use crate::autoplace::random_run;
use crate::common::{Cell, Coordinate, PlacementError, SubmissionError};
use crate::config::{
    BOARD_SIZE, FLEET, MAX_BOARD_SIZE, NOTICE_DURATION_MS, NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use crate::ship::{Ship, ShipKind};
use crate::submission::SubmissionPayload;
use crate::ui::{CellMark, CellMarker, Notifier};
use crate::validator;

/// Status shown once every ship is on the board.
pub const ALL_PLACED: &str = "All ships placed";

const MISSING_FIELDS_NOTICE: &str = "Enter a victory message/username";
const INCOMPLETE_NOTICE: &str = "Place all ships before submitting";

/// Outcome of an accepted or ignored selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Cell added to `ship`, which still needs `remaining` cells.
    Placed { ship: ShipKind, remaining: usize },
    /// Cell completed the fleet. Submission is now enabled.
    Completed,
    /// Fleet was already complete; nothing changed.
    Ignored,
}

/// Placement state for one player's fleet.
pub struct PlacementSession<U: Notifier + CellMarker> {
    ships: [Ship; NUM_SHIPS],
    placed: usize,
    status: String,
    board_width: usize,
    board_height: usize,
    notice_duration_ms: u32,
    ui: U,
}

impl<U: Notifier + CellMarker> PlacementSession<U> {
    /// Start a session on the default square board.
    pub fn new(ui: U) -> Self {
        let ships = core::array::from_fn(|i| Ship::new(FLEET[i]));
        let mut session = Self {
            ships,
            placed: 0,
            status: String::new(),
            board_width: BOARD_SIZE,
            board_height: BOARD_SIZE,
            notice_duration_ms: NOTICE_DURATION_MS,
            ui,
        };
        session.refresh_status();
        session
    }

    /// Use a board of `width` × `height` cells for marker indices and
    /// random placement. Each side is clamped to `1..=MAX_BOARD_SIZE`.
    pub fn with_board(mut self, width: usize, height: usize) -> Self {
        self.board_width = width.clamp(1, MAX_BOARD_SIZE);
        self.board_height = height.clamp(1, MAX_BOARD_SIZE);
        self
    }

    pub fn with_notice_duration(mut self, duration_ms: u32) -> Self {
        self.notice_duration_ms = duration_ms;
        self
    }

    #[cfg(feature = "std")]
    pub fn from_config(ui: U, config: &crate::config::ClientConfig) -> Self {
        Self::new(ui)
            .with_board(config.board_width, config.board_height)
            .with_notice_duration(config.notice_duration_ms)
    }

    pub fn ships(&self) -> &[Ship; NUM_SHIPS] {
        &self.ships
    }

    pub fn ship(&self, kind: ShipKind) -> &Ship {
        &self.ships[kind.identifier()]
    }

    /// Total cells accepted across all ships.
    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn board_width(&self) -> usize {
        self.board_width
    }

    pub fn board_height(&self) -> usize {
        self.board_height
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Ship the next selection goes to, `None` once the fleet is complete.
    pub fn active_ship(&self) -> Option<ShipKind> {
        self.active_index().map(|i| FLEET[i])
    }

    pub fn is_complete(&self) -> bool {
        self.placed == TOTAL_SHIP_CELLS
    }

    /// Whether the UI should enable its submit control.
    pub fn submission_enabled(&self) -> bool {
        self.is_complete()
    }

    fn active_index(&self) -> Option<usize> {
        let mut bound = 0;
        for (i, kind) in FLEET.iter().enumerate() {
            bound += kind.length();
            if self.placed < bound {
                return Some(i);
            }
        }
        None
    }

    fn refresh_status(&mut self) {
        self.status = match self.active_index() {
            Some(i) => {
                let ship = &self.ships[i];
                let remaining = ship.remaining();
                let unit = if remaining == 1 { "space" } else { "spaces" };
                format!("Place your {} ({} {} left)", ship.kind(), remaining, unit)
            }
            None => ALL_PLACED.to_string(),
        };
    }

    /// Handle a click on `cell`. Rejections are reported to the notifier and
    /// leave the session untouched.
    pub fn on_cell_selected(&mut self, cell: Cell) -> Result<Selection, PlacementError> {
        let Some(i) = self.active_index() else {
            debug!("ignoring selection at {:?}: all ships placed", cell);
            return Ok(Selection::Ignored);
        };
        let coord = cell.coordinate();
        if let Err(reason) = validator::accept(&self.ships[i], coord) {
            debug!("rejected {} for {}: {}", coord, FLEET[i], reason);
            self.ui.notify(reason.notice(), self.notice_duration_ms);
            return Err(reason);
        }

        let ship = &mut self.ships[i];
        if !ship.push(coord) {
            // Routing by counter keeps the active ship incomplete.
            return Ok(Selection::Ignored);
        }
        self.placed += 1;
        debug!("placed {} at {} ({}/{})", ship.kind(), coord, self.placed, TOTAL_SHIP_CELLS);
        let placed = Selection::Placed {
            ship: ship.kind(),
            remaining: ship.remaining(),
        };
        self.refresh_status();
        self.ui.mark_cell(cell.index, CellMark::Selected);

        if self.is_complete() {
            info!("all ships placed");
            self.ui.mark_cell(cell.index, CellMark::Final);
            return Ok(Selection::Completed);
        }
        Ok(placed)
    }

    /// Place the rest of the active ship as a random straight run that stays
    /// on the board and off the other ships. Returns the ship placed, or
    /// `None` when the fleet is complete or no run fits.
    pub fn auto_place_active<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<ShipKind>, PlacementError> {
        let Some(i) = self.active_index() else {
            return Ok(None);
        };
        let ships = &self.ships;
        let occupied = |c: Coordinate| {
            ships
                .iter()
                .enumerate()
                .any(|(j, s)| j != i && s.contains(c))
        };
        let Some(run) = random_run(
            rng,
            &ships[i],
            self.board_width,
            self.board_height,
            occupied,
        ) else {
            warn!("no room left for the {}", FLEET[i]);
            return Ok(None);
        };
        for coord in run {
            let cell = Cell::at(coord.x as usize, coord.y as usize, self.board_width);
            self.on_cell_selected(cell)?;
        }
        Ok(Some(FLEET[i]))
    }

    /// Randomly place every ship that is not yet complete. Returns `true`
    /// when the fleet ends up complete.
    pub fn auto_place_all<R: Rng>(&mut self, rng: &mut R) -> Result<bool, PlacementError> {
        while !self.is_complete() {
            if self.auto_place_active(rng)?.is_none() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Build the placement payload without side effects.
    pub fn build_submission(
        &self,
        username: &str,
        victory_message: &str,
    ) -> Result<SubmissionPayload, SubmissionError> {
        if username.is_empty() || victory_message.is_empty() {
            return Err(SubmissionError::MissingFields);
        }
        if !self.is_complete() {
            return Err(SubmissionError::Incomplete {
                placed: self.placed,
                required: TOTAL_SHIP_CELLS,
            });
        }
        Ok(SubmissionPayload {
            username: username.to_string(),
            victory_message: victory_message.to_string(),
            ships: core::array::from_fn(|i| self.ships[i].spaces().to_vec()),
        })
    }

    /// Like [`build_submission`](Self::build_submission), but tells the
    /// player what is missing when the payload cannot be built.
    pub fn submit(
        &mut self,
        username: &str,
        victory_message: &str,
    ) -> Result<SubmissionPayload, SubmissionError> {
        let result = self.build_submission(username, victory_message);
        if let Err(err) = &result {
            warn!("submission refused: {}", err);
            let notice = match err {
                SubmissionError::MissingFields => MISSING_FIELDS_NOTICE,
                SubmissionError::Incomplete { .. } => INCOMPLETE_NOTICE,
            };
            self.ui.notify(notice, self.notice_duration_ms);
        }
        result
    }
}
