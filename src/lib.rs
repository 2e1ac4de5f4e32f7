#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod autoplace;
mod common;
mod config;
mod session;
mod ship;
mod submission;
pub mod ui;
pub mod validator;
#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
pub mod client;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod preferences;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod transport;

pub use autoplace::random_run;
pub use common::*;
pub use config::*;
pub use session::*;
pub use ship::*;
pub use submission::*;
pub use ui::{CellMark, CellMarker, EventLog, Notifier, UiEvent};
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use client::GameClient;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use preferences::{PreferenceValues, Preferences};
#[cfg(feature = "std")]
pub use protocol::Outbound;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, stomp::StompTransport, Transport};
