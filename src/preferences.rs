#![cfg(feature = "std")]

//! Display preferences shared by every screen: dark mode, fullscreen and the
//! turn timer. Each value can be read, set, or watched for its latest value.

use tokio::sync::watch;

/// Snapshot of all preference values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreferenceValues {
    pub dark_mode: bool,
    pub fullscreen: bool,
    pub timer: bool,
}

pub struct Preferences {
    dark_mode: watch::Sender<bool>,
    fullscreen: watch::Sender<bool>,
    timer: watch::Sender<bool>,
}

impl Preferences {
    pub fn new(initial: PreferenceValues) -> Self {
        Self {
            dark_mode: watch::channel(initial.dark_mode).0,
            fullscreen: watch::channel(initial.fullscreen).0,
            timer: watch::channel(initial.timer).0,
        }
    }

    pub fn values(&self) -> PreferenceValues {
        PreferenceValues {
            dark_mode: self.dark_mode(),
            fullscreen: self.fullscreen(),
            timer: self.timer(),
        }
    }

    pub fn dark_mode(&self) -> bool {
        *self.dark_mode.borrow()
    }

    pub fn fullscreen(&self) -> bool {
        *self.fullscreen.borrow()
    }

    pub fn timer(&self) -> bool {
        *self.timer.borrow()
    }

    pub fn set_dark_mode(&self, value: bool) {
        self.dark_mode.send_replace(value);
    }

    pub fn set_fullscreen(&self, value: bool) {
        self.fullscreen.send_replace(value);
    }

    pub fn set_timer(&self, value: bool) {
        self.timer.send_replace(value);
    }

    /// Flip dark mode and return the new value.
    pub fn toggle_dark_mode(&self) -> bool {
        toggle(&self.dark_mode)
    }

    pub fn toggle_fullscreen(&self) -> bool {
        toggle(&self.fullscreen)
    }

    pub fn toggle_timer(&self) -> bool {
        toggle(&self.timer)
    }

    /// Receiver holding the current dark-mode value. After each change it
    /// reports the latest value; changes made between two reads are merged,
    /// so intermediate values can be missed.
    pub fn subscribe_dark_mode(&self) -> watch::Receiver<bool> {
        self.dark_mode.subscribe()
    }

    pub fn subscribe_fullscreen(&self) -> watch::Receiver<bool> {
        self.fullscreen.subscribe()
    }

    pub fn subscribe_timer(&self) -> watch::Receiver<bool> {
        self.timer.subscribe()
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new(PreferenceValues::default())
    }
}

fn toggle(sender: &watch::Sender<bool>) -> bool {
    let mut flipped = false;
    sender.send_modify(|v| {
        *v = !*v;
        flipped = *v;
    });
    flipped
}
