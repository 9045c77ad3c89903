use serde::{Deserialize, Serialize};

use crate::error::BusError;

/// Feature switches for a [`LocalEventBus`](crate::LocalEventBus).
///
/// The default is the full bus: re-entrancy guard and global listeners on,
/// tokens starting at 0. [`BusConfig::simple`] is the reduced single-bus
/// variant that only does topic dispatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Refuse to process an event that already passed through this bus.
    pub reentrancy_guard: bool,
    /// Allow `subscribe_to_all`.
    pub global_listeners: bool,
    /// Token handed out by the first `subscribe`.
    pub first_token: u64,
}

impl Default for BusConfig {
    fn default() -> Self {
        BusConfig {
            reentrancy_guard: true,
            global_listeners: true,
            first_token: 0,
        }
    }
}

impl BusConfig {
    pub fn simple() -> Self {
        BusConfig {
            reentrancy_guard: false,
            global_listeners: false,
            ..BusConfig::default()
        }
    }

    pub fn with_first_token(mut self, first_token: u64) -> Self {
        self.first_token = first_token;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, BusError> {
        Ok(serde_json::from_str(json)?)
    }
}
