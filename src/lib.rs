//! Per-object local publish/subscribe.
//!
//! Give any object a [`LocalEventBus`] and let unrelated parts of a program
//! talk to it by topic name. Events remember which buses have already
//! handled them, so buses that forward events to each other do not loop.

pub mod bus;
mod config;
mod error;
mod event;
mod identity;

pub use bus::{Args, Handler, LocalEventBus, Token};
pub use config::BusConfig;
pub use error::{BusError, HandlerError, HandlerResult};
pub use event::Event;
pub use identity::{BusId, GuidProvider, IdentityProvider, SequentialIds};
