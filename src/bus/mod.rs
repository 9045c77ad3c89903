//! Local Event Bus - topic registry, global listeners and re-entrancy guard
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 LocalEventBus (per object)                  │
//! │  - subscribe(topic) -> Token / unsubscribe(Token)           │
//! │  - subscribe_to_all()                                       │
//! │  - publish(&Event, args)                                    │
//! └─────────────────────────────────────────────────────────────┘
//!          │                   │                      │
//!          ▼                   ▼                      ▼
//! ┌─────────────────┐  ┌────────────────┐  ┌──────────────────────┐
//! │ Re-entrancy     │  │ Global         │  │ TopicRegistry        │
//! │ guard (BusId    │  │ listeners      │  │ topic -> [Sub], run  │
//! │ stamped on evt) │  │ (in order)     │  │ newest first         │
//! └─────────────────┘  └────────────────┘  └──────────────────────┘
//! ```
//!
//! ## Bus cycles
//!
//! ```ignore
//! // A handler on `a` forwards to `b`, a handler on `b` forwards back.
//! // The second arrival at `a` sees a's id in the event and returns false.
//! a.publish_event(&Event::new("changed"))?;
//! ```

mod local;
mod registry;
mod subscription;

pub use local::LocalEventBus;
pub use subscription::{Args, Handler, Token};
