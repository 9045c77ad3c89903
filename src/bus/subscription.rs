//! Tokens and the handlers they point at.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::HandlerResult;
use crate::event::Event;

/// Extra positional arguments passed to `publish` after the event.
pub type Args = [serde_json::Value];

/// A subscriber callback: receives the event, then the extra arguments.
pub type Handler = Rc<dyn Fn(&Event, &Args) -> HandlerResult>;

/// Handle returned by `subscribe`; hand it back to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(u64);

impl Token {
    pub fn new(value: u64) -> Self {
        Token(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone)]
pub(crate) struct Subscription {
    pub(crate) token: Token,
    pub(crate) handler: Handler,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
