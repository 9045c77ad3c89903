use std::cell::Cell;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identity of a bus, stamped onto every event it publishes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusId(String);

impl BusId {
    pub fn new(id: impl Into<String>) -> Self {
        BusId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BusId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Source of bus identities.
///
/// The bus asks its provider once, at construction. Swap in
/// [`SequentialIds`] when a test needs predictable ids.
pub trait IdentityProvider {
    fn next_id(&self) -> BusId;
}

static BUS_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Default provider: process-wide counter + millisecond timestamp + a random
/// number below one million, concatenated.
///
/// The counter alone keeps ids distinct inside one process even when two
/// buses are built in the same millisecond.
#[derive(Clone, Copy, Debug, Default)]
pub struct GuidProvider;

impl IdentityProvider for GuidProvider {
    fn next_id(&self) -> BusId {
        let count = BUS_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let salt: u32 = rand::thread_rng().gen_range(0..1_000_000);
        BusId(format!("{}{}{}", count, millis, salt))
    }
}

/// Deterministic provider handing out `prefix-0`, `prefix-1`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: Cell::new(0),
        }
    }
}

impl IdentityProvider for SequentialIds {
    fn next_id(&self) -> BusId {
        let n = self.next.get();
        self.next.set(n + 1);
        BusId(format!("{}-{}", self.prefix, n))
    }
}
