//! Generation tokens for discarding stale lookup results.
//!
//! Each dispatched lookup takes a token from [`LookupGeneration::begin`].
//! Only the result carrying the newest token may reach the display.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct LookupGeneration {
    current: AtomicU64,
}

impl LookupGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, invalidating every earlier token.
    pub fn begin(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    #[must_use]
    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::SeqCst))
    }

    #[must_use]
    pub fn is_current(&self, token: Generation) -> bool {
        self.current() == token
    }
}
