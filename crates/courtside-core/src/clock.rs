//! The injectable time source.
//!
//! The catalog's "unexpired" filter compares room end times against *now*.
//! Reaching for `Utc::now()` directly would make that filter untestable,
//! so the current time comes in through a port instead.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

/// Supplies the current time to anything that needs "now".
///
/// `Send + Sync` so a clock can be shared across async tasks.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// A shared clock is still a clock. Lets a test hold on to a
/// `ManualClock` it also handed to the catalog.
impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The real wall clock. Use this everywhere outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock whose "now" is set by hand.
///
/// Tests pin the time once and move it forward explicitly, so expiration
/// behavior is deterministic — no sleeping, no flakiness.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a clock frozen at the given instant.
    pub fn fixed(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.lock() = now;
    }

    /// Advances the clock by a duration.
    pub fn advance(&self, by: chrono::Duration) {
        *self.lock() += by;
    }

    // A poisoned lock only means some thread panicked while it held the
    // guard; the stored instant is still a valid instant, so recover it
    // instead of propagating the panic.
    fn lock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.lock()
    }
}
