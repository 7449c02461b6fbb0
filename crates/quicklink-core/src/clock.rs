use jiff::Timestamp;

#[cfg(any(test, feature = "test-util"))]
pub use manual::ManualClock;

pub trait Clock: Send + Sync {
    /// Returns the current time of the clock
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(any(test, feature = "test-util"))]
mod manual {
    use super::Clock;
    use jiff::{SignedDuration, Timestamp};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// A clock that only moves when told to.
    ///
    /// Clones share the same underlying time, so a test can hand one clone to
    /// a registry and keep another to advance it. Other crates get it through
    /// the `test-util` feature.
    #[derive(Debug, Clone)]
    pub struct ManualClock {
        now: Arc<Mutex<Timestamp>>,
    }

    impl ManualClock {
        pub fn new(now: Timestamp) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        pub fn set(&self, now: Timestamp) {
            *self.now.lock() = now;
        }

        pub fn advance(&self, by: SignedDuration) {
            let mut now = self.now.lock();
            // saturate instead of panicking near the end of the representable range
            *now = now.checked_add(by).unwrap_or(Timestamp::MAX);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Timestamp {
            *self.now.lock()
        }
    }
}
