use crate::Generator;
use quicklink_core::ShortCode;
use std::sync::atomic::{AtomicU64, Ordering};

const DEFAULT_WIDTH: usize = 6;

/// Counts upwards from zero: `ql000000`, `ql000001`, ...
///
/// Runs that submit the same requests get the same codes, which keeps
/// gateway responses reproducible. A counter that outgrows `width` digits
/// simply gets longer.
#[derive(Debug)]
pub struct SeqGenerator {
    prefix: String,
    width: usize,
    next: AtomicU64,
}

impl SeqGenerator {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            width: DEFAULT_WIDTH,
            next: AtomicU64::new(0),
        }
    }

    /// Makes the first draw return `first`.
    pub fn starting_at(self, first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
            ..self
        }
    }

    /// Zero-pads the counter to `width` digits.
    pub fn padded_to(self, width: usize) -> Self {
        Self { width, ..self }
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        // only the increment has to be atomic, nothing else is published
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ShortCode::generated(format!("{}{:0width$}", self.prefix, n, width = self.width))
    }
}
