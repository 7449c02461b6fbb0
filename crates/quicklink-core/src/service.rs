use crate::error::{ResolveError, SubmitError};
use crate::link::{LinkEntry, StatRow, SubmissionRequest};

/// The three operations a boundary layer may call on the link registry.
///
/// All operations are synchronous and in-memory. Implementations must be
/// safe to share between concurrent request handlers.
pub trait LinkService: Send + Sync + 'static {
    /// Processes a batch of submissions in order.
    ///
    /// Returns one result per request, in input order. A failed request
    /// does not prevent the others from being created.
    fn submit(&self, requests: Vec<SubmissionRequest>) -> Vec<Result<LinkEntry, SubmitError>>;

    /// Resolves a short code to its long URL, recording one access.
    fn resolve(&self, code: &str) -> Result<String, ResolveError>;

    /// One row per entry, in insertion order.
    fn statistics(&self) -> Vec<StatRow>;
}
