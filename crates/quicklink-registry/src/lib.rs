//! In-memory link registry.
//!
//! This crate owns the collection of link entries. It mints codes through a
//! [`Generator`](quicklink_generator::Generator), records an access on every
//! successful resolution and exposes a statistics projection. Core types are
//! re-exported from `quicklink_core`.

pub mod registry;
pub mod settings;

pub use quicklink_core::{
    LinkEntry, LinkService, ResolveError, ShortCode, StatRow, SubmissionRequest, SubmitError,
};
pub use registry::LinkRegistry;
pub use settings::{CustomCodePolicy, ExpiryPolicy, RegistrySettings, DEFAULT_VALIDITY_MINUTES};
