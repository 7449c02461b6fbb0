//! Core types and traits for the Quicklink URL shortener.
//!
//! This crate provides the shared vocabulary used by the code generator,
//! the link registry and the HTTP gateway: short codes, link entries,
//! the clock abstraction and the error taxonomy.

pub mod clock;
pub mod error;
pub mod link;
pub mod service;
pub mod shortcode;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "test-util"))]
pub use clock::ManualClock;
pub use error::{CoreError, ResolveError, SubmitError};
pub use link::{LinkEntry, StatRow, SubmissionRequest};
pub use service::LinkService;
pub use shortcode::ShortCode;
