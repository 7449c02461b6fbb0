//! HTTP boundary for the Quicklink link registry.
//!
//! The gateway only translates HTTP into the three registry operations:
//! batch submission, resolution (as a redirect) and statistics.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use state::AppState;
