mod health;
mod link;

pub use health::{health_handler, home_handler};
pub use link::{create_links_handler, redirect_handler, stats_handler};
