mod link;

pub use link::{
    CreateLinkResult, CreateLinksRequest, CreateLinksResponse, CreatedLink, StatsResponse,
};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
