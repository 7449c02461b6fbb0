use jiff::Timestamp;
use quicklink_core::{LinkEntry, StatRow, SubmissionRequest, SubmitError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateLinksRequest {
    pub links: Vec<SubmissionRequest>,
}

#[derive(Debug, Serialize)]
pub struct CreatedLink {
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl CreatedLink {
    pub fn from_entry(entry: LinkEntry, base_url: &str) -> Self {
        Self {
            short_url: entry.short_code.to_url(base_url),
            short_code: entry.short_code.to_string(),
            long_url: entry.long_url,
            created_at: entry.created_at,
            expires_at: entry.expires_at,
        }
    }
}

/// Outcome of one submitted link. Failures do not affect the other links.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CreateLinkResult {
    Created(CreatedLink),
    Error { kind: &'static str, error: String },
}

impl CreateLinkResult {
    pub fn new(result: Result<LinkEntry, SubmitError>, base_url: &str) -> Self {
        match result {
            Ok(entry) => Self::Created(CreatedLink::from_entry(entry, base_url)),
            Err(err) => Self::Error {
                kind: match err {
                    SubmitError::InvalidUrl(_) => "invalid_url",
                    SubmitError::InvalidShortCode(_) => "invalid_short_code",
                    SubmitError::AliasConflict(_) => "alias_conflict",
                },
                error: err.to_string(),
            },
        }
    }

    /// The URL passed the scheme check but cannot be sent back in a
    /// `Location` header (e.g. it contains control characters).
    pub fn unusable_url() -> Self {
        Self::Error {
            kind: "unusable_url",
            error: "invalid url: cannot be used as a redirect target".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateLinksResponse {
    pub results: Vec<CreateLinkResult>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub links: Vec<StatRow>,
}
