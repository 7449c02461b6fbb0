use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// A request to shorten one long URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct SubmissionRequest {
    /// The URL to shorten. Must start with `http`.
    #[builder(setter(into))]
    pub long_url: String,
    /// Validity window in minutes. `None` falls back to the registry default.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub validity_minutes: Option<u32>,
    /// Optional custom alias. An empty string is treated as absent.
    #[builder(default, setter(strip_option, into))]
    #[serde(default)]
    pub custom_code: Option<String>,
}

impl SubmissionRequest {
    /// Returns the custom code if one was given and it is not empty.
    pub fn requested_code(&self) -> Option<&str> {
        self.custom_code.as_deref().filter(|code| !code.is_empty())
    }
}

/// One shortened link, as seen by callers.
///
/// This is a snapshot: the registry keeps appending to its own access log,
/// the copy handed out does not change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkEntry {
    pub long_url: String,
    pub short_code: ShortCode,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub access_log: Vec<Timestamp>,
}

impl LinkEntry {
    /// Whether the validity window is over at `now`.
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    pub fn click_count(&self) -> usize {
        self.access_log.len()
    }
}

/// A row of the statistics listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub short_code: ShortCode,
    pub long_url: String,
    pub expires_at: Timestamp,
    pub click_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    #[test]
    fn builder_defaults() {
        let request = SubmissionRequest::builder()
            .long_url("https://example.com")
            .build();

        assert_eq!(request.validity_minutes, None);
        assert_eq!(request.requested_code(), None);
    }

    #[test]
    fn empty_custom_code_is_absent() {
        let request = SubmissionRequest::builder()
            .long_url("https://example.com")
            .custom_code("")
            .build();

        assert_eq!(request.requested_code(), None);
    }

    #[test]
    fn deserializes_with_missing_optionals() {
        let request: SubmissionRequest =
            serde_json::from_str(r#"{"long_url":"https://example.com"}"#).unwrap();

        assert_eq!(request.long_url, "https://example.com");
        assert_eq!(request.validity_minutes, None);
        assert_eq!(request.custom_code, None);
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let created_at = Timestamp::from_second(0).unwrap();
        let expires_at = created_at + SignedDuration::from_mins(1);
        let entry = LinkEntry {
            long_url: "https://example.com".to_string(),
            short_code: ShortCode::generated("abc123"),
            created_at,
            expires_at,
            access_log: Vec::new(),
        };

        assert!(!entry.is_expired_at(created_at));
        assert!(entry.is_expired_at(expires_at));
        assert_eq!(entry.click_count(), 0);
    }
}
