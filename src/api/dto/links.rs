//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use validator::Validate;

use crate::application::services::CreateLink;
use crate::domain::entities::LinkEntry;

/// Request body for `POST /api/links`.
///
/// URL scheme and host checks happen in the service; only size limits are
/// enforced here.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[validate(length(max = 2048, message = "long_url must be at most 2048 characters"))]
    pub long_url: String,

    /// Defaults to `long_url` when absent.
    #[validate(length(max = 2048, message = "original_url must be at most 2048 characters"))]
    pub original_url: Option<String>,

    #[validate(length(max = 128, message = "user_id must be at most 128 characters"))]
    pub user_id: Option<String>,

    /// RFC 3339 timestamp. Absent means the configured default expiry.
    pub expire_at: Option<DateTime<Utc>>,
}

impl From<CreateLinkRequest> for CreateLink {
    fn from(req: CreateLinkRequest) -> Self {
        Self {
            long_url: req.long_url,
            original_url: req.original_url,
            user_id: req.user_id,
            expire_at: req.expire_at,
        }
    }
}

/// Response body for a created link.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub short_code: String,
    pub long_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expire_at: Option<DateTime<Utc>>,
}

impl From<LinkEntry> for CreateLinkResponse {
    fn from(entry: LinkEntry) -> Self {
        Self {
            short_code: entry.short_code,
            long_url: entry.long_url,
            original_url: entry.original_url,
            created_at: entry.created_at,
            expire_at: entry.expire_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_optional_fields() {
        let req: CreateLinkRequest =
            serde_json::from_value(json!({"long_url": "https://example.com"})).unwrap();

        assert_eq!(req.long_url, "https://example.com");
        assert!(req.original_url.is_none());
        assert!(req.user_id.is_none());
        assert!(req.expire_at.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_request_requires_long_url() {
        let res = serde_json::from_value::<CreateLinkRequest>(json!({"user_id": "u1"}));
        assert!(res.is_err());
    }

    #[test]
    fn test_request_rejects_oversized_fields() {
        let req = CreateLinkRequest {
            long_url: format!("https://example.com/{}", "a".repeat(2048)),
            original_url: None,
            user_id: Some("u".repeat(129)),
            expire_at: None,
        };

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("long_url"));
        assert!(fields.contains_key("user_id"));
    }

    #[test]
    fn test_response_omits_missing_expiry() {
        let created_at = Utc::now();
        let response = CreateLinkResponse {
            short_code: "aB3xY9z".to_string(),
            long_url: "https://example.com".to_string(),
            original_url: "https://example.com".to_string(),
            created_at,
            expire_at: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["short_code"], "aB3xY9z");
        assert!(value.get("expire_at").is_none());
    }
}
