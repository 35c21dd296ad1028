//! Types shared across resources.

use crate::data::model::define_model;
use crate::data::OpenEnum;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Known values for [`OpenEnum<ResponseType>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    /// A single object.
    Object,
    /// A list of objects.
    Array,
    /// An error.
    Error,
    /// No data.
    None,
}

/// Known values for [`OpenEnum<SortOrder>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Known values for [`OpenEnum<StatusReason>`].
#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusReason {
    Unverified,
    InReview,
    Pending,
    Stuck,
    Verified,
    FailedVerification,
    Disabled,
    Terminated,
    New,
    Live,
}

/// Known values for [`OpenEnum<StatusSource>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusSource {
    /// Straddle's automated risk monitoring.
    Watchtower,
}

/// Known values for [`OpenEnum<ListLevel>`], the scope of a list query.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ListLevel {
    /// Objects belonging to the current account.
    Account,
    /// Objects across the whole platform.
    Platform,
}

define_model! {
    /// Metadata attached to every single-object response.
    pub struct ResponseMetadata {
        /// Unique identifier of the API request.
        required api_request_id: String = "api_request_id",
        /// When the API request was received.
        required api_request_timestamp: DateTime<Utc> = "api_request_timestamp",
    }
}

define_model! {
    /// Metadata attached to every list response.
    pub struct PagedResponseMetadata {
        required api_request_id: String = "api_request_id",
        required api_request_timestamp: DateTime<Utc> = "api_request_timestamp",
        /// The largest page size the API accepts.
        required max_page_size: i32 = "max_page_size",
        /// The current page (1-based).
        required page_number: i32 = "page_number",
        required page_size: i32 = "page_size",
        required sort_by: String = "sort_by",
        required sort_order: OpenEnum<SortOrder> = "sort_order",
        required total_items: i32 = "total_items",
        required total_pages: i32 = "total_pages",
    }
}

impl PagedResponseMetadata {
    /// Returns `true` if there are pages after this one.
    pub fn has_next_page(&self) -> bool {
        match (self.page_number, self.total_pages) {
            (Some(page), Some(total)) => page < total,
            _ => false,
        }
    }
}

define_model! {
    /// Why an object is in its current status.
    pub struct StatusDetail {
        /// Human-readable description of the status.
        required message: String = "message",
        required reason: OpenEnum<StatusReason> = "reason",
        required source: OpenEnum<StatusSource> = "source",
        /// Machine-readable code for the status, if any.
        nullable code: String = "code",
    }
}

define_model! {
    /// A postal address.
    pub struct Address {
        /// Street address.
        required address1: String = "address1",
        /// Apartment, suite, unit, etc.
        nullable address2: String = "address2",
        required city: String = "city",
        /// Two-letter state code.
        required state: String = "state",
        required zip: String = "zip",
        /// Two-letter country code.
        optional country: String = "country",
    }
}

define_model! {
    /// A single problem reported by an error response.
    pub struct ErrorItem {
        /// The request field the problem refers to.
        nullable reference: String = "reference",
        nullable detail: String = "detail",
    }
}

define_model! {
    /// The `error` object of a non-success response.
    pub struct ErrorDetail {
        /// The HTTP status code.
        optional status: i64 = "status",
        /// The error category.
        optional error_type: String = "type",
        /// A short summary of the error.
        optional title: String = "title",
        /// A longer explanation of the error.
        nullable detail: String = "detail",
        /// Per-field problems, if any.
        nullable items: Vec<ErrorItem> = "items",
    }
}

define_model! {
    /// The body of a non-success response.
    pub struct ErrorResponse {
        required error: ErrorDetail = "error",
        optional meta: ResponseMetadata = "meta",
        optional response_type: OpenEnum<ResponseType> = "response_type",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Model, Validate};
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    fn paged_meta(page: i32, total: i32) -> serde_json::Value {
        json!({
            "api_request_id": "req_1",
            "api_request_timestamp": "2024-03-01T10:00:00Z",
            "max_page_size": 1000,
            "page_number": page,
            "page_size": 100,
            "sort_by": "created_at",
            "sort_order": "asc",
            "total_items": 250,
            "total_pages": total
        })
    }

    #[test]
    fn has_next_page() -> Result {
        let meta = serde_json::from_value::<PagedResponseMetadata>(paged_meta(2, 3))?;
        meta.validate()?;
        assert!(meta.has_next_page());

        let meta = serde_json::from_value::<PagedResponseMetadata>(paged_meta(3, 3))?;
        assert!(!meta.has_next_page());

        assert!(!PagedResponseMetadata::new().has_next_page());

        Ok(())
    }

    #[test]
    fn error_response() -> Result {
        let json = json!({
            "error": {
                "status": 422,
                "type": "validation_error",
                "title": "Unprocessable Entity",
                "detail": "One or more fields are invalid.",
                "items": [{ "reference": "email", "detail": "Email is invalid." }]
            },
            "meta": {
                "api_request_id": "req_9",
                "api_request_timestamp": "2024-03-01T10:00:00Z"
            },
            "response_type": "error"
        });

        let resp = serde_json::from_value::<ErrorResponse>(json.clone())?;
        resp.validate()?;

        let detail = resp.error().ok_or("missing error")?;
        assert_eq!(detail.status(), Some(&422));
        assert_eq!(detail.error_type().map(String::as_str), Some("validation_error"));
        assert_eq!(
            detail.items().and_then(|items| items[0].reference()).map(String::as_str),
            Some("email")
        );
        assert_eq!(resp.response_type(), Some(&OpenEnum::new(ResponseType::Error)));
        assert_eq!(resp.to_json(), json);

        Ok(())
    }

    #[test]
    fn status_detail_with_unknown_reason() -> Result {
        let detail = serde_json::from_value::<StatusDetail>(json!({
            "message": "Manual review",
            "reason": "escalated",
            "source": "watchtower",
            "code": null
        }))?;

        assert!(detail.is_null("code"));
        assert_eq!(detail.reason().map(|r| r.as_str()), Some("escalated"));
        assert!(detail.validate().is_err());

        Ok(())
    }
}
