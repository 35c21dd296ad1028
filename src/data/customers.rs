use crate::data::model::define_model;
use crate::data::{Address, JsonObject, Metadata, OpenEnum, ResponseMetadata, ResponseType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Known values for [`OpenEnum<CustomerType>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    /// A person.
    Individual,
    /// A company.
    Business,
}

/// Known values for [`OpenEnum<CustomerStatus>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    /// Identity verification is in progress.
    Pending,
    /// Flagged for manual review.
    Review,
    /// Verified and able to pay.
    Verified,
    /// Disabled.
    Inactive,
    /// Verification failed.
    Rejected,
}

/// Known values for [`OpenEnum<ProcessingMethod>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingMethod {
    /// Verify before the request returns.
    Inline,
    /// Verify in the background after the request returns.
    Background,
    /// Skip verification.
    Skip,
}

/// Known values for [`OpenEnum<SandboxOutcome>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SandboxOutcome {
    /// Use the regular verification rules.
    Standard,
    /// Always verify.
    Verified,
    /// Always reject.
    Rejected,
    /// Always flag for review.
    Review,
}

/// Known values for [`OpenEnum<ReviewDecision>`], the outcome of an identity check.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// The check passed.
    Accept,
    /// The check failed.
    Reject,
    /// The check needs a manual decision.
    Review,
}

/// Known values for [`OpenEnum<ReviewDecisionStatus>`], a manual review decision.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecisionStatus {
    /// Approve the customer.
    Verified,
    /// Reject the customer.
    Rejected,
}

define_model! {
    /// How a customer's identity is verified.
    pub struct CustomerConfig {
        nullable processing_method: OpenEnum<ProcessingMethod> = "processing_method",
        /// Forces a verification outcome in the sandbox environment.
        nullable sandbox_outcome: OpenEnum<SandboxOutcome> = "sandbox_outcome",
    }
}

define_model! {
    /// The device a customer was onboarded from.
    pub struct Device {
        /// IP address, used for fraud checks.
        required ip_address: String = "ip_address",
    }
}

define_model! {
    /// A customer of a platform account.
    pub struct Customer {
        required id: String = "id",
        required created_at: DateTime<Utc> = "created_at",
        required email: String = "email",
        required name: String = "name",
        required phone: String = "phone",
        required status: OpenEnum<CustomerStatus> = "status",
        required customer_type: OpenEnum<CustomerType> = "type",
        required updated_at: DateTime<Utc> = "updated_at",
        nullable address: Address = "address",
        nullable compliance_profile: Value = "compliance_profile",
        nullable config: CustomerConfig = "config",
        nullable device: Device = "device",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// A single customer response.
    pub struct CustomerV1 {
        required data: Customer = "data",
        required meta: ResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// The customer as seen by an identity review.
    pub struct CustomerDetails {
        required id: String = "id",
        required created_at: DateTime<Utc> = "created_at",
        required email: String = "email",
        required name: String = "name",
        required phone: String = "phone",
        required status: OpenEnum<CustomerStatus> = "status",
        required customer_type: OpenEnum<CustomerType> = "type",
        required updated_at: DateTime<Utc> = "updated_at",
        nullable address: Address = "address",
        nullable config: CustomerConfig = "config",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// The result of an identity verification.
    pub struct IdentityDetails {
        required review_id: String = "review_id",
        required decision: OpenEnum<ReviewDecision> = "decision",
        required created_at: DateTime<Utc> = "created_at",
        required updated_at: DateTime<Utc> = "updated_at",
        /// Reason codes mapped to human-readable messages.
        nullable messages: JsonObject = "messages",
        /// Per-check results (email, phone, fraud, etc.).
        nullable breakdown: Value = "breakdown",
    }
}

define_model! {
    /// A customer together with the state of its identity review.
    pub struct CustomerReview {
        required customer_details: CustomerDetails = "customer_details",
        nullable identity_details: IdentityDetails = "identity_details",
    }
}

define_model! {
    /// A customer review response.
    pub struct CustomerReviewV1 {
        required data: CustomerReview = "data",
        required meta: ResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// Body of a manual review decision.
    pub struct CustomerReviewDecisionParams {
        required status: OpenEnum<ReviewDecisionStatus> = "status",
    }
}
