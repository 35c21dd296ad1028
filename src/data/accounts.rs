use crate::data::model::define_model;
use crate::data::{
    impl_list_params, Address, Metadata, OpenEnum, PagedResponseMetadata, ResponseMetadata,
    ResponseType, SortOrder, StatusDetail,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Known values for [`OpenEnum<AccessLevel>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// The account manages its own customers and payments.
    Standard,
    /// The account is operated by its organization on its behalf.
    Managed,
}

/// Known values for [`OpenEnum<AccountType>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// A business account.
    Business,
}

/// Known values for [`OpenEnum<AccountStatus>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    /// Created, but onboarding has not started.
    Created,
    /// Onboarding is in progress.
    Onboarding,
    /// Fully onboarded, and able to move money.
    Active,
    /// Onboarding was rejected.
    Rejected,
    /// Disabled after onboarding.
    Inactive,
}

/// Known values for [`OpenEnum<TermsAgreementType>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TermsAgreementType {
    /// Terms accepted inside the platform's own interface.
    Embedded,
    /// Terms accepted directly with Straddle.
    Direct,
}

/// Known values for [`OpenEnum<SimulateFinalStatus>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SimulateFinalStatus {
    /// Stop the simulation while onboarding.
    Onboarding,
    /// Simulate a fully onboarded account.
    Active,
}

define_model! {
    /// Industry classification of a business.
    pub struct Industry {
        nullable category: String = "category",
        /// Merchant category code.
        nullable mcc: String = "mcc",
        nullable sector: String = "sector",
    }
}

define_model! {
    /// Channels customers can use to contact a business.
    pub struct SupportChannels {
        nullable email: String = "email",
        nullable phone: String = "phone",
        nullable url: String = "url",
    }
}

define_model! {
    /// Public and legal details of a business.
    pub struct BusinessProfile {
        /// The operating name of the business.
        required name: String = "name",
        required website: String = "website",
        nullable address: Address = "address",
        nullable description: String = "description",
        nullable industry: Industry = "industry",
        /// The registered legal name, if different from `name`.
        nullable legal_name: String = "legal_name",
        nullable phone: String = "phone",
        nullable support_channels: SupportChannels = "support_channels",
        /// Employer identification number.
        nullable tax_id: String = "tax_id",
        nullable use_case: String = "use_case",
    }
}

define_model! {
    /// Acceptance of the Straddle terms of service.
    pub struct TermsOfService {
        required accepted_date: DateTime<Utc> = "accepted_date",
        required agreement_type: OpenEnum<TermsAgreementType> = "agreement_type",
        required agreement_url: String = "agreement_url",
        nullable accepted_ip: String = "accepted_ip",
        nullable accepted_user_agent: String = "accepted_user_agent",
    }
}

define_model! {
    /// A business account on the platform.
    pub struct Account {
        /// Unique identifier of the account.
        required id: String = "id",
        required access_level: OpenEnum<AccessLevel> = "access_level",
        required organization_id: String = "organization_id",
        required account_type: OpenEnum<AccountType> = "type",
        required business_profile: BusinessProfile = "business_profile",
        required status: OpenEnum<AccountStatus> = "status",
        required status_detail: StatusDetail = "status_detail",
        nullable capabilities: Value = "capabilities",
        nullable settings: Value = "settings",
        nullable terms_of_service: TermsOfService = "terms_of_service",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
        nullable created_at: DateTime<Utc> = "created_at",
        nullable updated_at: DateTime<Utc> = "updated_at",
    }
}

define_model! {
    /// A single account response.
    pub struct AccountV1 {
        required data: Account = "data",
        required meta: ResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// A page of accounts.
    pub struct AccountPagedV1 {
        required data: Vec<Account> = "data",
        required meta: PagedResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// Body of an account creation request.
    pub struct AccountCreateParams {
        required access_level: OpenEnum<AccessLevel> = "access_level",
        required account_type: OpenEnum<AccountType> = "type",
        required business_profile: BusinessProfile = "business_profile",
        required organization_id: String = "organization_id",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// Body of an account update request.
    pub struct AccountUpdateParams {
        required business_profile: BusinessProfile = "business_profile",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// Query of an account list request.
    pub struct AccountListParams {
        optional page_number: i32 = "page_number",
        optional page_size: i32 = "page_size",
        optional sort_by: String = "sort_by",
        optional sort_order: OpenEnum<SortOrder> = "sort_order",
        /// Free-text search over account names and identifiers.
        optional search_text: String = "search_text",
        optional status: Vec<OpenEnum<AccountStatus>> = "status",
    }
}

impl_list_params!(AccountListParams);

define_model! {
    /// Body of an account onboarding request.
    pub struct AccountOnboardParams {
        required terms_of_service: TermsOfService = "terms_of_service",
    }
}

define_model! {
    /// Query of a sandbox onboarding simulation request.
    pub struct AccountSimulateParams {
        optional final_status: OpenEnum<SimulateFinalStatus> = "final_status",
    }
}
