use crate::data::model::define_model;
use crate::data::{
    impl_list_params, ListLevel, Metadata, OpenEnum, PagedResponseMetadata, ResponseMetadata,
    ResponseType, SortOrder, StatusDetail,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Known values for [`OpenEnum<RepresentativeStatus>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RepresentativeStatus {
    /// Identity verification has not completed.
    Created,
    /// Verified and able to act for the account.
    Active,
    /// Verification was rejected.
    Rejected,
    /// No longer able to act for the account.
    Inactive,
}

define_model! {
    /// How a representative is related to the business.
    pub struct Relationship {
        /// Has significant control over the business.
        required control: bool = "control",
        /// Owns 25% or more of the business.
        required owner: bool = "owner",
        /// The primary contact for the account.
        required primary: bool = "primary",
        nullable percent_ownership: f64 = "percent_ownership",
        /// Job title.
        nullable title: String = "title",
    }
}

define_model! {
    /// A person authorized to act on behalf of an account.
    pub struct Representative {
        required id: String = "id",
        required account_id: String = "account_id",
        required created_at: DateTime<Utc> = "created_at",
        /// Date of birth.
        required dob: NaiveDate = "dob",
        required email: String = "email",
        required first_name: String = "first_name",
        required last_name: String = "last_name",
        required mobile_number: String = "mobile_number",
        /// Full name, as displayed.
        required name: String = "name",
        required relationship: Relationship = "relationship",
        /// Last four digits of the social security number.
        required ssn_last4: String = "ssn_last4",
        required status: OpenEnum<RepresentativeStatus> = "status",
        required status_detail: StatusDetail = "status_detail",
        required updated_at: DateTime<Utc> = "updated_at",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
        nullable phone: String = "phone",
        nullable user_id: String = "user_id",
    }
}

define_model! {
    /// A single representative response.
    pub struct RepresentativeV1 {
        required data: Representative = "data",
        required meta: ResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// A page of representatives.
    pub struct RepresentativePagedV1 {
        required data: Vec<Representative> = "data",
        required meta: PagedResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// Body of a representative creation request.
    pub struct RepresentativeCreateParams {
        required account_id: String = "account_id",
        required dob: NaiveDate = "dob",
        required email: String = "email",
        required first_name: String = "first_name",
        required last_name: String = "last_name",
        required mobile_number: String = "mobile_number",
        required relationship: Relationship = "relationship",
        /// Last four digits of the social security number.
        required ssn_last4: String = "ssn_last4",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
        nullable phone: String = "phone",
    }
}

define_model! {
    /// Body of a representative update request.
    pub struct RepresentativeUpdateParams {
        required dob: NaiveDate = "dob",
        required email: String = "email",
        required first_name: String = "first_name",
        required last_name: String = "last_name",
        required mobile_number: String = "mobile_number",
        required relationship: Relationship = "relationship",
        required ssn_last4: String = "ssn_last4",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
        nullable phone: String = "phone",
    }
}

define_model! {
    /// Query of a representative list request.
    pub struct RepresentativeListParams {
        optional page_number: i32 = "page_number",
        optional page_size: i32 = "page_size",
        optional sort_by: String = "sort_by",
        optional sort_order: OpenEnum<SortOrder> = "sort_order",
        /// Only return representatives of this account.
        optional account_id: String = "account_id",
        optional level: OpenEnum<ListLevel> = "level",
    }
}

impl_list_params!(RepresentativeListParams);
