use crate::data::model::define_model;
use crate::data::{
    impl_list_params, Metadata, OpenEnum, PagedResponseMetadata, ResponseMetadata, ResponseType,
    SortOrder,
};

use chrono::{DateTime, Utc};

define_model! {
    /// An organization, which groups the accounts of a single platform customer.
    pub struct Organization {
        required id: String = "id",
        required name: String = "name",
        required created_at: DateTime<Utc> = "created_at",
        required updated_at: DateTime<Utc> = "updated_at",
        /// Identifier of the organization in your own system.
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// A single organization response.
    pub struct OrganizationV1 {
        required data: Organization = "data",
        required meta: ResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// A page of organizations.
    pub struct OrganizationPagedV1 {
        required data: Vec<Organization> = "data",
        required meta: PagedResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// Body of an organization creation request.
    pub struct OrganizationCreateParams {
        required name: String = "name",
        nullable external_id: String = "external_id",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// Query of an organization list request.
    pub struct OrganizationListParams {
        optional page_number: i32 = "page_number",
        optional page_size: i32 = "page_size",
        optional sort_by: String = "sort_by",
        optional sort_order: OpenEnum<SortOrder> = "sort_order",
        optional external_id: String = "external_id",
        /// Filter by (partial) organization name.
        optional name: String = "name",
    }
}

impl_list_params!(OrganizationListParams);
