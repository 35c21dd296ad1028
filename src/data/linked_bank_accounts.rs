use crate::data::model::define_model;
use crate::data::{
    impl_list_params, ListLevel, Metadata, OpenEnum, PagedResponseMetadata, ResponseMetadata,
    ResponseType, SortOrder, StatusDetail,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Known values for [`OpenEnum<LinkedBankAccountStatus>`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkedBankAccountStatus {
    /// Linked, verification has not started.
    Created,
    /// Verification is in progress.
    Onboarding,
    /// Verified and usable.
    Active,
    /// Verification was rejected.
    Rejected,
    /// Disabled after verification.
    Inactive,
    /// Canceled by the platform.
    Canceled,
}

/// Known values for [`OpenEnum<Purpose>`], what a linked bank account is used for.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    /// Collecting customer payments.
    Charges,
    /// Receiving settled funds.
    Payouts,
    /// Paying Straddle fees.
    Billing,
}

define_model! {
    /// Bank account details supplied when linking an account.
    pub struct BankAccountInput {
        required account_holder: String = "account_holder",
        required account_number: String = "account_number",
        /// The nine-digit ABA routing number.
        required routing_number: String = "routing_number",
    }
}

define_model! {
    /// Bank account details as returned by the API, with the account number masked.
    pub struct BankAccount {
        required account_holder: String = "account_holder",
        required account_mask: String = "account_mask",
        required institution_name: String = "institution_name",
        required routing_number: String = "routing_number",
    }
}

define_model! {
    /// A bank account linked to a platform account.
    pub struct LinkedBankAccount {
        required id: String = "id",
        required account_id: String = "account_id",
        required bank_account: BankAccount = "bank_account",
        required created_at: DateTime<Utc> = "created_at",
        required purposes: Vec<OpenEnum<Purpose>> = "purposes",
        required status: OpenEnum<LinkedBankAccountStatus> = "status",
        required status_detail: StatusDetail = "status_detail",
        required updated_at: DateTime<Utc> = "updated_at",
        nullable description: String = "description",
        nullable metadata: Metadata = "metadata",
        nullable platform_id: String = "platform_id",
    }
}

define_model! {
    /// A single linked bank account response.
    pub struct LinkedBankAccountV1 {
        required data: LinkedBankAccount = "data",
        required meta: ResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// A page of linked bank accounts.
    pub struct LinkedBankAccountPagedV1 {
        required data: Vec<LinkedBankAccount> = "data",
        required meta: PagedResponseMetadata = "meta",
        required response_type: OpenEnum<ResponseType> = "response_type",
    }
}

define_model! {
    /// Body of a request to link a bank account.
    pub struct LinkedBankAccountCreateParams {
        /// The account to link to, or `null` to link to the platform itself.
        required_nullable account_id: String = "account_id",
        required bank_account: BankAccountInput = "bank_account",
        nullable description: String = "description",
        nullable metadata: Metadata = "metadata",
        optional purposes: Vec<OpenEnum<Purpose>> = "purposes",
    }
}

define_model! {
    /// Body of a linked bank account update request.
    pub struct LinkedBankAccountUpdateParams {
        required bank_account: BankAccountInput = "bank_account",
        nullable description: String = "description",
        nullable metadata: Metadata = "metadata",
    }
}

define_model! {
    /// Query of a linked bank account list request.
    pub struct LinkedBankAccountListParams {
        optional page_number: i32 = "page_number",
        optional page_size: i32 = "page_size",
        optional sort_by: String = "sort_by",
        optional sort_order: OpenEnum<SortOrder> = "sort_order",
        optional account_id: String = "account_id",
        optional level: OpenEnum<ListLevel> = "level",
        optional purpose: OpenEnum<Purpose> = "purpose",
        optional status: OpenEnum<LinkedBankAccountStatus> = "status",
    }
}

impl_list_params!(LinkedBankAccountListParams);
