//! Request/response types for the Straddle API.
//!
//! Every model is generated by the same macro and implements [`Model`]: it keeps the JSON object
//! it was created from, so values this client does not know about are never lost. Enumerations
//! are wrapped in [`OpenEnum`] for the same reason.

mod accounts;
mod common;
mod customers;
mod enumeration;
mod envelope;
mod linked_bank_accounts;
pub(crate) mod model;
mod organizations;
mod representatives;

pub use crate::data::accounts::*;
pub use crate::data::common::*;
pub use crate::data::customers::*;
pub use crate::data::enumeration::{EnumWire, OpenEnum, WireStr};
pub use crate::data::envelope::{
    ApiRequest, ApiResponse, HeaderList, Method, RequestBuilder, RequestId, RequestOptions,
};
pub use crate::data::linked_bank_accounts::*;
pub use crate::data::model::{FieldSpec, FieldValue, JsonObject, Model, Validate};
pub use crate::data::organizations::*;
pub use crate::data::representatives::*;

use std::collections::BTreeMap;

/// Free-form string key/value pairs attached to an object.
pub type Metadata = BTreeMap<String, String>;

/// Query models for list endpoints, which page through results with `page_number`.
pub trait ListParams: Model {
    /// The requested page, defaulting to the first page.
    fn current_page(&self) -> i32;

    /// Returns a copy of these params requesting the given page.
    fn with_page(&self, page: i32) -> Self;

    /// Returns a copy of these params requesting the page after this one.
    fn next_page(&self) -> Self {
        self.with_page(self.current_page().saturating_add(1))
    }
}

macro_rules! impl_list_params {
    ($($name:ident),* $(,)?) => {
        $(
            impl $crate::data::ListParams for $name {
                fn current_page(&self) -> i32 {
                    self.page_number().copied().unwrap_or(1)
                }

                fn with_page(&self, page: i32) -> Self {
                    let mut params = self.clone();
                    params.set_page_number(page);
                    params
                }
            }
        )*
    };
}

pub(crate) use impl_list_params;
