//! A typed client for the [Straddle](https://straddle.io) payments API.
//!
//! Every request and response body is a [`Model`](crate::data::Model): a typed view over the raw
//! JSON object that keeps unknown keys, so that fields added by newer API versions survive a
//! decode/encode roundtrip. Enum-valued fields use [`OpenEnum`](crate::data::OpenEnum), which
//! accepts values this crate doesn't know about yet.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "reqwest")]
//! # async fn run() -> Result<(), straddle::Error> {
//! use straddle::data::{AccountListParams, RequestOptions};
//! use straddle::{Client, Environment};
//!
//! let mut client = Client::builder()
//!     .environment(Environment::Sandbox)
//!     .api_key("sk_test_...")
//!     .build_reqwest()?;
//!
//! let mut params = AccountListParams::new();
//! params.set_page_size(10);
//!
//! let page = client
//!     .accounts()
//!     .list(&params, &RequestOptions::new())
//!     .await?;
//!
//! for account in page.data().into_iter().flatten() {
//!     println!("{:?}: {:?}", account.id(), account.status());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Any [`tower::Service`] that turns an [`ApiRequest`](crate::data::ApiRequest) into an
//! [`ApiResponse`](crate::data::ApiResponse) can be used as the transport, via
//! [`ClientBuilder::build`].

#![cfg_attr(docsrs, feature(doc_cfg))]

macro_rules! cfg_feature {
    (
        #![feature = $name:literal]
        $($item:item)*
    ) => {
        $(
            #[cfg(feature = $name)]
            #[cfg_attr(docsrs, doc(cfg(feature = $name)))]
            $item
        )*
    }
}

pub(crate) use cfg_feature;

mod client;
pub mod data;
pub mod error;
pub mod resources;
pub mod service;

cfg_feature! {
    #![feature = "reqwest"]

    mod transport;
    pub use crate::transport::ReqwestTransport;
}

pub use crate::client::{
    BoxApiService, Client, ClientBuilder, Environment, PRODUCTION_URL, SANDBOX_URL,
};
pub use crate::error::{Error, ErrorKind, Result};
