//! Per-resource operation handles, returned by [`Client`](crate::Client) methods.
//!
//! Each operation maps one HTTP method and path to one typed call.

mod accounts;
mod customers;
mod linked_bank_accounts;
mod organizations;
mod representatives;

pub use crate::resources::accounts::Accounts;
pub use crate::resources::customers::CustomerReviews;
pub use crate::resources::linked_bank_accounts::LinkedBankAccounts;
pub use crate::resources::organizations::Organizations;
pub use crate::resources::representatives::Representatives;

use crate::error::Error;

// Checked before any request is built, so the error names the parameter.
fn path_param<'a>(name: &str, value: &'a str) -> Result<&'a str, Error> {
    if value.trim().is_empty() {
        Err(Error::invalid_data(format!(
            "path parameter `{}` must not be empty",
            name
        )))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::client::Client;
    use crate::data::{ApiRequest, ApiResponse};
    use crate::error::Error;

    use std::sync::{Arc, Mutex};
    use tower::Service;
    use url::Url;

    /// Records every request, and answers each one with a fixed response.
    #[derive(Clone)]
    pub struct MockApi {
        pub requests: Arc<Mutex<Vec<ApiRequest>>>,
        response: Arc<ApiResponse>,
    }

    impl MockApi {
        pub fn new(body: serde_json::Value) -> Self {
            Self {
                requests: Arc::default(),
                response: Arc::new(ApiResponse::new(200, body.to_string())),
            }
        }

        pub fn client(&self) -> Client<Self> {
            let base = Url::parse("https://sandbox.straddle.io").expect("valid URL");
            Client::new(self.clone(), base)
        }

        pub fn last(&self) -> ApiRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request was sent")
        }

        pub fn count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl Service<ApiRequest> for MockApi {
        type Response = ApiResponse;
        type Error = Error;
        type Future = futures_util::future::Ready<Result<ApiResponse, Error>>;

        fn poll_ready(
            &mut self,
            _cx: &mut std::task::Context<'_>,
        ) -> std::task::Poll<Result<(), Error>> {
            std::task::Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: ApiRequest) -> Self::Future {
            self.requests.lock().unwrap().push(req);
            futures_util::future::ready(Ok((*self.response).clone()))
        }
    }

    /// A `{data, meta, response_type}` envelope around `data`.
    pub fn envelope(data: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "data": data,
            "meta": {
                "api_request_id": "req_1",
                "api_request_timestamp": "2024-03-01T10:00:00Z"
            },
            "response_type": "object"
        })
    }

    /// A `{data: [..], meta, response_type}` envelope around `items`.
    pub fn paged(items: Vec<serde_json::Value>) -> serde_json::Value {
        serde_json::json!({
            "data": items,
            "meta": {
                "api_request_id": "req_1",
                "api_request_timestamp": "2024-03-01T10:00:00Z",
                "max_page_size": 1000,
                "page_number": 1,
                "page_size": 100,
                "sort_by": "created_at",
                "sort_order": "asc",
                "total_items": 1,
                "total_pages": 1
            },
            "response_type": "array"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_path_param() {
        let err = path_param("account_id", "  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().contains("`account_id`"));

        assert_eq!(path_param("account_id", "acct_1").ok(), Some("acct_1"));
    }
}
