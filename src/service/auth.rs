use crate::data::ApiRequest;

use std::fmt;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

const AUTHORIZATION: &str = "Authorization";

/// A [`Layer`] that produces a [`BearerAuth`] service.
#[derive(Clone)]
pub struct BearerAuthLayer {
    api_key: Arc<str>,
}

impl fmt::Debug for BearerAuthLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing the key
        f.debug_struct("BearerAuthLayer")
            .field("api_key", &"...")
            .finish()
    }
}

impl BearerAuthLayer {
    /// Creates a new [`BearerAuthLayer`] with the given API key.
    pub fn new<S: AsRef<str>>(api_key: S) -> Self {
        Self {
            api_key: Arc::from(api_key.as_ref()),
        }
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, service: S) -> Self::Service {
        BearerAuth {
            service,
            api_key: self.api_key.clone(),
        }
    }
}

/// A [`Service`] that attaches an `Authorization: Bearer <api key>` header to every request.
///
/// An `Authorization` header already present on the request is replaced.
#[derive(Clone)]
pub struct BearerAuth<S> {
    service: S,
    api_key: Arc<str>,
}

impl<S> BearerAuth<S> {
    /// Consumes `self`, returning the inner service.
    pub fn into_inner(self) -> S {
        self.service
    }
}

impl<S> fmt::Debug for BearerAuth<S>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing the key
        f.debug_struct("BearerAuth")
            .field("api_key", &"...")
            .field("service", &self.service)
            .finish()
    }
}

impl<S> Service<ApiRequest> for BearerAuth<S>
where
    S: Service<ApiRequest>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, mut req: ApiRequest) -> Self::Future {
        req.set_header(AUTHORIZATION, format!("Bearer {}", self.api_key));
        self.service.call(req)
    }
}
