use crate::data::{ApiRequest, ApiResponse, Method};
use crate::error::{Error, ErrorKind};

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

/// A [`Service`] that sends [`ApiRequest`]s over HTTP using [`reqwest`].
///
/// Cloning is cheap, since [`reqwest::Client`] shares its connection pool between clones.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a new [`ReqwestTransport`] with a default [`reqwest::Client`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`ReqwestTransport`] from a preconfigured [`reqwest::Client`] (e.g., with
    /// custom timeouts or a proxy).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl Service<ApiRequest> for ReqwestTransport {
    type Response = ApiResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ApiRequest) -> Self::Future {
        let client = self.client.clone();

        Box::pin(async move {
            let mut builder = client.request(req.method.into(), req.url);

            for (name, value) in &req.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            if let Some(body) = &req.body {
                let bytes = serde_json::to_vec(body)
                    .map_err(|e| Error::new(ErrorKind::Serialization).with_source(e))?;
                builder = builder.body(bytes);
            }

            let resp = builder.send().await.map_err(Error::transport)?;

            let status = resp.status().as_u16();
            let headers = resp
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_owned(), value.to_owned()))
                })
                .collect();
            let body = resp.text().await.map_err(Error::transport)?;

            Ok(ApiResponse {
                status,
                headers,
                body,
            })
        })
    }
}
