pub(crate) mod auth;

use crate::data::{ApiRequest, ApiResponse, ErrorResponse, FieldValue, Model};
use crate::error::{ApiError, Error};
use tower::{Service, ServiceExt};

pub use crate::service::auth::{BearerAuth, BearerAuthLayer};

/// Submit a request to the underlying service and parse the response into `M`.
///
/// If `validate` is `true`, the parsed response is also checked against the API schema.
///
/// This is what every [`Client`](crate::Client) resource method calls, but as a standalone
/// function.
pub async fn send_request<S, M>(
    service: &mut S,
    request: ApiRequest,
    validate: bool,
) -> Result<M, Error>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
    M: Model,
{
    tracing::debug!(method = %request.method, url = %request.url, "sending request");

    let resp = service.ready().await?.call(request).await?;

    tracing::debug!(status = resp.status, "received response");
    tracing::trace!(body = %resp.body, "response body");

    let value = parse_response::<M>(resp)?;

    if validate {
        if let Err(e) = value.validate() {
            tracing::warn!(error = %e, "response failed validation");
            return Err(e);
        }
    }

    Ok(value)
}

/// Parse an HTTP response into `M`, or into an [`ApiError`] if the status is not `2xx`.
pub fn parse_response<M: Model>(resp: ApiResponse) -> Result<M, Error> {
    if !resp.is_success() {
        return Err(api_error(resp).into());
    }

    M::from_json_str(&resp.body)
}

fn api_error(resp: ApiResponse) -> ApiError {
    // Error bodies are parsed leniently; the raw body is always kept
    let error = serde_json::from_str::<serde_json::Value>(&resp.body)
        .ok()
        .and_then(|body| ErrorResponse::decode_json(&body).ok())
        .and_then(|body| body.error().cloned());

    ApiError {
        status: resp.status,
        request_id: resp.request_id(),
        error,
        body: resp.body,
    }
}
