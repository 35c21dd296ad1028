use crate::data::model::{JsonObject, Model};
use crate::error::Error;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use url::Url;

/// The `Request-Id` header, used to trace a request through the Straddle API.
///
/// This is a newtype wrapper rather than a plain `String` to allow for possible optimizations to
/// the internal representation (using types optimized for small strings, etc).
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(smol_str::SmolStr);

impl RequestId {
    /// Creates a new [`RequestId`].
    pub fn new(value: String) -> Self {
        Self(value.into())
    }

    /// Returns the string representation of the request ID.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consumes this value and returns the inner `String` representation.
    pub fn into_string(self) -> String {
        String::from(self.0)
    }
}

impl From<String> for RequestId {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for RequestId {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP methods used by the Straddle API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
}

impl Method {
    /// The uppercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list of HTTP headers. Header names are compared case-insensitively.
pub type HeaderList = Vec<(String, String)>;

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// An HTTP request, as handed to the executor service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// The HTTP method.
    pub method: Method,
    /// The full request URL, including the query string.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderList,
    /// The JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Returns the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Sets a header, replacing any existing value with the same name.
    pub fn set_header<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
    }
}

/// An HTTP response, as returned by the executor service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderList,
    /// The response body.
    pub body: String,
}

impl ApiResponse {
    /// Creates a response with the given status and body.
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Adds a header.
    pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Returns the first header with the given name.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Returns `true` for `2xx` status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `Request-Id` header, if present.
    pub fn request_id(&self) -> Option<RequestId> {
        self.header(REQUEST_ID).map(RequestId::from)
    }
}

pub(crate) const CORRELATION_ID: &str = "Correlation-Id";
pub(crate) const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
pub(crate) const REQUEST_ID: &str = "Request-Id";
pub(crate) const STRADDLE_ACCOUNT_ID: &str = "Straddle-Account-Id";

/// Per-request header options.
///
/// ```
/// use straddle::data::RequestOptions;
///
/// let options = RequestOptions::new()
///     .with_idempotency_key("4f1c2b1e")
///     .with_account_id("acct_123")
///     .with_header("X-Trace", "on");
///
/// assert_eq!(options.headers().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    headers: HeaderList,
}

impl RequestOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `Correlation-Id` header, used to link related requests.
    pub fn with_correlation_id<S: Into<String>>(self, value: S) -> Self {
        self.with_header(CORRELATION_ID, value)
    }

    /// Sets the `Idempotency-Key` header, so that retried requests are applied at most once.
    pub fn with_idempotency_key<S: Into<String>>(self, value: S) -> Self {
        self.with_header(IDEMPOTENCY_KEY, value)
    }

    /// Sets the `Request-Id` header.
    pub fn with_request_id<S: Into<String>>(self, value: S) -> Self {
        self.with_header(REQUEST_ID, value)
    }

    /// Sets the `Straddle-Account-Id` header, to act on behalf of a specific account.
    pub fn with_account_id<S: Into<String>>(self, value: S) -> Self {
        self.with_header(STRADDLE_ACCOUNT_ID, value)
    }

    /// Sets an arbitrary header, replacing any previous value with the same name.
    pub fn with_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// The headers set on these options.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Builds an [`ApiRequest`] from a base URL, path segments, and params models.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderList,
    body: Option<Value>,
}

impl RequestBuilder {
    /// Starts a request to the base URL.
    pub fn new(method: Method, base_url: &Url) -> Self {
        Self {
            method,
            url: base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends path segments, percent-encoding each one.
    ///
    /// Returns an error if a segment is empty, or the base URL cannot have a path.
    pub fn path(mut self, segments: &[&str]) -> Result<Self, Error> {
        if let Some(index) = segments.iter().position(|s| s.is_empty()) {
            return Err(Error::invalid_data(format!(
                "path segment {} must not be empty",
                index
            )));
        }

        if self.url.cannot_be_a_base() {
            return Err(Error::invalid_data(format!("invalid base URL: {}", self.url)));
        }

        if let Ok(mut path) = self.url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        Ok(self)
    }

    /// Flattens the raw data of a params model into query pairs.
    ///
    /// `null` entries are skipped, arrays become repeated keys, and nested objects are encoded as
    /// JSON text.
    pub fn query<M: Model>(mut self, params: &M) -> Self {
        let pairs = query_pairs(params.raw_data());

        if !pairs.is_empty() {
            self.url.query_pairs_mut().extend_pairs(pairs);
        }

        self
    }

    /// Sets the JSON body to the raw data of a params model.
    pub fn body<M: Model>(mut self, params: &M) -> Self {
        self.body = Some(params.to_json());
        self
    }

    /// Adds a header, replacing any previous value with the same name.
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Adds every header from the request options.
    pub fn options(self, options: &RequestOptions) -> Self {
        options
            .headers()
            .iter()
            .fold(self, |builder, (name, value)| {
                builder.header(name.as_str(), value.as_str())
            })
    }

    /// Finishes the request.
    pub fn build(self) -> ApiRequest {
        let mut headers = self.headers;

        if self.body.is_some() && find_header(&headers, "Content-Type").is_none() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        ApiRequest {
            method: self.method,
            url: self.url,
            headers,
            body: self.body,
        }
    }
}

fn query_pairs(params: &JsonObject) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (key, value) in params {
        match value {
            Value::Array(items) => pairs.extend(
                items
                    .iter()
                    .filter_map(query_value)
                    .map(|item| (key.clone(), item)),
            ),
            other => pairs.extend(query_value(other).map(|v| (key.clone(), v))),
        }
    }

    pairs
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
