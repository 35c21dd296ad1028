use crate::data::{
    ApiRequest, ApiResponse, HeaderList, Method, Model, RequestBuilder, RequestOptions,
};
use crate::error::{BoxError, Error};
use crate::resources::{
    Accounts, CustomerReviews, LinkedBankAccounts, Organizations, Representatives,
};
use crate::service::{send_request, BearerAuthLayer};

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tower::util::BoxCloneService;
use tower::{Service, ServiceBuilder};
use url::Url;

/// Base URL of the production environment.
pub const PRODUCTION_URL: &str = "https://production.straddle.io";

/// Base URL of the sandbox environment.
pub const SANDBOX_URL: &str = "https://sandbox.straddle.io";

/// A [`Clone`]able [`tower::Service`] that is compatible with [`Client`].
pub type BoxApiService = BoxCloneService<ApiRequest, ApiResponse, Error>;

/// A Straddle API environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Live payments.
    Production,
    /// Test payments.
    Sandbox,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Sandbox
    }
}

impl Environment {
    /// The base URL of this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_URL,
            Self::Sandbox => SANDBOX_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(Error::invalid_data(format!(
                "unknown environment `{}` (expected `production` or `sandbox`)",
                other
            ))),
        }
    }
}

#[derive(Debug)]
struct ClientConfig {
    base_url: Url,
    validate_responses: bool,
    default_headers: HeaderList,
}

/// A client for the Straddle API.
///
/// Operations are grouped by resource, e.g. [`Client::accounts`].
#[derive(Clone, Debug)]
pub struct Client<S = BoxApiService> {
    service: S,
    config: Arc<ClientConfig>,
}

impl Client<BoxApiService> {
    /// Returns a [`ClientBuilder`] with default settings.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<S> Client<S>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
{
    /// Creates a client that sends requests to `base_url` through `service` as-is.
    ///
    /// Prefer [`ClientBuilder::build`], which also attaches the API key and default headers.
    pub fn new(service: S, base_url: Url) -> Self {
        Self {
            service,
            config: Arc::new(ClientConfig {
                base_url,
                validate_responses: false,
                default_headers: Vec::new(),
            }),
        }
    }

    /// Consumes the client, returning the underlying service.
    pub fn into_inner(self) -> S {
        self.service
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Whether responses are validated against the API schema.
    pub fn validates_responses(&self) -> bool {
        self.config.validate_responses
    }

    /// Account operations.
    pub fn accounts(&mut self) -> Accounts<'_, S> {
        Accounts::new(self)
    }

    /// Organization operations.
    pub fn organizations(&mut self) -> Organizations<'_, S> {
        Organizations::new(self)
    }

    /// Representative operations.
    pub fn representatives(&mut self) -> Representatives<'_, S> {
        Representatives::new(self)
    }

    /// Linked bank account operations.
    pub fn linked_bank_accounts(&mut self) -> LinkedBankAccounts<'_, S> {
        LinkedBankAccounts::new(self)
    }

    /// Customer identity review operations.
    pub fn customer_reviews(&mut self) -> CustomerReviews<'_, S> {
        CustomerReviews::new(self)
    }

    /// Starts a request to the given path, with the client's default headers.
    pub(crate) fn request(&self, method: Method, path: &[&str]) -> Result<RequestBuilder, Error> {
        let builder = RequestBuilder::new(method, &self.config.base_url).path(path)?;

        Ok(self
            .config
            .default_headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str())))
    }

    /// Finishes the request with per-request options, sends it, and parses the response.
    pub(crate) async fn execute<M: Model>(
        &mut self,
        builder: RequestBuilder,
        options: &RequestOptions,
    ) -> Result<M, Error> {
        let request = builder.options(options).build();
        send_request(&mut self.service, request, self.config.validate_responses).await
    }
}

/// Builder for a [`Client`].
#[derive(Clone, Default)]
pub struct ClientBuilder {
    environment: Environment,
    base_url: Option<String>,
    api_key: Option<String>,
    validate_responses: bool,
    default_headers: HeaderList,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Avoid printing the key
        f.debug_struct("ClientBuilder")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "..."))
            .field("validate_responses", &self.validate_responses)
            .field("default_headers", &self.default_headers)
            .finish()
    }
}

impl ClientBuilder {
    /// Creates a builder for the sandbox environment, with no API key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from the `STRADDLE_API_KEY`, `STRADDLE_BASE_URL` and
    /// `STRADDLE_ENVIRONMENT` environment variables. Unset variables are ignored.
    pub fn from_env() -> Result<Self, Error> {
        let mut builder = Self::new();

        if let Ok(key) = env::var("STRADDLE_API_KEY") {
            builder = builder.api_key(key);
        }
        if let Ok(environment) = env::var("STRADDLE_ENVIRONMENT") {
            builder = builder.environment(environment.parse()?);
        }
        if let Ok(url) = env::var("STRADDLE_BASE_URL") {
            builder = builder.base_url(url);
        }

        Ok(builder)
    }

    /// Sets the environment. Ignored if [`ClientBuilder::base_url`] is set.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Overrides the base URL (e.g., for a proxy or a mock server).
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key, sent as a bearer token.
    pub fn api_key<T: Into<String>>(mut self, key: T) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Whether to validate every response against the API schema. Defaults to `false`.
    pub fn validate_responses(mut self, validate: bool) -> Self {
        self.validate_responses = validate;
        self
    }

    /// Adds a header to every request.
    pub fn default_header<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Builds a [`Client`] that sends requests through `service`.
    ///
    /// Fails if the base URL is invalid.
    pub fn build<S>(self, service: S) -> Result<Client, Error>
    where
        S: Service<ApiRequest, Response = ApiResponse> + Clone + Send + 'static,
        S::Future: Send + 'static,
        S::Error: Into<BoxError>,
    {
        let base_url = match &self.base_url {
            Some(url) => Url::parse(url)?,
            None => Url::parse(self.environment.base_url())?,
        };

        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_data(format!("invalid base URL: {}", base_url)));
        }

        if self.api_key.is_none() {
            tracing::warn!("building a Straddle client without an API key");
        }

        let service = BoxCloneService::new(
            ServiceBuilder::new()
                .map_err(Error::from_boxed)
                .option_layer(self.api_key.map(BearerAuthLayer::new))
                .service(service),
        );

        let mut default_headers = vec![("User-Agent".to_owned(), user_agent())];
        default_headers.extend(self.default_headers);

        Ok(Client {
            service,
            config: Arc::new(ClientConfig {
                base_url,
                validate_responses: self.validate_responses,
                default_headers,
            }),
        })
    }
}

crate::cfg_feature! {
    #![feature = "reqwest"]

    use crate::transport::ReqwestTransport;

    impl ClientBuilder {
        /// Builds a [`Client`] that sends requests with [`reqwest`].
        pub fn build_reqwest(self) -> Result<Client, Error> {
            self.build(ReqwestTransport::new())
        }
    }
}

fn user_agent() -> String {
    format!("straddle-rust/{}", env!("CARGO_PKG_VERSION"))
}
