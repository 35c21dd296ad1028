use crate::client::Client;
use crate::data::{
    AccountCreateParams, AccountListParams, AccountOnboardParams, AccountPagedV1,
    AccountSimulateParams, AccountUpdateParams, AccountV1, ApiRequest, ApiResponse, Method,
    RequestOptions,
};
use crate::error::Error;
use crate::resources::path_param;

use tower::Service;

/// Operations on `/v1/accounts`.
#[derive(Debug)]
pub struct Accounts<'a, S> {
    client: &'a mut Client<S>,
}

impl<'a, S> Accounts<'a, S>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
{
    pub(crate) fn new(client: &'a mut Client<S>) -> Self {
        Self { client }
    }

    /// Creates an account. `POST /v1/accounts`
    pub async fn create(
        &mut self,
        params: &AccountCreateParams,
        options: &RequestOptions,
    ) -> Result<AccountV1, Error> {
        let req = self.client.request(Method::Post, &["v1", "accounts"])?.body(params);
        self.client.execute(req, options).await
    }

    /// Retrieves an account. `GET /v1/accounts/{account_id}`
    pub async fn retrieve(
        &mut self,
        account_id: &str,
        options: &RequestOptions,
    ) -> Result<AccountV1, Error> {
        let id = path_param("account_id", account_id)?;
        let req = self.client.request(Method::Get, &["v1", "accounts", id])?;
        self.client.execute(req, options).await
    }

    /// Replaces the details of an account. `PUT /v1/accounts/{account_id}`
    pub async fn update(
        &mut self,
        account_id: &str,
        params: &AccountUpdateParams,
        options: &RequestOptions,
    ) -> Result<AccountV1, Error> {
        let id = path_param("account_id", account_id)?;
        let req = self
            .client
            .request(Method::Put, &["v1", "accounts", id])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Lists accounts. `GET /v1/accounts`
    pub async fn list(
        &mut self,
        params: &AccountListParams,
        options: &RequestOptions,
    ) -> Result<AccountPagedV1, Error> {
        let req = self.client.request(Method::Get, &["v1", "accounts"])?.query(params);
        self.client.execute(req, options).await
    }

    /// Accepts the terms of service and starts onboarding.
    /// `POST /v1/accounts/{account_id}/onboard`
    pub async fn onboard(
        &mut self,
        account_id: &str,
        params: &AccountOnboardParams,
        options: &RequestOptions,
    ) -> Result<AccountV1, Error> {
        let id = path_param("account_id", account_id)?;
        let req = self
            .client
            .request(Method::Post, &["v1", "accounts", id, "onboard"])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Moves a sandbox account through onboarding.
    /// `POST /v1/accounts/{account_id}/simulate`
    pub async fn simulate(
        &mut self,
        account_id: &str,
        params: &AccountSimulateParams,
        options: &RequestOptions,
    ) -> Result<AccountV1, Error> {
        let id = path_param("account_id", account_id)?;
        let req = self
            .client
            .request(Method::Post, &["v1", "accounts", id, "simulate"])?
            .query(params);
        self.client.execute(req, options).await
    }
}
