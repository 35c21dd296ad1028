use crate::client::Client;
use crate::data::{
    ApiRequest, ApiResponse, LinkedBankAccountCreateParams, LinkedBankAccountListParams,
    LinkedBankAccountPagedV1, LinkedBankAccountUpdateParams, LinkedBankAccountV1, Method,
    RequestOptions,
};
use crate::error::Error;
use crate::resources::path_param;

use tower::Service;

/// Operations on `/v1/linked_bank_accounts`.
#[derive(Debug)]
pub struct LinkedBankAccounts<'a, S> {
    client: &'a mut Client<S>,
}

impl<'a, S> LinkedBankAccounts<'a, S>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
{
    pub(crate) fn new(client: &'a mut Client<S>) -> Self {
        Self { client }
    }

    /// Links a bank account. `POST /v1/linked_bank_accounts`
    pub async fn create(
        &mut self,
        params: &LinkedBankAccountCreateParams,
        options: &RequestOptions,
    ) -> Result<LinkedBankAccountV1, Error> {
        let req = self
            .client
            .request(Method::Post, &["v1", "linked_bank_accounts"])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Retrieves a linked bank account. `GET /v1/linked_bank_accounts/{linked_bank_account_id}`
    pub async fn retrieve(
        &mut self,
        linked_bank_account_id: &str,
        options: &RequestOptions,
    ) -> Result<LinkedBankAccountV1, Error> {
        let id = path_param("linked_bank_account_id", linked_bank_account_id)?;
        let req = self
            .client
            .request(Method::Get, &["v1", "linked_bank_accounts", id])?;
        self.client.execute(req, options).await
    }

    /// Replaces the bank details of a linked bank account.
    /// `PUT /v1/linked_bank_accounts/{linked_bank_account_id}`
    pub async fn update(
        &mut self,
        linked_bank_account_id: &str,
        params: &LinkedBankAccountUpdateParams,
        options: &RequestOptions,
    ) -> Result<LinkedBankAccountV1, Error> {
        let id = path_param("linked_bank_account_id", linked_bank_account_id)?;
        let req = self
            .client
            .request(Method::Put, &["v1", "linked_bank_accounts", id])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Lists linked bank accounts. `GET /v1/linked_bank_accounts`
    pub async fn list(
        &mut self,
        params: &LinkedBankAccountListParams,
        options: &RequestOptions,
    ) -> Result<LinkedBankAccountPagedV1, Error> {
        let req = self
            .client
            .request(Method::Get, &["v1", "linked_bank_accounts"])?
            .query(params);
        self.client.execute(req, options).await
    }

    /// Cancels a linked bank account.
    /// `PATCH /v1/linked_bank_accounts/{linked_bank_account_id}/cancel`
    pub async fn cancel(
        &mut self,
        linked_bank_account_id: &str,
        options: &RequestOptions,
    ) -> Result<LinkedBankAccountV1, Error> {
        let id = path_param("linked_bank_account_id", linked_bank_account_id)?;
        let req = self
            .client
            .request(Method::Patch, &["v1", "linked_bank_accounts", id, "cancel"])?;
        self.client.execute(req, options).await
    }
}
