use crate::client::Client;
use crate::data::{
    ApiRequest, ApiResponse, Method, OrganizationCreateParams, OrganizationListParams,
    OrganizationPagedV1, OrganizationV1, RequestOptions,
};
use crate::error::Error;
use crate::resources::path_param;

use tower::Service;

/// Operations on `/v1/organizations`.
#[derive(Debug)]
pub struct Organizations<'a, S> {
    client: &'a mut Client<S>,
}

impl<'a, S> Organizations<'a, S>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
{
    pub(crate) fn new(client: &'a mut Client<S>) -> Self {
        Self { client }
    }

    /// Creates an organization. `POST /v1/organizations`
    pub async fn create(
        &mut self,
        params: &OrganizationCreateParams,
        options: &RequestOptions,
    ) -> Result<OrganizationV1, Error> {
        let req = self
            .client
            .request(Method::Post, &["v1", "organizations"])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Lists organizations. `GET /v1/organizations`
    pub async fn list(
        &mut self,
        params: &OrganizationListParams,
        options: &RequestOptions,
    ) -> Result<OrganizationPagedV1, Error> {
        let req = self
            .client
            .request(Method::Get, &["v1", "organizations"])?
            .query(params);
        self.client.execute(req, options).await
    }

    /// Retrieves an organization. `GET /v1/organizations/{organization_id}`
    pub async fn retrieve(
        &mut self,
        organization_id: &str,
        options: &RequestOptions,
    ) -> Result<OrganizationV1, Error> {
        let id = path_param("organization_id", organization_id)?;
        let req = self.client.request(Method::Get, &["v1", "organizations", id])?;
        self.client.execute(req, options).await
    }
}
