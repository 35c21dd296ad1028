use crate::client::Client;
use crate::data::{
    ApiRequest, ApiResponse, Method, RepresentativeCreateParams, RepresentativeListParams,
    RepresentativePagedV1, RepresentativeUpdateParams, RepresentativeV1, RequestOptions,
};
use crate::error::Error;
use crate::resources::path_param;

use tower::Service;

/// Operations on `/v1/representatives`.
#[derive(Debug)]
pub struct Representatives<'a, S> {
    client: &'a mut Client<S>,
}

impl<'a, S> Representatives<'a, S>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
{
    pub(crate) fn new(client: &'a mut Client<S>) -> Self {
        Self { client }
    }

    /// Creates a representative. `POST /v1/representatives`
    pub async fn create(
        &mut self,
        params: &RepresentativeCreateParams,
        options: &RequestOptions,
    ) -> Result<RepresentativeV1, Error> {
        let req = self
            .client
            .request(Method::Post, &["v1", "representatives"])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Retrieves a representative. `GET /v1/representatives/{representative_id}`
    pub async fn retrieve(
        &mut self,
        representative_id: &str,
        options: &RequestOptions,
    ) -> Result<RepresentativeV1, Error> {
        let id = path_param("representative_id", representative_id)?;
        let req = self
            .client
            .request(Method::Get, &["v1", "representatives", id])?;
        self.client.execute(req, options).await
    }

    /// Replaces the details of a representative. `PUT /v1/representatives/{representative_id}`
    pub async fn update(
        &mut self,
        representative_id: &str,
        params: &RepresentativeUpdateParams,
        options: &RequestOptions,
    ) -> Result<RepresentativeV1, Error> {
        let id = path_param("representative_id", representative_id)?;
        let req = self
            .client
            .request(Method::Put, &["v1", "representatives", id])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Lists representatives. `GET /v1/representatives`
    pub async fn list(
        &mut self,
        params: &RepresentativeListParams,
        options: &RequestOptions,
    ) -> Result<RepresentativePagedV1, Error> {
        let req = self
            .client
            .request(Method::Get, &["v1", "representatives"])?
            .query(params);
        self.client.execute(req, options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::data::*;
    use crate::resources::test_util::{envelope, paged, MockApi};
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    fn representative() -> serde_json::Value {
        json!({
            "id": "rep_1",
            "account_id": "acct_1",
            "created_at": "2024-05-01T12:00:00Z",
            "dob": "1985-07-14",
            "email": "ada@acme.example",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "mobile_number": "+15555550100",
            "name": "Ada Lovelace",
            "relationship": { "control": true, "owner": false, "primary": true },
            "ssn_last4": "1234",
            "status": "created",
            "status_detail": { "message": "ok", "reason": "unverified", "source": "watchtower" },
            "updated_at": "2024-05-01T12:00:00Z"
        })
    }

    fn relationship() -> Relationship {
        let mut relationship = Relationship::new();
        relationship.set_control(true);
        relationship.set_owner(false);
        relationship.set_primary(true);
        relationship
    }

    #[tokio::test]
    async fn create_and_update() -> Result {
        let api = MockApi::new(envelope(representative()));
        let mut client = api.client();
        let opts = RequestOptions::new();
        let dob = chrono::NaiveDate::from_ymd_opt(1985, 7, 14).ok_or("invalid date")?;

        let mut params = RepresentativeCreateParams::new();
        params.set_account_id("acct_1");
        params.set_dob(dob);
        params.set_email("ada@acme.example");
        params.set_first_name("Ada");
        params.set_last_name("Lovelace");
        params.set_mobile_number("+15555550100");
        params.set_relationship(relationship());
        params.set_ssn_last4("1234");
        params.validate()?;

        let rep = client.representatives().create(&params, &opts).await?;
        assert_eq!(rep.data().and_then(|r| r.dob()), Some(&dob));

        let req = api.last();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url.path(), "/v1/representatives");
        assert_eq!(
            req.body.as_ref().and_then(|b| b.get("dob")),
            Some(&json!("1985-07-14"))
        );

        let mut update = RepresentativeUpdateParams::new();
        update.set_dob(dob);
        update.set_email("ada@newmail.example");
        update.set_first_name("Ada");
        update.set_last_name("Lovelace");
        update.set_mobile_number("+15555550100");
        update.set_relationship(relationship());
        update.set_ssn_last4("1234");
        update.set_phone_null();

        client.representatives().update("rep_1", &update, &opts).await?;

        let req = api.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url.path(), "/v1/representatives/rep_1");
        assert_eq!(
            req.body.as_ref().and_then(|b| b.get("phone")),
            Some(&serde_json::Value::Null)
        );

        Ok(())
    }

    #[tokio::test]
    async fn retrieve_and_list() -> Result {
        let api = MockApi::new(envelope(representative()));
        let mut client = api.client();

        client
            .representatives()
            .retrieve("rep_1", &RequestOptions::new())
            .await?;
        assert_eq!(api.last().url.path(), "/v1/representatives/rep_1");

        let api = MockApi::new(paged(vec![representative()]));
        let mut client = api.client();

        let mut params = RepresentativeListParams::new();
        params.set_account_id("acct_1");
        params.set_level(ListLevel::Platform);
        client
            .representatives()
            .list(&params, &RequestOptions::new())
            .await?;

        assert_eq!(
            api.last().url.as_str(),
            "https://sandbox.straddle.io/v1/representatives?account_id=acct_1&level=platform"
        );

        Ok(())
    }
}
