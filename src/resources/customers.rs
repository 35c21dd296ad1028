use crate::client::Client;
use crate::data::{
    ApiRequest, ApiResponse, CustomerReviewDecisionParams, CustomerReviewV1, CustomerV1, Method,
    RequestOptions,
};
use crate::error::Error;
use crate::resources::path_param;

use tower::Service;

/// Operations on `/v1/customers/{customer_id}/review`.
#[derive(Debug)]
pub struct CustomerReviews<'a, S> {
    client: &'a mut Client<S>,
}

impl<'a, S> CustomerReviews<'a, S>
where
    S: Service<ApiRequest, Response = ApiResponse>,
    Error: From<S::Error>,
{
    pub(crate) fn new(client: &'a mut Client<S>) -> Self {
        Self { client }
    }

    /// Retrieves the identity review of a customer. `GET /v1/customers/{customer_id}/review`
    pub async fn get(
        &mut self,
        customer_id: &str,
        options: &RequestOptions,
    ) -> Result<CustomerReviewV1, Error> {
        let id = path_param("customer_id", customer_id)?;
        let req = self
            .client
            .request(Method::Get, &["v1", "customers", id, "review"])?;
        self.client.execute(req, options).await
    }

    /// Approves or rejects a customer under manual review.
    /// `PATCH /v1/customers/{customer_id}/review`
    pub async fn decision(
        &mut self,
        customer_id: &str,
        params: &CustomerReviewDecisionParams,
        options: &RequestOptions,
    ) -> Result<CustomerV1, Error> {
        let id = path_param("customer_id", customer_id)?;
        let req = self
            .client
            .request(Method::Patch, &["v1", "customers", id, "review"])?
            .body(params);
        self.client.execute(req, options).await
    }

    /// Re-runs identity verification. `PUT /v1/customers/{customer_id}/refresh_review`
    pub async fn refresh_review(
        &mut self,
        customer_id: &str,
        options: &RequestOptions,
    ) -> Result<CustomerV1, Error> {
        let id = path_param("customer_id", customer_id)?;
        let req = self
            .client
            .request(Method::Put, &["v1", "customers", id, "refresh_review"])?;
        self.client.execute(req, options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::data::*;
    use crate::error::ErrorKind;
    use crate::resources::test_util::{envelope, MockApi};
    use serde_json::json;

    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    fn customer(status: &str) -> serde_json::Value {
        json!({
            "id": "cus_1",
            "created_at": "2024-05-01T12:00:00Z",
            "email": "ron@example.com",
            "name": "Ron Swanson",
            "phone": "+15555550111",
            "status": status,
            "type": "individual",
            "updated_at": "2024-05-01T12:00:01Z"
        })
    }

    #[tokio::test]
    async fn get_review() -> Result {
        let api = MockApi::new(envelope(json!({
            "customer_details": customer("review"),
            "identity_details": null
        })));
        let mut client = api.client();

        let review = client
            .customer_reviews()
            .get("cus_1", &RequestOptions::new())
            .await?;
        let data = review.data().ok_or("missing data")?;
        assert!(data.is_null("identity_details"));

        let req = api.last();
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url.path(), "/v1/customers/cus_1/review");

        Ok(())
    }

    #[tokio::test]
    async fn decision_and_refresh() -> Result {
        let api = MockApi::new(envelope(customer("verified")));
        let mut client = api.client();
        let opts = RequestOptions::new();

        let mut params = CustomerReviewDecisionParams::new();
        params.set_status(ReviewDecisionStatus::Verified);

        let resp = client
            .customer_reviews()
            .decision("cus_1", &params, &opts)
            .await?;
        assert_eq!(
            resp.data().and_then(|c| c.status()).and_then(|s| s.known()),
            Some(&CustomerStatus::Verified)
        );

        let req = api.last();
        assert_eq!(req.method, Method::Patch);
        assert_eq!(req.url.path(), "/v1/customers/cus_1/review");
        assert_eq!(req.body, Some(json!({ "status": "verified" })));

        client.customer_reviews().refresh_review("cus_1", &opts).await?;

        let req = api.last();
        assert_eq!(req.method, Method::Put);
        assert_eq!(req.url.path(), "/v1/customers/cus_1/refresh_review");
        assert_eq!(req.body, None);

        let err = client
            .customer_reviews()
            .refresh_review("", &opts)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(api.count(), 2);

        Ok(())
    }
}
