//! Create Offer Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use dogop_app::{context::AppContext, offers::data::NewOffer};

use crate::{
    extensions::*,
    offers::{OfferResponse, errors::into_problem},
    problem::Problem,
};

/// Create Offer Request
///
/// Any `id` sent by the client is ignored; the server assigns one.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOfferRequest {
    pub customer: String,
    pub age: u16,
    pub breed: String,
    pub name: String,
}

impl TryFrom<CreateOfferRequest> for NewOffer {
    type Error = Problem;

    fn try_from(request: CreateOfferRequest) -> Result<Self, Self::Error> {
        if request.customer.trim().is_empty() {
            return Err(Problem::bad_request("invalid offer").with_detail("customer is required"));
        }

        Ok(NewOffer {
            customer: request.customer,
            age: request.age,
            breed: request.breed,
            name: request.name,
        })
    }
}

/// Create Offer Handler
#[endpoint(tags("offers"), summary = "Create Offer")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<OfferResponse>, Problem> {
    let offer = NewOffer::try_from(req.json_body_or_400::<CreateOfferRequest>().await?)?;

    let app = depot.obtain_or_500::<Arc<AppContext>>()?;

    let created = app
        .offers
        .insert_offer(offer)
        .await
        .map_err(into_problem)?;

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dogop_app::offers::{MockOffersService, OffersServiceError, records::OfferUuid};

    use crate::test_helpers::{make_offer, offers_service, strict_offers_mock};

    use super::*;

    const URL: &str = "http://example.com/api/offer";

    fn make_service(offers: MockOffersService) -> Service {
        offers_service(offers, Router::with_path("api/offer").post(handler))
    }

    fn alice() -> NewOffer {
        NewOffer {
            customer: "Alice".to_string(),
            age: 2,
            breed: "Poodle".to_string(),
            name: "Basic".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_offer_returns_stored_offer() -> TestResult {
        let uuid = OfferUuid::new();
        let offer = make_offer(uuid);

        let mut offers = MockOffersService::new();

        offers
            .expect_insert_offer()
            .once()
            .withf(|new| *new == alice())
            .return_once(move |_| Ok(offer));

        offers.expect_find_offer().never();

        let mut res = TestClient::post(URL)
            .json(&json!({ "customer": "Alice", "age": 2, "breed": "Poodle", "name": "Basic" }))
            .send(&make_service(offers))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "id": uuid.to_string(),
                "customer": "Alice",
                "age": 2,
                "breed": "Poodle",
                "name": "Basic",
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_ignores_client_supplied_id() -> TestResult {
        let assigned = OfferUuid::new();
        let offer = make_offer(assigned);

        let mut offers = MockOffersService::new();

        offers
            .expect_insert_offer()
            .once()
            .withf(|new| *new == alice())
            .return_once(move |_| Ok(offer));

        offers.expect_find_offer().never();

        let mut res = TestClient::post(URL)
            .json(&json!({
                "id": "00000000-0000-0000-0000-000000000001",
                "customer": "Alice",
                "age": 2,
                "breed": "Poodle",
                "name": "Basic",
            }))
            .send(&make_service(offers))
            .await;

        let body: OfferResponse = res.take_json().await?;

        assert_eq!(body.id, assigned.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_accepts_body_without_content_type() -> TestResult {
        let offer = make_offer(OfferUuid::new());

        let mut offers = MockOffersService::new();

        offers
            .expect_insert_offer()
            .once()
            .return_once(move |_| Ok(offer));

        offers.expect_find_offer().never();

        let res = TestClient::post(URL)
            .text(r#"{"customer":"Alice","age":2,"breed":"Poodle","name":"Basic"}"#)
            .send(&make_service(offers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_malformed_json_returns_400_without_storing() -> TestResult {
        for body in [
            "not json",
            r#"{"customer":"Alice","age":2,"#,
            "",
            r#"{"customer":"Alice","age":-1,"breed":"Poodle","name":"Basic"}"#,
            r#"{"customer":"Alice","age":"two","breed":"Poodle","name":"Basic"}"#,
            r#"{"age":2,"breed":"Poodle","name":"Basic"}"#,
        ] {
            let mut res = TestClient::post(URL)
                .raw_json(body)
                .send(&make_service(strict_offers_mock()))
                .await;

            let problem: Problem = serde_json::from_str(&res.take_string().await?)?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "body: {body}");
            assert_eq!(problem.title, "invalid request body");
            assert_eq!(problem.status, 400);
            assert!(problem.detail.is_some(), "decode error should be described");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_blank_customer_returns_400() -> TestResult {
        let mut res = TestClient::post(URL)
            .json(&json!({ "customer": "   ", "age": 2, "breed": "Poodle", "name": "Basic" }))
            .send(&make_service(strict_offers_mock()))
            .await;

        let problem: Problem = serde_json::from_str(&res.take_string().await?)?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(problem.title, "invalid offer");
        assert_eq!(problem.detail.as_deref(), Some("customer is required"));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_offer_storage_error_returns_500() -> TestResult {
        let mut offers = MockOffersService::new();

        offers
            .expect_insert_offer()
            .once()
            .return_once(|_| Err(OffersServiceError::Sql(sqlx::Error::PoolTimedOut)));

        offers.expect_find_offer().never();

        let mut res = TestClient::post(URL)
            .json(&json!({ "customer": "Alice", "age": 2, "breed": "Poodle", "name": "Basic" }))
            .send(&make_service(offers))
            .await;

        let problem: Problem = serde_json::from_str(&res.take_string().await?)?;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(problem.title, "storage error");
        assert_eq!(problem.status, 500);

        Ok(())
    }
}
