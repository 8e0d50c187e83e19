//! Create Quote Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use dogop_app::quotes::{
    models::{DogProfile, Quote, Tariff},
    quote,
};

use crate::{extensions::*, problem::Problem};

/// Quote Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteRequest {
    /// Age of the dog in years
    pub age: i64,

    /// Breed of the dog
    pub breed: String,
}

impl From<QuoteRequest> for DogProfile {
    fn from(request: QuoteRequest) -> Self {
        DogProfile {
            age: request.age,
            breed: request.breed,
        }
    }
}

/// Tariff Response
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct TariffResponse {
    pub name: String,
    pub rate: f64,
}

impl From<Tariff> for TariffResponse {
    fn from(tariff: Tariff) -> Self {
        TariffResponse {
            name: tariff.name,
            rate: tariff.rate,
        }
    }
}

/// Quote Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteResponse {
    pub age: i64,
    pub breed: String,
    pub tariffs: Vec<TariffResponse>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        QuoteResponse {
            age: quote.age,
            breed: quote.breed,
            tariffs: quote.tariffs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Create Quote Handler
///
/// Prices a dog profile. Nothing is stored.
#[endpoint(tags("quotes"), summary = "Create Quote")]
pub(crate) async fn handler(req: &mut Request) -> Result<Json<QuoteResponse>, Problem> {
    let profile = DogProfile::from(req.json_body_or_400::<QuoteRequest>().await?);

    Ok(Json(quote(profile).into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::with_path("api/quote").post(handler))
    }

    #[tokio::test]
    async fn test_quote_returns_basic_tariff() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/quote")
            .json(&json!({ "age": 3, "breed": "Labrador" }))
            .send(&make_service())
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body,
            json!({
                "age": 3,
                "breed": "Labrador",
                "tariffs": [{ "name": "Dog OP _ Basic", "rate": 12.4 }],
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_quote_ignores_client_supplied_tariffs() -> TestResult {
        let mut res = TestClient::post("http://example.com/api/quote")
            .json(&json!({
                "age": 3,
                "breed": "Labrador",
                "tariffs": [{ "name": "Free", "rate": 0.0 }],
            }))
            .send(&make_service())
            .await;

        let body: QuoteResponse = res.take_json().await?;

        assert_eq!(
            body.tariffs,
            vec![TariffResponse {
                name: "Dog OP _ Basic".to_string(),
                rate: 12.4,
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_quote_malformed_json_returns_400() -> TestResult {
        for body in ["<quote/>", r#"{"age":3,"breed":"#, r#"{"age":"three","breed":"Labrador"}"#] {
            let mut res = TestClient::post("http://example.com/api/quote")
                .raw_json(body)
                .send(&make_service())
                .await;

            let problem: Problem = serde_json::from_str(&res.take_string().await?)?;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "body: {body}");
            assert_eq!(problem.title, "invalid request body");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_quote_echoes_any_integer_age() -> TestResult {
        for age in [-1_i64, 0, 70_000] {
            let mut res = TestClient::post("http://example.com/api/quote")
                .json(&json!({ "age": age, "breed": "Mixed" }))
                .send(&make_service())
                .await;

            let body: QuoteResponse = res.take_json().await?;

            assert_eq!(res.status_code, Some(StatusCode::OK), "age: {age}");
            assert_eq!(body.age, age);
        }

        Ok(())
    }
}
