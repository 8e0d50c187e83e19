//! Get Offer Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use dogop_app::{context::AppContext, offers::records::OfferUuid};

use crate::{
    extensions::*,
    offers::{OfferResponse, errors::into_problem},
    problem::Problem,
};

/// Get Offer Handler
///
/// Returns a previously created offer.
#[endpoint(tags("offers"), summary = "Get Offer")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<OfferResponse>, Problem> {
    let offer = id.into_inner().parse::<OfferUuid>().map_err(|source| {
        Problem::bad_request("invalid offer id").with_detail(source.to_string())
    })?;

    let app = depot.obtain_or_500::<Arc<AppContext>>()?;

    let found = app
        .offers
        .find_offer(offer)
        .await
        .map_err(into_problem)?;

    Ok(Json(found.into()))
}
