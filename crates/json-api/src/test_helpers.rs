//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use dogop_app::{
    context::AppContext,
    health::MockHealthService,
    offers::{
        MockOffersService,
        records::{OfferRecord, OfferUuid},
    },
};

pub(crate) fn make_offer(uuid: OfferUuid) -> OfferRecord {
    OfferRecord {
        uuid,
        customer: "Alice".to_string(),
        age: 2,
        breed: "Poodle".to_string(),
        name: "Basic".to_string(),
    }
}

/// An offers mock that fails the test on any call.
pub(crate) fn strict_offers_mock() -> MockOffersService {
    let mut offers = MockOffersService::new();

    offers.expect_insert_offer().never();
    offers.expect_find_offer().never();

    offers
}

fn strict_health_mock() -> MockHealthService {
    let mut health = MockHealthService::new();

    health.expect_check().never();

    health
}

fn app_context(offers: MockOffersService, health: MockHealthService) -> Arc<AppContext> {
    Arc::new(AppContext {
        offers: Arc::new(offers),
        health: Arc::new(health),
    })
}

pub(crate) fn offers_service(offers: MockOffersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app_context(offers, strict_health_mock())))
            .push(route),
    )
}

pub(crate) fn health_service(health: MockHealthService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(app_context(strict_offers_mock(), health)))
            .push(route),
    )
}
