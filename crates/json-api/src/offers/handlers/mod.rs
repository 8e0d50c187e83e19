//! Offer Handlers

pub(crate) mod create;
pub(crate) mod get;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dogop_app::offers::records::OfferRecord;

/// Offer Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OfferResponse {
    /// System-assigned offer identifier
    pub id: Uuid,

    /// Customer name
    pub customer: String,

    /// Age of the dog in years
    pub age: u16,

    /// Breed of the dog
    pub breed: String,

    /// Tariff chosen for the offer
    pub name: String,
}

impl From<OfferRecord> for OfferResponse {
    fn from(offer: OfferRecord) -> Self {
        OfferResponse {
            id: offer.uuid.into(),
            customer: offer.customer,
            age: offer.age,
            breed: offer.breed,
            name: offer.name,
        }
    }
}
