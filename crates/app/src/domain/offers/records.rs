//! Offer Records

use crate::uuids::TypedUuid;

/// Offer UUID
pub type OfferUuid = TypedUuid<OfferRecord>;

/// Offer Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferRecord {
    /// Store-assigned identifier
    pub uuid: OfferUuid,

    /// Customer name
    pub customer: String,

    /// Age of the dog in years
    pub age: u16,

    /// Breed of the dog
    pub breed: String,

    /// Chosen tariff
    pub name: String,
}
