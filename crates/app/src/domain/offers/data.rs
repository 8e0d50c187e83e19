//! Offers Data

/// New Offer Data
///
/// Carries no identifier: the store assigns one on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOffer {
    /// Customer name
    pub customer: String,

    /// Age of the dog in years
    pub age: u16,

    /// Breed of the dog
    pub breed: String,

    /// Chosen tariff
    pub name: String,
}
