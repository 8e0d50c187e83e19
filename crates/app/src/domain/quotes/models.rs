//! Quote Models

/// Dog profile a quote is requested for.
///
/// Quoting never validates the profile, so `age` is echoed as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogProfile {
    /// Age of the dog in years
    pub age: i64,

    /// Breed of the dog
    pub breed: String,
}

/// Named price point.
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    /// Tariff name shown to the customer
    pub name: String,

    /// Price of the tariff
    pub rate: f64,
}

/// Priced quote for a [`DogProfile`]. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Age the quote was priced for
    pub age: i64,

    /// Breed the quote was priced for
    pub breed: String,

    /// Available tariffs
    pub tariffs: Vec<Tariff>,
}
