//! Quote pricing.

use crate::domain::quotes::models::{DogProfile, Quote, Tariff};

const BASIC_TARIFF_NAME: &str = "Dog OP _ Basic";
const BASIC_TARIFF_RATE: f64 = 12.4;

/// Price a dog profile.
///
/// Every profile currently gets the single basic tariff at a flat rate.
#[must_use]
pub fn quote(profile: DogProfile) -> Quote {
    Quote {
        age: profile.age,
        breed: profile.breed,
        tariffs: vec![Tariff {
            name: BASIC_TARIFF_NAME.to_string(),
            rate: BASIC_TARIFF_RATE,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_echoes_profile() {
        let quote = quote(DogProfile {
            age: 3,
            breed: "Labrador".to_string(),
        });

        assert_eq!(quote.age, 3);
        assert_eq!(quote.breed, "Labrador");
    }

    #[test]
    fn quote_attaches_basic_tariff() {
        let quote = quote(DogProfile {
            age: 0,
            breed: String::new(),
        });

        assert_eq!(
            quote.tariffs,
            vec![Tariff {
                name: "Dog OP _ Basic".to_string(),
                rate: 12.4,
            }]
        );
    }

    #[test]
    fn quote_echoes_negative_age() {
        let quote = quote(DogProfile {
            age: -1,
            breed: "Mixed".to_string(),
        });

        assert_eq!(quote.age, -1);
    }
}
