//! DogOp Domain Concerns

pub mod health;
pub mod offers;
pub mod quotes;
