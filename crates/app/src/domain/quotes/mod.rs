//! Quotes

pub mod models;
mod pricing;

pub use pricing::quote;
