//! Extension traits

mod depot;
mod json_body;

pub(crate) use depot::DepotExt as _;
pub(crate) use json_body::JsonBodyExt as _;
