//! Catalog data retrieval split into submodules.

mod catalog;
mod error;

pub use catalog::{CatalogSource, parse_envelope};
pub use error::CatalogError;
