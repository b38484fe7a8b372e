//! Product record

use serde::Deserialize;
use serde::Serialize;

/// One product from the catalog.
///
/// Mirrors the JSON records served by the Fake Store API. Records are never
/// mutated after loading; reordering the grid only moves them between slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Price in the catalog's currency.
    pub price: f64,
    /// Long-form description.
    pub description: String,
    /// Category label (e.g. "electronics").
    pub category: String,
    /// Remote image URL.
    pub image: String,
}
