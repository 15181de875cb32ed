use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A single catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Product {
    /// Unique identifier, assigned by the server on create.
    pub id: ProductId,
    /// Display name (e.g. `"Laptop"`).
    pub name: String,
    /// Short human-readable description.
    pub description: String,
    /// Unit price. No range constraint is enforced.
    pub price: f64,
    /// Grouping key; matched case-insensitively when filtering, used
    /// verbatim when grouping.
    pub category: String,
    /// Whether the product is currently available.
    pub in_stock: bool,
}

impl Product {
    /// Builds a record from a validated draft under the given id.
    #[must_use]
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            in_stock: draft.in_stock,
        }
    }

    /// Overwrites every business field from the draft, keeping the id.
    ///
    /// This is the update endpoint's merge: validation guarantees the draft
    /// is complete, so the result is a full replacement of everything but
    /// `id`.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
        self.category = draft.category;
        self.in_stock = draft.in_stock;
    }
}

/// The create/update payload: every business field, no id.
///
/// Handlers only deserialize a draft after the validation stage has accepted
/// the raw body, so all five fields are present. Any `id` a client sends in
/// the body is dropped here by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}
