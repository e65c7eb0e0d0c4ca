//! Product record
//!
//! Catalog entries as stored in the catalog file and returned by the API.

use serde::{Deserialize, Serialize};

/// A single catalog product.
///
/// Every descriptive field is optional; readers treat a missing field as
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_top_product: bool,
    #[serde(default)]
    pub is_most_selling: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Convenience constructor used by fixtures and tests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description_str(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn subcategory_str(&self) -> &str {
        self.subcategory.as_deref().unwrap_or_default()
    }
}
