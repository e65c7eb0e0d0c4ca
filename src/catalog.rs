//! Product Catalog
//!
//! Read-only product sources backing the API, plus category summaries.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::Product;

/// Anything that can hand out the current product list.
pub trait ProductSource: Send + Sync {
    fn products(&self) -> Result<Vec<Product>>;
}

// == In-memory Catalog ==
/// Fixed product list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductSource for InMemoryCatalog {
    fn products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

// == JSON File Catalog ==
/// Catalog stored as a JSON array of products.
///
/// The file is read and parsed on every call, so edits are picked up
/// without a restart once cached responses expire.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProductSource for JsonFileCatalog {
    fn products(&self) -> Result<Vec<Product>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AppError::Catalog(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let products: Vec<Product> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Catalog(format!("cannot parse {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), count = products.len(), "Loaded catalog");
        Ok(products)
    }
}

// == Category Summary ==
/// One category with its subcategories and product count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub subcategories: Vec<String>,
    pub product_count: usize,
}

/// Groups products by category, sorted by name.
///
/// Products with no (or a blank) category are left out.
pub fn summarize_categories(products: &[Product]) -> Vec<CategorySummary> {
    let mut groups: BTreeMap<&str, (BTreeSet<&str>, usize)> = BTreeMap::new();

    for product in products {
        let category = product.category_str().trim();
        if category.is_empty() {
            continue;
        }

        let (subcategories, count) = groups.entry(category).or_default();
        *count += 1;

        let subcategory = product.subcategory_str().trim();
        if !subcategory.is_empty() {
            subcategories.insert(subcategory);
        }
    }

    groups
        .into_iter()
        .map(|(name, (subcategories, product_count))| CategorySummary {
            name: name.to_string(),
            subcategories: subcategories.into_iter().map(str::to_string).collect(),
            product_count,
        })
        .collect()
}
