use tracing::debug;

use super::domain::{Property, PropertyCategory};

/// Read-only source of auction records so callers can swap the built-in
/// catalog for an imported one or a test fixture.
pub trait PropertyCatalog: Send + Sync {
    fn properties(&self) -> &[Property];

    /// All records in catalog order, optionally restricted to one category.
    /// An unmatched filter yields an empty list.
    fn list_properties(&self, category: Option<PropertyCategory>) -> Vec<&Property> {
        self.properties()
            .iter()
            .filter(|property| category.map_or(true, |wanted| property.category == wanted))
            .collect()
    }

    /// Identifier lookup, ignoring ASCII case.
    fn find_property(&self, id: &str) -> Result<&Property, CatalogError> {
        let needle = id.trim();
        let found = self
            .properties()
            .iter()
            .find(|property| property.id.eq_ignore_ascii_case(needle));

        debug!(id = needle, found = found.is_some(), "catalog lookup");
        found.ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no property with ID '{id}' exists in the catalog")]
    NotFound { id: String },
}
