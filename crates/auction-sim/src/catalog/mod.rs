//! Read-only auction catalog: property records and the liens recorded against them.

pub mod domain;
mod importer;
mod memory;
mod repository;

pub use domain::{Lien, Property, PropertyCategory, UnknownCategory};
pub use importer::{CatalogImportError, CsvCatalogImporter};
pub use memory::InMemoryCatalog;
pub use repository::{CatalogError, PropertyCatalog};
