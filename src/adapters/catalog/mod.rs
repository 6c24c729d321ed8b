//! Catalog source adapters.
//!
//! - `FileCatalogSource` - JSON (or YAML) catalog file on disk
//! - `InMemoryCatalogSource` - catalog held in memory, swappable in tests

mod file_catalog_source;
mod in_memory_catalog_source;

pub use file_catalog_source::FileCatalogSource;
pub use in_memory_catalog_source::InMemoryCatalogSource;
