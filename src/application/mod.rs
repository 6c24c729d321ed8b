//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod active_catalog;
pub mod handlers;

pub use active_catalog::ActiveCatalog;
pub use handlers::{
    ListCatalogHandler, ReloadCatalogHandler, ReloadCatalogResult, ResultFinalizer,
    StartSessionCommand, StartSessionHandler, SubmitUtteranceCommand, SubmitUtteranceHandler,
};
