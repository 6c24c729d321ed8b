//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod survey;

pub use survey::{
    ListCatalogHandler, ReloadCatalogHandler, ReloadCatalogResult, ResultFinalizer,
    StartSessionCommand, StartSessionHandler, SubmitUtteranceCommand, SubmitUtteranceHandler,
};
