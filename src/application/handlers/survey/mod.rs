//! Survey command and query handlers.

mod finalize_result;
mod list_catalog;
mod reload_catalog;
mod start_session;
mod submit_utterance;

pub use finalize_result::ResultFinalizer;
pub use list_catalog::ListCatalogHandler;
pub use reload_catalog::{ReloadCatalogHandler, ReloadCatalogResult};
pub use start_session::{StartSessionCommand, StartSessionHandler};
pub use submit_utterance::{SubmitUtteranceCommand, SubmitUtteranceHandler};
