//! HTTP adapter for operator endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::ReloadCatalogResponse;
pub use handlers::AdminHandlers;
pub use routes::admin_routes;
