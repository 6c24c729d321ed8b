//! Session registry adapters.
//!
//! - `InMemorySessionRegistry` - process-local registry with idle expiry
//! - `SessionSweeper` - background task that evicts idle sessions

mod in_memory_session_registry;
mod session_sweeper;

pub use in_memory_session_registry::{InMemorySessionRegistry, RegistryConfig};
pub use session_sweeper::{spawn_sweeper, SessionSweeper};
