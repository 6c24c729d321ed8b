//! Acknowledgement composer adapters.
//!
//! - `LlmAcknowledgementComposer` - short friendly reply from a language model
//! - `StaticAcknowledgementComposer` - fixed phrase, no model calls

mod llm_composer;
mod static_composer;

pub use llm_composer::LlmAcknowledgementComposer;
pub use static_composer::StaticAcknowledgementComposer;
