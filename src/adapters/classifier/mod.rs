//! Text classifier adapters.
//!
//! - `LlmTextClassifier` - asks an `AIProvider` to pick option codes

mod llm_classifier;

pub use llm_classifier::LlmTextClassifier;
