//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the survey domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - chat completion backend (OpenAI, mock)
//! - `TextClassifier` - free text to option codes
//! - `AcknowledgementComposer` - reply placed before the next question
//! - `CatalogSource` - where questions are loaded from
//! - `ResultSink` - where finalized results go
//! - `SessionRegistry` - owner of live sessions

mod acknowledgement_composer;
mod ai_provider;
mod catalog_source;
mod result_sink;
mod session_registry;
mod text_classifier;

pub use acknowledgement_composer::AcknowledgementComposer;
pub use ai_provider::{
    AIError, AIProvider, CompletionPurpose, CompletionRequest, CompletionResponse, FinishReason,
    Message, MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use catalog_source::CatalogSource;
pub use result_sink::{ResultLocation, ResultSink, ResultSinkError};
pub use session_registry::{Registration, SessionHandle, SessionRegistry};
pub use text_classifier::TextClassifier;
