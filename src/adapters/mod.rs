//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - OpenAI chat completions and a scriptable mock
//! - `catalog` - question catalog sources (file, in-memory)
//! - `classifier` - LLM-backed text classifier
//! - `composer` - acknowledgement composers (LLM, fixed phrase)
//! - `http` - axum REST API
//! - `registry` - in-memory session registry and its expiry sweeper
//! - `results` - result sinks (JSON files, in-memory)

pub mod ai;
pub mod catalog;
pub mod classifier;
pub mod composer;
pub mod http;
pub mod registry;
pub mod results;
