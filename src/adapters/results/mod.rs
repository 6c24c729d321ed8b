//! Result sink adapters.
//!
//! - `JsonFileResultSink` - one pretty-printed JSON file per finalized session
//! - `InMemoryResultSink` - keeps results in memory (tests, development)

mod in_memory_result_sink;
mod json_file_result_sink;

pub use in_memory_result_sink::InMemoryResultSink;
pub use json_file_result_sink::JsonFileResultSink;
