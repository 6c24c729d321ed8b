//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, error codes)
//! - `catalog` - Question definitions and the validated question catalog
//! - `survey` - Survey session state machine, answers, turns and results

pub mod catalog;
pub mod foundation;
pub mod survey;
