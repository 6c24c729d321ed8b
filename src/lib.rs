//! Survey Chat - Conversational Survey Service
//!
//! This crate runs a multi-question survey through free-text conversation:
//! each answer is classified onto the current question's closed option set
//! before the respondent moves on to the next question.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
