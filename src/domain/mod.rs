//! Domain layer for the tail-collapse scanner
//!
//! This module contains the result records, configuration model and
//! precondition errors shared by the engine and the reporter.

pub mod errors;
pub mod models;

// Re-export error types for convenient access
pub use errors::{DomainError, DomainResult};
