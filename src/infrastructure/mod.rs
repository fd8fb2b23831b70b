//! Infrastructure layer module
//!
//! This module contains the ambient integrations around the scanner:
//! - Configuration management
//! - Logging infrastructure

pub mod config;
pub mod logging;
