//! collatz-tail - Collatz tail-collapse scanner
//!
//! Follows odd start values through the odd-step Collatz map
//! `n -> (3n + 1) / 2^z` and records the first step at which the total number
//! of trailing zeros removed from the "tail" exceeds the number of steps taken.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): start values, trajectory records, summaries and config
//! - **Service Layer** (`services`): the odd step, the trajectory engine and the scan driver
//! - **Infrastructure Layer** (`infrastructure`): config loading and logging
//! - **CLI Layer** (`cli`): command-line interface and report rendering
//!
//! # Example
//!
//! ```
//! use collatz_tail::services::scan;
//!
//! let records: Vec<_> = scan(3).unwrap().collect();
//! assert_eq!(records.len(), 3);
//! assert!(records.iter().all(|r| r.is_tail_win()));
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, ScanSummary, StartValue, StepResult, TailMetric, TrajectoryRecord, WinOutcome,
};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    apply_step, compute_trajectory, scan, trailing_zeros, Scan, ScanDriver, TrajectoryEngine,
};
