pub mod config;
pub mod summary;
pub mod trajectory;

pub use config::{Config, LoggingConfig, ReportConfig, ScanConfig, TailMetric};
pub use summary::{ScanSummary, SlowestWin};
pub use trajectory::{bit_length, StartValue, StepResult, TrajectoryRecord, WinOutcome};
