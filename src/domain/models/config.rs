use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Main configuration structure for collatz-tail
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Scan range and engine limits
    #[serde(default)]
    pub scan: ScanConfig,

    /// Report rendering options
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScanConfig {
    /// Bit width k; every odd number in [3, 2^k - 1] is analyzed
    #[serde(default = "default_bit_width")]
    pub bit_width: u32,

    /// Stop a trajectory after this many steps (unbounded when absent)
    #[serde(default)]
    pub max_iterations: Option<u64>,
}

const fn default_bit_width() -> u32 {
    16
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            bit_width: default_bit_width(),
            max_iterations: None,
        }
    }
}

/// Which tail metric the report shows per row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TailMetric {
    /// Total zeros removed minus iterations
    #[default]
    ExtraZeros,
    /// Raw total of zeros removed
    TotalTail,
}

impl TailMetric {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraZeros => "extra_zeros",
            Self::TotalTail => "total_tail",
        }
    }

    /// Column header used by the report table.
    pub const fn column_title(&self) -> &'static str {
        match self {
            Self::ExtraZeros => "Extra Zeros",
            Self::TotalTail => "Total Tail",
        }
    }
}

impl fmt::Display for TailMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "extra_zeros" | "extra" => Ok(Self::ExtraZeros),
            "total_tail" | "total" => Ok(Self::TotalTail),
            other => Err(format!(
                "unknown metric '{other}', expected extra-zeros or total-tail"
            )),
        }
    }
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Per-row tail metric
    #[serde(default)]
    pub metric: TailMetric,

    /// Only render rows for records that did not win
    #[serde(default)]
    pub failures_only: bool,

    /// Draw a progress bar on stderr while scanning
    #[serde(default = "default_true")]
    pub progress: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metric: TailMetric::default(),
            failures_only: false,
            progress: default_true(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for a JSON log file (stderr only when absent)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "never".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
