// Integration test for logging setup.
// Installing the subscriber is global, so this binary holds a single test.

use collatz_tail::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
use collatz_tail::services::compute_trajectory;
use num_bigint::BigUint;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_logging_captures_engine_events() {
    let temp_dir = TempDir::new().unwrap();

    let config = LogConfig {
        level: "trace".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();
    assert!(logger.has_file_output());

    tracing::info!(bit_width = 5u32, "scan started");
    let record = compute_trajectory(&BigUint::from(7u32), 3).unwrap();
    assert!(record.is_tail_win());

    // Dropping the logger flushes the non-blocking writer
    drop(logger);

    let log_path = temp_dir.path().join("collatz-tail.log");
    let contents = fs::read_to_string(&log_path).unwrap();

    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(!lines.is_empty());
    assert!(lines
        .iter()
        .any(|line| line["fields"]["message"] == "scan started"
            && line["fields"]["bit_width"] == 5));
    assert!(lines.iter().all(|line| line["level"].is_string()));

    // A second global subscriber is refused
    assert!(LoggerImpl::init(&LogConfig::default()).is_err());
}
