//! End-to-end scans through the library surface.

use collatz_tail::cli::commands::scan::run_scan;
use collatz_tail::cli::output::CommandOutput;
use collatz_tail::domain::models::{Config, ScanSummary, WinOutcome};
use collatz_tail::services::{expected_record_count, scan, ScanDriver, TrajectoryEngine};
use indicatif::ProgressBar;
use num_bigint::BigUint;

#[test]
fn test_scan_yields_expected_counts() {
    for bit_width in 1..=12u32 {
        let count = scan(bit_width).unwrap().count();
        assert_eq!(
            BigUint::from(count),
            expected_record_count(bit_width),
            "k={bit_width}"
        );
        assert_eq!(count, (1usize << (bit_width - 1)) - 1);
    }
}

#[test]
fn test_two_bit_scan_is_the_start_three_example() {
    let records: Vec<_> = scan(2).unwrap().collect();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.start, BigUint::from(3u32));
    assert_eq!(record.outcome, WinOutcome::TailWin { iteration: 2 });
    assert_eq!(record.total_zeros_removed, 5);
    assert_eq!(record.ending_value, BigUint::from(1u32));
}

#[test]
fn test_every_start_below_two_to_the_sixteen_wins() {
    let summary = ScanSummary::from_records(&scan(16).unwrap().collect::<Vec<_>>());

    assert_eq!(summary.total, (1 << 15) - 1);
    assert!(summary.max_iterations_seen < 10_000);
    assert!(summary.all_won());
    assert!(summary.failures.is_empty());
    assert!(summary.bound_exceeded.is_empty());
    assert!(summary.slowest_win.is_some());
}

#[test]
fn test_scan_is_lazy_over_wide_ranges() {
    let mut wide = scan(200).unwrap();
    let first: Vec<_> = wide.by_ref().take(4).collect();

    let starts: Vec<BigUint> = first.iter().map(|r| r.start.clone()).collect();
    assert_eq!(
        starts,
        vec![3u32, 5, 7, 9].into_iter().map(BigUint::from).collect::<Vec<_>>()
    );
    assert!(first.iter().all(|r| r.bit_width == 200));
}

#[test]
fn test_bounded_scan_reports_bound_hits() {
    let driver = ScanDriver::new(TrajectoryEngine::with_max_iterations(Some(1)));
    let summary = ScanSummary::from_records(&driver.scan(6).unwrap().collect::<Vec<_>>());

    assert_eq!(summary.total, 31);
    assert!(!summary.all_won());
    assert!(summary.failures.is_empty());
    assert_eq!(summary.tail_wins + summary.bound_exceeded.len() as u64, 31);
}

#[test]
fn test_report_for_small_scan() {
    let mut config = Config::default();
    config.scan.bit_width = 4;
    config.report.progress = false;

    let output = run_scan(&config, &ProgressBar::hidden()).unwrap();
    let text = output.to_human();

    assert!(text.contains("Analyzing odd numbers 3 to 15 (k=4)"));
    assert!(text.contains("0111"));
    assert!(text.contains("All 7 odd numbers exhibited extra zero dominance"));

    let json = output.to_json();
    assert_eq!(json["summary"]["tail_wins"], 7);
    assert_eq!(json["records"][2]["outcome"]["kind"], "tail_win");
}
