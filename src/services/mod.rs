pub mod odd_step;
pub mod scan_driver;
pub mod trajectory_engine;

pub use odd_step::{apply_step, trailing_zeros};
pub use scan_driver::{expected_record_count, scan, Scan, ScanDriver};
pub use trajectory_engine::{compute_trajectory, TrajectoryEngine};
