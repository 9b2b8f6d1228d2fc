//! Robust outlier replacement for one-dimensional signals using a
//! sliding-window Hampel filter.
//!
//! ```
//! let samples = [1.0, 2.0, 3.0, 100.0, 5.0, 6.0, 7.0];
//! let filtered = hampel::hampel_filter(&samples, 5, 3.0).unwrap();
//! assert_eq!(filtered, vec![1.0, 2.0, 3.0, 5.0, 5.0, 6.0, 7.0]);
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use error::{HampelError, InputError};
pub use processing::hampel::{HampelFilter, HampelReport, hampel_filter};
pub use processing::statistics::{
    GAUSSIAN_SCALE_FACTOR, NoiseModel, consistency_factor, estimated_standard_deviation, median,
    median_absolute_deviation,
};
