use serde::Serialize;

use super::padding::median_pad;
use super::statistics::{GAUSSIAN_SCALE_FACTOR, ensure_finite, mad_unchecked, median_unchecked};
use crate::error::HampelError;

pub const DEFAULT_WINDOW_SIZE: usize = 11;
pub const DEFAULT_N_SIGMA: f64 = 3.0;

/// Sliding-window Hampel filter
///
/// Each sample is compared against the median of the window centred on it.
/// When it deviates by more than `n_sigma` robust standard deviations
/// (`scale_factor * MAD` of the window) it is replaced by that median.
///
/// See Liu, Shah, Jiang, "On-line outlier detection and data cleaning",
/// Computers & Chemical Engineering 28(9), 2004.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HampelFilter {
    window_size: usize,
    n_sigma: f64,
    scale_factor: f64,
}

/// Per-position result of a filter run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HampelReport {
    /// Filtered samples, same length as the input
    pub filtered: Vec<f64>,
    /// Ascending indices of replaced samples
    pub outliers: Vec<usize>,
    /// Local median of the window at each position
    pub medians: Vec<f64>,
    /// Outlier threshold (`n_sigma * sigma`) at each position
    pub thresholds: Vec<f64>,
}

impl HampelFilter {
    /// Create a filter with the Gaussian scale factor
    ///
    /// Fails with `InvalidArgument` if `window_size` is even.
    pub fn new(window_size: usize, n_sigma: f64) -> Result<Self, HampelError> {
        if window_size % 2 == 0 {
            return Err(HampelError::InvalidArgument(
                "window size must be odd".to_string(),
            ));
        }

        Ok(Self {
            window_size,
            n_sigma,
            scale_factor: GAUSSIAN_SCALE_FACTOR,
        })
    }

    /// Override the MAD to standard deviation scale factor
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn n_sigma(&self) -> f64 {
        self.n_sigma
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// True when a non-empty signal of `sample_count` samples is shorter than
    /// the window, so boundary medians cover the whole signal
    pub fn is_wider_than(&self, sample_count: usize) -> bool {
        sample_count > 0 && sample_count < self.window_size
    }

    /// Run the filter and keep per-position statistics
    pub fn analyze(&self, samples: &[f64]) -> Result<HampelReport, HampelError> {
        ensure_finite(samples)?;

        let n = samples.len();

        // With half >= n both pads repeat the whole-signal median and fill more
        // than half of every window, so median and MAD stop depending on the
        // window size. Padding stays bounded by 2n.
        let half = (self.window_size / 2).min(n);
        let window_size = 2 * half + 1;
        let padded = median_pad(samples, half);

        let mut filtered = samples.to_vec();
        let mut outliers = Vec::new();
        let mut medians = Vec::with_capacity(n);
        let mut thresholds = Vec::with_capacity(n);

        for (i, (&sample, window)) in samples
            .iter()
            .zip(padded.windows(window_size))
            .enumerate()
        {
            let local_median = median_unchecked(window);
            let local_sigma = self.scale_factor * mad_unchecked(window, local_median);
            let threshold = self.n_sigma * local_sigma;

            // Strict comparison: deviations equal to the threshold are kept
            if (sample - local_median).abs() > threshold {
                tracing::debug!(
                    "Replacing outlier at index {}: {} -> {} (threshold {})",
                    i,
                    sample,
                    local_median,
                    threshold
                );
                filtered[i] = local_median;
                outliers.push(i);
            }

            medians.push(local_median);
            thresholds.push(threshold);
        }

        tracing::debug!(
            "{} filter replaced {} of {} samples",
            self.name(),
            outliers.len(),
            n
        );

        Ok(HampelReport {
            filtered,
            outliers,
            medians,
            thresholds,
        })
    }

    /// Returns indices of samples classified as outliers
    pub fn find_outliers(&self, samples: &[f64]) -> Result<Vec<usize>, HampelError> {
        Ok(self.analyze(samples)?.outliers)
    }

    /// Filter samples, replacing outliers with their local median
    pub fn filter(&self, samples: &[f64]) -> Result<Vec<f64>, HampelError> {
        Ok(self.analyze(samples)?.filtered)
    }

    /// Name of the algorithm for logging
    pub fn name(&self) -> &'static str {
        "Hampel"
    }
}

impl Default for HampelFilter {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            n_sigma: DEFAULT_N_SIGMA,
            scale_factor: GAUSSIAN_SCALE_FACTOR,
        }
    }
}

/// Replace outliers in `samples` by the local median
///
/// `window_size` must be odd. Samples must be non-empty and finite.
pub fn hampel_filter(
    samples: &[f64],
    window_size: usize,
    n_sigma: f64,
) -> Result<Vec<f64>, HampelError> {
    HampelFilter::new(window_size, n_sigma)?.filter(samples)
}
