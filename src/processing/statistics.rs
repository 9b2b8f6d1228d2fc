use statrs::distribution::{ContinuousCDF, Laplace, StudentsT};
use statrs::statistics::Distribution;

use crate::error::HampelError;

/// Scale factor turning MAD into a standard deviation estimate for Gaussian noise
///
/// Reciprocal of the standard normal quantile function at 3/4. Combined with
/// `n_sigma = 3` this gives the usual 3-sigma rule.
pub const GAUSSIAN_SCALE_FACTOR: f64 = 1.4826;

/// Median of a non-empty sequence
///
/// Even-length input yields the mean of the two middle order statistics,
/// computed as `(a + b) / 2`. Finite values near `f64::MAX` can therefore
/// produce an infinite median (and MAD).
pub fn median(values: &[f64]) -> Result<f64, HampelError> {
    ensure_finite(values)?;
    Ok(median_unchecked(values))
}

/// Median absolute deviation: `median(|a_i - median(a)|)`
pub fn median_absolute_deviation(values: &[f64]) -> Result<f64, HampelError> {
    ensure_finite(values)?;
    Ok(mad_unchecked(values, median_unchecked(values)))
}

/// Standard deviation estimated as `scale_factor * MAD`
///
/// The scale factor is taken as given; use [`GAUSSIAN_SCALE_FACTOR`] for
/// normally distributed noise or [`NoiseModel::scale_factor`] for others.
pub fn estimated_standard_deviation(
    values: &[f64],
    scale_factor: f64,
) -> Result<f64, HampelError> {
    Ok(scale_factor * median_absolute_deviation(values)?)
}

/// Rejects empty input and returns the first non-finite element as an error
pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), HampelError> {
    if values.is_empty() {
        return Err(HampelError::EmptyInput);
    }

    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(HampelError::NonFiniteSample {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Median of already validated, non-empty values
pub(crate) fn median_unchecked(values: &[f64]) -> f64 {
    debug_assert!(!values.is_empty());

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// MAD around a precomputed center
pub(crate) fn mad_unchecked(values: &[f64], center: f64) -> f64 {
    let deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    median_unchecked(&deviations)
}

/// Scale factor making MAD a consistent estimator of the standard deviation
/// of a symmetric distribution: `sigma / (Q(3/4) - Q(1/2))`
pub fn consistency_factor<D>(distribution: &D) -> Result<f64, HampelError>
where
    D: ContinuousCDF<f64, f64> + Distribution<f64>,
{
    let std_dev = distribution
        .std_dev()
        .filter(|s| s.is_finite())
        .ok_or_else(|| {
            HampelError::InvalidArgument(
                "distribution has no finite standard deviation".to_string(),
            )
        })?;

    let population_mad = distribution.inverse_cdf(0.75) - distribution.inverse_cdf(0.5);
    if population_mad <= 0.0 || !population_mad.is_finite() {
        return Err(HampelError::InvalidArgument(format!(
            "degenerate interquartile half-width {}",
            population_mad
        )));
    }

    Ok(std_dev / population_mad)
}

/// Noise distribution assumed when converting MAD into a standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NoiseModel {
    /// Normally distributed noise (factor 1.4826)
    #[default]
    Gaussian,
    /// Student's t noise with the given degrees of freedom (must exceed 2)
    StudentT { freedom: f64 },
    /// Laplace (double exponential) noise
    Laplace,
}

impl NoiseModel {
    /// Scale factor for this noise model
    pub fn scale_factor(&self) -> Result<f64, HampelError> {
        match self {
            NoiseModel::Gaussian => Ok(GAUSSIAN_SCALE_FACTOR),
            NoiseModel::StudentT { freedom } => {
                if *freedom <= 2.0 {
                    return Err(HampelError::InvalidArgument(format!(
                        "Student's t noise needs more than 2 degrees of freedom, got {}",
                        freedom
                    )));
                }
                let dist = StudentsT::new(0.0, 1.0, *freedom)
                    .map_err(|e| HampelError::InvalidArgument(e.to_string()))?;
                consistency_factor(&dist)
            }
            NoiseModel::Laplace => {
                let dist = Laplace::new(0.0, 1.0)
                    .map_err(|e| HampelError::InvalidArgument(e.to_string()))?;
                consistency_factor(&dist)
            }
        }
    }

    /// Name of the noise model for logging
    pub fn name(&self) -> &'static str {
        match self {
            NoiseModel::Gaussian => "Gaussian",
            NoiseModel::StudentT { .. } => "Student's t",
            NoiseModel::Laplace => "Laplace",
        }
    }
}
