use std::path::PathBuf;

use clap::Parser;

use hampel::processing::hampel::{DEFAULT_N_SIGMA, DEFAULT_WINDOW_SIZE};
use hampel::{HampelError, HampelFilter, NoiseModel};

#[derive(Parser, Debug)]
#[command(name = "hampel")]
#[command(about = "Replace outliers in a 1-D signal with a sliding-window Hampel filter")]
#[command(version)]
pub struct Cli {
    /// Input file with samples separated by newlines, commas or spaces ("-" for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Size of the moving window (must be odd)
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE, env = "HAMPEL_WINDOW_SIZE")]
    pub window_size: usize,

    /// Number of estimated standard deviations a sample may deviate from the local median
    #[arg(short = 'k', long, default_value_t = DEFAULT_N_SIGMA, env = "HAMPEL_N_SIGMA")]
    pub n_sigma: f64,

    /// MAD to standard deviation scale factor (overrides --noise-model)
    #[arg(long, env = "HAMPEL_SCALE_FACTOR")]
    pub scale_factor: Option<f64>,

    /// Noise distribution used to derive the scale factor
    #[arg(long, value_enum, default_value = "gaussian")]
    pub noise_model: NoiseModelArg,

    /// Degrees of freedom for the Student's t noise model
    #[arg(long, default_value = "5.0")]
    pub freedom: f64,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum NoiseModelArg {
    /// Normally distributed noise (default)
    #[default]
    Gaussian,
    /// Student's t noise
    StudentT,
    /// Laplace noise
    Laplace,
}

#[derive(clap::ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// One filtered sample per line
    #[default]
    Plain,
    /// Full report with outlier indices and per-window statistics
    Json,
}

impl Cli {
    /// Convert CLI args to NoiseModel
    pub fn to_noise_model(&self) -> NoiseModel {
        match self.noise_model {
            NoiseModelArg::Gaussian => NoiseModel::Gaussian,
            NoiseModelArg::StudentT => NoiseModel::StudentT {
                freedom: self.freedom,
            },
            NoiseModelArg::Laplace => NoiseModel::Laplace,
        }
    }

    /// Build the filter described by the CLI args
    pub fn to_filter(&self) -> Result<HampelFilter, HampelError> {
        let scale_factor = match self.scale_factor {
            Some(factor) => factor,
            None => self.to_noise_model().scale_factor()?,
        };

        Ok(HampelFilter::new(self.window_size, self.n_sigma)?.with_scale_factor(scale_factor))
    }
}
