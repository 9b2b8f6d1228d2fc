use std::io::Write;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;

use config::{Cli, OutputFormat};
use hampel::{input, output};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so filtered samples can be piped from stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hampel=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let filter = cli.to_filter()?;
    if cli.scale_factor.is_none() {
        tracing::debug!(
            "Scale factor derived from {} noise model",
            cli.to_noise_model().name()
        );
    }
    tracing::info!(
        "Using {} filter: window size {}, n_sigma {}, scale factor {}",
        filter.name(),
        filter.window_size(),
        filter.n_sigma(),
        filter.scale_factor()
    );

    let samples = input::read_samples(&cli.input)?;
    tracing::info!("Read {} samples from {:?}", samples.len(), cli.input);

    if filter.is_wider_than(samples.len()) {
        tracing::warn!(
            "Window size {} exceeds signal length {}; boundary medians cover the whole signal",
            filter.window_size(),
            samples.len()
        );
    }

    let report = filter.analyze(&samples)?;
    tracing::info!(
        "Replaced {} of {} samples",
        report.outliers.len(),
        samples.len()
    );

    let rendered = match cli.format {
        OutputFormat::Plain => output::render_plain(&report.filtered),
        OutputFormat::Json => output::render_json(&report)?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::info!("Wrote output to {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
