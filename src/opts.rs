//! CLI options.

use std::str::FromStr;

use clap::{Args, Parser, Subcommand as ClapSubcommand};

use crate::prelude::*;

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(long, default_value = "0", env = "TRACES_SAMPLE_RATE")]
    pub traces_sample_rate: f32,

    #[command(flatten)]
    pub predictor: PredictorOpts,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Submit(SubmitOpts),
    Produce(ProduceOpts),
}

/// Prediction endpoint options.
#[derive(Args, Clone)]
pub struct PredictorOpts {
    /// Prediction endpoint URL
    #[arg(
        long = "predict-url",
        default_value = "http://localhost:8000/predict",
        env = "PREDICT_URL"
    )]
    pub url: String,

    /// Prediction request timeout, waits indefinitely when omitted
    #[arg(
        long = "predict-timeout",
        env = "PREDICT_TIMEOUT",
        value_parser = humantime::parse_duration,
    )]
    pub timeout: Option<StdDuration>,
}

/// Serves the observation form
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, default_value = "8080")]
    pub port: u16,
}

/// Submits a single observation and prints the action
#[derive(Args)]
pub struct SubmitOpts {
    /// Form fields as `NAME=VALUE` pairs
    #[arg(value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
}

/// Periodically submits random observations
#[derive(Args)]
pub struct ProduceOpts {
    /// Interval between submissions
    #[arg(short, long, default_value = "5s", value_parser = parse_interval)]
    pub interval: StdDuration,
}

/// Splits the argument at the first `=`. A bare name is a field with an empty value.
fn parse_field(value: &str) -> Result<(String, String)> {
    Ok(match value.split_once('=') {
        Some((name, value)) => (name.to_string(), value.to_string()),
        None => (value.to_string(), String::new()),
    })
}

fn parse_interval(value: &str) -> Result<StdDuration> {
    let interval = humantime::parse_duration(value)?;
    if interval.is_zero() {
        bail!("expected a non-zero interval");
    }
    Ok(interval)
}

impl FromStr for Opts {
    type Err = Error;

    /// Parses whitespace-separated arguments, used in tests.
    fn from_str(line: &str) -> Result<Self> {
        Ok(Self::try_parse_from(line.split_whitespace())?)
    }
}
