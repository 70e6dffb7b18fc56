use std::borrow::Cow;

use sentry::integrations::tracing::EventFilter;
use sentry::{ClientInitGuard, ClientOptions};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::opts::Opts;
use crate::prelude::*;

/// Initialises tracing and Sentry, and tags every event with the prediction endpoint.
pub fn init(opts: &Opts) -> Result<ClientInitGuard> {
    let guard = sentry::init((
        opts.sentry_dsn.clone(),
        ClientOptions {
            release: Some(Cow::Borrowed(env!("CARGO_PKG_VERSION"))),
            traces_sample_rate: opts.traces_sample_rate,
            ..Default::default()
        },
    ));
    sentry::configure_scope(|scope| {
        scope.set_tag("predict.url", &opts.predictor.url);
        scope.set_tag(
            "predict.timeout",
            opts.predictor
                .timeout
                .map_or_else(|| "none".to_string(), |timeout| {
                    humantime::format_duration(timeout).to_string()
                }),
        );
    });

    // Submissions log the rendered action at `INFO`: breadcrumbs, not events.
    let sentry_layer = sentry::integrations::tracing::layer()
        .event_filter(|metadata| match metadata.level() {
            &Level::ERROR | &Level::WARN => EventFilter::Event,
            &Level::INFO | &Level::DEBUG | &Level::TRACE => EventFilter::Breadcrumb,
        })
        .span_filter(|metadata| {
            matches!(metadata.level(), &Level::ERROR | &Level::WARN | &Level::INFO)
        })
        .with_filter(env_filter("PREDICT_FORM_SENTRY_LOG", "predict_form=debug")?);

    let format_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_filter(env_filter("PREDICT_FORM_LOG", "predict_form=info")?);

    tracing_subscriber::Registry::default()
        .with(sentry_layer)
        .with(format_layer)
        .try_init()?;

    Ok(guard)
}

/// Reads the filter directives from `variable`, falling back to `default`.
fn env_filter(variable: &str, default: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(variable)
        .or_else(|_| EnvFilter::try_new(default))
        .with_context(|| format!("invalid filter directives for `{}`", variable))
}
