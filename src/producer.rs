//! Submits random reactor observations at a fixed interval.

use std::future::Future;

use rand::Rng;
use tokio::signal::ctrl_c;
use tokio::time::MissedTickBehavior;

use crate::element::ResultElement;
use crate::form::FormData;
use crate::opts::ProduceOpts;
use crate::prelude::*;
use crate::reactor::FIELDS;
use crate::submit::SubmitHandler;

pub async fn run(opts: ProduceOpts, handler: SubmitHandler) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "producer"));
    run_until(opts.interval, &handler, ctrl_c()).await
}

/// Submits until `shutdown` resolves, interrupting an in-flight submission.
async fn run_until(
    interval: StdDuration,
    handler: &SubmitHandler,
    shutdown: impl Future<Output = std::io::Result<()>>,
) -> Result {
    tokio::pin!(shutdown);

    let element = ResultElement::default();
    info!(interval = %humantime::format_duration(interval), "running…");
    let mut interval = tokio::time::interval(interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let submit = async {
            interval.tick().await;
            let form = generate_form(&mut rand::thread_rng());
            handler.handle(&form, &element).await
        };
        tokio::select! {
            result = &mut shutdown => {
                result?;
                info!("stopping…");
                return Ok(());
            }
            result = submit => match result {
                Ok(()) => info!(text = ?element.text(), "submitted"),
                Err(error) => error!("failed to submit the observation: {:#}", error),
            },
        }
    }
}

/// Draws every reactor field uniformly from its range.
fn generate_form(rng: &mut impl Rng) -> FormData {
    FIELDS
        .iter()
        .map(|field| (field.name, rng.gen_range(field.range.clone()).to_string()))
        .collect()
}
