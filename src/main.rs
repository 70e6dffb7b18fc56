use std::sync::Arc;

use clap::Parser;

use crate::element::ResultElement;
use crate::form::FormData;
use crate::opts::{Opts, Subcommand, SubmitOpts};
use crate::prelude::*;
use crate::submit::SubmitHandler;

mod element;
mod form;
mod logging;
mod observation;
mod opts;
mod predictor;
mod prelude;
mod producer;
mod reactor;
mod submit;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(&opts)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting…");

    let result = run_subcommand(opts).await;
    if let Err(error) = &result {
        error!("fatal error: {:#}", error);
    }
    result
}

async fn run_subcommand(opts: Opts) -> Result {
    let client = predictor::Client::new(&opts.predictor)?;
    let handler = SubmitHandler::new(Arc::new(client));
    match opts.subcommand {
        Subcommand::Web(opts) => web::run(opts, handler).await,
        Subcommand::Submit(opts) => submit(opts, handler).await,
        Subcommand::Produce(opts) => producer::run(opts, handler).await,
    }
}

async fn submit(opts: SubmitOpts, handler: SubmitHandler) -> Result {
    let element = ResultElement::default();
    handler
        .handle(&FormData::from(opts.fields), &element)
        .await?;
    println!("{}", element.text().unwrap_or_default());
    Ok(())
}
