use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::{get, post, Endpoint, EndpointExt, Route, Server};

use crate::opts::WebOpts;
use crate::prelude::*;
use crate::submit::SubmitHandler;
use crate::web::middleware::{
    ErrorMiddleware, SecurityHeadersMiddleware, SentryMiddleware, TimeItMiddleware,
};

mod middleware;
mod partials;
#[cfg(test)]
mod test;
mod views;

pub async fn run(opts: WebOpts, handler: SubmitHandler) -> Result {
    sentry::configure_scope(|scope| scope.set_tag("app", "web"));

    let app = create_standalone_app().data(handler);
    info!(host = %opts.host, port = opts.port, "listening…");
    Server::new(TcpListener::bind((IpAddr::from_str(&opts.host)?, opts.port)))
        .run(app)
        .await?;
    Ok(())
}

/// Creates the application without the submit handler data.
fn create_standalone_app() -> impl Endpoint {
    Route::new()
        .at("/", get(views::index::get).post(views::index::post))
        .at("/static/submit.js", get(views::r#static::get_submit_js))
        .at("/api/submit", post(views::api::post_submit))
        .at("/api/health", get(views::api::get_health))
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(TimeItMiddleware)
        .with(SecurityHeadersMiddleware)
        .with(SentryMiddleware)
}
