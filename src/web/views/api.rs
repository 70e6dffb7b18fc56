use poem::http::StatusCode;
use poem::web::{Data, Form};
use poem::{handler, IntoResponse, Response};

use crate::element::ResultElement;
use crate::form::FormData;
use crate::prelude::*;
use crate::submit::SubmitHandler;

const CACHE_CONTROL: &str = "no-cache";

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_health() -> Result<impl IntoResponse> {
    Ok(Response::from(StatusCode::NO_CONTENT).with_header("Cache-Control", CACHE_CONTROL))
}

/// Runs the submission and responds with the result element's text.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_submit(
    Form(form): Form<FormData>,
    Data(handler): Data<&SubmitHandler>,
) -> Result<impl IntoResponse> {
    let element = ResultElement::default();
    handler.handle(&form, &element).await?;
    Ok(element
        .text()
        .unwrap_or_default()
        .with_content_type("text/plain; charset=utf-8")
        .with_header("Cache-Control", CACHE_CONTROL))
}
