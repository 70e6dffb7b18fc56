use poem::web::{Data, Form, Html};
use poem::{handler, IntoResponse};

use crate::element::ResultElement;
use crate::form::FormData;
use crate::prelude::*;
use crate::submit::SubmitHandler;
use crate::web::partials::page;

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get() -> impl IntoResponse {
    Html(page(&FormData::default(), None).into_string())
}

/// Script-less submission: re-renders the page with the result.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post(
    Form(form): Form<FormData>,
    Data(handler): Data<&SubmitHandler>,
) -> Result<impl IntoResponse> {
    let element = ResultElement::default();
    handler.handle(&form, &element).await?;
    Ok(Html(page(&form, element.text().as_deref()).into_string()))
}
