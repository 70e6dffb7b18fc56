use clap::crate_version;
use maud::{html, Markup, DOCTYPE};

use crate::element::RESULT_ELEMENT_ID;
use crate::form::FormData;
use crate::reactor::FIELDS;

pub const FORM_ID: &str = "observation-form";

/// The whole page: the observation form and the result element.
///
/// `form` fills the inputs back in after a script-less submission.
pub fn page(form: &FormData, result: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { "Predict action" }
            }
            body {
                section.section {
                    div.container {
                        div.columns.is-centered {
                            div.column."is-6-widescreen"."is-10-tablet" {
                                h1.title { "Observation" }
                                (observation_form(form))
                                div.box.has-text-weight-semibold {
                                    p id=(RESULT_ELEMENT_ID) {
                                        @if let Some(result) = result { (result) }
                                    }
                                }
                            }
                        }
                    }
                }
                (footer())
                script defer src="/static/submit.js" {}
            }
        }
    }
}

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
    }
}

fn observation_form(form: &FormData) -> Markup {
    html! {
        form.box id=(FORM_ID) action="/" method="POST" {
            @for field in &FIELDS {
                div.field.is-horizontal {
                    div.field-label.is-normal {
                        label.label for=(field.name) { (field.name) }
                    }
                    div.field-body {
                        div.field {
                            div.control {
                                input.input
                                    type="text"
                                    inputmode="decimal"
                                    id=(field.name)
                                    name=(field.name)
                                    value=(form.value_of(field.name).unwrap_or(""))
                                    placeholder=(format!("{}–{}", field.range.start, field.range.end))
                                    autocomplete="off";
                            }
                        }
                    }
                }
            }
            div.field.is-grouped.is-grouped-right {
                div.control {
                    button.button.is-link type="submit" { "Predict" }
                }
            }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer.footer {
            div.content.has-text-centered {
                p { "predict-form " (crate_version!()) }
            }
        }
    }
}
