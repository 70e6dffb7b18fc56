//! Form submission → prediction → rendered action.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::element::ResultElement;
use crate::form::FormData;
use crate::observation::Observation;
use crate::predictor::{PredictionRequest, Predictor};
use crate::prelude::*;

#[derive(Clone)]
pub struct SubmitHandler {
    predictor: Arc<dyn Predictor>,
}

impl SubmitHandler {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    /// Sends the form as an observation and writes `Action: …` into the element.
    ///
    /// On failure the element keeps its previous text.
    #[instrument(level = "info", skip_all, fields(n_fields = form.len()))]
    pub async fn handle(&self, form: &FormData, element: &ResultElement) -> Result {
        let observation = Observation::from(form);
        debug!(n_values = observation.len(), ?observation);
        sentry::configure_scope(|scope| {
            scope.set_context(
                "submission",
                sentry::protocol::Context::Other(submission_context(form, &observation)),
            );
        });
        let response = self
            .predictor
            .predict(&PredictionRequest { observation })
            .await
            .context("failed to request a prediction")?;
        let text = format!("Action: {}", response.action);
        info!(text = text.as_str());
        element.replace_text(text);
        Ok(())
    }
}

/// Sentry context describing the submitted form, without the values.
fn submission_context(form: &FormData, observation: &Observation) -> BTreeMap<String, Value> {
    let mut context = BTreeMap::new();
    context.insert("n_fields".to_string(), form.len().into());
    context.insert("n_values".to_string(), observation.len().into());
    context.insert(
        "field_names".to_string(),
        form.iter().map(|(name, _)| name).collect::<Vec<_>>().into(),
    );
    context
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::predictor::testing::{EchoPredictor, FakePredictor};

    #[tokio::test]
    async fn handle_ok() -> Result {
        let predictor = Arc::new(FakePredictor::responding(json!({"action": "left"})));
        let element = ResultElement::default();

        SubmitHandler::new(predictor.clone())
            .handle(&FormData::from_iter([("a", "1.5"), ("b", "2")]), &element)
            .await?;

        assert_eq!(predictor.requests(), [json!({"observation": {"a": 1.5, "b": 2}})]);
        assert_eq!(element.text().as_deref(), Some("Action: left"));
        Ok(())
    }

    #[test]
    fn submission_context_ok() {
        let form = FormData::from_iter([("T", "350"), ("Ca", "0.8"), ("T", "351")]);
        let context = submission_context(&form, &Observation::from(&form));
        assert_eq!(context["n_fields"], json!(3));
        assert_eq!(context["n_values"], json!(2));
        assert_eq!(context["field_names"], json!(["T", "Ca", "T"]));
    }

    #[tokio::test]
    async fn non_numeric_field_still_sent() -> Result {
        let predictor = Arc::new(FakePredictor::responding(json!({"action": 1})));
        let element = ResultElement::default();

        SubmitHandler::new(predictor.clone())
            .handle(&FormData::from_iter([("x", "abc")]), &element)
            .await?;

        assert_eq!(predictor.requests(), [json!({"observation": {"x": null}})]);
        assert_eq!(element.text().as_deref(), Some("Action: 1"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_action_is_undefined() -> Result {
        let predictor = Arc::new(FakePredictor::responding(json!({"detail": "Not Found"})));
        let element = ResultElement::default();
        SubmitHandler::new(predictor)
            .handle(&FormData::from_iter([("a", "1")]), &element)
            .await?;
        assert_eq!(element.text().as_deref(), Some("Action: undefined"));
        Ok(())
    }

    #[tokio::test]
    async fn empty_form_ok() -> Result {
        let predictor = Arc::new(FakePredictor::responding(json!({"action": [0.5, -1]})));
        let element = ResultElement::default();
        SubmitHandler::new(predictor.clone())
            .handle(&FormData::default(), &element)
            .await?;
        assert_eq!(predictor.requests(), [json!({"observation": {}})]);
        assert_eq!(element.text().as_deref(), Some("Action: 0.5,-1"));
        Ok(())
    }

    #[tokio::test]
    async fn failure_keeps_previous_text() {
        let element = ResultElement::default();
        element.replace_text("Action: left".to_string());

        let result = SubmitHandler::new(Arc::new(FakePredictor::failing()))
            .handle(&FormData::from_iter([("a", "1")]), &element)
            .await;

        assert!(result.is_err());
        assert_eq!(element.text().as_deref(), Some("Action: left"));
    }

    #[tokio::test]
    async fn concurrent_submissions_not_deduplicated() -> Result {
        let predictor = Arc::new(EchoPredictor::default());
        let handler = SubmitHandler::new(predictor.clone());
        let element = ResultElement::default();
        let slow = FormData::from_iter([("id", "1"), ("delay_ms", "100")]);
        let fast = FormData::from_iter([("id", "2"), ("delay_ms", "0")]);

        let (slow_result, fast_result) =
            tokio::join!(handler.handle(&slow, &element), handler.handle(&fast, &element));
        slow_result?;
        fast_result?;

        assert_eq!(predictor.requests().len(), 2);
        // The slower response resolves last and overwrites the faster one.
        assert_eq!(element.text().as_deref(), Some("Action: 1"));
        Ok(())
    }
}
