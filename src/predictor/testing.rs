//! In-memory predictors for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::predictor::{PredictionRequest, PredictionResponse, Predictor};
use crate::prelude::*;

/// Answers every request with the same body, or fails when there is none.
/// Records the serialized requests.
#[derive(Default)]
pub struct FakePredictor {
    body: Option<Value>,
    delay: Option<StdDuration>,
    requests: Mutex<Vec<Value>>,
}

impl FakePredictor {
    pub fn responding(body: Value) -> Self {
        Self {
            body: Some(body),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    /// Answers only after sleeping for `delay`.
    pub fn delayed(body: Value, delay: StdDuration) -> Self {
        Self {
            body: Some(body),
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Predictor for FakePredictor {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request)?);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.body {
            Some(body) => PredictionResponse::try_from(body.clone()),
            None => bail!("connection refused"),
        }
    }
}

/// Sleeps for `delay_ms` milliseconds taken from the observation, then answers with `id` as the action.
#[derive(Default)]
pub struct EchoPredictor {
    requests: Mutex<Vec<Value>>,
}

impl EchoPredictor {
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Predictor for EchoPredictor {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let body = serde_json::to_value(request)?;
        self.requests.lock().unwrap().push(body.clone());
        let delay_ms = request.observation.get("delay_ms").unwrap_or_default();
        tokio::time::sleep(StdDuration::from_millis(delay_ms as u64)).await;
        PredictionResponse::try_from(serde_json::json!({"action": body["observation"]["id"]}))
    }
}
