//! Prediction endpoint: request and response models and the HTTP client.

use async_trait::async_trait;

pub use self::client::Client;
pub use self::requests::PredictionRequest;
pub use self::responses::{Action, PredictionResponse};
use crate::prelude::*;

mod client;
mod requests;
mod responses;
#[cfg(test)]
pub mod testing;

/// Turns an observation into an action.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;
}
