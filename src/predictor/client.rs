use async_trait::async_trait;
use clap::{crate_name, crate_version};
use serde_json::Value;

use crate::opts::PredictorOpts;
use crate::predictor::{PredictionRequest, PredictionResponse, Predictor};
use crate::prelude::*;

#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
    url: String,
}

impl Client {
    pub fn new(opts: &PredictorOpts) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!(crate_name!(), "/", crate_version!()));
        if let Some(timeout) = opts.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: opts.url.clone(),
        })
    }
}

#[async_trait]
impl Predictor for Client {
    /// Posts the request and parses the body as JSON whatever the status code is.
    #[instrument(level = "debug", skip_all, fields(url = %self.url))]
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let start_instant = Instant::now();
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("failed to call `{}`", self.url))?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "the prediction endpoint responded with an error status");
        }
        let body = response.bytes().await?;
        debug!(%status, n_bytes = body.len(), elapsed = ?start_instant.elapsed());
        let body: Value =
            serde_json::from_slice(&body).context("the response body is not valid JSON")?;
        PredictionResponse::try_from(body)
    }
}
