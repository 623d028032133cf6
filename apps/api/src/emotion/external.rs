//! Hugging Face inference client for the external emotion classifier.
//!
//! The hosted model is treated as a black box: one POST with the raw text,
//! one array of label/score pairs back. Callers decide what to do with the
//! labels; this module only handles transport, retries and decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const INFERENCE_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Text-classification model used for every external call.
pub const MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("inference API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("inference API returned no labels")]
    EmptyOutput,
}

impl InferenceError {
    /// Transient failures worth another attempt: transport errors, rate
    /// limiting, and 503 (model cold start on the hosted API).
    fn is_retryable(&self) -> bool {
        match self {
            InferenceError::Http(_) => true,
            InferenceError::Api { status, .. } => *status == 429 || *status >= 500,
            InferenceError::EmptyOutput => false,
        }
    }
}

/// One label/score pair as emitted by a text-classification pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Client for the hosted inference endpoint. Cheap to clone.
#[derive(Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    api_token: String,
}

impl InferenceClient {
    pub fn new(api_token: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_token,
        }
    }

    /// Classifies `text`, retrying transient failures with exponential
    /// backoff. Returns the labels sorted by score, best first.
    pub async fn classify_text(&self, text: &str) -> Result<Vec<ScoredLabel>, InferenceError> {
        let mut last_err: Option<InferenceError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = std::time::Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Inference call attempt {} failed, retrying after {:?}",
                    attempt, delay
                );
                tokio::time::sleep(delay).await;
            }

            match self.try_classify(text).await {
                Ok(labels) => return Ok(labels),
                Err(e) => {
                    if !e.is_retryable() {
                        return Err(e);
                    }
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or(InferenceError::EmptyOutput))
    }

    async fn try_classify(&self, text: &str) -> Result<Vec<ScoredLabel>, InferenceError> {
        let url = format!("{INFERENCE_API_URL}/{MODEL}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&InferenceRequest { inputs: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // The pipeline wraps results in one outer array per input; we send
        // a single input, so the first batch is the whole answer.
        let batches: Vec<Vec<ScoredLabel>> = response.json().await?;
        let mut labels = batches
            .into_iter()
            .next()
            .ok_or(InferenceError::EmptyOutput)?;
        if labels.is_empty() {
            return Err(InferenceError::EmptyOutput);
        }

        labels.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        debug!("Inference returned {} labels, top: {}", labels.len(), labels[0].label);
        Ok(labels)
    }
}
