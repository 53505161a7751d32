//! Wellbeing suggestion enrichment via OpenRouter text completions.

pub mod extract;

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::models::check_in::Mood;

const OPENROUTER_COMPLETIONS_URL: &str = "https://openrouter.ai/api/v1/completions";

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no OpenRouter API key configured")]
    Unauthenticated,

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("no completions returned")]
    EmptyResponse,

    #[error("completion request timed out")]
    Timeout,
}

/// Source of improvement suggestions for a given mood/energy pair.
/// The service depends on this seam, not on the HTTP client, so tests can
/// substitute a scripted source.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggest(&self, mood: Mood, energy_level: i32) -> Result<Vec<String>, ProviderError>;
}

/// Production `SuggestionSource`: one POST per call, bounded by the client
/// timeout, no retries. A slow or broken upstream must never stall a save
/// beyond the timeout.
pub struct OpenRouterProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

impl OpenRouterProvider {
    pub fn new(config: &Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.suggestion_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: config.openrouter_api_key.clone(),
            model: config.openrouter_model.clone(),
        }
    }

    fn build_prompt(mood: Mood, energy_level: i32) -> String {
        format!(
            "Based on an energy level of {}/10 and mood: \"{}\", provide 5 helpful \
             suggestions for improving wellbeing. Return only a JSON array like this: \
             [\"suggestion 1\",\"suggestion 2\",\"suggestion 3\",\"suggestion 4\",\
             \"suggestion 5\"] no extra text or formatting",
            energy_level,
            mood.as_str()
        )
    }
}

#[async_trait]
impl SuggestionSource for OpenRouterProvider {
    async fn suggest(&self, mood: Mood, energy_level: i32) -> Result<Vec<String>, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Unauthenticated);
        }

        let prompt = Self::build_prompt(mood, energy_level);

        let response = self
            .client
            .post(OPENROUTER_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": self.model,
                "prompt": prompt,
                "temperature": 0.7,
            }))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Upstream(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Upstream(format!(
                "OpenRouter returned {}",
                status
            )));
        }

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;

        let first = body.choices.first().ok_or(ProviderError::EmptyResponse)?;

        // An HTTP success whose text holds no parseable list is a valid
        // zero-suggestion outcome, not an error.
        Ok(extract::extract(first.text.trim()))
    }
}
