use std::time::Duration;

use async_trait::async_trait;

use crate::models::{GeminiRequest, GeminiResponse};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Gemini response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Gemini returned no text")]
    Empty,
}

/// Anything that can turn a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

// Gemini REST client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let res = self
            .client
            .post(self.endpoint())
            .json(&GeminiRequest::user_prompt(prompt))
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GeminiResponse = serde_json::from_str(&body)?;
        parsed.first_text().ok_or(GenerationError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_includes_model_and_key() {
        let client = GeminiClient::new(
            "https://example.test/v1beta/",
            "gemini-1.5-flash",
            "secret",
            Duration::from_secs(5),
        )
        .unwrap();

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent?key=secret"
        );
    }
}
