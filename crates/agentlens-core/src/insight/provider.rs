//! Default completion provider for OpenAI-compatible endpoints

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::json;

use super::CompletionProvider;

/// Chat-completions client speaking the OpenAI wire shape. Anything
/// that accepts `{"model", "messages"}` and answers with
/// `choices[0].message.content` works.
pub struct HttpCompletionProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpCompletionProvider {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .context("no completion API key configured")?;

        let payload = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .context("completion request failed")?
            .error_for_status()
            .context("completion endpoint returned an error status")?;

        let body: serde_json::Value = response
            .json()
            .await
            .context("completion response is not JSON")?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .context("completion response carries no message content")
    }
}
