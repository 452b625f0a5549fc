//! Text-generation provider clients

use serde_json::{json, Value};
use std::time::Duration;

use super::DraftError;
use crate::config::{ProviderConfig, ProviderKind};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const CLAUDE_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const TIMEOUT_SECONDS: u64 = 90;
const TEMPERATURE: f64 = 0.4;
const CLAUDE_MAX_TOKENS: u32 = 2200;

/// A single provider request, before it is sent
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

/// HTTP client bound to one configured provider
pub struct Provider {
    config: ProviderConfig,
    base_url: String,
    http_client: reqwest::Client,
}

/// Scheme and host the provider's API lives on
fn default_base_url(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Gemini => GEMINI_BASE_URL,
        ProviderKind::Claude => CLAUDE_BASE_URL,
    }
}

impl Provider {
    /// Create a client; fails early when the API key is missing
    pub fn new(config: ProviderConfig) -> Result<Self, DraftError> {
        let base_url = default_base_url(config.kind).to_string();
        Self::with_base_url(config, base_url)
    }

    /// Create a client talking to another host, e.g. a proxy or a local server
    pub fn with_base_url(
        config: ProviderConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, DraftError> {
        if config.api_key.is_empty() {
            return Err(DraftError::MissingApiKey(config.kind.key_var()));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .build()?;

        Ok(Self {
            config,
            base_url: base_url.into(),
            http_client,
        })
    }

    /// Send the prompt and return the generated markdown
    pub async fn generate(&self, prompt: &str) -> Result<String, DraftError> {
        let request = build_request(&self.config, &self.base_url, prompt);
        tracing::info!(
            "Requesting post from {} ({})",
            self.config.kind,
            self.config.model
        );

        let mut builder = self.http_client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DraftError::Http {
                provider: self.config.kind.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        extract_text(self.config.kind, &data)
    }
}

/// Build the provider-specific request for a prompt
pub fn build_request(config: &ProviderConfig, base_url: &str, prompt: &str) -> ProviderRequest {
    let base_url = base_url.trim_end_matches('/');
    match config.kind {
        ProviderKind::Gemini => ProviderRequest {
            url: format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                base_url, config.model, config.api_key
            ),
            headers: Vec::new(),
            body: json!({
                "contents": [{ "parts": [{ "text": prompt }] }],
                "generationConfig": { "temperature": TEMPERATURE },
            }),
        },
        ProviderKind::Claude => ProviderRequest {
            url: format!("{}/v1/messages", base_url),
            headers: vec![
                ("x-api-key", config.api_key.clone()),
                ("anthropic-version", ANTHROPIC_VERSION.to_string()),
            ],
            body: json!({
                "model": config.model,
                "max_tokens": CLAUDE_MAX_TOKENS,
                "temperature": TEMPERATURE,
                "messages": [{ "role": "user", "content": prompt }],
            }),
        },
    }
}

/// Pull the generated text out of a provider response
pub fn extract_text(kind: ProviderKind, data: &Value) -> Result<String, DraftError> {
    let malformed = |message: &str| DraftError::MalformedResponse {
        provider: kind.to_string(),
        message: message.to_string(),
    };

    let texts: Vec<&str> = match kind {
        ProviderKind::Gemini => data
            .pointer("/candidates/0/content/parts")
            .and_then(Value::as_array)
            .ok_or_else(|| malformed("missing candidates[0].content.parts"))?
            .iter()
            .map(|part| part.get("text").and_then(Value::as_str).unwrap_or(""))
            .collect(),
        ProviderKind::Claude => data
            .get("content")
            .and_then(Value::as_array)
            .map(|blocks| {
                blocks
                    .iter()
                    .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
                    .map(|block| block.get("text").and_then(Value::as_str).unwrap_or(""))
                    .collect()
            })
            .unwrap_or_default(),
    };

    Ok(texts.join("\n").trim().to_string())
}
