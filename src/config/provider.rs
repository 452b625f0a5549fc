//! Text-generation provider configuration
//!
//! Resolved once at startup from the environment and handed to the
//! drafting code, so nothing below `main` reads environment variables.

use std::fmt;
use std::str::FromStr;

use crate::drafting::DraftError;

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_CLAUDE_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Supported providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    Claude,
}

impl ProviderKind {
    /// Environment variable holding the API key for this provider
    pub fn key_var(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Claude => "CLAUDE_API_KEY",
        }
    }

    fn model_var(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_MODEL",
            ProviderKind::Claude => "CLAUDE_MODEL",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => DEFAULT_GEMINI_MODEL,
            ProviderKind::Claude => DEFAULT_CLAUDE_MODEL,
        }
    }
}

impl FromStr for ProviderKind {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ProviderKind::Gemini),
            "claude" => Ok(ProviderKind::Claude),
            other => Err(DraftError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Gemini => f.write_str("gemini"),
            ProviderKind::Claude => f.write_str("claude"),
        }
    }
}

/// Provider selection plus credentials
#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model: String,
    pub api_key: String,
}

impl ProviderConfig {
    /// Build from the process environment
    pub fn from_env() -> Result<Self, DraftError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DraftError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind: ProviderKind = lookup("AI_PROVIDER")
            .unwrap_or_else(|| "gemini".to_string())
            .parse()?;

        let model = lookup(kind.model_var()).unwrap_or_else(|| kind.default_model().to_string());
        let api_key = lookup(kind.key_var()).unwrap_or_default();

        Ok(Self {
            kind,
            model,
            api_key,
        })
    }
}

// Keep the key out of debug logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("model", &self.model)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<set>" })
            .finish()
    }
}
