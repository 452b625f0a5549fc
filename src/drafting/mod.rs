//! AI-assisted drafting
//!
//! Turns a rough analysis draft plus the author profile into a finished
//! markdown post by prompting a text-generation provider. The result is a
//! plain markdown file with front-matter, consumed later by the site build.

mod prompt;
mod provider;

use std::path::PathBuf;
use thiserror::Error;

pub use prompt::{build_prompt, ensure_frontmatter, extract_title, post_filename, slugify};
pub use provider::Provider;

/// Drafting errors
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Missing file: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("AI_PROVIDER must be either 'gemini' or 'claude' (got '{0}')")]
    UnknownProvider(String),

    #[error("Missing {0}")]
    MissingApiKey(&'static str),

    #[error("HTTP {status} from {provider}: {body}")]
    Http {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("Unexpected response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}
