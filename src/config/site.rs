//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Small pill shown above the hero headline
    pub badge: String,
    pub headline: String,
    pub description: String,

    // Sources
    pub profile: String,
    /// Markdown used when the profile file does not exist
    pub profile_placeholder: String,
    pub posts_dir: String,
    pub drafts_dir: String,

    // Output
    pub public_dir: String,
    /// Subdirectory of `public_dir` holding one page per post
    pub post_dir: String,

    // Writing
    pub default_summary: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "AI Blog Generator".to_string(),
            badge: "Open Source AI Blog Generator".to_string(),
            headline: "Ship AI-written blogs from your raw analysis notes.".to_string(),
            description: "Drop a markdown/text draft, trigger the workflow, and auto-publish \
                          polished posts to a static site."
                .to_string(),

            profile: "config/author_profile.md".to_string(),
            profile_placeholder: "# Your Name".to_string(),
            posts_dir: "generated_posts".to_string(),
            drafts_dir: "blog_drafts".to_string(),

            public_dir: "site".to_string(),
            post_dir: "posts".to_string(),

            default_summary: "Generated AI blog post".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// URL path of a post page relative to the site root
    pub fn post_url(&self, slug: &str) -> String {
        match self.post_dir.trim_matches('/') {
            "" => format!("/{}.html", slug),
            dir => format!("/{}/{}.html", dir, slug),
        }
    }
}
