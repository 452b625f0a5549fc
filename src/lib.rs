//! draftpress: publish markdown drafts as a small static blog
//!
//! Posts are markdown files with optional `---` front-matter. A build renders
//! them with a line-oriented markdown subset and writes a home page plus one
//! page per post. The `drafting` module can produce those posts from rough
//! notes using a hosted text-generation provider.

pub mod commands;
pub mod config;
pub mod content;
pub mod drafting;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application: configuration plus resolved paths
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Author profile markdown
    pub profile_path: PathBuf,
    /// Directory of post markdown files
    pub posts_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let profile_path = base_dir.join(&config.profile);
        let posts_dir = base_dir.join(&config.posts_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            profile_path,
            posts_dir,
            public_dir,
        }
    }

    /// Directory receiving one HTML file per post
    pub fn post_output_dir(&self) -> PathBuf {
        self.public_dir.join(self.config.post_dir.trim_matches('/'))
    }

    /// Build the static site
    pub fn build(&self) -> Result<generator::BuildReport> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.profile_path, dir.path().join("config/author_profile.md"));
        assert_eq!(site.posts_dir, dir.path().join("generated_posts"));
        assert_eq!(site.public_dir, dir.path().join("site"));
        assert_eq!(site.post_output_dir(), dir.path().join("site/posts"));
    }

    #[test]
    fn test_config_file_overrides() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "public_dir: public\npost_dir: blog\nposts_dir: content\n",
        )
        .unwrap();

        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert_eq!(site.post_output_dir(), dir.path().join("public/blog"));
        assert_eq!(site.posts_dir, dir.path().join("content"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("_config.yml"), "public_dir: [unclosed").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
