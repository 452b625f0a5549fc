//! Static site generator
//!
//! Renders the home page and one page per post, then writes them under the
//! public directory. All content is loaded and rendered before the first
//! write, so a failing post leaves the previous output untouched.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::templates;
use crate::Site;

/// A fully rendered page waiting to be written
#[derive(Debug)]
pub struct RenderedPage {
    /// Destination path
    pub path: PathBuf,
    /// Complete HTML document
    pub html: String,
}

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub posts: usize,
    pub pages_written: usize,
}

/// Static site generator
pub struct Generator<'a> {
    site: &'a Site,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<BuildReport> {
        let post_dir = self.site.post_output_dir();
        fs::create_dir_all(&post_dir)
            .with_context(|| format!("Failed to create output directory {:?}", post_dir))?;

        let loader = ContentLoader::new(self.site);
        let profile_html = loader.load_profile()?;
        let posts = loader.load_posts()?;
        tracing::info!("Loaded {} posts", posts.len());

        let pages = self.render_pages(&profile_html, &posts);
        for page in &pages {
            write_page(page)?;
        }

        Ok(BuildReport {
            posts: posts.len(),
            pages_written: pages.len(),
        })
    }

    /// Render the home page and every post page
    pub fn render_pages(&self, profile_html: &str, posts: &[Post]) -> Vec<RenderedPage> {
        let mut pages = Vec::with_capacity(posts.len() + 1);

        pages.push(RenderedPage {
            path: self.site.public_dir.join("index.html"),
            html: templates::home_page(&self.site.config, profile_html, posts),
        });

        let post_dir = self.site.post_output_dir();
        for post in posts {
            pages.push(RenderedPage {
                path: post_dir.join(format!("{}.html", post.slug)),
                html: templates::post_page(post),
            });
        }

        pages
    }
}

/// Write one page in a single call, replacing any previous file
fn write_page(page: &RenderedPage) -> Result<()> {
    fs::write(&page.path, &page.html)
        .with_context(|| format!("Failed to write {:?}", page.path))?;
    tracing::debug!("Generated: {:?}", page.path);
    Ok(())
}
