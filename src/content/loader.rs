//! Content loader - loads the profile and posts from disk

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{markdown, post::sanitize_slug, FrontMatter, Post};
use crate::Site;

/// Loads content from the configured source locations
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load and render the author profile.
    ///
    /// A missing profile falls back to the configured placeholder. The
    /// profile never carries front-matter.
    pub fn load_profile(&self) -> Result<String> {
        let path = &self.site.profile_path;
        let raw = if path.exists() {
            fs::read_to_string(path).with_context(|| format!("Failed to read profile {:?}", path))?
        } else {
            tracing::debug!("No profile at {:?}, using placeholder", path);
            self.site.config.profile_placeholder.clone()
        };

        Ok(markdown::render(&raw))
    }

    /// Load all posts, newest filename first.
    ///
    /// Any post that cannot be read aborts the whole load.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let paths = self.post_paths()?;

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            posts.push(self.load_post(&path)?);
        }

        Ok(posts)
    }

    /// Post files directly inside the posts directory, sorted by filename descending
    fn post_paths(&self) -> Result<Vec<PathBuf>> {
        let posts_dir = &self.site.posts_dir;
        if !posts_dir.exists() {
            tracing::debug!("No posts directory at {:?}", posts_dir);
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in WalkDir::new(posts_dir).min_depth(1).max_depth(1) {
            let entry =
                entry.with_context(|| format!("Failed to list posts in {:?}", posts_dir))?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                paths.push(path.to_path_buf());
            }
        }

        paths.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(paths)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read post {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&content);

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let title = fm.title().map(str::to_string).unwrap_or_else(|| stem.clone());
        let summary = fm
            .summary()
            .map(str::to_string)
            .unwrap_or_else(|| self.site.config.default_summary.clone());
        let date = fm.date().unwrap_or_default().to_string();

        tracing::debug!("Loaded post {:?} ({})", path, title);

        Ok(Post {
            title,
            summary,
            date,
            tags: fm.tags(),
            content: markdown::render(body),
            source: path.to_path_buf(),
            slug: sanitize_slug(&stem),
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site_in(dir: &TempDir) -> Site {
        Site::new(dir.path()).unwrap()
    }

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_is_markdown_file() {
        assert!(is_markdown_file(Path::new("a/b.md")));
        assert!(is_markdown_file(Path::new("b.markdown")));
        assert!(!is_markdown_file(Path::new("b.txt")));
        assert!(!is_markdown_file(Path::new("md")));
    }

    #[test]
    fn test_profile_placeholder() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let html = ContentLoader::new(&site).load_profile().unwrap();
        assert_eq!(html, "<h1>Your Name</h1>");
    }

    #[test]
    fn test_profile_ignores_frontmatter_rules() {
        let dir = TempDir::new().unwrap();
        write(&dir, "config/author_profile.md", "# Ada\n- math\n- engines");
        let site = site_in(&dir);
        let html = ContentLoader::new(&site).load_profile().unwrap();
        assert_eq!(
            html,
            "<h1>Ada</h1>\n<ul>\n<li>math</li>\n<li>engines</li>\n</ul>"
        );
    }

    #[test]
    fn test_missing_posts_dir() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        assert!(ContentLoader::new(&site).load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_load_posts_sorted_and_defaulted() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "generated_posts/20240101-first.md",
            "---\ntitle: First\nsummary: \"One\"\ndate: 2024-01-01\n---\nHello",
        );
        write(&dir, "generated_posts/20240202-second post!.md", "No front-matter");
        write(&dir, "generated_posts/notes.txt", "ignored");
        write(&dir, "generated_posts/nested/20250101-deep.md", "ignored");

        let site = site_in(&dir);
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        assert_eq!(posts.len(), 2);

        assert_eq!(posts[0].slug, "20240202-secondpost");
        assert_eq!(posts[0].title, "20240202-second post!");
        assert_eq!(posts[0].summary, "Generated AI blog post");
        assert_eq!(posts[0].date, "");
        assert_eq!(posts[0].content, "<p>No front-matter</p>");

        assert_eq!(posts[1].slug, "20240101-first");
        assert_eq!(posts[1].title, "First");
        assert_eq!(posts[1].summary, "One");
        assert_eq!(posts[1].date, "2024-01-01");
        assert_eq!(posts[1].content, "<p>Hello</p>");
    }

    #[test]
    fn test_undecodable_post_fails() {
        let dir = TempDir::new().unwrap();
        write(&dir, "generated_posts/a.md", "fine");
        let bad = dir.path().join("generated_posts/b.md");
        fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let site = site_in(&dir);
        let err = ContentLoader::new(&site).load_posts().unwrap_err();
        assert!(format!("{:#}", err).contains("b.md"));
    }
}
