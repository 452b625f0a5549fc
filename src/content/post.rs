//! Post model

use std::path::PathBuf;

/// Fallback when a filename stem has no usable characters
const UNTITLED_SLUG: &str = "untitled";

/// A blog post, ready to be written out
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,

    /// One-line summary shown on the home page card
    pub summary: String,

    /// Publication date as written in the front-matter (may be empty)
    pub date: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Rendered HTML content
    pub content: String,

    /// Source file path
    pub source: PathBuf,

    /// Slug (URL-friendly name)
    pub slug: String,
}

impl Post {
    /// Date label for cards and listings
    pub fn date_label(&self) -> &str {
        if self.date.is_empty() {
            "Draft"
        } else {
            &self.date
        }
    }
}

/// Keep only ASCII alphanumerics, `-` and `_` from a filename stem.
pub fn sanitize_slug(stem: &str) -> String {
    let slug: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_slug() {
        assert_eq!(sanitize_slug("2024-01-01 My Post!"), "2024-01-01MyPost");
        assert_eq!(sanitize_slug("already_safe-slug"), "already_safe-slug");
        assert_eq!(sanitize_slug("café/../x"), "cafx");
    }

    #[test]
    fn test_sanitize_slug_fallback() {
        assert_eq!(sanitize_slug("!!!"), "untitled");
        assert_eq!(sanitize_slug(""), "untitled");
    }

    #[test]
    fn test_date_label() {
        let mut post = Post {
            title: "T".to_string(),
            summary: String::new(),
            date: String::new(),
            tags: Vec::new(),
            content: String::new(),
            source: PathBuf::from("t.md"),
            slug: "t".to_string(),
        };
        assert_eq!(post.date_label(), "Draft");
        post.date = "2024-02-02".to_string();
        assert_eq!(post.date_label(), "2024-02-02");
    }
}
