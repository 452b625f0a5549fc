//! Content module - handles posts, front-matter and markdown rendering

mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;

pub use frontmatter::FrontMatter;
pub use post::{sanitize_slug, Post};
