//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::Site;

/// Print every post in build order
pub fn run(site: &Site) -> Result<()> {
    let posts = ContentLoader::new(site).load_posts()?;

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("{}", format_entry(post));
    }

    Ok(())
}

fn format_entry(post: &Post) -> String {
    let mut line = format!("  {} - {} [{}]", post.date_label(), post.title, post.slug);
    if !post.tags.is_empty() {
        line.push_str(&format!(" #{}", post.tags.join(" #")));
    }
    line
}
