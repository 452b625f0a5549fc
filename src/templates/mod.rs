//! Built-in page templates
//!
//! Every page shares one shell: Tailwind from the CDN plus a small inline
//! stylesheet for rendered markdown (`.prose`). Page bodies are assembled
//! with `format!` so each page is a complete string before it is written.

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{html_escape, link_to};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INLINE_STYLE: &str = r#"    .glass { backdrop-filter: blur(8px); }
    .prose h1 { font-size: 2rem; font-weight: 800; margin-top: 1rem; margin-bottom: .75rem; }
    .prose h2 { font-size: 1.4rem; font-weight: 700; margin-top: 1.2rem; margin-bottom: .6rem; }
    .prose h3 { font-size: 1.1rem; font-weight: 700; margin-top: 1rem; margin-bottom: .4rem; }
    .prose p { color: #d1d5db; line-height: 1.75; margin: .65rem 0; }
    .prose ul, .prose ol { margin: .8rem 0 .8rem 1.1rem; color: #d1d5db; }
    .prose li { margin: .2rem 0; }"#;

const HOME_BACKDROP: &str = "bg-[radial-gradient(circle_at_20%_20%,rgba(56,189,248,0.15),transparent_34%),radial-gradient(circle_at_80%_0%,rgba(168,85,247,0.12),transparent_26%)]";
const POST_BACKDROP: &str = "bg-[radial-gradient(circle_at_0%_10%,rgba(56,189,248,0.10),transparent_38%),radial-gradient(circle_at_100%_0%,rgba(168,85,247,0.10),transparent_30%)]";

const CARD_CLASS: &str = "group block rounded-2xl border border-slate-700/60 bg-slate-900/70 p-6 transition hover:-translate-y-0.5 hover:border-cyan-400/70 hover:shadow-[0_0_24px_rgba(34,211,238,0.2)]";
const BACK_LINK_CLASS: &str = "inline-flex rounded-full border border-slate-700 px-3 py-1 text-sm text-cyan-300 hover:border-cyan-400";

/// Wrap a body in the shared HTML document shell
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  <script src="{cdn}"></script>
  <style>
{style}
  </style>
</head>
<body class="min-h-screen bg-slate-950 text-slate-100">{body}</body>
</html>"#,
        title = html_escape(title),
        cdn = TAILWIND_CDN,
        style = INLINE_STYLE,
        body = body,
    )
}

/// Summary card linking to a post page
pub fn post_card(config: &SiteConfig, post: &Post) -> String {
    format!(
        concat!(
            r#"<a href="{href}" class="{class}">"#,
            r#"<p class="text-xs uppercase tracking-wider text-cyan-300/80">{date}</p>"#,
            r#"<h3 class="mt-2 text-xl font-semibold text-white group-hover:text-cyan-100">{title}</h3>"#,
            r#"<p class="mt-3 text-sm leading-6 text-slate-300">{summary}</p>"#,
            r#"<p class="mt-5 text-sm text-cyan-300">Read article →</p>"#,
            "</a>"
        ),
        href = config.post_url(&post.slug),
        class = CARD_CLASS,
        date = html_escape(post.date_label()),
        title = html_escape(&post.title),
        summary = html_escape(&post.summary),
    )
}

/// Notice shown instead of cards when there is nothing published
fn empty_notice(config: &SiteConfig) -> String {
    format!(
        r#"<p class="rounded-xl border border-dashed border-slate-700 p-6 text-slate-400">No posts yet. Add a draft to <code>{}/</code> and run the workflow.</p>"#,
        html_escape(config.drafts_dir.trim_end_matches('/'))
    )
}

/// Full home page: profile hero plus one card per post
pub fn home_page(config: &SiteConfig, profile_html: &str, posts: &[Post]) -> String {
    let cards = if posts.is_empty() {
        empty_notice(config)
    } else {
        posts.iter().map(|post| post_card(config, post)).collect()
    };

    let body = format!(
        r#"
    <div class="pointer-events-none absolute inset-0 -z-10 {backdrop}"></div>
    <main class="mx-auto max-w-6xl p-6 md:p-10">
      <section class="glass overflow-hidden rounded-3xl border border-slate-700/70 bg-slate-900/65 p-8 shadow-2xl">
        <p class="inline-flex rounded-full border border-cyan-400/40 bg-cyan-400/10 px-3 py-1 text-xs font-medium tracking-wide text-cyan-300">{badge}</p>
        <h1 class="mt-4 text-4xl font-black tracking-tight">{headline}</h1>
        <p class="mt-3 max-w-3xl text-slate-300">{description}</p>
        <div class="prose mt-8 max-w-none">{profile}</div>
      </section>

      <section class="mt-10">
        <div class="mb-4 flex items-center justify-between">
          <h2 class="text-2xl font-bold">Published Posts</h2>
          <span class="rounded-full border border-slate-700 px-3 py-1 text-xs text-slate-400">{count} total</span>
        </div>
        <div class="grid gap-4 md:grid-cols-2">{cards}</div>
      </section>
    </main>
    "#,
        backdrop = HOME_BACKDROP,
        badge = html_escape(&config.badge),
        headline = html_escape(&config.headline),
        description = html_escape(&config.description),
        profile = profile_html,
        count = posts.len(),
        cards = cards,
    );

    layout(&config.title, &body)
}

/// Full page for one post
pub fn post_page(post: &Post) -> String {
    let body = format!(
        r#"
        <div class="pointer-events-none absolute inset-0 -z-10 {backdrop}"></div>
        <main class="mx-auto max-w-3xl p-6 md:p-10">
          {back}
          <article class="prose mt-6 rounded-3xl border border-slate-700/60 bg-slate-900/75 p-8 shadow-2xl">
            <h1>{title}</h1>
            <p class="text-slate-400">{date}</p>
            {content}
          </article>
        </main>
        "#,
        backdrop = POST_BACKDROP,
        back = link_to("/index.html", "← Back to home", BACK_LINK_CLASS),
        title = html_escape(&post.title),
        date = html_escape(&post.date),
        content = post.content,
    );

    layout(&post.title, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn post(slug: &str, title: &str, date: &str) -> Post {
        Post {
            title: title.to_string(),
            summary: "A <short> summary".to_string(),
            date: date.to_string(),
            tags: Vec::new(),
            content: "<p>Body</p>".to_string(),
            source: PathBuf::from(format!("{}.md", slug)),
            slug: slug.to_string(),
        }
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("Tom & Jerry", "<main></main>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(html.contains(".prose li"));
        assert!(html.contains("<main></main></body>"));
    }

    #[test]
    fn test_post_card() {
        let config = SiteConfig::default();
        let card = post_card(&config, &post("2024-hello", "Hello <World>", ""));
        assert!(card.starts_with(r#"<a href="/posts/2024-hello.html""#));
        assert!(card.contains(">Draft</p>"));
        assert!(card.contains("Hello &lt;World&gt;"));
        assert!(card.contains("A &lt;short&gt; summary"));
    }

    #[test]
    fn test_home_page_without_posts() {
        let config = SiteConfig::default();
        let html = home_page(&config, "<h1>Me</h1>", &[]);
        assert!(html.contains("No posts yet"));
        assert!(html.contains("<code>blog_drafts/</code>"));
        assert!(html.contains("0 total"));
        assert!(html.contains(r#"<div class="prose mt-8 max-w-none"><h1>Me</h1></div>"#));
        assert!(html.contains("<title>AI Blog Generator</title>"));
    }

    #[test]
    fn test_home_page_with_posts() {
        let config = SiteConfig::default();
        let posts = vec![post("b", "B", "2024-02-01"), post("a", "A", "2024-01-01")];
        let html = home_page(&config, "", &posts);
        assert!(!html.contains("No posts yet"));
        assert!(html.contains("2 total"));
        assert_eq!(html.matches("Read article").count(), 2);
        let b = html.find("/posts/b.html").unwrap();
        let a = html.find("/posts/a.html").unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_post_page() {
        let html = post_page(&post("x", "X & Y", "2024-03-03"));
        assert!(html.contains("<title>X &amp; Y</title>"));
        assert!(html.contains("<h1>X &amp; Y</h1>"));
        assert!(html.contains(r#"<p class="text-slate-400">2024-03-03</p>"#));
        assert!(html.contains("<p>Body</p>"));
        assert!(html.contains(r#"href="/index.html">← Back to home</a>"#));
    }
}
