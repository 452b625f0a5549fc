//! Prompt construction and post post-processing

use chrono::NaiveDate;
use std::path::Path;

const FALLBACK_SLUG: &str = "generated-post";
const GENERATED_SUMMARY: &str = "AI-generated post from your analysis draft.";

/// Title from the first markdown heading, else from the draft filename
pub fn extract_title(draft: &str, draft_path: &Path) -> String {
    for line in draft.lines() {
        let stripped = line.trim();
        if stripped.starts_with('#') {
            return stripped.trim_start_matches(['#', ' ']).trim().to_string();
        }
    }

    let stem = draft_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    title_case(&stem.replace('-', " "))
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// Lowercase, dash-separated filename slug
pub fn slugify(value: &str) -> String {
    let slug = slug::slugify(value);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Output filename for a generated post: `YYYYMMDD-<slug>.md`
pub fn post_filename(title: &str, today: NaiveDate) -> String {
    format!("{}-{}.md", today.format("%Y%m%d"), slugify(title))
}

/// Instruction prompt sent to the provider
pub fn build_prompt(profile: &str, draft: &str, draft_filename: &str) -> String {
    format!(
        r#"
You are an expert technical blog writer.
Create a publication-ready markdown blog post using profile + draft `{draft_filename}`.
Return ONLY markdown with valid frontmatter:
---
title:
summary:
date: YYYY-MM-DD
tags: [ai, blog]
draft_source:
---

## Author profile
{profile}

## Draft analysis
{draft}
"#
    )
    .trim()
    .to_string()
}

/// Prepend front-matter unless the provider already produced some
pub fn ensure_frontmatter(output: &str, title: &str, draft_source: &str, today: NaiveDate) -> String {
    if output.starts_with("---") {
        return output.to_string();
    }

    format!(
        "---\ntitle: \"{}\"\nsummary: \"{}\"\ndate: {}\ntags: [ai, generated]\ndraft_source: {}\n---\n\n{}\n",
        title,
        GENERATED_SUMMARY,
        today.format("%Y-%m-%d"),
        draft_source,
        output
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FrontMatter;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_extract_title_from_heading() {
        let draft = "notes first\n\n  ## Why caching matters  \nmore";
        assert_eq!(
            extract_title(draft, Path::new("x.md")),
            "Why caching matters"
        );
    }

    #[test]
    fn test_extract_title_from_filename() {
        assert_eq!(
            extract_title("no headings here", Path::new("drafts/q3-CHURN-analysis.md")),
            "Q3 Churn Analysis"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Why Caching Matters!"), "why-caching-matters");
        assert_eq!(slugify("  --  "), "generated-post");
    }

    #[test]
    fn test_post_filename() {
        assert_eq!(
            post_filename("Hello, World", day()),
            "20240309-hello-world.md"
        );
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("I write about Rust.", "Draft body", "draft.md");
        assert!(prompt.starts_with("You are an expert technical blog writer."));
        assert!(prompt.contains("profile + draft `draft.md`"));
        assert!(prompt.contains("## Author profile\nI write about Rust."));
        assert!(prompt.ends_with("## Draft analysis\nDraft body"));
    }

    #[test]
    fn test_ensure_frontmatter_keeps_existing() {
        let output = "---\ntitle: Done\n---\nBody";
        assert_eq!(ensure_frontmatter(output, "T", "d.md", day()), output);
    }

    #[test]
    fn test_ensure_frontmatter_adds_block() {
        let post = ensure_frontmatter("## Body", "My Title", "blog_drafts/d.md", day());
        let (fm, body) = FrontMatter::parse(&post);
        assert_eq!(fm.title(), Some("My Title"));
        assert_eq!(fm.date(), Some("2024-03-09"));
        assert_eq!(fm.draft_source(), Some("blog_drafts/d.md"));
        assert_eq!(fm.tags(), vec!["ai", "generated"]);
        assert_eq!(body, "## Body");
    }
}
