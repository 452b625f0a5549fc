//! Draft a new post with a text-generation provider

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::drafting::{self, DraftError, Provider};
use crate::Site;

/// Inputs for one drafting run
#[derive(Debug, Clone)]
pub struct DraftOptions {
    pub profile: PathBuf,
    pub draft: PathBuf,
    pub outdir: PathBuf,
    pub dry_run: bool,
}

impl DraftOptions {
    /// Fill unset paths from the site configuration
    pub fn resolve(
        site: &Site,
        draft: PathBuf,
        profile: Option<PathBuf>,
        outdir: Option<PathBuf>,
        dry_run: bool,
    ) -> Self {
        Self {
            profile: profile
                .map(|p| site.base_dir.join(p))
                .unwrap_or_else(|| site.profile_path.clone()),
            draft: site.base_dir.join(draft),
            outdir: outdir
                .map(|p| site.base_dir.join(p))
                .unwrap_or_else(|| site.posts_dir.clone()),
            dry_run,
        }
    }
}

/// Result of a drafting run
#[derive(Debug, Clone, PartialEq)]
pub enum DraftOutcome {
    /// `--dry-run`: the finished post, not written anywhere
    Printed(String),
    /// Path of the written post
    Written(PathBuf),
}

impl DraftOutcome {
    /// What the command prints on stdout
    pub fn message(&self) -> String {
        match self {
            DraftOutcome::Printed(post) => post.clone(),
            DraftOutcome::Written(path) => {
                serde_json::json!({ "generated_post": path.to_string_lossy() }).to_string()
            }
        }
    }
}

/// Generate a post from a draft.
///
/// `connect` is only called once both input files have been read, so a
/// missing file is reported before any provider misconfiguration.
pub async fn run<F>(options: &DraftOptions, connect: F) -> Result<DraftOutcome>
where
    F: FnOnce() -> Result<Provider, DraftError>,
{
    let profile = read_text(&options.profile)?;
    let draft = read_text(&options.draft)?;

    let title = drafting::extract_title(&draft, &options.draft);
    let draft_name = options
        .draft
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let prompt = drafting::build_prompt(&profile, &draft, &draft_name);
    tracing::debug!("Prompt is {} bytes", prompt.len());

    let provider = connect()?;
    let raw = provider.generate(&prompt).await?;

    let today = Utc::now().date_naive();
    let post = drafting::ensure_frontmatter(
        &raw,
        &title,
        &options.draft.to_string_lossy(),
        today,
    );

    if options.dry_run {
        return Ok(DraftOutcome::Printed(post));
    }

    let output_path = write_post(&options.outdir, &title, &post, today)?;
    tracing::info!("Wrote draft post {:?}", output_path);

    Ok(DraftOutcome::Written(output_path))
}

/// Read a required input file, trimmed
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DraftError::MissingInput(path.to_path_buf()).into());
    }
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(text.trim().to_string())
}

/// Write a generated post as `<outdir>/YYYYMMDD-<slug>.md`
pub fn write_post(outdir: &Path, title: &str, content: &str, today: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create directory {:?}", outdir))?;

    let path = outdir.join(drafting::post_filename(title, today));
    fs::write(&path, format!("{}\n", content.trim()))
        .with_context(|| format!("Failed to write {:?}", path))?;

    Ok(path)
}
