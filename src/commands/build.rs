//! Build the static site

use anyhow::Result;

use crate::generator::{BuildReport, Generator};
use crate::Site;

/// Build the home page and every post page
pub fn run(site: &Site) -> Result<BuildReport> {
    let start = std::time::Instant::now();

    let report = Generator::new(site).generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Wrote {} pages to {:?} in {:.2}s",
        report.pages_written,
        site.public_dir,
        duration.as_secs_f64()
    );

    Ok(report)
}
