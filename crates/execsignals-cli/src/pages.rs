//! The `pages` command: static marketing site generation.

use std::path::PathBuf;

use execsignals_core::AppConfig;
use execsignals_report::seo;

/// Generate the static marketing pages plus sitemap.
///
/// # Errors
///
/// Returns an error if any page or the sitemap cannot be written.
pub(crate) fn run(config: &AppConfig, output_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir.join("site"));

    let written = seo::write_site(&output_dir)?;
    println!(
        "Wrote {} pages (plus sitemap) to {}/",
        written.len().saturating_sub(1),
        output_dir.display()
    );
    Ok(())
}
