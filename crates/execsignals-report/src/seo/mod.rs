//! Static marketing pages: role, city, industry and comparison pages
//! plus hub pages and a sitemap. Pure templating over fixed dimension
//! tables; the jobs data never feeds these.

mod pages;
mod sitemap;

use std::fs;
use std::path::{Path, PathBuf};

use crate::ReportError;

pub use sitemap::write_sitemap;

pub const SITE_NAME: &str = "ExecSignals";
pub const BASE_URL: &str = "https://execsignals.com";

/// Executive roles with a dedicated landing page.
pub const ROLE_PAGES: &[(&str, &str)] = &[
    ("VP Sales", "VP of Sales and CRO searches"),
    ("CFO", "CFO and VP Finance searches"),
    ("VP Engineering", "VP Engineering and CTO searches"),
    ("VP Marketing", "VP Marketing and CMO searches"),
    ("VP Operations", "VP Operations and COO searches"),
    ("VP Product", "VP Product and CPO searches"),
    ("VP People/HR", "VP People and CHRO searches"),
];

/// Metros with a dedicated landing page.
pub const CITY_PAGES: &[(&str, &str)] = &[
    ("New York", "NY"),
    ("San Francisco", "CA"),
    ("Boston", "MA"),
    ("Chicago", "IL"),
    ("Austin", "TX"),
    ("Los Angeles", "CA"),
    ("Seattle", "WA"),
    ("Atlanta", "GA"),
];

/// Industries with a dedicated landing page.
pub const INDUSTRY_PAGES: &[&str] = &[
    "Software / SaaS",
    "Financial Services",
    "Healthcare",
    "Manufacturing",
    "Consumer Goods",
    "Energy",
];

/// Competing lead sources covered by comparison pages.
pub const COMPARISON_PAGES: &[(&str, &str)] = &[
    ("LinkedIn Recruiter", "linkedin-recruiter"),
    ("Job Board Scraping", "job-board-scraping"),
    ("Manual Sourcing", "manual-sourcing"),
];

/// URL slug for a display name: lowercase, alphanumerics kept, runs of
/// anything else collapsed to single hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_hyphen = true;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            slug.push('-');
            last_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Write the full static site under `output_dir` and return the paths
/// written (pages plus `sitemap.xml`).
///
/// # Errors
///
/// Returns [`ReportError::Io`] if a directory or file cannot be written.
pub fn write_site(output_dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();
    let mut sitemap_paths: Vec<String> = vec![String::new()];

    let mut write_page = |rel: &str, html: String| -> Result<(), ReportError> {
        let path = output_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, html)?;
        written.push(path);
        Ok(())
    };

    for (role, blurb) in ROLE_PAGES {
        let slug = slugify(role);
        let rel = format!("roles/{slug}/index.html");
        write_page(&rel, pages::role_page(role, blurb))?;
        sitemap_paths.push(format!("roles/{slug}/"));
    }
    write_page(
        "roles/index.html",
        pages::hub_page("Executive Roles", "roles", ROLE_PAGES.iter().map(|(r, _)| *r)),
    )?;
    sitemap_paths.push("roles/".to_string());

    for (city, state) in CITY_PAGES {
        let slug = slugify(city);
        let rel = format!("cities/{slug}/index.html");
        write_page(&rel, pages::city_page(city, state))?;
        sitemap_paths.push(format!("cities/{slug}/"));
    }
    write_page(
        "cities/index.html",
        pages::hub_page("Metro Areas", "cities", CITY_PAGES.iter().map(|(c, _)| *c)),
    )?;
    sitemap_paths.push("cities/".to_string());

    for industry in INDUSTRY_PAGES {
        let slug = slugify(industry);
        let rel = format!("industries/{slug}/index.html");
        write_page(&rel, pages::industry_page(industry))?;
        sitemap_paths.push(format!("industries/{slug}/"));
    }
    write_page(
        "industries/index.html",
        pages::hub_page("Industries", "industries", INDUSTRY_PAGES.iter().copied()),
    )?;
    sitemap_paths.push("industries/".to_string());

    for (competitor, slug) in COMPARISON_PAGES {
        let rel = format!("vs/{slug}/index.html");
        write_page(&rel, pages::comparison_page(competitor))?;
        sitemap_paths.push(format!("vs/{slug}/"));
    }

    let sitemap_path = output_dir.join("sitemap.xml");
    sitemap::write_sitemap(&sitemap_paths, &sitemap_path)?;
    written.push(sitemap_path);

    Ok(written)
}
