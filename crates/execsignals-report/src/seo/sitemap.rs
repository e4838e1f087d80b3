//! Sitemap emission for the static marketing pages.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::ReportError;

use super::BASE_URL;

/// Write `sitemap.xml` listing the given site-relative paths ("" for the
/// root, "roles/vp-sales/" for a child page).
///
/// # Errors
///
/// Returns [`ReportError::Io`] if serialization or the final write fails.
pub fn write_sitemap(relative_paths: &[String], path: &Path) -> Result<(), ReportError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", "http://www.sitemaps.org/schemas/sitemap/0.9"));
    writer.write_event(Event::Start(urlset))?;

    for rel in relative_paths {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        let loc = format!("{BASE_URL}/{rel}");
        writer.write_event(Event::Text(BytesText::new(&loc)))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    fs::write(path, writer.into_inner())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str, paths: &[String]) -> String {
        let dir = std::env::temp_dir().join("execsignals-sitemap-test");
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join(name);
        write_sitemap(paths, &file).unwrap();
        fs::read_to_string(&file).unwrap()
    }

    #[test]
    fn sitemap_lists_urls() {
        let xml = render(
            "lists-urls.xml",
            &[String::new(), "roles/vp-sales/".to_string()],
        );
        assert!(xml.contains("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://execsignals.com/</loc>"));
        assert!(xml.contains("<loc>https://execsignals.com/roles/vp-sales/</loc>"));
        assert!(xml.contains("http://www.sitemaps.org/schemas/sitemap/0.9"));
    }

    #[test]
    fn sitemap_is_balanced() {
        let xml = render("balanced.xml", &["cities/boston/".to_string()]);
        assert_eq!(xml.matches("<url>").count(), xml.matches("</url>").count());
        assert!(xml.trim_end().ends_with("</urlset>"));
    }
}
