//! Page builders for the static marketing site. Every page is standalone
//! HTML with breadcrumbs, an FAQ block and the matching schema.org
//! markup, so crawlers get structured data without a JS runtime.

use crate::esc;

use super::{slugify, BASE_URL, SITE_NAME};

fn breadcrumb_schema(crumbs: &[(&str, String)]) -> String {
    let items: Vec<String> = crumbs
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            format!(
                r#"{{"@type":"ListItem","position":{},"name":"{}","item":"{}"}}"#,
                i + 1,
                esc(name),
                url
            )
        })
        .collect();
    format!(
        r#"<script type="application/ld+json">{{"@context":"https://schema.org","@type":"BreadcrumbList","itemListElement":[{}]}}</script>"#,
        items.join(",")
    )
}

fn faq_schema(faqs: &[(String, String)]) -> String {
    let items: Vec<String> = faqs
        .iter()
        .map(|(q, a)| {
            format!(
                r#"{{"@type":"Question","name":"{}","acceptedAnswer":{{"@type":"Answer","text":"{}"}}}}"#,
                esc(q),
                esc(a)
            )
        })
        .collect();
    format!(
        r#"<script type="application/ld+json">{{"@context":"https://schema.org","@type":"FAQPage","mainEntity":[{}]}}</script>"#,
        items.join(",")
    )
}

fn faq_section(faqs: &[(String, String)]) -> String {
    let mut html = String::from("<section class=\"faq\"><h2>Frequently Asked Questions</h2>");
    for (q, a) in faqs {
        html.push_str(&format!(
            "<details><summary>{}</summary><p>{}</p></details>",
            esc(q),
            esc(a)
        ));
    }
    html.push_str("</section>");
    html
}

fn breadcrumb_html(crumbs: &[(&str, String)]) -> String {
    let links: Vec<String> = crumbs
        .iter()
        .map(|(name, url)| format!("<a href=\"{url}\">{}</a>", esc(name)))
        .collect();
    format!("<nav class=\"breadcrumbs\">{}</nav>", links.join(" &rsaquo; "))
}

fn page_shell(title: &str, description: &str, canonical: &str, body: &str, schema: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} | {SITE_NAME}</title>
<meta name="description" content="{description}">
<link rel="canonical" href="{canonical}">
{schema}
<style>
  body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; color: #1a1a1a; max-width: 760px; margin: 0 auto; padding: 24px; }}
  header {{ border-bottom: 2px solid #d4a054; padding-bottom: 12px; margin-bottom: 24px; }}
  h1 {{ color: #0c0f1a; }}
  .breadcrumbs {{ font-size: 13px; color: #888; margin-bottom: 16px; }}
  .breadcrumbs a {{ color: #888; }}
  .cta {{ background: #0c0f1a; color: #d4a054; padding: 16px 24px; border-radius: 8px; margin: 24px 0; }}
  .cta a {{ color: #d4a054; font-weight: 700; }}
  .faq details {{ margin: 8px 0; }}
  footer {{ margin-top: 32px; font-size: 12px; color: #888; border-top: 1px solid #eee; padding-top: 12px; }}
</style>
</head>
<body>
{body}
<footer>{SITE_NAME} &mdash; curated executive hiring signals, delivered every Monday.</footer>
</body>
</html>"#,
        title = esc(title),
        description = esc(description),
    )
}

fn cta_block() -> String {
    format!(
        "<div class=\"cta\">Get the Monday Brief: scored VP+ leads with salary, signals, and \
         placement-fee estimates. <a href=\"{BASE_URL}/#subscribe\">Subscribe</a></div>"
    )
}

/// A role landing page ("VP Sales leads for recruiters").
pub(super) fn role_page(role: &str, blurb: &str) -> String {
    let slug = slugify(role);
    let canonical = format!("{BASE_URL}/roles/{slug}/");
    let title = format!("{role} Leads for Executive Recruiters");
    let description = format!(
        "Weekly scored {role} job leads for executive search: {blurb}, with salary data and hiring signals."
    );
    let faqs = vec![
        (
            format!("How are {role} leads scored?"),
            "Each lead is scored on seniority, hiring signals like CEO reporting lines and team-build mandates, salary band, and company stage.".to_string(),
        ),
        (
            format!("How fresh are the {role} postings?"),
            "Leads come from the trailing seven days of postings, with repost flags when the same role has been open across multiple weeks.".to_string(),
        ),
    ];
    let crumbs = vec![
        ("Home", format!("{BASE_URL}/")),
        ("Roles", format!("{BASE_URL}/roles/")),
        (role, canonical.clone()),
    ];

    let body = format!(
        "{breadcrumbs}<header><h1>{title}</h1></header>\
         <p>{description}</p>{cta}{faq}",
        breadcrumbs = breadcrumb_html(&crumbs),
        title = esc(&title),
        description = esc(&description),
        cta = cta_block(),
        faq = faq_section(&faqs),
    );
    let schema = format!("{}{}", breadcrumb_schema(&crumbs), faq_schema(&faqs));
    page_shell(&title, &description, &canonical, &body, &schema)
}

/// A metro landing page.
pub(super) fn city_page(city: &str, state: &str) -> String {
    let slug = slugify(city);
    let canonical = format!("{BASE_URL}/cities/{slug}/");
    let title = format!("Executive Job Leads in {city}, {state}");
    let description = format!(
        "VP and C-level hiring activity in {city}: scored leads, salary benchmarks, and week-over-week velocity for recruiters."
    );
    let faqs = vec![
        (
            format!("Which executive roles are hiring in {city}?"),
            "Coverage spans sales, finance, engineering, marketing, operations, product and people leadership at the VP level and above.".to_string(),
        ),
        (
            format!("Does the brief separate {city} onsite roles from remote?"),
            "Yes. Remote roles are tracked as their own bucket so metro counts reflect real local hiring.".to_string(),
        ),
    ];
    let crumbs = vec![
        ("Home", format!("{BASE_URL}/")),
        ("Cities", format!("{BASE_URL}/cities/")),
        (city, canonical.clone()),
    ];

    let body = format!(
        "{breadcrumbs}<header><h1>{title}</h1></header>\
         <p>{description}</p>{cta}{faq}",
        breadcrumbs = breadcrumb_html(&crumbs),
        title = esc(&title),
        description = esc(&description),
        cta = cta_block(),
        faq = faq_section(&faqs),
    );
    let schema = format!("{}{}", breadcrumb_schema(&crumbs), faq_schema(&faqs));
    page_shell(&title, &description, &canonical, &body, &schema)
}

/// An industry landing page.
pub(super) fn industry_page(industry: &str) -> String {
    let slug = slugify(industry);
    let canonical = format!("{BASE_URL}/industries/{slug}/");
    let title = format!("{industry} Executive Hiring Leads");
    let description = format!(
        "Weekly {industry} VP+ hiring intelligence: scored leads, velocity trends, and top hiring companies for executive recruiters."
    );
    let faqs = vec![(
        format!("How is {industry} hiring velocity measured?"),
        "Posting counts over the lookback window, with a week-over-week change computed from fixed seven-day windows.".to_string(),
    )];
    let crumbs = vec![
        ("Home", format!("{BASE_URL}/")),
        ("Industries", format!("{BASE_URL}/industries/")),
        (industry, canonical.clone()),
    ];

    let body = format!(
        "{breadcrumbs}<header><h1>{title}</h1></header>\
         <p>{description}</p>{cta}{faq}",
        breadcrumbs = breadcrumb_html(&crumbs),
        title = esc(&title),
        description = esc(&description),
        cta = cta_block(),
        faq = faq_section(&faqs),
    );
    let schema = format!("{}{}", breadcrumb_schema(&crumbs), faq_schema(&faqs));
    page_shell(&title, &description, &canonical, &body, &schema)
}

/// A comparison page against another lead source.
pub(super) fn comparison_page(competitor: &str) -> String {
    let slug = slugify(competitor);
    let canonical = format!("{BASE_URL}/vs/{slug}/");
    let title = format!("{SITE_NAME} vs {competitor}");
    let description = format!(
        "How {SITE_NAME} compares to {competitor} for sourcing executive search leads: curation, scoring, and salary intelligence."
    );
    let faqs = vec![(
        format!("What does {SITE_NAME} add over {competitor}?"),
        "Every lead is deduplicated, scored against recruiter-relevance signals, and annotated with placement-fee estimates, so you start from a ranked shortlist instead of raw postings.".to_string(),
    )];
    let crumbs = vec![
        ("Home", format!("{BASE_URL}/")),
        (title.as_str(), canonical.clone()),
    ];

    let body = format!(
        "{breadcrumbs}<header><h1>{title}</h1></header>\
         <p>{description}</p>{cta}{faq}",
        breadcrumbs = breadcrumb_html(&crumbs),
        title = esc(&title),
        description = esc(&description),
        cta = cta_block(),
        faq = faq_section(&faqs),
    );
    let schema = format!("{}{}", breadcrumb_schema(&crumbs), faq_schema(&faqs));
    page_shell(&title, &description, &canonical, &body, &schema)
}

/// A hub page linking every child page of one dimension.
pub(super) fn hub_page<'a>(
    title: &str,
    segment: &str,
    items: impl Iterator<Item = &'a str>,
) -> String {
    let canonical = format!("{BASE_URL}/{segment}/");
    let description = format!("{title} covered by the {SITE_NAME} Monday Brief.");
    let crumbs = vec![
        ("Home", format!("{BASE_URL}/")),
        (title, canonical.clone()),
    ];

    let mut list = String::from("<ul>");
    for item in items {
        let slug = slugify(item);
        list.push_str(&format!(
            "<li><a href=\"{BASE_URL}/{segment}/{slug}/\">{}</a></li>",
            esc(item)
        ));
    }
    list.push_str("</ul>");

    let body = format!(
        "{breadcrumbs}<header><h1>{title}</h1></header>{list}{cta}",
        breadcrumbs = breadcrumb_html(&crumbs),
        title = esc(title),
        cta = cta_block(),
    );
    let schema = breadcrumb_schema(&crumbs);
    page_shell(title, &description, &canonical, &body, &schema)
}
