//! Market Intel one-pager: browser-printable HTML (Print → Save as PDF).

use execsignals_db::MarketAnalytics;
use execsignals_leads::SummaryStats;

use crate::{esc, salary_k, signed_pct, signed_pct_f};

/// Render the one-page market intelligence document.
#[must_use]
pub fn render(analytics: &MarketAnalytics, summary: &SummaryStats, date_str: &str) -> String {
    let mut benchmarks = String::new();
    for b in &analytics.salary_benchmarks {
        let trend_class = if b.trend_pct > 0.0 {
            "up"
        } else if b.trend_pct < 0.0 {
            "down"
        } else {
            "flat"
        };
        benchmarks.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"median\">{}</td><td>{}</td><td class=\"{trend_class}\">{}</td></tr>\n",
            esc(b.role),
            salary_k(b.p25),
            salary_k(b.median),
            salary_k(b.p75),
            signed_pct_f(b.trend_pct),
        ));
    }

    let mut velocity = String::new();
    for v in &analytics.industry_velocity {
        velocity.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            esc(&v.industry),
            v.count,
            signed_pct(v.wow_pct),
        ));
    }

    let mut companies = String::new();
    for c in &analytics.top_companies {
        let marker = if c.is_new { " \u{2605}" } else { "" };
        companies.push_str(&format!(
            "<tr><td>{}{marker}</td><td>{}</td></tr>\n",
            esc(&c.company),
            c.distinct_roles,
        ));
    }

    let mut geo = String::new();
    for g in &analytics.geo_breakdown {
        geo.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            esc(&g.metro),
            g.count,
            signed_pct(g.wow_pct),
        ));
    }

    let mut stages = String::new();
    for s in &analytics.company_stage {
        stages.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}%</td></tr>\n",
            esc(s.stage),
            s.count,
            s.pct,
        ));
    }

    let mut tools = String::new();
    for t in &analytics.stack_trends {
        tools.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}%</td></tr>\n",
            esc(&t.tool),
            t.count,
            t.pct,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>ExecSignals Market Intel</title>
<style>
  @page {{ size: letter; margin: 0.5in; }}
  body {{ font-family: 'Plus Jakarta Sans', -apple-system, sans-serif; color: #1a1a1a; margin: 0; }}
  header {{ background: #0c0f1a; color: #d4a054; padding: 18px 24px; }}
  header h1 {{ margin: 0; font-family: 'DM Serif Display', serif; font-size: 22px; }}
  header p {{ margin: 4px 0 0; color: #a0a0c0; font-size: 12px; }}
  .stats {{ display: flex; gap: 24px; padding: 16px 24px; }}
  .stat {{ text-align: center; }}
  .stat .value {{ font-size: 24px; font-weight: 700; color: #0c0f1a; }}
  .stat .label {{ font-size: 10px; color: #888; text-transform: uppercase; letter-spacing: 0.5px; }}
  section {{ padding: 4px 24px 12px; }}
  h2 {{ font-size: 13px; color: #b7791f; border-bottom: 2px solid #0c0f1a; padding-bottom: 4px; text-transform: uppercase; letter-spacing: 0.5px; }}
  table {{ width: 100%; border-collapse: collapse; font-size: 12px; }}
  td {{ padding: 4px 8px; border-bottom: 1px solid #eee; }}
  td.median {{ font-weight: 700; }}
  td.up {{ color: #27763d; font-weight: 700; }}
  td.down {{ color: #c0392b; font-weight: 700; }}
  td.flat {{ color: #888; }}
  .columns {{ display: flex; gap: 24px; }}
  .columns > div {{ flex: 1; }}
  footer {{ padding: 12px 24px; font-size: 10px; color: #888; font-style: italic; }}
</style>
</head>
<body>
<header>
  <h1>ExecSignals &mdash; Market Intelligence Brief</h1>
  <p>Week of {date_str}</p>
</header>
<div class="stats">
  <div class="stat"><div class="value">{total}</div><div class="label">Top Leads</div></div>
  <div class="stat"><div class="value">${avg_salary}K</div><div class="label">Avg Salary</div></div>
  <div class="stat"><div class="value">{avg_score}</div><div class="label">Avg Score</div></div>
  <div class="stat"><div class="value">{growth_pct}%</div><div class="label">Growth Hires</div></div>
</div>
<section>
  <h2>Salary Benchmarks &mdash; VP+ Roles</h2>
  <table>
    <tr><td><b>Role</b></td><td><b>P25</b></td><td><b>Median</b></td><td><b>P75</b></td><td><b>4-Week Trend</b></td></tr>
    {benchmarks}
  </table>
</section>
<section>
  <h2>Hiring Velocity by Industry</h2>
  <table>
    <tr><td><b>Industry</b></td><td><b>Openings</b></td><td><b>WoW</b></td></tr>
    {velocity}
  </table>
</section>
<section class="columns">
  <div>
    <h2>Top Hiring Companies</h2>
    <table>{companies}</table>
  </div>
  <div>
    <h2>Geo Breakdown</h2>
    <table>{geo}</table>
  </div>
</section>
<section class="columns">
  <div>
    <h2>Company Stage Mix</h2>
    <table>{stages}</table>
  </div>
  <div>
    <h2>Stack Trends</h2>
    <table>{tools}</table>
  </div>
</section>
<footer>ExecSignals | The Monday Brief | Confidential &mdash; for subscriber use only.</footer>
</body>
</html>"#,
        total = summary.total,
        avg_salary = summary.avg_salary_k,
        avg_score = summary.avg_score,
        growth_pct = summary.growth_pct,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use execsignals_db::SalaryBenchmark;

    #[test]
    fn render_includes_sections_and_stats() {
        let analytics = MarketAnalytics {
            salary_benchmarks: vec![SalaryBenchmark {
                role: "VP Sales",
                p25: 150_000.0,
                median: 185_000.0,
                p75: 225_000.0,
                count: 12,
                trend_pct: 3.5,
            }],
            ..MarketAnalytics::default()
        };
        let summary = SummaryStats {
            total: 25,
            avg_salary_k: 210,
            avg_score: 34,
            growth_pct: 40,
            ..SummaryStats::default()
        };
        let html = render(&analytics, &summary, "Jul 27 \u{2013} Aug 03, 2026");
        assert!(html.contains("Salary Benchmarks"));
        assert!(html.contains("VP Sales"));
        assert!(html.contains("$185K"));
        assert!(html.contains("+3.5%"));
        assert!(html.contains(">25<"));
        assert!(html.contains("$210K"));
    }

    #[test]
    fn render_is_well_formed_enough_to_close_tags() {
        let html = render(
            &MarketAnalytics::default(),
            &SummaryStats::default(),
            "Week",
        );
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert_eq!(html.matches("<table>").count(), html.matches("</table>").count());
    }
}
