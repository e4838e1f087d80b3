//! Pipeline orchestration: the fixed order of per-lead operations for
//! each report variant.

use std::collections::HashMap;

use chrono::NaiveDate;

use execsignals_core::Lead;

use crate::correct::correct_seniority;
use crate::dedup::deduplicate;
use crate::filters::{is_false_positive, is_search_firm};
use crate::score::{apply_freshness_bonus, score_lead};

/// Score and rank leads for the legacy Hot Leads report: score, sort
/// descending, optional top-N cap. No correction, dedup or freshness —
/// the weekly brief owns those.
#[must_use]
pub fn prepare_hot_leads(mut leads: Vec<Lead>, top: Option<usize>) -> Vec<Lead> {
    for lead in &mut leads {
        lead.score = score_lead(lead);
    }
    leads.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(n) = top {
        leads.truncate(n);
    }
    leads
}

/// Full Monday Brief pipeline.
///
/// Order matters: correction happens before scoring (the seniority bonus
/// must use the corrected tier), dedup before the false-positive filter
/// (so a filtered posting can't have swallowed a legitimate one's dedup
/// slot — the filter runs on survivors), and repost counts attach after
/// filtering so only displayed leads carry them.
#[must_use]
pub fn prepare_brief_leads(
    mut leads: Vec<Lead>,
    reference_date: NaiveDate,
    repost_counts: &HashMap<(String, String), i64>,
    top: Option<usize>,
) -> Vec<Lead> {
    for lead in &mut leads {
        correct_seniority(lead);
        lead.score = score_lead(lead);
        apply_freshness_bonus(lead, reference_date);
        lead.is_search_firm = is_search_firm(lead);
    }
    leads.sort_by(|a, b| b.score.cmp(&a.score));

    let mut leads = deduplicate(leads);
    leads.retain(|l| !is_false_positive(l));

    for lead in &mut leads {
        lead.repost_count = repost_counts
            .get(&lead.identity_key())
            .copied()
            .unwrap_or(0);
    }

    if let Some(n) = top {
        leads.truncate(n);
    }
    leads
}

#[cfg(test)]
mod tests {
    use super::*;
    use execsignals_core::SignalTag;

    fn tag(signal_type: &str, signal_id: &str) -> SignalTag {
        SignalTag {
            signal_type: signal_type.to_string(),
            signal_id: signal_id.to_string(),
            signal_value: None,
        }
    }

    fn lead(company: &str, title: &str, tier: &str, salary: i64) -> Lead {
        Lead {
            title: Some(title.to_string()),
            company_name: Some(company.to_string()),
            company_name_normalized: Some(company.to_lowercase()),
            seniority_tier: Some(tier.to_string()),
            annual_salary_max: Some(salary),
            date_posted: Some("2026-08-01".to_string()),
            ..Lead::default()
        }
    }

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
    }

    #[test]
    fn hot_leads_scores_and_sorts() {
        let leads = vec![
            lead("acme", "VP of Sales", "vp", 150_000),
            lead("northwind", "CFO", "c_level", 300_000),
        ];
        let ranked = prepare_hot_leads(leads, None);
        assert_eq!(ranked[0].company_name.as_deref(), Some("northwind"));
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn hot_leads_top_n_caps_output() {
        let leads = (0..10)
            .map(|i| lead(&format!("co{i}"), "VP of Sales", "vp", 150_000))
            .collect();
        assert_eq!(prepare_hot_leads(leads, Some(3)).len(), 3);
    }

    #[test]
    fn brief_pipeline_dedupes_ten_to_nine() {
        let mut leads: Vec<Lead> = (0..8)
            .map(|i| lead(&format!("co{i}"), "VP of Marketing", "vp", 150_000 + i * 1000))
            .collect();
        // Duplicate pair: the richer instance must survive.
        let mut strong = lead("acme", "VP of Sales", "vp", 300_000);
        strong.signals = vec![tag("team_structure", "reports_ceo")];
        let weak = lead("acme", "VP of Sales", "vp", 150_000);
        leads.push(weak);
        leads.push(strong);

        let result = prepare_brief_leads(leads, reference(), &HashMap::new(), None);
        assert_eq!(result.len(), 9);
        let acme = result
            .iter()
            .find(|l| l.company_name_normalized.as_deref() == Some("acme"))
            .unwrap();
        assert!(acme.has_signal("reports_ceo"));
    }

    #[test]
    fn brief_pipeline_corrects_before_scoring() {
        let mut misclassified = lead("acme", "Director, CEO Initiatives", "c_level", 150_000);
        misclassified.signals = vec![tag("team_structure", "reports_ceo")];
        let result = prepare_brief_leads(
            vec![misclassified],
            reference(),
            &HashMap::new(),
            None,
        );
        assert_eq!(result[0].seniority_tier.as_deref(), Some("vp"));
        // vp bonus (5), not c_level (15): 10 + 5 + 10 signal + 4 salary + 10 freshness
        assert_eq!(result[0].score, 39);
    }

    #[test]
    fn brief_pipeline_filters_false_positives_after_dedup() {
        let real = lead("acme", "VP of Sales", "vp", 200_000);
        let program = lead("acme", "Sales Leadership Certification Program", "vp", 400_000);
        let result =
            prepare_brief_leads(vec![real, program], reference(), &HashMap::new(), None);
        // Different titles, different dedup keys; only the program is dropped.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title.as_deref(), Some("VP of Sales"));
    }

    #[test]
    fn brief_pipeline_attaches_repost_counts() {
        let reposts = HashMap::from([(
            ("acme".to_string(), "vp of sales".to_string()),
            3_i64,
        )]);
        let result = prepare_brief_leads(
            vec![
                lead("acme", "VP of Sales", "vp", 200_000),
                lead("northwind", "CFO", "c_level", 250_000),
            ],
            reference(),
            &reposts,
            None,
        );
        let acme = result
            .iter()
            .find(|l| l.company_name_normalized.as_deref() == Some("acme"))
            .unwrap();
        let northwind = result
            .iter()
            .find(|l| l.company_name_normalized.as_deref() == Some("northwind"))
            .unwrap();
        assert_eq!(acme.repost_count, 3);
        // Absent from the map (e.g. same-day multi-location only) means 0.
        assert_eq!(northwind.repost_count, 0);
    }

    #[test]
    fn repost_count_does_not_affect_score() {
        let reposts = HashMap::from([(
            ("acme".to_string(), "vp of sales".to_string()),
            5_i64,
        )]);
        let base = prepare_brief_leads(
            vec![lead("acme", "VP of Sales", "vp", 200_000)],
            reference(),
            &HashMap::new(),
            None,
        );
        let flagged = prepare_brief_leads(
            vec![lead("acme", "VP of Sales", "vp", 200_000)],
            reference(),
            &reposts,
            None,
        );
        assert_eq!(base[0].score, flagged[0].score);
        assert_eq!(flagged[0].repost_count, 5);
    }

    #[test]
    fn brief_pipeline_flags_search_firms() {
        let result = prepare_brief_leads(
            vec![lead("Korn Ferry", "VP of Sales", "vp", 200_000)],
            reference(),
            &HashMap::new(),
            None,
        );
        assert!(result[0].is_search_firm);
    }

    #[test]
    fn brief_pipeline_top_n_runs_last() {
        let leads = vec![
            lead("a", "VP of Sales", "vp", 120_000),
            lead("b", "Sales Internship Program", "vp", 500_000),
            lead("c", "CFO", "c_level", 300_000),
        ];
        let result = prepare_brief_leads(leads, reference(), &HashMap::new(), Some(2));
        // The internship is filtered before truncation, so both real leads stay.
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|l| l.title.as_deref() != Some("Sales Internship Program")));
    }
}
