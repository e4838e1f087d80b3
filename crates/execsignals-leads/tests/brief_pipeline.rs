//! Offline end-to-end tests for the brief pipeline: correction, scoring,
//! dedup, filtering and repost attachment working together. No database
//! required — leads are constructed in memory the way the fetch layer
//! would assemble them.

use std::collections::HashMap;

use chrono::NaiveDate;

use execsignals_core::{Lead, SignalTag};
use execsignals_leads::{prepare_brief_leads, summary_stats};

fn tag(signal_type: &str, signal_id: &str) -> SignalTag {
    SignalTag {
        signal_type: signal_type.to_string(),
        signal_id: signal_id.to_string(),
        signal_value: None,
    }
}

fn lead(company: &str, title: &str, tier: &str, salary_max: i64, posted: &str) -> Lead {
    Lead {
        title: Some(title.to_string()),
        company_name: Some(company.to_string()),
        company_name_normalized: Some(company.to_lowercase()),
        seniority_tier: Some(tier.to_string()),
        annual_salary_max: Some(salary_max),
        date_posted: Some(posted.to_string()),
        ..Lead::default()
    }
}

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 3).unwrap()
}

#[test]
fn full_run_is_deterministic() {
    let build = || {
        let mut a = lead("acme", "VP of Sales", "vp", 250_000, "2026-08-01");
        a.signals = vec![
            tag("team_structure", "reports_ceo"),
            tag("hiring_signals", "growth_hire"),
        ];
        let b = lead("northwind", "CFO", "c_level", 320_000, "2026-07-29");
        prepare_brief_leads(vec![a, b], reference(), &HashMap::new(), None)
    };
    let first = build();
    let second = build();
    let scores_first: Vec<i64> = first.iter().map(|l| l.score).collect();
    let scores_second: Vec<i64> = second.iter().map(|l| l.score).collect();
    assert_eq!(scores_first, scores_second);
}

#[test]
fn misclassified_c_level_scores_as_vp_and_real_c_level_outranks_it() {
    let mut fake = lead("acme", "Director, CEO Initiatives", "c_level", 200_000, "2026-08-01");
    fake.signals = vec![tag("team_structure", "reports_ceo")];
    let mut real = lead("northwind", "Chief Executive Officer", "c_level", 200_000, "2026-08-01");
    real.signals = vec![tag("team_structure", "reports_ceo")];

    let result = prepare_brief_leads(vec![fake, real], reference(), &HashMap::new(), None);
    assert_eq!(result[0].title.as_deref(), Some("Chief Executive Officer"));
    assert_eq!(result[0].seniority_tier.as_deref(), Some("c_level"));
    assert_eq!(result[1].seniority_tier.as_deref(), Some("vp"));
    // Same inputs apart from the tier correction: 10-point seniority gap.
    assert_eq!(result[0].score - result[1].score, 10);
}

#[test]
fn dedup_filter_and_truncation_compose() {
    let mut leads: Vec<Lead> = (0..6_i64)
        .map(|i| {
            lead(
                &format!("company{i}"),
                "VP of Marketing",
                "vp",
                150_000 + i * 10_000,
                "2026-08-01",
            )
        })
        .collect();
    // A duplicate that must collapse.
    leads.push(lead("company0", "VP of Marketing", "vp", 400_000, "2026-08-01"));
    // A false positive that must not survive.
    leads.push(lead(
        "trainingco",
        "Sales Leadership Certification Program",
        "vp",
        500_000,
        "2026-08-01",
    ));

    let result = prepare_brief_leads(leads, reference(), &HashMap::new(), Some(4));
    assert_eq!(result.len(), 4);
    assert!(result
        .iter()
        .all(|l| l.title.as_deref() == Some("VP of Marketing")));
    // The $400K duplicate won company0's slot.
    let company0 = result
        .iter()
        .find(|l| l.company_name_normalized.as_deref() == Some("company0"))
        .expect("company0 should rank in the top 4");
    assert_eq!(company0.annual_salary_max, Some(400_000));
}

#[test]
fn repost_badges_come_from_the_observation_map() {
    // Three distinct scrape dates → count 3. A same-day multi-location
    // role never enters the map, so its count stays 0.
    let reposts = HashMap::from([(
        ("acme".to_string(), "vp of sales".to_string()),
        3_i64,
    )]);
    let result = prepare_brief_leads(
        vec![
            lead("acme", "VP of Sales", "vp", 200_000, "2026-08-01"),
            lead("multico", "VP of Ops", "vp", 200_000, "2026-08-01"),
        ],
        reference(),
        &reposts,
        None,
    );
    let acme = result
        .iter()
        .find(|l| l.company_name_normalized.as_deref() == Some("acme"))
        .unwrap();
    let multico = result
        .iter()
        .find(|l| l.company_name_normalized.as_deref() == Some("multico"))
        .unwrap();
    assert_eq!(acme.repost_count, 3);
    assert_eq!(multico.repost_count, 0);
}

#[test]
fn summary_reflects_pipeline_output() {
    let mut a = lead("acme", "VP of Sales", "vp", 200_000, "2026-08-01");
    a.signals = vec![tag("hiring_signals", "growth_hire")];
    let b = lead("northwind", "CFO", "c_level", 300_000, "2026-08-01");

    let leads = prepare_brief_leads(vec![a, b], reference(), &HashMap::new(), None);
    let stats = summary_stats(&leads);
    assert_eq!(stats.total, 2);
    assert_eq!(stats.avg_salary_k, 250);
    assert_eq!(stats.c_level_count, 1);
    assert_eq!(stats.growth_pct, 50);
}
