//! Summary statistics over the final lead list (not the full dataset —
//! market analytics cover that independently).

use execsignals_core::display::title_case_id;
use execsignals_core::lead::SIGNAL_TYPE_SEGMENT;
use execsignals_core::{seniority, Lead};

const SEGMENT_DISPLAY: &[(&str, &str)] = &[
    ("enterprise", "Enterprise"),
    ("smb", "SMB"),
    ("mid_market", "Mid-Market"),
    ("fortune_500", "Fortune 500"),
    ("startup", "Startup"),
];

/// Headline numbers for the email and intel surfaces.
#[derive(Debug, Clone, Default)]
pub struct SummaryStats {
    pub total: usize,
    /// Mean of the best salary figure across salaried leads, in $K.
    pub avg_salary_k: i64,
    pub avg_score: i64,
    /// Share of leads carrying a growth_hire signal, whole percent.
    pub growth_pct: i64,
    /// Leads at c_level or evp tier.
    pub c_level_count: usize,
    /// Seniority display name → lead count, descending.
    pub seniority: Vec<(String, i64)>,
    /// Segment display name → whole-percent share, top four.
    pub segment_pct: Vec<(String, i64)>,
}

/// Compute summary statistics from the scored lead list.
#[must_use]
pub fn summary_stats(leads: &[Lead]) -> SummaryStats {
    let total = leads.len();
    if total == 0 {
        return SummaryStats::default();
    }

    let salaries: Vec<i64> = leads
        .iter()
        .map(Lead::best_salary)
        .filter(|&s| s > 0)
        .collect();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let avg_salary_k = if salaries.is_empty() {
        0
    } else {
        (salaries.iter().sum::<i64>() as f64 / salaries.len() as f64 / 1000.0) as i64
    };

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let avg_score = (leads.iter().map(|l| l.score).sum::<i64>() as f64 / total as f64) as i64;

    let growth_count = leads.iter().filter(|l| l.has_signal("growth_hire")).count();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    let growth_pct = (growth_count as f64 / total as f64 * 100.0).round() as i64;

    let c_level_count = leads
        .iter()
        .filter(|l| matches!(l.seniority_tier.as_deref(), Some("c_level" | "evp")))
        .count();

    let seniority = count_by(leads.iter().map(|l| {
        seniority::display_name(l.seniority_tier.as_deref().unwrap_or("unknown"))
    }));

    // One segment per lead: the first segment-typed tag wins.
    let segment_labels = leads.iter().filter_map(|l| {
        l.signals
            .iter()
            .find(|s| s.signal_type == SIGNAL_TYPE_SEGMENT)
            .map(|s| segment_display(&s.signal_id))
    });
    let segment_counts = count_by(segment_labels);
    let seg_total: i64 = segment_counts.iter().map(|(_, c)| c).sum::<i64>().max(1);
    let segment_pct = segment_counts
        .into_iter()
        .take(4)
        .map(|(label, count)| {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            let pct = (count as f64 / seg_total as f64 * 100.0).round() as i64;
            (label, pct)
        })
        .collect();

    SummaryStats {
        total,
        avg_salary_k,
        avg_score,
        growth_pct,
        c_level_count,
        seniority,
        segment_pct,
    }
}

fn segment_display(id: &str) -> String {
    SEGMENT_DISPLAY
        .iter()
        .find(|(k, _)| *k == id)
        .map_or_else(|| title_case_id(id), |(_, v)| (*v).to_string())
}

/// Count occurrences, returned descending by count with first-seen order
/// breaking ties.
fn count_by<I: Iterator<Item = String>>(items: I) -> Vec<(String, i64)> {
    let mut counts: Vec<(String, i64)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(label, _)| *label == item) {
            Some((_, c)) => *c += 1,
            None => counts.push((item, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
