//! Deduplication by posting identity.
//!
//! The same opening is routinely posted once per location or job board;
//! the report must show one entry per real opening, represented by its
//! highest-scoring instance.

use std::collections::HashMap;

use execsignals_core::Lead;

/// Collapse leads to one per (normalized company, title) key, keeping the
/// highest-scoring instance, and re-sort descending by score.
///
/// Replacement happens only on a strictly greater score, so on ties the
/// first instance encountered wins. Running the function on its own
/// output returns the same set.
#[must_use]
pub fn deduplicate(leads: Vec<Lead>) -> Vec<Lead> {
    let mut best: HashMap<(String, String), Lead> = HashMap::new();
    let mut order: Vec<(String, String)> = Vec::new();

    for lead in leads {
        let key = lead.identity_key();
        match best.get(&key) {
            Some(current) if lead.score <= current.score => {}
            Some(_) => {
                best.insert(key, lead);
            }
            None => {
                order.push(key.clone());
                best.insert(key, lead);
            }
        }
    }

    // Rebuild in first-seen order so the sort below breaks score ties the
    // same way on every run.
    let mut deduped: Vec<Lead> = order
        .into_iter()
        .filter_map(|key| best.remove(&key))
        .collect();
    deduped.sort_by(|a, b| b.score.cmp(&a.score));
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(company: &str, title: &str, score: i64) -> Lead {
        Lead {
            title: Some(title.to_string()),
            company_name_normalized: Some(company.to_string()),
            score,
            ..Lead::default()
        }
    }

    #[test]
    fn keeps_highest_scoring_instance() {
        let leads = vec![
            lead("acme", "VP of Sales", 35),
            lead("acme", "VP of Sales", 40),
        ];
        let deduped = deduplicate(leads);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].score, 40);
    }

    #[test]
    fn first_wins_on_score_tie() {
        let mut first = lead("acme", "VP of Sales", 40);
        first.location_metro = Some("Boston".to_string());
        let mut second = lead("acme", "VP of Sales", 40);
        second.location_metro = Some("Austin".to_string());

        let deduped = deduplicate(vec![first, second]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].location_metro.as_deref(), Some("Boston"));
    }

    #[test]
    fn key_is_case_insensitive() {
        let leads = vec![
            lead("Acme", "VP of Sales", 30),
            lead("acme", "vp of sales", 45),
        ];
        let deduped = deduplicate(leads);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].score, 45);
    }

    #[test]
    fn distinct_keys_all_survive() {
        let leads = vec![
            lead("acme", "VP of Sales", 30),
            lead("acme", "VP of Marketing", 25),
            lead("northwind", "VP of Sales", 20),
        ];
        assert_eq!(deduplicate(leads).len(), 3);
    }

    #[test]
    fn output_is_sorted_descending_by_score() {
        let leads = vec![
            lead("a", "t1", 15),
            lead("b", "t2", 45),
            lead("c", "t3", 30),
        ];
        let scores: Vec<i64> = deduplicate(leads).iter().map(|l| l.score).collect();
        assert_eq!(scores, vec![45, 30, 15]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let leads = vec![
            lead("acme", "VP of Sales", 40),
            lead("acme", "VP of Sales", 35),
            lead("northwind", "CFO", 50),
        ];
        let once = deduplicate(leads);
        let twice = deduplicate(once.clone());
        assert_eq!(once.len(), twice.len());
        let keys_once: Vec<_> = once.iter().map(Lead::identity_key).collect();
        let keys_twice: Vec<_> = twice.iter().map(Lead::identity_key).collect();
        assert_eq!(keys_once, keys_twice);
    }

    #[test]
    fn no_two_survivors_share_a_key() {
        let leads = vec![
            lead("acme", "VP of Sales", 40),
            lead("ACME", "VP OF SALES", 38),
            lead("acme", "VP of Sales", 35),
            lead("northwind", "CFO", 20),
        ];
        let deduped = deduplicate(leads);
        let mut keys: Vec<_> = deduped.iter().map(Lead::identity_key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn ten_leads_with_one_duplicate_pair_yield_nine() {
        let mut leads: Vec<Lead> = (0..8)
            .map(|i| lead(&format!("co{i}"), "VP of Sales", 20 + i))
            .collect();
        leads.push(lead("acme", "VP of Sales", 40));
        leads.push(lead("acme", "VP of Sales", 35));

        let deduped = deduplicate(leads);
        assert_eq!(deduped.len(), 9);
        let acme = deduped
            .iter()
            .find(|l| l.company_name_normalized.as_deref() == Some("acme"))
            .unwrap();
        assert_eq!(acme.score, 40);
    }
}
