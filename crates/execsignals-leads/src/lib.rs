//! The per-lead pipeline: seniority correction, scoring, deduplication,
//! filtering and display enrichment. Everything in this crate is a pure
//! function of its inputs — no I/O, no clocks, no globals.

pub mod correct;
pub mod dedup;
pub mod enrich;
pub mod filters;
pub mod pipeline;
pub mod score;
pub mod summary;

pub use correct::correct_seniority;
pub use dedup::deduplicate;
pub use filters::{filter_signals_for_role, is_false_positive, is_search_firm};
pub use pipeline::{prepare_brief_leads, prepare_hot_leads};
pub use score::{apply_freshness_bonus, score_lead, SCORE_BASE};
pub use summary::{summary_stats, SummaryStats};
