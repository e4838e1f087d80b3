//! The attachable CSV: one row per lead, fixed column set.

use std::path::Path;

use execsignals_core::display::title_case_id;
use execsignals_core::Lead;
use execsignals_leads::enrich::{
    extract_extra_signals, extract_hiring_signal, extract_key_tools, extract_team_structure,
    format_location, format_salary,
};

use crate::ReportError;

const HEADERS: &[&str] = &[
    "Score",
    "Title",
    "Company",
    "Location",
    "Seniority",
    "Salary Range",
    "Hiring Signal",
    "Team Structure",
    "Segment",
    "Key Tools",
    "Source URL",
    "Date Posted",
];

/// Write the lead list to `path` as CSV.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] if writing fails.
pub fn write_leads_csv(leads: &[Lead], path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;

    for lead in leads {
        let extras = extract_extra_signals(lead);
        writer.write_record(&[
            lead.score.to_string(),
            lead.title.clone().unwrap_or_default(),
            lead.company_name
                .clone()
                .unwrap_or_else(|| "Confidential".to_string()),
            format_location(lead),
            title_case_id(lead.seniority_tier.as_deref().unwrap_or("")),
            format_salary(lead.annual_salary_min, lead.annual_salary_max),
            extract_hiring_signal(lead),
            extract_team_structure(lead),
            extras.segment.join(", "),
            extract_key_tools(lead, 5),
            lead.source_url.clone().unwrap_or_default(),
            lead.date_posted
                .as_deref()
                .map(|d| d.chars().take(10).collect::<String>())
                .unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_cover_the_fixed_column_set() {
        assert_eq!(HEADERS.len(), 12);
        assert_eq!(HEADERS[0], "Score");
        assert_eq!(HEADERS[11], "Date Posted");
    }
}
