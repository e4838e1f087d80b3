//! The two-sheet Excel workbook: Top Leads detail plus the Market Intel
//! summary, with the brand palette carried through fills and fonts.

use std::path::Path;

use chrono::NaiveDate;

use execsignals_core::display::industry_display;
use execsignals_core::{seniority, Lead};
use execsignals_db::MarketAnalytics;
use execsignals_leads::enrich::{
    clean_location, estimate_placement_fee, extract_extra_signals, extract_hiring_signal,
    extract_team_structure, format_company_name, signal_note,
};
use execsignals_leads::filters::filter_signals_for_role;
use execsignals_leads::score::days_since_posted;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Url, Workbook, Worksheet};

use crate::{key_takeaways, salary_k, signed_pct, signed_pct_f, ReportError};

const NAVY: Color = Color::RGB(0x0C0F1A);
const AMBER: Color = Color::RGB(0xD4_A054);
const LIGHT_AMBER: Color = Color::RGB(0xE2_A84B);
const BLUE: Color = Color::RGB(0x5B_8DEF);
const DARK_TEXT: Color = Color::RGB(0x1A_1A1A);
const WHITE: Color = Color::RGB(0xFF_FFFF);
const LIGHT_BG: Color = Color::RGB(0xF8_F9FB);
const BORDER_COLOR: Color = Color::RGB(0xD0_D5DD);
const RED_FONT: Color = Color::RGB(0xC0_392B);
const AMBER_FONT: Color = Color::RGB(0xB7_791F);
const GRAY_FONT: Color = Color::RGB(0x88_8888);
const GREEN_FONT: Color = Color::RGB(0x27_763D);
const SECTION_BG: Color = Color::RGB(0x1A_1F2E);
const PURPLE_FONT: Color = Color::RGB(0x7C_3AED);
const BROWN_FONT: Color = Color::RGB(0x85_6404);

const FONT_BODY: &str = "Plus Jakarta Sans";
const FONT_DISPLAY: &str = "DM Serif Display";

const LEAD_COLUMNS: &[(&str, f64)] = &[
    ("#", 5.0),
    ("Score", 8.0),
    ("Title", 28.0),
    ("Company", 18.0),
    ("Location", 26.0),
    ("Salary Min", 14.0),
    ("Salary Max", 14.0),
    ("Est. Fee", 12.0),
    ("Seniority", 12.0),
    ("Signals", 44.0),
    ("Days Posted", 13.0),
    ("Flags", 18.0),
    ("Apply", 14.0),
    ("Company Site", 16.0),
    ("Employees", 12.0),
    ("Industry", 20.0),
    ("Signal Note", 54.0),
];

fn body_font() -> Format {
    Format::new()
        .set_font_name(FONT_BODY)
        .set_font_color(DARK_TEXT)
        .set_font_size(10)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR)
        .set_align(FormatAlign::VerticalCenter)
}

fn header_format() -> Format {
    Format::new()
        .set_font_name(FONT_BODY)
        .set_bold()
        .set_font_color(WHITE)
        .set_font_size(11)
        .set_background_color(NAVY)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

fn section_format() -> Format {
    Format::new()
        .set_font_name(FONT_BODY)
        .set_bold()
        .set_font_color(AMBER)
        .set_font_size(12)
        .set_background_color(SECTION_BG)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
}

fn score_format(score: i64) -> Format {
    let base = Format::new()
        .set_font_name(FONT_BODY)
        .set_font_size(11)
        .set_border(FormatBorder::Thin)
        .set_border_color(BORDER_COLOR)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    if score >= 40 {
        base.set_bold()
            .set_font_color(DARK_TEXT)
            .set_background_color(AMBER)
    } else if score >= 30 {
        base.set_bold().set_font_color(WHITE).set_background_color(BLUE)
    } else if score >= 20 {
        base.set_bold()
            .set_font_color(DARK_TEXT)
            .set_background_color(LIGHT_AMBER)
    } else {
        base.set_font_color(Color::RGB(0x55_5555))
            .set_background_color(Color::RGB(0xCC_CCCC))
    }
}

fn days_format(days_ago: i64) -> Format {
    let base = body_font().set_align(FormatAlign::Center);
    if days_ago <= 2 {
        base.set_bold().set_font_color(RED_FONT)
    } else if days_ago <= 4 {
        base.set_bold().set_font_color(AMBER_FONT)
    } else {
        base.set_font_color(GRAY_FONT)
    }
}

fn seniority_format(tier: &str) -> Format {
    match tier {
        "c_level" => body_font()
            .set_bold()
            .set_font_color(AMBER)
            .set_align(FormatAlign::Center),
        "svp" | "evp" => body_font()
            .set_bold()
            .set_font_color(BLUE)
            .set_align(FormatAlign::Center),
        _ => body_font().set_align(FormatAlign::Center),
    }
}

/// Write the full workbook to `path`.
///
/// `date_str` labels the Market Intel sheet ("Jul 27 – Aug 03, 2026");
/// `reference_date` anchors the Days Posted column so re-runs against a
/// snapshot stay stable.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if any write fails.
pub fn write_workbook(
    leads: &[Lead],
    analytics: &MarketAnalytics,
    path: &Path,
    date_str: &str,
    reference_date: NaiveDate,
) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    build_leads_sheet(sheet, leads, reference_date)?;

    let intel = workbook.add_worksheet();
    build_intel_sheet(intel, leads, analytics, date_str)?;

    workbook.save(path)?;
    Ok(())
}

#[allow(clippy::too_many_lines, clippy::cast_precision_loss)]
fn build_leads_sheet(
    sheet: &mut Worksheet,
    leads: &[Lead],
    reference_date: NaiveDate,
) -> Result<(), ReportError> {
    sheet.set_name("Top Leads")?;
    sheet.set_tab_color(AMBER);

    for (i, (header, width)) in LEAD_COLUMNS.iter().enumerate() {
        let col = u16::try_from(i).unwrap_or(u16::MAX);
        sheet.set_column_width(col, *width)?;
        sheet.write_string_with_format(0, col, *header, &header_format())?;
    }
    sheet.set_row_height(0, 32)?;

    let money = body_font()
        .set_align(FormatAlign::Right)
        .set_num_format("$#,##0");
    let fee_format = body_font()
        .set_bold()
        .set_font_color(Color::RGB(0x2E_7D32))
        .set_align(FormatAlign::Center);
    let link_format = body_font()
        .set_font_color(Color::RGB(0x11_55CC))
        .set_align(FormatAlign::Center);
    let wrap = body_font().set_text_wrap();
    let center = body_font().set_align(FormatAlign::Center);
    let right = body_font().set_align(FormatAlign::Right);
    let bold = body_font().set_bold();

    for (idx, lead) in leads.iter().enumerate() {
        let row = u32::try_from(idx + 1).unwrap_or(u32::MAX);
        sheet.set_row_height(row, 30)?;

        let alt_row = idx % 2 == 1;
        let fill = |f: Format| if alt_row { f.set_background_color(LIGHT_BG) } else { f };

        let days_ago = days_since_posted(lead.date_posted.as_deref(), reference_date).unwrap_or(0);

        let mut filtered = lead.clone();
        filtered.signals = filter_signals_for_role(lead);
        let mut signal_parts: Vec<String> = Vec::new();
        let hiring_sig = extract_hiring_signal(&filtered);
        if !hiring_sig.is_empty() {
            signal_parts.push(hiring_sig);
        }
        let team_sig = extract_team_structure(&filtered);
        if !team_sig.is_empty() {
            signal_parts.extend(team_sig.split(", ").map(String::from));
        }
        let extras = extract_extra_signals(lead);
        signal_parts.extend(extras.segment);
        signal_parts.extend(extras.comp);
        signal_parts.extend(extras.motion);

        let mut flag_parts: Vec<String> = Vec::new();
        if lead.repost_count > 1 {
            flag_parts.push(format!("REPOSTED {}x", lead.repost_count));
        }
        if lead.is_search_firm {
            flag_parts.push("RETAINED SEARCH".to_string());
        }
        let flags_format = if flag_parts.is_empty() {
            fill(center.clone())
        } else if lead.is_search_firm {
            fill(center.clone().set_bold().set_font_color(PURPLE_FONT))
        } else {
            fill(center.clone().set_bold().set_font_color(BROWN_FONT))
        };

        let tier = lead.seniority_tier.as_deref().unwrap_or("");

        sheet.write_number_with_format(row, 0, (idx + 1) as f64, &fill(center.clone()))?;
        sheet.write_number_with_format(row, 1, lead.score as f64, &score_format(lead.score))?;
        sheet.write_string_with_format(
            row,
            2,
            lead.title.as_deref().unwrap_or("Untitled"),
            &fill(bold.clone()),
        )?;
        sheet.write_string_with_format(
            row,
            3,
            &format_company_name(lead.company_name.as_deref()),
            &fill(body_font()),
        )?;
        sheet.write_string_with_format(row, 4, &clean_location(lead), &fill(body_font()))?;
        match lead.annual_salary_min {
            Some(min) => {
                sheet.write_number_with_format(row, 5, min as f64, &fill(money.clone()))?
            }
            None => sheet.write_string_with_format(row, 5, "", &fill(right.clone()))?,
        };
        match lead.annual_salary_max {
            Some(max) => {
                sheet.write_number_with_format(row, 6, max as f64, &fill(money.clone()))?
            }
            None => sheet.write_string_with_format(row, 6, "", &fill(right.clone()))?,
        };
        sheet.write_string_with_format(
            row,
            7,
            &estimate_placement_fee(lead).unwrap_or_default(),
            &fill(fee_format.clone()),
        )?;
        sheet.write_string_with_format(
            row,
            8,
            &seniority::display_name(tier),
            &fill(seniority_format(tier)),
        )?;
        sheet.write_string_with_format(row, 9, &signal_parts.join(", "), &fill(wrap.clone()))?;
        sheet.write_number_with_format(row, 10, days_ago as f64, &fill(days_format(days_ago)))?;
        sheet.write_string_with_format(row, 11, &flag_parts.join(" | "), &flags_format)?;

        match lead.source_url.as_deref() {
            Some(url) => sheet.write_url_with_format(
                row,
                12,
                Url::new(url).set_text("Apply"),
                &fill(link_format.clone()),
            )?,
            None => sheet.write_string_with_format(row, 12, "", &fill(center.clone()))?,
        };
        match lead.company_url.as_deref() {
            Some(url) => sheet.write_url_with_format(
                row,
                13,
                Url::new(url).set_text("Website"),
                &fill(link_format.clone()),
            )?,
            None => sheet.write_string_with_format(row, 13, "", &fill(center.clone()))?,
        };
        sheet.write_string_with_format(
            row,
            14,
            lead.company_num_employees.as_deref().unwrap_or(""),
            &fill(right.clone()),
        )?;
        sheet.write_string_with_format(
            row,
            15,
            industry_display(lead.company_industry.as_deref().unwrap_or("")),
            &fill(body_font()),
        )?;
        sheet.write_string_with_format(row, 16, &signal_note(&filtered), &fill(wrap.clone()))?;
    }

    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

#[allow(clippy::too_many_lines, clippy::cast_precision_loss)]
fn build_intel_sheet(
    sheet: &mut Worksheet,
    leads: &[Lead],
    analytics: &MarketAnalytics,
    date_str: &str,
) -> Result<(), ReportError> {
    sheet.set_name("Market Intel")?;
    sheet.set_tab_color(BLUE);
    sheet.set_screen_gridlines(false);

    for (col, width) in [
        (0, 4.0),
        (1, 30.0),
        (2, 14.0),
        (3, 14.0),
        (4, 14.0),
        (5, 16.0),
        (6, 4.0),
        (7, 30.0),
        (8, 14.0),
        (9, 14.0),
    ] {
        sheet.set_column_width(col, width)?;
    }

    let title_format = Format::new()
        .set_font_name(FONT_DISPLAY)
        .set_bold()
        .set_font_color(AMBER)
        .set_font_size(14)
        .set_background_color(NAVY)
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);
    let subtitle_format = Format::new()
        .set_font_name(FONT_BODY)
        .set_italic()
        .set_font_color(GRAY_FONT)
        .set_font_size(9)
        .set_align(FormatAlign::Left);
    let cell = body_font();
    let cell_bold = body_font().set_bold();
    let cell_center = body_font().set_align(FormatAlign::Center);
    let cell_right = body_font().set_align(FormatAlign::Right);

    let mut row: u32 = 0;
    let total_leads = leads.len();

    sheet.merge_range(
        row,
        1,
        row,
        5,
        &format!("ExecSignals  \u{2014}  Market Intelligence Brief  |  Week of {date_str}"),
        &title_format,
    )?;
    sheet.set_row_height(row, 42)?;
    row += 1;

    sheet.merge_range(
        row,
        1,
        row,
        5,
        &format!("VP+ hiring intelligence  |  {total_leads} new VP+ roles this week"),
        &subtitle_format,
    )?;
    row += 2;

    // Salary benchmarks
    sheet.merge_range(row, 1, row, 5, "  SALARY BENCHMARKS \u{2014} VP+ ROLES", &section_format())?;
    sheet.set_row_height(row, 32)?;
    row += 1;
    for (i, h) in ["Role", "P25", "Median", "P75", "4-Week Trend"].iter().enumerate() {
        sheet.write_string_with_format(row, u16::try_from(i + 1).unwrap_or(u16::MAX), *h, &header_format())?;
    }
    row += 1;

    for b in &analytics.salary_benchmarks {
        let trend_display = if b.trend_pct > 0.0 {
            format!("\u{25B2} {}", signed_pct_f(b.trend_pct))
        } else if b.trend_pct < 0.0 {
            format!("\u{25BC} {}", signed_pct_f(b.trend_pct))
        } else {
            "\u{25AC} 0%".to_string()
        };
        let trend_format = if b.trend_pct > 0.0 {
            cell_center.clone().set_bold().set_font_color(GREEN_FONT)
        } else if b.trend_pct < 0.0 {
            cell_center.clone().set_bold().set_font_color(RED_FONT)
        } else {
            cell_center.clone()
        };

        sheet.write_string_with_format(row, 1, b.role, &cell_bold)?;
        sheet.write_string_with_format(row, 2, &salary_k(b.p25), &cell_right)?;
        sheet.write_string_with_format(
            row,
            3,
            &salary_k(b.median),
            &cell_right.clone().set_bold().set_font_size(11),
        )?;
        sheet.write_string_with_format(row, 4, &salary_k(b.p75), &cell_right)?;
        sheet.write_string_with_format(row, 5, &trend_display, &trend_format)?;
        row += 1;
    }
    row += 2;

    // Industry velocity
    sheet.merge_range(row, 1, row, 5, "  HIRING VELOCITY BY INDUSTRY", &section_format())?;
    sheet.set_row_height(row, 32)?;
    row += 1;
    for (i, h) in ["Industry", "VP+ Openings This Week", "WoW Change"].iter().enumerate() {
        sheet.write_string_with_format(row, u16::try_from(i + 1).unwrap_or(u16::MAX), *h, &header_format())?;
    }
    row += 1;

    for v in &analytics.industry_velocity {
        let wow_display = if v.wow_pct > 0 {
            format!("\u{25B2} {}", signed_pct(v.wow_pct))
        } else if v.wow_pct < 0 {
            format!("\u{25BC} {}", signed_pct(v.wow_pct))
        } else {
            "0%".to_string()
        };
        let wow_format = if v.wow_pct > 0 {
            cell_center.clone().set_bold().set_font_color(GREEN_FONT)
        } else if v.wow_pct < 0 {
            cell_center.clone().set_bold().set_font_color(RED_FONT)
        } else {
            cell_center.clone()
        };
        sheet.write_string_with_format(row, 1, &v.industry, &cell_bold)?;
        sheet.write_number_with_format(row, 2, v.count as f64, &cell_center.clone().set_bold())?;
        sheet.write_string_with_format(row, 3, &wow_display, &wow_format)?;
        row += 1;
    }
    row += 2;

    // Top companies beside geo breakdown
    sheet.merge_range(row, 1, row, 3, "  TOP HIRING COMPANIES", &section_format())?;
    sheet.merge_range(row, 5, row, 7, "  GEO BREAKDOWN", &section_format())?;
    sheet.set_row_height(row, 32)?;
    row += 1;
    for (i, h) in ["Company", "VP+ Roles"].iter().enumerate() {
        sheet.write_string_with_format(row, u16::try_from(i + 1).unwrap_or(u16::MAX), *h, &header_format())?;
    }
    for (i, h) in ["Metro Area", "VP+ Roles", "WoW"].iter().enumerate() {
        sheet.write_string_with_format(row, u16::try_from(i + 5).unwrap_or(u16::MAX), *h, &header_format())?;
    }
    row += 1;

    let rows = analytics.top_companies.len().max(analytics.geo_breakdown.len());
    for idx in 0..rows {
        if let Some(company) = analytics.top_companies.get(idx) {
            let mut name = format_company_name(Some(&company.company));
            if company.is_new {
                name.push_str(" \u{2605}");
            }
            sheet.write_string_with_format(row, 1, &name, &cell_bold)?;
            sheet.write_number_with_format(
                row,
                2,
                company.distinct_roles as f64,
                &cell_center.clone().set_bold(),
            )?;
        }
        if let Some(geo) = analytics.geo_breakdown.get(idx) {
            sheet.write_string_with_format(row, 5, &geo.metro, &cell_bold)?;
            sheet.write_number_with_format(row, 6, geo.count as f64, &cell_center.clone().set_bold())?;
            let wow_format = if geo.wow_pct > 0 {
                cell_center.clone().set_font_color(GREEN_FONT)
            } else if geo.wow_pct < 0 {
                cell_center.clone().set_font_color(RED_FONT)
            } else {
                cell_center.clone().set_font_color(GRAY_FONT)
            };
            sheet.write_string_with_format(row, 7, &signed_pct(geo.wow_pct), &wow_format)?;
        }
        row += 1;
    }
    row += 2;

    // Key takeaways
    sheet.merge_range(row, 1, row, 7, "  THIS WEEK'S KEY TAKEAWAYS", &section_format())?;
    sheet.set_row_height(row, 32)?;
    row += 1;
    for takeaway in key_takeaways(leads, analytics) {
        sheet.merge_range(row, 1, row, 7, &format!("\u{25CF}  {takeaway}"), &cell)?;
        sheet.set_row_height(row, 24)?;
        row += 1;
    }
    row += 2;

    let footer = Format::new()
        .set_font_name(FONT_BODY)
        .set_italic()
        .set_font_color(GRAY_FONT)
        .set_font_size(9)
        .set_align(FormatAlign::Left);
    sheet.merge_range(
        row,
        1,
        row,
        7,
        &format!(
            "ExecSignals  |  The Monday Brief  |  execsignals.com  |  {total_leads} VP+ roles scored"
        ),
        &footer,
    )?;
    row += 1;
    sheet.merge_range(
        row,
        1,
        row,
        7,
        "Confidential \u{2014} for subscriber use only. Do not redistribute.",
        &footer.clone().set_font_color(RED_FONT),
    )?;

    Ok(())
}
