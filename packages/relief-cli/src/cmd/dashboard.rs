//! Relief dashboard: filtered report list, details, deletion and CSV export.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use relief_core::domains::reports::{
    export_file_name_today, write_csv, Report, ReportFilter, Severity,
};

use super::text;
use crate::context::AppContext;
use crate::render::{report_detail, report_line, severity_badge};

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let mut filter = ReportFilter::default();

    loop {
        ctx.flush_notifications();
        ctx.print_header("Relief Dashboard");

        // Clone so the lock is not held across prompts
        let reports: Vec<Report> = {
            let store = ctx.store.read();
            filter.apply(store.reports()).into_iter().cloned().collect()
        };
        print_reports(ctx, &filter, &reports);

        let actions = [
            "🔍 Search / filter",
            "📄 View details",
            "🗑  Delete a report",
            "💾 Export CSV",
            "⬅️  Back",
        ];
        let action = Select::with_theme(&ctx.theme())
            .with_prompt("Dashboard")
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => filter = prompt_filter(ctx, &filter)?,
            1 => {
                if let Some(report) = pick(ctx, "Which report?", &reports)? {
                    println!();
                    for (label, value) in report_detail(report) {
                        println!("  {:<12} {}", format!("{label}:").dimmed(), value);
                    }
                }
            }
            2 => {
                if let Some(report) = pick(ctx, "Delete which report?", &reports)? {
                    let prompt = format!("Delete the report from {}?", report.name);
                    if ctx.confirm(&prompt, false)? {
                        ctx.store.write().delete_report(report.id);
                    }
                }
            }
            3 => export(ctx, &reports),
            _ => return Ok(()),
        }
    }
}

fn print_reports(ctx: &AppContext, filter: &ReportFilter, reports: &[Report]) {
    let total = ctx.store.read().reports().len();
    let severity = filter.severity.map_or("All Severities", |s| s.as_str());
    ctx.print_info(&format!(
        "Showing {} of {} reports (search: {:?}, severity: {})",
        reports.len(),
        total,
        filter.search,
        severity
    ));

    if reports.is_empty() {
        println!("  {}", "No reports found matching your criteria.".dimmed());
        return;
    }
    for report in reports {
        println!("  {} {}", severity_badge(report.severity), report_line(report));
    }
}

fn prompt_filter(ctx: &AppContext, current: &ReportFilter) -> Result<ReportFilter> {
    let search = text(ctx, "Search by name, location or ID", &current.search)?;

    let mut labels = vec!["All Severities"];
    labels.extend(Severity::ALL.iter().map(Severity::as_str));
    let default = current
        .severity
        .and_then(|s| Severity::ALL.iter().position(|v| *v == s))
        .map_or(0, |i| i + 1);
    let picked = Select::with_theme(&ctx.theme())
        .with_prompt("Severity")
        .items(&labels)
        .default(default)
        .interact()?;
    let severity = picked.checked_sub(1).map(|i| Severity::ALL[i]);

    Ok(ReportFilter::new(search, severity))
}

fn pick<'a>(ctx: &AppContext, prompt: &str, reports: &'a [Report]) -> Result<Option<&'a Report>> {
    if reports.is_empty() {
        ctx.print_warning("No reports to choose from.");
        return Ok(None);
    }
    let mut items: Vec<String> = reports.iter().map(report_line).collect();
    items.push("Cancel".to_string());

    let picked = Select::with_theme(&ctx.theme())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(reports.get(picked))
}

fn export(ctx: &AppContext, reports: &[Report]) {
    let file_name = export_file_name_today();
    match write_csv(Path::new(&file_name), reports) {
        Ok(rows) => ctx.print_info(&format!("Exported {rows} reports to {file_name}")),
        Err(e) => ctx.print_warning(&format!("Export failed: {e}")),
    }
}
