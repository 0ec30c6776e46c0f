//! Plain-text rendering of store records for the terminal.

use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};
use relief_core::domains::reports::{Report, Severity};
use relief_core::domains::support::{SupportEntry, SupportKind};
use relief_core::domains::volunteers::{Volunteer, VolunteerKind};

pub fn severity_badge(severity: Severity) -> ColoredString {
    let label = format!("{:<9}", severity.as_str());
    match severity {
        Severity::Critical => label.bright_red().bold(),
        Severity::VeryHigh => label.red(),
        Severity::High => label.yellow(),
        Severity::Moderate => label.blue(),
        Severity::Low => label.green(),
    }
}

pub fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// One dashboard line, without the coloured severity badge.
pub fn report_line(report: &Report) -> String {
    format!(
        "{}  {} ({})  {}  {}",
        report.id.short(),
        report.name,
        report.location,
        report.status,
        local_time(report.timestamp)
    )
}

pub fn report_detail(report: &Report) -> Vec<(&'static str, String)> {
    vec![
        ("ID", report.id.to_string()),
        ("Type", report.kind.to_string()),
        ("Name", report.name.clone()),
        ("Location", report.location.clone()),
        ("Severity", report.severity.to_string()),
        ("Status", report.status.to_string()),
        ("Needs", report.needs.join(", ")),
        ("Contact", report.contact.clone()),
        ("Description", report.description.clone()),
        (
            "Evidence",
            report.evidence.clone().unwrap_or_else(|| "None".to_string()),
        ),
        (
            "Map",
            format!(
                "{:.4}, {:.4}",
                report.coordinates.lat, report.coordinates.lng
            ),
        ),
        ("Reported", local_time(report.timestamp)),
    ]
}

pub fn volunteer_line(volunteer: &Volunteer) -> String {
    let kind = match volunteer.kind {
        VolunteerKind::Individual => "Individual",
        VolunteerKind::Entity => "Organization",
    };
    format!(
        "{} [{}]  {}  {}  skills: {}",
        volunteer.name,
        kind,
        volunteer.location,
        volunteer.contact,
        volunteer.skills.join(", ")
    )
}

pub fn support_line(entry: &SupportEntry) -> String {
    let kind = match entry.kind {
        SupportKind::Offer => "OFFER",
        SupportKind::Request => "REQUEST",
    };
    format!(
        "{:<7} {:<10} {}  {}  {}  [{}]",
        kind, entry.category, entry.name, entry.location, entry.contact, entry.status
    )
}
