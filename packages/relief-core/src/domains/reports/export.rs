//! CSV export of the dashboard's report list.
//!
//! Free-text columns are always quoted with embedded quotes doubled; the
//! remaining columns are fixed labels, ids or timestamps and go out bare.

use std::path::Path;

use chrono::{NaiveDate, Utc};

use crate::error::Result;

use super::models::Report;

pub const CSV_HEADERS: [&str; 10] = [
    "ID",
    "Name",
    "Location",
    "Severity",
    "Status",
    "Needs",
    "Contact",
    "Description",
    "Evidence",
    "Timestamp",
];

fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn row(report: &Report) -> String {
    [
        report.id.to_string(),
        quoted(&report.name),
        quoted(&report.location),
        report.severity.to_string(),
        report.status.to_string(),
        quoted(&report.needs.join(";")),
        quoted(&report.contact),
        quoted(&report.description),
        if report.has_evidence() { "Yes" } else { "No" }.to_string(),
        report.timestamp_iso(),
    ]
    .join(",")
}

/// Header plus one row per report, newline separated, no trailing newline.
pub fn reports_to_csv<'a, I>(reports: I) -> String
where
    I: IntoIterator<Item = &'a Report>,
{
    std::iter::once(CSV_HEADERS.join(","))
        .chain(reports.into_iter().map(row))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `relief-reports-YYYY-MM-DD.csv`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("relief-reports-{}.csv", date.format("%Y-%m-%d"))
}

/// File name for an export taken now, dated in UTC like the timestamps.
pub fn export_file_name_today() -> String {
    export_file_name(Utc::now().date_naive())
}

/// Write the export to `path`, returning the number of data rows.
pub fn write_csv<'a, I>(path: &Path, reports: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Report>,
{
    let reports: Vec<&Report> = reports.into_iter().collect();
    std::fs::write(path, reports_to_csv(reports.iter().copied()))?;
    tracing::info!(path = %path.display(), rows = reports.len(), "exported reports");
    Ok(reports.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::reports::models::{MapRegion, NewReport, ReportKind, Severity};

    fn report(description: &str, evidence: Option<&str>) -> Report {
        NewReport {
            kind: ReportKind::ForSelf,
            name: "A. Perera".into(),
            location: "Galle".into(),
            severity: Severity::VeryHigh,
            needs: vec!["Food".into(), "Medical".into()],
            contact: "0771234567".into(),
            description: description.into(),
            evidence: evidence.map(String::from),
            coordinates: None,
        }
        .into_report(&MapRegion::default())
    }

    #[test]
    fn test_header_only_for_empty_list() {
        assert_eq!(
            reports_to_csv(std::iter::empty()),
            "ID,Name,Location,Severity,Status,Needs,Contact,Description,Evidence,Timestamp"
        );
    }

    #[test]
    fn test_row_layout() {
        let r = report("Trapped, need water", Some("/tmp/photo.jpg"));
        let csv = reports_to_csv([&r]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            format!(
                "{},\"A. Perera\",\"Galle\",Very High,Pending,\"Food;Medical\",\"0771234567\",\"Trapped, need water\",Yes,{}",
                r.id,
                r.timestamp_iso()
            )
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let r = report("Roof says \"HELP\" in paint", None);
        let csv = reports_to_csv([&r]);
        assert!(csv.contains("\"Roof says \"\"HELP\"\" in paint\""));
        assert!(csv.contains(",No,"));
    }

    /// Fields of one CSV line, honouring quotes.
    fn fields(line: &str) -> Vec<String> {
        let mut fields = vec![String::new()];
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    fields.last_mut().unwrap().push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(String::new()),
                c => fields.last_mut().unwrap().push(c),
            }
        }
        fields
    }

    #[test]
    fn test_contact_with_comma_stays_in_its_column() {
        let mut r = report("Trapped, need water", None);
        r.contact = "077 123, ext 4567".into();

        let csv = reports_to_csv([&r]);
        let row = fields(csv.lines().nth(1).unwrap());

        assert_eq!(row.len(), CSV_HEADERS.len());
        assert_eq!(row[6], "077 123, ext 4567");
        assert_eq!(row[7], "Trapped, need water");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 28).unwrap();
        assert_eq!(export_file_name(date), "relief-reports-2025-11-28.csv");
    }

    #[test]
    fn test_today_uses_utc_date() {
        let before = Utc::now().date_naive();
        let name = export_file_name_today();
        let after = Utc::now().date_naive();

        assert!(name == export_file_name(before) || name == export_file_name(after));
    }

    #[test]
    fn test_write_csv_counts_rows() {
        let dir = std::env::temp_dir().join(format!("relief-export-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.csv");
        let reports = vec![report("Need boats urgently", None), report("Elderly couple stuck", None)];

        let rows = write_csv(&path, &reports).unwrap();

        assert_eq!(rows, 2);
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 3);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
