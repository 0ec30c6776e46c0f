//! Dashboard search and severity filter.

use crate::common::text::contains_ignore_case;

use super::models::{Report, Severity};

/// Dashboard filter. An empty search and no severity match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub search: String,
    /// `None` means "All severities"
    pub severity: Option<Severity>,
}

impl ReportFilter {
    pub fn new(search: impl Into<String>, severity: Option<Severity>) -> Self {
        Self {
            search: search.into(),
            severity,
        }
    }

    /// Case-insensitive match on name, location or description, or a
    /// substring of the id; and the severity, when one is selected.
    pub fn matches(&self, report: &Report) -> bool {
        let term = self.search.trim();
        let lowered = term.to_lowercase();

        let matches_search = term.is_empty()
            || contains_ignore_case(&report.name, &lowered)
            || contains_ignore_case(&report.location, &lowered)
            || contains_ignore_case(&report.description, &lowered)
            || report.id.to_string().contains(&lowered);
        let matches_severity = self.severity.map_or(true, |s| s == report.severity);

        matches_search && matches_severity
    }

    /// Matching reports, keeping collection order.
    pub fn apply<'a>(&self, reports: &'a [Report]) -> Vec<&'a Report> {
        reports.iter().filter(|r| self.matches(r)).collect()
    }
}
