//! Report submission form.

use crate::common::text::{normalize_tags, trimmed_len};
use crate::error::ValidationErrors;

use super::models::{Coordinates, NewReport, ReportKind, Severity};

/// Raw input from the "Report a Case" form.
#[derive(Debug, Clone, Default)]
pub struct ReportForm {
    pub name: String,
    pub location: String,
    pub contact: String,
    pub severity: Severity,
    pub description: String,
    pub needs: Vec<String>,
    pub evidence: Option<String>,
    pub coordinates: Option<Coordinates>,
}

impl ReportForm {
    /// Check every field and build the store payload for a report of `kind`.
    pub fn validate(self, kind: ReportKind) -> Result<NewReport, ValidationErrors> {
        let needs = normalize_tags(&self.needs);

        let mut errors = ValidationErrors::new();
        errors.check(
            trimmed_len(&self.name) >= 2,
            "name",
            "Name must be at least 2 characters.",
        );
        errors.check(
            trimmed_len(&self.location) >= 2,
            "location",
            "Location is required.",
        );
        errors.check(
            trimmed_len(&self.contact) >= 9,
            "contact",
            "Please provide a valid contact number.",
        );
        errors.check(
            trimmed_len(&self.description) >= 10,
            "description",
            "Please describe the situation.",
        );
        errors.check(!needs.is_empty(), "needs", "Select at least one need.");

        errors.into_result(|| NewReport {
            kind,
            name: self.name.trim().to_string(),
            location: self.location.trim().to_string(),
            severity: self.severity,
            needs,
            contact: self.contact.trim().to_string(),
            description: self.description.trim().to_string(),
            evidence: self.evidence.filter(|e| !e.trim().is_empty()),
            coordinates: self.coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReportForm {
        ReportForm {
            name: "A. Perera".into(),
            location: "Galle".into(),
            contact: "0771234567".into(),
            severity: Severity::Critical,
            description: "Trapped, need water".into(),
            needs: vec!["Food".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let report = filled().validate(ReportKind::ForSelf).unwrap();
        assert_eq!(report.kind, ReportKind::ForSelf);
        assert_eq!(report.severity, Severity::Critical);
        assert_eq!(report.needs, vec!["Food"]);
        assert!(report.coordinates.is_none());
    }

    #[test]
    fn test_default_severity_is_high() {
        assert_eq!(ReportForm::default().severity, Severity::High);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ReportForm::default()
            .validate(ReportKind::ForRelative)
            .unwrap_err();

        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.field("location").unwrap().message,
            "Location is required."
        );
        assert_eq!(
            errors.field("needs").unwrap().message,
            "Select at least one need."
        );
    }

    #[test]
    fn test_short_contact_rejected() {
        let form = ReportForm {
            contact: "07712".into(),
            ..filled()
        };
        let errors = form.validate(ReportKind::ForSelf).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("contact").is_some());
    }

    #[test]
    fn test_blank_needs_do_not_count() {
        let form = ReportForm {
            needs: vec!["  ".into(), String::new()],
            ..filled()
        };
        assert!(form.validate(ReportKind::ForSelf).unwrap_err().field("needs").is_some());
    }

    #[test]
    fn test_fields_are_trimmed_and_blank_evidence_dropped() {
        let form = ReportForm {
            name: "  A. Perera ".into(),
            evidence: Some("   ".into()),
            ..filled()
        };
        let report = form.validate(ReportKind::ForSelf).unwrap();
        assert_eq!(report.name, "A. Perera");
        assert!(report.evidence.is_none());
    }
}
