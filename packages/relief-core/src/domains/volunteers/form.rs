//! Volunteer registration form (individuals and organizations).

use crate::common::text::{normalize_tags, trimmed_len};
use crate::error::ValidationErrors;

use super::models::{NewVolunteer, VolunteerKind};

#[derive(Debug, Clone, Default)]
pub struct VolunteerForm {
    pub name: String,
    pub contact: String,
    pub skills: Vec<String>,
    pub location: String,
}

impl VolunteerForm {
    pub fn validate(self, kind: VolunteerKind) -> Result<NewVolunteer, ValidationErrors> {
        let skills = normalize_tags(&self.skills);

        let mut errors = ValidationErrors::new();
        errors.check(
            trimmed_len(&self.name) >= 2,
            "name",
            "Name must be at least 2 characters.",
        );
        errors.check(
            trimmed_len(&self.contact) >= 9,
            "contact",
            "Please provide a valid contact number.",
        );
        errors.check(!skills.is_empty(), "skills", "Select at least one skill.");
        errors.check(
            trimmed_len(&self.location) >= 2,
            "location",
            "Location is required.",
        );

        errors.into_result(|| NewVolunteer {
            name: self.name.trim().to_string(),
            kind,
            skills,
            contact: self.contact.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_registration() {
        let form = VolunteerForm {
            name: "Sarvodaya Galle".into(),
            contact: "0912345678".into(),
            skills: vec!["Transport (Boat)".into(), "Search & Rescue".into()],
            location: "Galle".into(),
        };
        let volunteer = form.validate(VolunteerKind::Entity).unwrap();
        assert_eq!(volunteer.kind, VolunteerKind::Entity);
        assert_eq!(volunteer.skills.len(), 2);
    }

    #[test]
    fn test_missing_skills_rejected() {
        let form = VolunteerForm {
            name: "Ruwan".into(),
            contact: "0771234567".into(),
            skills: Vec::new(),
            location: "Colombo".into(),
        };
        let errors = form.validate(VolunteerKind::Individual).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.field("skills").is_some());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = VolunteerForm::default()
            .validate(VolunteerKind::Individual)
            .unwrap_err();

        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "contact", "skills", "location"]);
        assert_eq!(
            errors.field("contact").map(|e| e.message.as_str()),
            Some("Please provide a valid contact number.")
        );
    }

    #[test]
    fn test_minimums_count_trimmed_chars() {
        let form = VolunteerForm {
            name: " R ".into(),
            contact: " 07712345 ".into(),
            skills: vec!["Manual Labor".into()],
            location: "  K  ".into(),
        };
        let errors = form.validate(VolunteerKind::Individual).unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "contact", "location"]);
    }
}
