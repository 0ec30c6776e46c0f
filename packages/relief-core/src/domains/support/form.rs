//! Long-term support offer/request form.

use crate::common::text::trimmed_len;
use crate::error::ValidationErrors;

use super::models::{NewSupportEntry, SupportCategory, SupportKind};

#[derive(Debug, Clone)]
pub struct SupportForm {
    pub name: String,
    pub contact: String,
    pub location: String,
    pub category: SupportCategory,
    pub description: String,
}

impl Default for SupportForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact: String::new(),
            location: String::new(),
            category: SupportCategory::Housing,
            description: String::new(),
        }
    }
}

impl SupportForm {
    pub fn validate(self, kind: SupportKind) -> Result<NewSupportEntry, ValidationErrors> {
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
        errors.check(
            trimmed_len(&self.location) >= 2,
            "location",
            "Location is required.",
        );
        errors.check(
            trimmed_len(&self.description) >= 10,
            "description",
            "Please describe what is offered or needed.",
        );

        errors.into_result(|| NewSupportEntry {
            kind,
            category: self.category,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            contact: self.contact.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}
