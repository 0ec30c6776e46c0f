use serde::{Deserialize, Serialize};

use crate::common::labels::labeled_enum;
use crate::common::VolunteerId;

labeled_enum! {
    pub enum VolunteerKind as "volunteer type" {
        Individual => "individual",
        /// An organization registering as a group
        Entity => "entity",
    }
}

/// Skills offered by the registration form.
pub const SKILL_OPTIONS: &[&str] = &[
    "Medical Aid",
    "Transport (Vehicle)",
    "Transport (Boat)",
    "Cooking / Food Prep",
    "Search & Rescue",
    "Manual Labor",
    "Coordination / Admin",
    "Psychological Support",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: VolunteerId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VolunteerKind,
    pub skills: Vec<String>,
    pub contact: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVolunteer {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: VolunteerKind,
    pub skills: Vec<String>,
    pub contact: String,
    pub location: String,
}

impl NewVolunteer {
    pub(crate) fn into_volunteer(self) -> Volunteer {
        Volunteer {
            id: VolunteerId::new(),
            name: self.name,
            kind: self.kind,
            skills: self.skills,
            contact: self.contact,
            location: self.location,
        }
    }
}
