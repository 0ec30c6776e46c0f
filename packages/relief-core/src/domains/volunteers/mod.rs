pub mod form;
pub mod models;

pub use form::VolunteerForm;
pub use models::{NewVolunteer, Volunteer, VolunteerKind, SKILL_OPTIONS};
