pub mod form;
pub mod models;

pub use form::SupportForm;
pub use models::{NewSupportEntry, SupportCategory, SupportEntry, SupportKind, SupportStatus};
