//! Relief domains: incident reports, volunteers and long-term support.
//!
//! Each domain owns its record types (`models`) and the form that turns raw
//! user input into a validated payload for the store (`form`).

pub mod reports;
pub mod support;
pub mod volunteers;
