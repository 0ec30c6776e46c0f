//! Typed ID definitions for the relief entities.
//!
//! ```rust
//! use relief_core::common::{ReportId, VolunteerId};
//!
//! let report_id = ReportId::new();
//! let volunteer_id = VolunteerId::new();
//!
//! // This would be a compile error:
//! // let wrong: VolunteerId = report_id;
//! # let _ = (report_id, volunteer_id);
//! ```

use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for incident reports.
pub struct IncidentReport;

/// Marker type for registered volunteers.
pub struct RegisteredVolunteer;

/// Marker type for long-term support offers/requests.
pub struct LongTermSupport;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for incident reports.
pub type ReportId = Id<IncidentReport>;

/// Typed ID for volunteers.
pub type VolunteerId = Id<RegisteredVolunteer>;

/// Typed ID for long-term support entries.
pub type SupportId = Id<LongTermSupport>;
