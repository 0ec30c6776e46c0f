use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::common::labels::labeled_enum;
use crate::common::ReportId;

labeled_enum! {
    /// Five-level urgency attached to a report. No numeric ordering beyond
    /// declaration order is implied.
    pub enum Severity as "severity" {
        Critical => "Critical",
        VeryHigh => "Very High",
        High => "High",
        Moderate => "Moderate",
        Low => "Low",
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::High
    }
}

labeled_enum! {
    /// Who the report is about.
    pub enum ReportKind as "report type" {
        /// The reporter needs help themselves
        ForSelf => "self",
        /// Reporting on behalf of someone else
        ForRelative => "relative",
    }
}

labeled_enum! {
    /// Report workflow status. Reports are created `Pending` and no store
    /// operation moves them on.
    pub enum ReportStatus as "report status" {
        Pending => "Pending",
        Verified => "Verified",
        Resolved => "Resolved",
    }
}

/// Suggested needs offered by the report form.
pub const NEED_OPTIONS: &[(&str, &str)] = &[
    ("Food", "Food & Water"),
    ("Medical", "Medical Assistance"),
    ("Shelter", "Shelter / Evacuation"),
    ("Clothing", "Clothing"),
    ("Electricity", "Power / Charging"),
];

/// A map position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Area that placeholder map positions are drawn from: a one-degree square
/// whose south-west corner is `base`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRegion {
    pub base: Coordinates,
}

impl MapRegion {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            base: Coordinates { lat, lng },
        }
    }

    /// Uniform point in `[lat, lat + 1) x [lng, lng + 1)`. Decorative only,
    /// this is not geolocation.
    pub fn placeholder(&self) -> Coordinates {
        Coordinates {
            lat: self.base.lat + fastrand::f64(),
            lng: self.base.lng + fastrand::f64(),
        }
    }

    pub fn contains(&self, point: Coordinates) -> bool {
        (self.base.lat..self.base.lat + 1.0).contains(&point.lat)
            && (self.base.lng..self.base.lng + 1.0).contains(&point.lng)
    }
}

impl Default for MapRegion {
    fn default() -> Self {
        Self::new(6.0, 80.0)
    }
}

/// An incident report as held by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub name: String,
    pub location: String,
    pub severity: Severity,
    pub needs: Vec<String>,
    pub contact: String,
    pub status: ReportStatus,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    /// Opaque reference to a locally held image (e.g. a file path)
    pub evidence: Option<String>,
    pub coordinates: Coordinates,
}

impl Report {
    /// Creation instant as ISO-8601 with millisecond precision.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn has_evidence(&self) -> bool {
        self.evidence.is_some()
    }
}

/// Everything a caller supplies when adding a report. The store assigns id,
/// timestamp and status, and fills in coordinates when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub name: String,
    pub location: String,
    pub severity: Severity,
    pub needs: Vec<String>,
    pub contact: String,
    pub description: String,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl NewReport {
    pub(crate) fn into_report(self, region: &MapRegion) -> Report {
        Report {
            id: ReportId::new(),
            kind: self.kind,
            name: self.name,
            location: self.location,
            severity: self.severity,
            needs: self.needs,
            contact: self.contact,
            status: ReportStatus::Pending,
            timestamp: Utc::now(),
            description: self.description,
            evidence: self.evidence,
            coordinates: self.coordinates.unwrap_or_else(|| region.placeholder()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_labels_roundtrip() {
        for severity in Severity::ALL {
            let parsed: Severity = severity.as_str().parse().unwrap();
            assert_eq!(parsed, *severity);
        }
        assert_eq!("very high".parse::<Severity>().unwrap(), Severity::VeryHigh);
        assert!("Extreme".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_serializes_with_label() {
        let json = serde_json::to_string(&Severity::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
    }

    #[test]
    fn test_report_kind_uses_wire_names() {
        assert_eq!(ReportKind::ForSelf.to_string(), "self");
        assert_eq!("relative".parse::<ReportKind>().unwrap(), ReportKind::ForRelative);
    }

    #[test]
    fn test_placeholder_stays_inside_region() {
        let region = MapRegion::default();
        for _ in 0..100 {
            assert!(region.contains(region.placeholder()));
        }
    }

    #[test]
    fn test_into_report_keeps_supplied_coordinates() {
        let supplied = Coordinates { lat: 7.29, lng: 80.63 };
        let report = NewReport {
            kind: ReportKind::ForRelative,
            name: "Kumari".into(),
            location: "Kandy".into(),
            severity: Severity::Moderate,
            needs: vec!["Shelter".into()],
            contact: "0812223344".into(),
            description: "Landslide risk behind the house".into(),
            evidence: None,
            coordinates: Some(supplied),
        }
        .into_report(&MapRegion::default());

        assert_eq!(report.coordinates, supplied);
        assert_eq!(report.status, ReportStatus::Pending);
    }

    #[test]
    fn test_timestamp_iso_has_millis_and_z() {
        let report = NewReport {
            kind: ReportKind::ForSelf,
            name: "Nimal".into(),
            location: "Matara".into(),
            severity: Severity::Low,
            needs: vec!["Food".into()],
            contact: "0711111111".into(),
            description: "Need dry rations for four".into(),
            evidence: None,
            coordinates: None,
        }
        .into_report(&MapRegion::default());

        let iso = report.timestamp_iso();
        assert!(iso.ends_with('Z'));
        assert_eq!(iso.len(), "2024-01-01T00:00:00.000Z".len());
    }
}
