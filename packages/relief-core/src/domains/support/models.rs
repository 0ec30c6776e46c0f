use serde::{Deserialize, Serialize};

use crate::common::labels::labeled_enum;
use crate::common::SupportId;

labeled_enum! {
    pub enum SupportKind as "support type" {
        Offer => "offer",
        Request => "request",
    }
}

labeled_enum! {
    pub enum SupportCategory as "support category" {
        Housing => "Housing",
        Medical => "Medical",
        Education => "Education",
        Livelihood => "Livelihood",
        Other => "Other",
    }
}

labeled_enum! {
    /// Entries are created `Open`; nothing in the store marks them `Matched`.
    pub enum SupportStatus as "support status" {
        Open => "Open",
        Matched => "Matched",
    }
}

/// A standing offer or request for extended-duration assistance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportEntry {
    pub id: SupportId,
    #[serde(rename = "type")]
    pub kind: SupportKind,
    pub category: SupportCategory,
    pub name: String,
    pub description: String,
    pub contact: String,
    pub location: String,
    pub status: SupportStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupportEntry {
    #[serde(rename = "type")]
    pub kind: SupportKind,
    pub category: SupportCategory,
    pub name: String,
    pub description: String,
    pub contact: String,
    pub location: String,
}

impl NewSupportEntry {
    pub(crate) fn into_entry(self) -> SupportEntry {
        SupportEntry {
            id: SupportId::new(),
            kind: self.kind,
            category: self.category,
            name: self.name,
            description: self.description,
            contact: self.contact,
            location: self.location,
            status: SupportStatus::Open,
        }
    }
}
