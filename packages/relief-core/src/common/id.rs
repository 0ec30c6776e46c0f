//! Typed record ids.
//!
//! `Id<T>` wraps a UUID v7 so that a report id can never be handed to an
//! operation expecting a volunteer id. v7 ids are time-ordered and carry
//! 74 random bits, so two records never share an id in practice.
//!
//! ```rust
//! use relief_core::common::id::Id;
//!
//! pub struct Shelter;
//! pub type ShelterId = Id<Shelter>;
//!
//! let a = ShelterId::new();
//! let b = ShelterId::new();
//! assert_ne!(a, b);
//! ```
//!
//! ```compile_fail
//! use relief_core::{ReportId, VolunteerId};
//!
//! let report_id = ReportId::new();
//! let volunteer_id: VolunteerId = report_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;
use std::str::FromStr;
use uuid::Uuid;

#[repr(transparent)]
pub struct Id<T>(Uuid, PhantomData<fn() -> T>);

impl<T> Id<T> {
    pub fn new() -> Self {
        Self(Uuid::now_v7(), PhantomData)
    }

    /// Accepts hyphenated or simple form, surrounding whitespace ignored.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s.trim())?, PhantomData))
    }

    /// Last eight hex digits, from the random tail of the v7 layout. The
    /// leading digits are the millisecond timestamp and repeat across
    /// records created close together.
    ///
    /// Always a substring of the hyphenated form, so it can be typed into
    /// the dashboard search.
    pub fn short(&self) -> String {
        let simple = self.0.simple().to_string();
        simple[simple.len() - 8..].to_string()
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("?");
        write!(f, "{entity}({})", self.0)
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.hyphenated(), f)
    }
}

impl<T> FromStr for Id<T> {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(|uuid| Self(uuid, PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shelter;

    type ShelterId = Id<Shelter>;

    #[test]
    fn test_new_creates_unique_ids() {
        assert_ne!(ShelterId::new(), ShelterId::new());
        assert!(!ShelterId::new().is_nil());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id = ShelterId::new();
        let parsed: ShelterId = format!("  {}\n", id).parse().unwrap();
        assert_eq!(id, parsed);
        assert!(ShelterId::parse("abc123").is_err());
    }

    #[test]
    fn test_short_is_suffix_of_display() {
        let id = ShelterId::new();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().ends_with(&short));
    }

    #[test]
    fn test_short_differs_within_one_millisecond() {
        // Same timestamp prefix, different random tail
        let ids: Vec<ShelterId> = (0..32).map(|_| ShelterId::new()).collect();
        let mut shorts: Vec<String> = ids.iter().map(ShelterId::short).collect();
        shorts.sort();
        shorts.dedup();
        assert_eq!(shorts.len(), ids.len());
    }

    #[test]
    fn test_serde_as_plain_uuid_string() {
        let id = ShelterId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let parsed: ShelterId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_debug_names_entity() {
        let debug = format!("{:?}", ShelterId::new());
        assert!(debug.starts_with("Shelter("));
    }
}
