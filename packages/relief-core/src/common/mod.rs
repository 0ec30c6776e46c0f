// Common types shared across the relief domains

pub mod entity_ids;
pub mod id;
pub(crate) mod labels;
pub mod text;

pub use entity_ids::*;
pub use id::Id;
