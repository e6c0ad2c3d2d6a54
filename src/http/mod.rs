pub mod accept;
pub mod error;
pub mod media_type;
pub mod params;
pub mod preference;

/// Token standing for "any" in place of a type or subtype.
pub const WILDCARD: &str = "*";
