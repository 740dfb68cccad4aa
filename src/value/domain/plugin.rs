//! Type registry metadata.

use serde::Serialize;

/// Registry type code of the UUID value type.
pub const TYPE_UUID: i32 = 77;

/// Registration metadata a value type publishes to the host's type registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ValueTypePlugin {
    /// Stable registry identifier.
    pub id: &'static str,
    /// Numeric type code, unique across registered types.
    pub type_code: i32,
    /// Short type name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}
