//! Resolved delivery address.

use serde::{Deserialize, Serialize};

/// A postal record resolved from an external postal-code lookup.
///
/// Absent until a lookup succeeds; held only for the duration of the
/// checkout form, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Postal code as returned by the lookup service (may be formatted).
    pub postal_code: String,
    /// Street name, without the house number.
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// State or federation unit abbreviation (e.g. "SP").
    pub region: String,
}
