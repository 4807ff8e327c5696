use serde::{Deserialize, Serialize};

/// An extracurricular activity offering.
///
/// Activities are identified by their human-readable name, which is the key
/// in the directory mapping rather than a field on the record. The roster
/// is kept in signup order and never holds the same email twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Stored for display only; signups are not
    /// rejected when the roster reaches this size.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Success body returned by signup and unregister.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body. Clients expect the `detail` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
