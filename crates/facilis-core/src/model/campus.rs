// ── Campus domain type ──

use serde::{Deserialize, Serialize};

/// Top-level physical site; root of the location hierarchy.
///
/// Immutable from this subsystem's perspective -- campuses are created
/// and edited elsewhere, we only read them as a filter dimension and
/// as the bootstrap default scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campus {
    pub id: String,
    pub name: String,
}
