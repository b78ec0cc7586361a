// ── Zone domain type ──

use serde::{Deserialize, Serialize};

use facilis_api::types::{CommonStatus, ZoneType};

/// A zone's parent reference.
///
/// The wire shape carries two optional references of which exactly one
/// is populated; this sum type makes the invariant unrepresentable to
/// violate. `floor` lives on the `Building` variant because a floor
/// location is only meaningful inside a building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum ZoneParent {
    Building {
        id: String,
        name: Option<String>,
        floor: Option<i32>,
    },
    Area {
        id: String,
        name: Option<String>,
    },
}

/// A room or sub-space belonging to exactly one building or one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: CommonStatus,
    pub zone_type: ZoneType,
    pub parent: ZoneParent,
}

impl Zone {
    /// Floor location within the parent building, if any.
    pub fn floor(&self) -> Option<i32> {
        match &self.parent {
            ZoneParent::Building { floor, .. } => *floor,
            ZoneParent::Area { .. } => None,
        }
    }
}
