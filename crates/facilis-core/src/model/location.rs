// ── Building / Area domain types and their tagged union ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use facilis_api::types::{CampusRef, CommonStatus, ZoneType};

/// Indoor structure belonging to a campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub floor_count: u32,
    pub status: CommonStatus,
    pub campus: CampusRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Outdoor/open-air space belonging to a campus. No floor count;
/// classified by a zone type instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub status: CommonStatus,
    pub description: Option<String>,
    pub zone_type: ZoneType,
    pub campus: CampusRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Discriminant for the two location kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LocationKind {
    Building,
    Area,
}

/// The unified view of a building or area used by combined listings.
///
/// A proper sum type: building-only fields (`floor_count`) simply do
/// not exist on the `Area` variant, and vice versa. The shared fields
/// are reachable uniformly through the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum LocationItem {
    Building(Building),
    Area(Area),
}

impl LocationItem {
    pub fn kind(&self) -> LocationKind {
        match self {
            Self::Building(_) => LocationKind::Building,
            Self::Area(_) => LocationKind::Area,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Building(b) => &b.id,
            Self::Area(a) => &a.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Building(b) => &b.name,
            Self::Area(a) => &a.name,
        }
    }

    pub fn status(&self) -> CommonStatus {
        match self {
            Self::Building(b) => b.status,
            Self::Area(a) => a.status,
        }
    }

    pub fn campus(&self) -> &CampusRef {
        match self {
            Self::Building(b) => &b.campus,
            Self::Area(a) => &a.campus,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Building(b) => b.created_at,
            Self::Area(a) => a.created_at,
        }
    }

    /// Floor count -- only buildings have one.
    pub fn floor_count(&self) -> Option<u32> {
        match self {
            Self::Building(b) => Some(b.floor_count),
            Self::Area(_) => None,
        }
    }

    /// Zone type -- only areas carry one.
    pub fn zone_type(&self) -> Option<ZoneType> {
        match self {
            Self::Building(_) => None,
            Self::Area(a) => Some(a.zone_type),
        }
    }

    /// Description -- only areas carry one.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Building(_) => None,
            Self::Area(a) => a.description.as_deref(),
        }
    }
}
