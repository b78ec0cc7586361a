//! Wire types for the facility-portal REST API.
//!
//! All types match the JSON bodies served by the portal backend.
//! Field names use camelCase via `#[serde(rename_all = "camelCase")]`;
//! `#[serde(default)]` is used liberally because the backend is
//! inconsistent about field presence across endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Shared enums ─────────────────────────────────────────────────────

/// Operational status shared by buildings, areas, and zones.
///
/// A pure attribute, not a workflow: the backend accepts any value
/// being set to any other value, and this client enforces no
/// transition rules.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum CommonStatus {
    #[serde(rename = "ACTIVE")]
    #[strum(serialize = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    #[strum(serialize = "INACTIVE")]
    Inactive,
    #[serde(rename = "UNDERMAINTENANCE")]
    #[strum(serialize = "UNDERMAINTENANCE")]
    UnderMaintenance,
}

impl CommonStatus {
    /// `true` when the location is usable (active or under maintenance,
    /// as opposed to decommissioned).
    pub fn is_operational(self) -> bool {
        !matches!(self, Self::Inactive)
    }

    /// Human-facing label for tables and dialogs.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::UnderMaintenance => "Under maintenance",
        }
    }
}

/// Functional classification shared by areas and zones.
///
/// Purely classificatory: a filter dimension with no behavioral
/// effect on aggregation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ZoneType {
    Functional,
    Technical,
    Service,
    Public,
}

impl ZoneType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Technical => "Technical",
            Self::Service => "Service",
            Self::Public => "Public",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Functional => "Teaching, study, and office space",
            Self::Technical => "Plant rooms, server rooms, and utilities",
            Self::Service => "Storage, logistics, and staff-only space",
            Self::Public => "Open-access space such as lobbies and courtyards",
        }
    }
}

// ── Campuses ─────────────────────────────────────────────────────────

/// Campus overview -- from `GET /campuses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusResponse {
    pub id: String,
    pub name: String,
}

/// Denormalized campus reference carried by buildings, areas, and
/// per-campus stats rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusRef {
    pub id: String,
    pub name: String,
}

// ── Buildings ────────────────────────────────────────────────────────

/// Building record -- from `GET /buildings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    pub id: String,
    pub name: String,
    pub floor_count: u32,
    pub status: CommonStatus,
    pub campus: CampusRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Areas ────────────────────────────────────────────────────────────

/// Outdoor-area record -- from `GET /areas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRecord {
    pub id: String,
    pub name: String,
    pub status: CommonStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub zone_type: ZoneType,
    pub campus: CampusRef,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Zones ────────────────────────────────────────────────────────────

/// Zone record -- from `GET /zones/by-building/{buildingId}`.
///
/// The backend sends `building` and `area` as two optional references;
/// exactly one is ever populated. `facilis-core` converts this into a
/// proper sum type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: CommonStatus,
    pub zone_type: ZoneType,
    /// Floor number within the parent building. Only meaningful when
    /// `building` is set.
    #[serde(default)]
    pub floor_location: Option<i32>,
    #[serde(default)]
    pub building: Option<ParentRef>,
    #[serde(default)]
    pub area: Option<ParentRef>,
}

/// Reference to a zone's parent building or area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

// ── Statistics ───────────────────────────────────────────────────────

/// Per-resource-kind statistics block -- from `GET /buildings-stats`
/// and `GET /areas-stats`.
///
/// `Default` is all-zero so a failed partial can be substituted
/// without null-checks downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    #[serde(default)]
    pub new_this_month: u64,
}

/// One row of a per-campus breakdown -- from
/// `GET /buildings-stats-by-campus` and `GET /areas-stats-by-campus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusStatsItem {
    pub campus_id: String,
    pub campus_name: String,
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    #[serde(default)]
    pub under_maintenance: u64,
}

// ── Pagination ───────────────────────────────────────────────────────

/// Pagination metadata attached to enveloped list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
}

/// Normalized list result.
///
/// `pagination` is `None` when the backend answered with a bare array,
/// which callers must treat as a single complete page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<PaginationResponse>,
}

// ── List queries ─────────────────────────────────────────────────────

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query parameters accepted by the `/buildings` and `/areas` list
/// endpoints. Unset fields are omitted from the request entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub status: Option<CommonStatus>,
    pub campus: Option<String>,
    /// Only meaningful on `/areas`.
    pub zone_type: Option<ZoneType>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ListQuery {
    /// Query scoped to a single campus, no paging.
    pub fn for_campus(campus_id: impl Into<String>) -> Self {
        Self {
            campus: Some(campus_id.into()),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub fn with_sort(mut self, by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(by.into());
        self.sort_order = Some(order);
        self
    }

    /// Render into request query parameters, skipping unset fields.
    pub(crate) fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(ref search) = self.search {
            params.push(("search", search.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        if let Some(ref campus) = self.campus {
            params.push(("campus", campus.clone()));
        }
        if let Some(zone_type) = self.zone_type {
            params.push(("zoneType", zone_type.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(ref sort_by) = self.sort_by {
            params.push(("sortBy", sort_by.clone()));
        }
        if let Some(sort_order) = self.sort_order {
            params.push(("sortOrder", sort_order.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_backend_spelling() {
        let json = serde_json::to_string(&CommonStatus::UnderMaintenance).unwrap();
        assert_eq!(json, "\"UNDERMAINTENANCE\"");
        let back: CommonStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CommonStatus::UnderMaintenance);
    }

    #[test]
    fn status_parses_from_str() {
        use std::str::FromStr;
        assert_eq!(
            CommonStatus::from_str("ACTIVE").unwrap(),
            CommonStatus::Active
        );
        assert!(CommonStatus::from_str("RETIRED").is_err());
    }

    #[test]
    fn list_query_omits_unset_fields() {
        let query = ListQuery::for_campus("c1");
        assert_eq!(query.to_params(), vec![("campus", "c1".to_string())]);
    }

    #[test]
    fn list_query_renders_all_fields() {
        let query = ListQuery {
            search: Some("gym".into()),
            status: Some(CommonStatus::Active),
            campus: Some("c1".into()),
            zone_type: Some(ZoneType::Public),
            ..ListQuery::default()
        }
        .with_page(2, 25)
        .with_sort("createdAt", SortOrder::Desc);

        let params = query.to_params();
        assert!(params.contains(&("status", "ACTIVE".into())));
        assert!(params.contains(&("zoneType", "PUBLIC".into())));
        assert!(params.contains(&("page", "2".into())));
        assert!(params.contains(&("sortOrder", "desc".into())));
    }
}
