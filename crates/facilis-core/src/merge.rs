// ── Merge engine for the combined building + area view ──

use crate::model::{Area, Building, LocationItem};

/// Merge buildings and areas into one homogeneous, sorted list.
///
/// Tags every record with its kind, concatenates (buildings first),
/// and stable-sorts by creation time, most recent first. On identical
/// timestamps the concatenation order is preserved, so buildings sort
/// ahead of areas on exact ties.
///
/// Pure and total: empty inputs are valid and never panic.
pub fn merge_locations(buildings: Vec<Building>, areas: Vec<Area>) -> Vec<LocationItem> {
    let mut items: Vec<LocationItem> = buildings
        .into_iter()
        .map(LocationItem::Building)
        .chain(areas.into_iter().map(LocationItem::Area))
        .collect();

    // `sort_by` is stable; descending order via reversed comparison.
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    items
}
