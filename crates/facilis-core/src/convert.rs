// ── Wire record -> domain type conversions ──
//
// Buildings and areas convert infallibly; zones can fail because the
// wire shape allows parent combinations the domain model forbids.

use facilis_api::types::{AreaRecord, BuildingRecord, CampusResponse, ZoneRecord};

use crate::error::CoreError;
use crate::model::{Area, Building, Campus, Zone, ZoneParent};

impl From<CampusResponse> for Campus {
    fn from(w: CampusResponse) -> Self {
        Self {
            id: w.id,
            name: w.name,
        }
    }
}

impl From<BuildingRecord> for Building {
    fn from(w: BuildingRecord) -> Self {
        Self {
            id: w.id,
            name: w.name,
            floor_count: w.floor_count,
            status: w.status,
            campus: w.campus,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

impl From<AreaRecord> for Area {
    fn from(w: AreaRecord) -> Self {
        Self {
            id: w.id,
            name: w.name,
            status: w.status,
            description: w.description,
            zone_type: w.zone_type,
            campus: w.campus,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

impl TryFrom<ZoneRecord> for Zone {
    type Error = CoreError;

    fn try_from(w: ZoneRecord) -> Result<Self, Self::Error> {
        let parent = match (w.building, w.area) {
            (Some(b), None) => ZoneParent::Building {
                id: b.id,
                name: b.name,
                floor: w.floor_location,
            },
            (None, Some(a)) => ZoneParent::Area {
                id: a.id,
                name: a.name,
            },
            (Some(_), Some(_)) => {
                return Err(CoreError::InvalidRecord {
                    message: format!("zone {} has both a building and an area parent", w.id),
                });
            }
            (None, None) => {
                return Err(CoreError::InvalidRecord {
                    message: format!("zone {} has no parent", w.id),
                });
            }
        };

        Ok(Self {
            id: w.id,
            name: w.name,
            description: w.description,
            status: w.status,
            zone_type: w.zone_type,
            parent,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use facilis_api::types::{CommonStatus, ParentRef, ZoneType};

    fn zone_record(building: Option<ParentRef>, area: Option<ParentRef>) -> ZoneRecord {
        ZoneRecord {
            id: "z1".into(),
            name: "Server Room".into(),
            description: None,
            status: CommonStatus::Active,
            zone_type: ZoneType::Technical,
            floor_location: Some(3),
            building,
            area,
        }
    }

    fn parent(id: &str) -> ParentRef {
        ParentRef {
            id: id.into(),
            name: None,
        }
    }

    #[test]
    fn zone_with_building_parent_keeps_floor() {
        let zone = Zone::try_from(zone_record(Some(parent("b1")), None)).unwrap();
        assert_eq!(zone.floor(), Some(3));
        assert!(matches!(zone.parent, ZoneParent::Building { ref id, .. } if id == "b1"));
    }

    #[test]
    fn zone_with_area_parent_drops_floor() {
        // floorLocation is only meaningful under a building parent.
        let zone = Zone::try_from(zone_record(None, Some(parent("a1")))).unwrap();
        assert_eq!(zone.floor(), None);
    }

    #[test]
    fn zone_with_both_parents_is_invalid() {
        let err = Zone::try_from(zone_record(Some(parent("b1")), Some(parent("a1")))).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));
    }

    #[test]
    fn zone_with_no_parent_is_invalid() {
        let err = Zone::try_from(zone_record(None, None)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { .. }));
    }
}
