// ── Aggregate statistics ──
//
// Cross-resource roll-ups built from the two per-kind stats blocks.
// Statistics are advisory display data: a failed partial degrades to
// zeros instead of failing the aggregation, which is the deliberate
// opposite of the merged-list path where a missing half would
// misrepresent the data.

use serde::{Deserialize, Serialize};

use facilis_api::types::{CampusStatsItem, PartialStats};

/// Cross-resource roll-up of building and area statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_all: u64,
    pub total_active: u64,
    pub total_inactive: u64,
    /// Always 0: the upstream stats endpoints do not report an
    /// under-maintenance count, and deriving one from the paged list
    /// would double-count against active + inactive.
    pub total_under_maintenance: u64,
    pub buildings: PartialStats,
    pub areas: PartialStats,
}

impl AggregateStats {
    /// Combine the two per-kind partials field by field.
    ///
    /// A missing side (failed or misshapen upstream call) contributes
    /// an all-zero partial, so the identities
    /// `total_all == buildings.total + areas.total` and
    /// `total_active == buildings.active + areas.active` hold
    /// unconditionally.
    pub fn combine(buildings: Option<PartialStats>, areas: Option<PartialStats>) -> Self {
        let buildings = buildings.unwrap_or_default();
        let areas = areas.unwrap_or_default();

        Self {
            total_all: buildings.total + areas.total,
            total_active: buildings.active + areas.active,
            total_inactive: buildings.inactive + areas.inactive,
            total_under_maintenance: 0,
            buildings,
            areas,
        }
    }

    /// `true` when at least one partial carries data.
    pub fn has_data(&self) -> bool {
        self.buildings != PartialStats::default() || self.areas != PartialStats::default()
    }
}

/// The two per-campus breakdown lists, side by side.
///
/// Deliberately not merged across kinds: summing buildings and areas
/// per campus was judged not meaningful for this domain, so consumers
/// render two independent breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusBreakdown {
    pub buildings: Vec<CampusStatsItem>,
    pub areas: Vec<CampusStatsItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stats(total: u64, active: u64, inactive: u64, new_this_month: u64) -> PartialStats {
        PartialStats {
            total,
            active,
            inactive,
            new_this_month,
        }
    }

    #[test]
    fn combine_sums_field_by_field() {
        let agg = AggregateStats::combine(Some(stats(5, 3, 2, 1)), Some(stats(10, 8, 2, 3)));

        assert_eq!(agg.total_all, 15);
        assert_eq!(agg.total_active, 11);
        assert_eq!(agg.total_inactive, 4);
        assert_eq!(agg.total_under_maintenance, 0);
        assert_eq!(agg.buildings.new_this_month, 1);
        assert_eq!(agg.areas.new_this_month, 3);
    }

    #[test]
    fn failed_buildings_side_degrades_to_zeros() {
        let agg = AggregateStats::combine(None, Some(stats(10, 8, 2, 3)));

        assert_eq!(agg.buildings, PartialStats::default());
        assert_eq!(agg.total_all, 10);
        assert_eq!(agg.total_active, 8);
        assert_eq!(agg.total_inactive, 2);
        assert_eq!(agg.total_under_maintenance, 0);
    }

    #[test]
    fn totals_identity_holds_with_either_side_missing() {
        for (b, a) in [
            (Some(stats(4, 2, 2, 0)), None),
            (None, Some(stats(7, 7, 0, 2))),
            (None, None),
        ] {
            let agg = AggregateStats::combine(b, a);
            assert_eq!(agg.total_all, agg.buildings.total + agg.areas.total);
            assert_eq!(agg.total_active, agg.buildings.active + agg.areas.active);
        }
    }

    #[test]
    fn has_data_reflects_partials() {
        assert!(!AggregateStats::combine(None, None).has_data());
        assert!(AggregateStats::combine(Some(stats(1, 1, 0, 0)), None).has_data());
    }
}
