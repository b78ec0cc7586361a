// ── Location service facade ──
//
// The entry point for consumers. Owns the portal client and composes
// the fork-join fetch patterns: list halves for the combined view,
// stats halves for the aggregate roll-up. No background tasks and no
// retries anywhere -- a failed request surfaces immediately, and the
// worst outcome is an empty or degraded display the user can recover
// from by re-triggering a fetch.

use std::sync::Arc;

use tracing::{debug, warn};

use facilis_api::types::{ListQuery, Page, PaginationResponse};
use facilis_api::{PortalClient, TransportConfig};

use crate::config::PortalConfig;
use crate::error::CoreError;
use crate::merge::merge_locations;
use crate::model::{Campus, LocationItem, LocationKind, Zone};
use crate::session::ListSession;
use crate::stats::{AggregateStats, CampusBreakdown};

/// One fetched page of the location list.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPage {
    pub items: Vec<LocationItem>,
    pub pagination: Option<PaginationResponse>,
}

/// Facade over the portal client for all location-subsystem reads.
///
/// Cheaply cloneable via the shared client handle.
#[derive(Clone)]
pub struct LocationService {
    client: Arc<PortalClient>,
}

impl LocationService {
    /// Build a service from portal configuration.
    pub fn new(config: &PortalConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
        };
        let client = PortalClient::new(&config.base_url, &transport)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Wrap an existing client (tests, embedders with custom transports).
    pub fn from_client(client: Arc<PortalClient>) -> Self {
        Self { client }
    }

    // ── Campus directory ─────────────────────────────────────────────

    /// All campuses in server-defined order. An empty directory is a
    /// valid, displayable state -- campus-scoped features degrade to
    /// "no campus selectable" without raising an error.
    pub async fn campuses(&self) -> Result<Vec<Campus>, CoreError> {
        let campuses = self
            .client
            .list_campuses()
            .await
            .map_err(|e| CoreError::from_api(e, "campuses"))?;
        Ok(campuses.into_iter().map(Campus::from).collect())
    }

    /// Resolve the campus directory and seed the session's default
    /// campus. Returns the directory for filter population.
    pub async fn bootstrap(&self, session: &mut ListSession) -> Result<Vec<Campus>, CoreError> {
        let campuses = self.campuses().await?;
        if session.bootstrap(&campuses) {
            debug!(campus = ?session.filter().campus, "seeded default campus");
        }
        Ok(campuses)
    }

    // ── Combined building + area view ────────────────────────────────

    /// Fetch everything and merge locally into one sorted, typed list.
    ///
    /// Both list calls run concurrently and this path is unpaginated
    /// by design. Either failure fails the whole operation: a
    /// silently-incomplete merged list would misrepresent totals, so
    /// callers surface the error instead.
    pub async fn merged_locations(&self) -> Result<Vec<LocationItem>, CoreError> {
        let query = ListQuery::default();
        let (buildings, areas) = tokio::join!(
            self.client.list_buildings(&query),
            self.client.list_areas(&query),
        );

        let buildings = buildings.map_err(|e| CoreError::from_api(e, "buildings"))?;
        let areas = areas.map_err(|e| CoreError::from_api(e, "areas"))?;

        Ok(merge_locations(
            buildings.items.into_iter().map(Into::into).collect(),
            areas.items.into_iter().map(Into::into).collect(),
        ))
    }

    // ── Paginated single-kind views ──────────────────────────────────

    /// Fetch the page described by the session's current filter and
    /// pagination state, then record the outcome on the session.
    ///
    /// A session without a kind filter gets the combined view: both
    /// kinds fetched in parallel, merged, and reported as a single
    /// complete page.
    pub async fn fetch_page(&self, session: &mut ListSession) -> Result<LocationPage, CoreError> {
        let seq = session.begin_fetch();
        let query = session.query();

        let result = match session.filter().kind {
            Some(LocationKind::Building) => self
                .client
                .list_buildings(&query)
                .await
                .map(|page| Page {
                    items: page
                        .items
                        .into_iter()
                        .map(|b| LocationItem::Building(b.into()))
                        .collect(),
                    pagination: page.pagination,
                })
                .map_err(|e| CoreError::from_api(e, "buildings")),
            Some(LocationKind::Area) => self
                .client
                .list_areas(&query)
                .await
                .map(|page| Page {
                    items: page
                        .items
                        .into_iter()
                        .map(|a| LocationItem::Area(a.into()))
                        .collect(),
                    pagination: page.pagination,
                })
                .map_err(|e| CoreError::from_api(e, "areas")),
            None => self.merged_locations().await.map(|items| Page {
                items,
                pagination: None,
            }),
        };

        match result {
            Ok(page) => {
                session.apply_page(seq, &page);
                Ok(LocationPage {
                    pagination: session.last_response().copied(),
                    items: page.items,
                })
            }
            Err(err) => {
                session.apply_failure(seq);
                Err(err)
            }
        }
    }

    // ── Statistics ───────────────────────────────────────────────────

    /// Cross-resource aggregate statistics.
    ///
    /// The two stats calls run concurrently; a failed or misshapen
    /// half degrades to a zeroed partial instead of failing the whole
    /// aggregation, so one broken endpoint never blanks the other's
    /// numbers.
    pub async fn aggregate_stats(&self) -> AggregateStats {
        let (buildings, areas) =
            tokio::join!(self.client.building_stats(), self.client.area_stats());

        let buildings = match buildings {
            Ok(stats) => Some(stats),
            Err(err) => {
                warn!(error = %err, "building stats unavailable, using zeroed partial");
                None
            }
        };
        let areas = match areas {
            Ok(stats) => Some(stats),
            Err(err) => {
                warn!(error = %err, "area stats unavailable, using zeroed partial");
                None
            }
        };

        AggregateStats::combine(buildings, areas)
    }

    /// The two per-campus breakdowns, fetched concurrently. Each list
    /// degrades independently to empty on failure.
    pub async fn stats_by_campus(&self) -> CampusBreakdown {
        let (buildings, areas) = tokio::join!(
            self.client.building_stats_by_campus(),
            self.client.area_stats_by_campus(),
        );

        CampusBreakdown {
            buildings: buildings.unwrap_or_else(|err| {
                warn!(error = %err, "building campus breakdown unavailable");
                Vec::new()
            }),
            areas: areas.unwrap_or_else(|err| {
                warn!(error = %err, "area campus breakdown unavailable");
                Vec::new()
            }),
        }
    }

    // ── Zones ────────────────────────────────────────────────────────

    /// The zones of one building. Records violating the
    /// exactly-one-parent invariant fail the conversion explicitly.
    pub async fn zones_for_building(&self, building_id: &str) -> Result<Vec<Zone>, CoreError> {
        let records = self
            .client
            .zones_by_building(building_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    CoreError::BuildingNotFound {
                        identifier: building_id.to_owned(),
                    }
                } else {
                    CoreError::from_api(e, "zones")
                }
            })?;
        records.into_iter().map(Zone::try_from).collect()
    }
}
