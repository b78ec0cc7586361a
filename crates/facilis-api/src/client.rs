// Hand-crafted async HTTP client for the facility-portal REST backend.
//
// All endpoints are JSON GETs under the portal base path. Envelope
// normalization lives in `envelope`; this module is transport
// mechanics and endpoint wiring only.

use tracing::debug;
use url::Url;

use crate::Error;
use crate::envelope;
use crate::transport::TransportConfig;
use crate::types::{
    AreaRecord, BuildingRecord, CampusResponse, CampusStatsItem, ListQuery, Page, PartialStats,
    ZoneRecord,
};

// ── Error response shape from the portal ─────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the facility-portal REST API.
///
/// Communicates via JSON REST endpoints under the portal base URL.
/// Failures are always explicit: a network error, a non-2xx status,
/// or a body matching no tolerated envelope all surface as [`Error`];
/// fallback decisions belong to the caller.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PortalClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Wrap an existing `reqwest::Client` (caller manages headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url)?,
        })
    }

    /// Ensure the base URL ends with a slash so relative joins work.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        Ok(url)
    }

    /// Join a relative path (e.g. `"buildings"`) onto the base URL.
    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── HTTP mechanics ───────────────────────────────────────────────

    /// GET a path and return the raw body text after status checking.
    async fn get_text(&self, path: &str, params: &[(&str, String)]) -> Result<String, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            Error::Api {
                status: status.as_u16(),
                message: err.message.unwrap_or_else(|| status.to_string()),
            }
        } else {
            Error::Api {
                status: status.as_u16(),
                message: if raw.is_empty() {
                    status.to_string()
                } else {
                    raw
                },
            }
        }
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Campuses ─────────────────────────────────────────────────────

    /// List all campuses in server-defined order.
    ///
    /// The order is significant -- the first campus is the bootstrap
    /// default downstream -- so no client-side re-sorting happens here.
    /// An empty list is a valid response, not an error.
    pub async fn list_campuses(&self) -> Result<Vec<CampusResponse>, Error> {
        let body = self.get_text("campuses", &[]).await?;
        let page: Page<CampusResponse> = envelope::parse_list(&body, "campuses")?;
        Ok(page.items)
    }

    // ── Buildings ────────────────────────────────────────────────────

    /// List buildings matching `query`.
    ///
    /// `GET /buildings?search&status&campus&page&limit&sortBy&sortOrder`
    pub async fn list_buildings(&self, query: &ListQuery) -> Result<Page<BuildingRecord>, Error> {
        let body = self.get_text("buildings", &query.to_params()).await?;
        envelope::parse_list(&body, "buildings")
    }

    /// Portal-wide building statistics.
    ///
    /// `GET /buildings-stats`, tolerating one extra `data` wrapper.
    pub async fn building_stats(&self) -> Result<PartialStats, Error> {
        let body = self.get_text("buildings-stats", &[]).await?;
        envelope::parse_stats(&body)
    }

    /// Per-campus building breakdown.
    ///
    /// `GET /buildings-stats-by-campus`; a misshapen body degrades to
    /// an empty list.
    pub async fn building_stats_by_campus(&self) -> Result<Vec<CampusStatsItem>, Error> {
        let body = self.get_text("buildings-stats-by-campus", &[]).await?;
        Ok(envelope::parse_stats_list(&body))
    }

    // ── Areas ────────────────────────────────────────────────────────

    /// List outdoor areas matching `query`.
    ///
    /// `GET /areas?search&status&campus&zoneType&page&limit&sortBy&sortOrder`
    pub async fn list_areas(&self, query: &ListQuery) -> Result<Page<AreaRecord>, Error> {
        let body = self.get_text("areas", &query.to_params()).await?;
        envelope::parse_list(&body, "areas")
    }

    /// Portal-wide area statistics.
    ///
    /// `GET /areas-stats`, same wrapping tolerance as building stats.
    pub async fn area_stats(&self) -> Result<PartialStats, Error> {
        let body = self.get_text("areas-stats", &[]).await?;
        envelope::parse_stats(&body)
    }

    /// Per-campus area breakdown.
    pub async fn area_stats_by_campus(&self) -> Result<Vec<CampusStatsItem>, Error> {
        let body = self.get_text("areas-stats-by-campus", &[]).await?;
        Ok(envelope::parse_stats_list(&body))
    }

    // ── Zones ────────────────────────────────────────────────────────

    /// List the zones of one building.
    ///
    /// `GET /zones/by-building/{buildingId}`. Areas have no zones in
    /// this model, so there is no by-area counterpart.
    pub async fn zones_by_building(&self, building_id: &str) -> Result<Vec<ZoneRecord>, Error> {
        let body = self
            .get_text(&format!("zones/by-building/{building_id}"), &[])
            .await?;
        let page: Page<ZoneRecord> = envelope::parse_list(&body, "zones")?;
        Ok(page.items)
    }
}
