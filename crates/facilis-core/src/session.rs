// ── List session: filter + pagination state machine ──
//
// One `ListSession` per logical list view. It owns the current filter
// set and pagination cursor and produces the exact query sent to the
// portal. The load-bearing invariant: no filter or sort mutation may
// leave a stale page number -- a stale page against a newly-filtered,
// likely shorter result set would silently render an empty page.
//
// Fetches are tagged with a monotonically increasing sequence number.
// A response for anything but the latest issued sequence is discarded,
// so a slow response to a superseded fetch can never overwrite newer
// state.

use facilis_api::types::{ListQuery, Page, PaginationResponse, SortOrder};

use crate::model::{Campus, CommonStatus, LocationKind, ZoneType};

/// Default page size for list views.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

const DEFAULT_SORT_BY: &str = "createdAt";

// ── Filter state ─────────────────────────────────────────────────────

/// Current filter dimensions. `None` means "all" for that dimension.
///
/// `kind` is only relevant on the combined building + area view;
/// `zone_type` only applies when areas are being listed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: Option<String>,
    pub status: Option<CommonStatus>,
    pub campus: Option<String>,
    pub zone_type: Option<ZoneType>,
    pub kind: Option<LocationKind>,
}

// ── Pagination request ───────────────────────────────────────────────

/// The request half of pagination state.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationRequest {
    pub page: u32,
    pub limit: u32,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_owned(),
            sort_order: SortOrder::Desc,
        }
    }
}

// ── Session ──────────────────────────────────────────────────────────

/// Filter/pagination state for one list view.
#[derive(Debug, Default)]
pub struct ListSession {
    filter: FilterState,
    pagination: PaginationRequest,
    response: Option<PaginationResponse>,

    /// First campus from the directory, recorded once on bootstrap.
    default_campus: Option<String>,
    /// Whether the user has explicitly picked (or cleared) a campus.
    /// Tracked as a flag because an unset campus filter is ambiguous
    /// between "not yet chosen" and "explicitly cleared".
    campus_chosen: bool,

    /// Sequence number of the most recently issued fetch.
    latest_seq: u64,
}

impl ListSession {
    pub fn new(limit: u32) -> Self {
        Self {
            pagination: PaginationRequest {
                limit,
                ..PaginationRequest::default()
            },
            ..Self::default()
        }
    }

    /// Session pinned to one location kind (single-type list views).
    pub fn for_kind(kind: LocationKind, limit: u32) -> Self {
        let mut session = Self::new(limit);
        session.filter.kind = Some(kind);
        session
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn pagination(&self) -> &PaginationRequest {
        &self.pagination
    }

    /// Pagination metadata from the last applied fetch, if any.
    pub fn last_response(&self) -> Option<&PaginationResponse> {
        self.response.as_ref()
    }

    pub fn default_campus(&self) -> Option<&str> {
        self.default_campus.as_deref()
    }

    // ── Filter transitions (all reset the page) ──────────────────────

    pub fn set_search(&mut self, search: Option<String>) {
        self.filter.search = search;
        self.pagination.page = 1;
    }

    pub fn set_status(&mut self, status: Option<CommonStatus>) {
        self.filter.status = status;
        self.pagination.page = 1;
    }

    /// Record an explicit campus choice. Marks the campus as
    /// user-chosen even when cleared, so a later directory refresh
    /// cannot override it.
    pub fn set_campus(&mut self, campus: Option<String>) {
        self.filter.campus = campus;
        self.campus_chosen = true;
        self.pagination.page = 1;
    }

    pub fn set_zone_type(&mut self, zone_type: Option<ZoneType>) {
        self.filter.zone_type = zone_type;
        self.pagination.page = 1;
    }

    pub fn set_kind(&mut self, kind: Option<LocationKind>) {
        self.filter.kind = kind;
        self.pagination.page = 1;
    }

    /// A changed ordering invalidates the meaning of "page n", so the
    /// page resets here too.
    pub fn set_sort(&mut self, by: impl Into<String>, order: SortOrder) {
        self.pagination.sort_by = by.into();
        self.pagination.sort_order = order;
        self.pagination.page = 1;
    }

    /// Paging itself never touches the filter.
    pub fn set_page(&mut self, page: u32) {
        self.pagination.page = page.max(1);
    }

    /// Reset all filters to defaults -- except the campus, which is
    /// re-seeded with the bootstrap default once one is known. An
    /// empty campus filter is only the true initial state before the
    /// directory has resolved; after that, "clear" means "back to the
    /// default campus".
    pub fn clear_filters(&mut self) {
        let kind = self.filter.kind;
        self.filter = FilterState {
            campus: self.default_campus.clone(),
            kind,
            ..FilterState::default()
        };
        self.campus_chosen = false;
        self.pagination.page = 1;
    }

    // ── Campus bootstrap ─────────────────────────────────────────────

    /// One-shot default-campus seeding from the campus directory.
    ///
    /// Fires the first time the directory resolves with at least one
    /// campus; later refreshes are no-ops. The filter is only touched
    /// when the user has not already chosen a campus. An empty
    /// directory is a valid state and leaves everything unset.
    /// Returns `true` when the filter was seeded.
    pub fn bootstrap(&mut self, campuses: &[Campus]) -> bool {
        if self.default_campus.is_some() {
            return false;
        }
        let Some(first) = campuses.first() else {
            return false;
        };
        self.default_campus = Some(first.id.clone());

        if self.campus_chosen {
            return false;
        }
        self.filter.campus = Some(first.id.clone());
        self.pagination.page = 1;
        true
    }

    // ── Query derivation ─────────────────────────────────────────────

    /// The exact query for the next fetch.
    ///
    /// `zone_type` is omitted when buildings are being listed -- the
    /// `/buildings` endpoint does not know the parameter.
    pub fn query(&self) -> ListQuery {
        let zone_type = match self.filter.kind {
            Some(LocationKind::Building) => None,
            _ => self.filter.zone_type,
        };
        ListQuery {
            search: self.filter.search.clone(),
            status: self.filter.status,
            campus: self.filter.campus.clone(),
            zone_type,
            page: Some(self.pagination.page),
            limit: Some(self.pagination.limit),
            sort_by: Some(self.pagination.sort_by.clone()),
            sort_order: Some(self.pagination.sort_order),
        }
    }

    // ── Fetch bookkeeping ────────────────────────────────────────────

    /// Tag a new in-flight fetch. Issuing a new sequence number
    /// supersedes every earlier one.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    /// `true` when `seq` is the latest issued fetch.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_seq
    }

    /// Apply a successful fetch result. Returns `false` (and changes
    /// nothing) when `seq` has been superseded. A result without
    /// pagination metadata counts as a single complete page.
    pub fn apply_page<T>(&mut self, seq: u64, page: &Page<T>) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.response = Some(page.pagination.unwrap_or(PaginationResponse {
            current_page: 1,
            total_pages: 1,
            total_items: u64::try_from(page.items.len()).unwrap_or(u64::MAX),
            items_per_page: self.pagination.limit,
        }));
        true
    }

    /// Apply a failed fetch. Stale data must not linger on screen, so
    /// the response half resets to a zero-valued default; the limit is
    /// kept so the next fetch pages the same way.
    pub fn apply_failure(&mut self, seq: u64) -> bool {
        if !self.is_current(seq) {
            return false;
        }
        self.response = Some(PaginationResponse {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            items_per_page: self.pagination.limit,
        });
        true
    }
}
