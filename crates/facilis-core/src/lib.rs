//! Domain layer between `facilis-api` and UI consumers of the
//! facility portal's location subsystem.
//!
//! This crate owns the business logic for the two-level spatial
//! hierarchy (campus → building/area → zone):
//!
//! - **[`LocationService`]** -- Facade over the portal client. Fetches
//!   campus directories, paginated single-kind lists, the combined
//!   building + area view, aggregate statistics, and building zones.
//!
//! - **[`ListSession`]** -- Filter/pagination state machine for one
//!   list view: any filter or sort change resets the page, the first
//!   campus from the directory is seeded exactly once as the default,
//!   and per-fetch sequence numbers discard late responses from
//!   superseded fetches.
//!
//! - **[`merge_locations`]** -- Pure merge of the two resource
//!   collections into one stable-sorted, kind-tagged list.
//!
//! - **[`AggregateStats`]** -- Cross-resource roll-up combining the two
//!   per-kind stats blocks, zero-defaulting a failed half.
//!
//! - **Domain model** ([`model`]) -- Canonical types with proper sum
//!   types where the wire shape uses optional-field conventions
//!   ([`LocationItem`], [`model::ZoneParent`]).

pub mod config;
pub mod convert;
pub mod error;
pub mod merge;
pub mod model;
pub mod service;
pub mod session;
pub mod stats;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::PortalConfig;
pub use error::CoreError;
pub use merge::merge_locations;
pub use service::{LocationPage, LocationService};
pub use session::{DEFAULT_PAGE_LIMIT, FilterState, ListSession, PaginationRequest};
pub use stats::{AggregateStats, CampusBreakdown};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    Area, Building, Campus, CommonStatus, LocationItem, LocationKind, Zone, ZoneParent, ZoneType,
};
