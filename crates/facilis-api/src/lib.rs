// facilis-api: Async Rust client for the facility-portal REST backend

pub mod client;
mod envelope;
pub mod error;
pub mod transport;
pub mod types;

pub use client::PortalClient;
pub use error::Error;
pub use transport::TransportConfig;
pub use types::{
    AreaRecord, BuildingRecord, CampusRef, CampusResponse, CampusStatsItem, CommonStatus,
    ListQuery, Page, PaginationResponse, ParentRef, PartialStats, SortOrder, ZoneRecord, ZoneType,
};
