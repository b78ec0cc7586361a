// ── Canonical domain model ──
//
// Wire records from facilis-api are converted into these types by
// `convert`. Consumers match exhaustively on the sum types instead of
// probing optional fields.

mod campus;
mod location;
mod zone;

pub use campus::Campus;
pub use location::{Area, Building, LocationItem, LocationKind};
pub use zone::{Zone, ZoneParent};

// Shared enums keep their wire definitions; the backend spelling is
// the canonical one.
pub use facilis_api::types::{CommonStatus, ZoneType};
