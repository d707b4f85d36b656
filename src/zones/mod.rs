//! Card zones and location tracking.

mod manager;

pub use manager::{Zone, ZoneKind, ZoneManager, ZonePosition};
