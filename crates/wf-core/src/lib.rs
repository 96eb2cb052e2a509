//! `wf-core`: foundational types for the `wayfare` route planner.
//!
//! This crate is a dependency of every other `wf-*` crate.  It has no `wf-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `LocationId` (string key), `LocationIdx`, `EdgeIdx`   |
//! | [`geo`]      | `GeoPoint`, haversine distance                        |
//! | [`metric`]   | `Metric` selector (`distance` / `cost`)               |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod metric;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{EdgeIdx, LocationId, LocationIdx};
pub use metric::Metric;
