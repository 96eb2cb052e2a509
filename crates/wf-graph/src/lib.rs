//! `wf-graph`: location registry, route graph, and path finding.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`registry`] | `Location`, `LocationRegistry` (id interning + R-tree)    |
//! | [`graph`]    | `RouteGraph` (CSR, two weights), `RouteGraphBuilder`      |
//! | [`finder`]   | `PathFinder` trait, `FoundPath`, `DijkstraFinder`         |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on record types.           |

pub mod error;
pub mod finder;
pub mod graph;
pub mod registry;


pub use error::{GraphError, GraphResult};
pub use finder::{DijkstraFinder, FoundPath, PathFinder};
pub use graph::{Edge, EdgeRecord, Neighbor, RouteGraph, RouteGraphBuilder};
pub use registry::{Location, LocationRegistry};
