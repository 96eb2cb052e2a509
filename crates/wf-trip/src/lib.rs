//! `wf-trip`: turns found paths into trip reports and serves planning
//! requests.
//!
//! # Request flow
//!
//! ```text
//! TripPlanner::plan(origin, destination, metric)
//!   ① PathFinder::find_path   : resolve ids (UnknownLocation on failure),
//!                               search the graph, return FoundPath
//!   ② assembler::assemble     : walk the path pairwise, build segments,
//!                               sum distance and cost
//!   ③ TripReport              : valid == false when no route exists
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `TripPlanner::plan_batch` runs on Rayon's thread pool.  |
//! | `serde`    | Serialize/Deserialize on `TripQuery` and report types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wf_core::Metric;
//! use wf_trip::TripPlanner;
//!
//! let planner = TripPlanner::new(graph);
//! let report = planner.plan("New Delhi", "Chennai", Metric::Cost)?;
//! println!("{report}");
//! ```

pub mod assembler;
pub mod error;
pub mod planner;
pub mod report;
pub mod shared;


pub use assembler::{assemble, assemble_found};
pub use error::{TripError, TripResult};
pub use planner::{MetricPair, TripPlanner, TripQuery};
pub use report::{RouteSummary, Segment, TripComparison, TripReport, TripSummary};
