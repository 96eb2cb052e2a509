//! `wf-data`: load a city/route dataset from CSV into a `RouteGraph`, and
//! write one back out.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`loader`] | `read_locations`, `read_edges`, `load_graph[_reader]`     |
//! | [`writer`] | `write_locations`, `write_edges`, `save_graph`            |
//! | [`lint`]   | `lint`, `DatasetReport`, `DatasetProblem`                 |
//! | [`error`]  | `DataError`, `DataResult<T>`                              |

pub mod error;
pub mod lint;
pub mod loader;
pub mod writer;


pub use error::{DataError, DataResult};
pub use lint::{DatasetProblem, DatasetReport, lint};
pub use loader::{load_graph, load_graph_reader, read_edges, read_locations};
pub use writer::{save_graph, write_edges, write_locations};
