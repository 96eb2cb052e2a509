//! Non-fatal dataset checks.
//!
//! [`RouteGraph::build`](wf_graph::RouteGraph::build) stops at the first
//! problem.  `lint` instead walks the whole dataset and collects every
//! problem it can see, so a data author can fix them in one pass.

use std::fmt;

use rustc_hash::FxHashSet;

use wf_core::LocationId;
use wf_graph::{EdgeRecord, Location};

/// One problem found in a dataset.
#[derive(Clone, Debug, PartialEq)]
pub enum DatasetProblem {
    NoLocations,
    NoEdges,
    DuplicateLocation(LocationId),
    /// Route row `row` (0-based) names a city that does not exist.
    DanglingEndpoint { row: usize, missing: LocationId },
}

impl fmt::Display for DatasetProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetProblem::NoLocations => f.write_str("no locations found"),
            DatasetProblem::NoEdges     => f.write_str("no routes found"),
            DatasetProblem::DuplicateLocation(id) => write!(f, "duplicate location {id:?}"),
            DatasetProblem::DanglingEndpoint { row, missing } => {
                write!(f, "route row {row} references unknown location {missing:?}")
            }
        }
    }
}

/// All problems found by [`lint`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatasetReport {
    problems: Vec<DatasetProblem>,
}

impl DatasetReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[DatasetProblem] {
        &self.problems
    }
}

/// Check `locations` and `edges` for emptiness, duplicate identifiers, and
/// route endpoints that name unknown locations.
pub fn lint(locations: &[Location], edges: &[EdgeRecord]) -> DatasetReport {
    let mut problems = Vec::new();

    if locations.is_empty() {
        problems.push(DatasetProblem::NoLocations);
    }
    if edges.is_empty() {
        problems.push(DatasetProblem::NoEdges);
    }

    let mut known: FxHashSet<&str> = FxHashSet::default();
    let mut reported: FxHashSet<&str> = FxHashSet::default();
    for loc in locations {
        let id = loc.id.as_str().trim();
        if !known.insert(id) && reported.insert(id) {
            problems.push(DatasetProblem::DuplicateLocation(id.into()));
        }
    }

    for (row, edge) in edges.iter().enumerate() {
        for end in [&edge.a, &edge.b] {
            let id = end.as_str().trim();
            if !known.contains(id) {
                problems.push(DatasetProblem::DanglingEndpoint { row, missing: id.into() });
            }
        }
    }

    DatasetReport { problems }
}
