//! Turn a found path into a [`TripReport`].
//!
//! The assembler walks the path pairwise, looks up the edge joining each
//! consecutive pair, and sums distance and cost independently of the metric
//! that drove the search.

use wf_core::{LocationId, LocationIdx, Metric};
use wf_graph::{FoundPath, RouteGraph};

use crate::report::{Segment, TripReport};
use crate::{TripError, TripResult};

/// Build the report for `path` (origin first).
///
/// An empty `path` yields [`TripReport::no_route`]; that is the normal
/// "unreachable" outcome, not an error.  A missing edge between consecutive
/// entries means the path did not come from this graph and is reported as
/// [`TripError::BrokenPath`].
pub fn assemble(
    graph: &RouteGraph,
    origin: &str,
    destination: &str,
    path: &[LocationIdx],
    metric: Metric,
) -> TripResult<TripReport> {
    if path.is_empty() {
        return Ok(TripReport::no_route(origin.into(), destination.into(), metric));
    }

    let registry = graph.registry();
    let mut segments = Vec::with_capacity(path.len() - 1);
    let mut total_distance = 0.0;
    let mut total_cost = 0.0;

    for (i, pair) in path.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let Some(edge) = graph.edge_between(from, to) else {
            let (from, to) = (registry.get(from).id.clone(), registry.get(to).id.clone());
            log::error!("path step {from} -> {to} has no edge in the route graph");
            return Err(TripError::BrokenPath { from, to });
        };
        let (distance, cost) = graph.edge_weights(edge);
        total_distance += distance;
        total_cost += cost;
        segments.push(Segment {
            step: i + 1,
            from: registry.get(from).id.clone(),
            to:   registry.get(to).id.clone(),
            distance,
            cost,
        });
    }

    Ok(TripReport {
        origin:      origin.into(),
        destination: destination.into(),
        path:        path.iter().map(|&i| registry.get(i).id.clone()).collect::<Vec<LocationId>>(),
        total_distance,
        total_cost,
        stops:       path.len().saturating_sub(2),
        metric,
        segments,
        valid:       true,
    })
}

/// [`assemble`] for the output of a [`PathFinder`](wf_graph::PathFinder).
pub fn assemble_found(
    graph: &RouteGraph,
    origin: &str,
    destination: &str,
    found: &FoundPath,
) -> TripResult<TripReport> {
    assemble(graph, origin, destination, &found.locations, found.metric)
}
