//! Path-finder trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `wf-trip` calls path finding via the [`PathFinder`] trait, so applications
//! can swap in another engine (A*, a precomputed table) without touching the
//! planner.  The default [`DijkstraFinder`] is sufficient for city-scale
//! datasets.
//!
//! # Determinism
//!
//! Frontier entries are ordered by `(weight, LocationIdx)`.  Indices follow
//! identifier order, so among equally good candidates the lexicographically
//! smallest identifier is settled first, and repeated queries return the same
//! path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wf_core::{EdgeIdx, LocationIdx, Metric};

use crate::graph::RouteGraph;
use crate::GraphResult;

// ── FoundPath ─────────────────────────────────────────────────────────────────

/// Result of one path search.
///
/// An empty path means the destination is unreachable from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundPath {
    /// Locations in travel order, origin first.
    pub locations:    Vec<LocationIdx>,
    /// Half-edges used, in travel order.  `edges.len() == locations.len() - 1`
    /// for a non-empty path.
    pub edges:        Vec<EdgeIdx>,
    /// Sum of the optimised weight along the path.
    pub total_weight: f64,
    pub metric:       Metric,
}

impl FoundPath {
    /// The "no route exists" outcome.
    pub fn unreachable(metric: Metric) -> Self {
        Self { locations: vec![], edges: vec![], total_weight: 0.0, metric }
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// `true` if origin and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.locations.len() == 1
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path-search engine.
///
/// Implementations must be `Send + Sync` so one instance can serve concurrent
/// requests against a shared graph.
pub trait PathFinder: Send + Sync {
    /// Find the `metric`-optimal path from `origin` to `destination`.
    ///
    /// Fails with [`GraphError::UnknownLocation`](crate::GraphError) if either
    /// identifier is not registered; no search work is done in that case.
    /// An unreachable destination is not an error: it yields
    /// [`FoundPath::unreachable`].
    fn find_path(
        &self,
        graph: &RouteGraph,
        origin: &str,
        destination: &str,
        metric: Metric,
    ) -> GraphResult<FoundPath>;
}

// ── DijkstraFinder ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the CSR route graph with a binary-heap frontier.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraFinder;

impl PathFinder for DijkstraFinder {
    fn find_path(
        &self,
        graph: &RouteGraph,
        origin: &str,
        destination: &str,
        metric: Metric,
    ) -> GraphResult<FoundPath> {
        let from = graph.registry().resolve(origin)?;
        let to   = graph.registry().resolve(destination)?;

        let path = dijkstra(graph, from, to, metric);
        log::debug!(
            "path {origin} -> {destination} by {metric}: {} locations, weight {:.2}",
            path.len(),
            path.total_weight
        );
        Ok(path)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
struct Frontier {
    weight: f64,
    node:   LocationIdx,
}

impl Eq for Frontier {}

// Min-heap on (weight, node): reversed from BinaryHeap's max ordering.
impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(graph: &RouteGraph, from: LocationIdx, to: LocationIdx, metric: Metric) -> FoundPath {
    if from == to {
        return FoundPath { locations: vec![from], edges: vec![], total_weight: 0.0, metric };
    }

    let n = graph.location_count();
    // best[v] = best known cumulative weight to reach v.
    let mut best      = vec![f64::INFINITY; n];
    // prev_edge[v] = half-edge that reached v; INVALID for the origin and unreached nodes.
    let mut prev_edge = vec![EdgeIdx::INVALID; n];
    let mut settled   = vec![false; n];

    best[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(Frontier { weight: 0.0, node: from });

    while let Some(Frontier { weight, node }) = heap.pop() {
        // Stale entry: node was settled through a cheaper push.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if node == to {
            return reconstruct(graph, &prev_edge, from, to, weight, metric);
        }

        for edge in graph.out_edges(node) {
            let next = graph.edge_target(edge);
            if settled[next.index()] {
                continue;
            }
            let (distance_km, cost) = graph.edge_weights(edge);
            let candidate = weight + metric.select(distance_km, cost);

            if candidate < best[next.index()] {
                best[next.index()] = candidate;
                prev_edge[next.index()] = edge;
                heap.push(Frontier { weight: candidate, node: next });
            }
        }
    }

    FoundPath::unreachable(metric)
}

fn reconstruct(
    graph: &RouteGraph,
    prev_edge: &[EdgeIdx],
    from: LocationIdx,
    to: LocationIdx,
    total_weight: f64,
    metric: Metric,
) -> FoundPath {
    let mut edges = Vec::new();
    let mut locations = vec![to];
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert_ne!(e, EdgeIdx::INVALID, "broken predecessor chain at {cur}");
        edges.push(e);
        cur = graph.edge_source(e);
        locations.push(cur);
    }
    edges.reverse();
    locations.reverse();
    FoundPath { locations, edges, total_weight, metric }
}
