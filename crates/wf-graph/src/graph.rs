//! Route graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format.  Every undirected
//! edge is stored as two directed half-edges with identical weights.  Given a
//! `LocationIdx n`, its outgoing half-edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! Half-edges are sorted by `(from, to)`, so a location's neighbours come out
//! in lexicographic identifier order.  The graph is built once and never
//! mutated; any number of threads may query it concurrently.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use wf_core::{EdgeIdx, GeoPoint, LocationId, LocationIdx};

use crate::registry::{Location, LocationRegistry};
use crate::{GraphError, GraphResult};

// ── Records ───────────────────────────────────────────────────────────────────

/// One bidirectional connection as it appears in a dataset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub a:           LocationId,
    pub b:           LocationId,
    /// Physical length in kilometres.
    pub distance_km: f64,
    /// Monetary cost in currency units.
    pub cost:        f64,
}

impl EdgeRecord {
    pub fn new(a: impl Into<LocationId>, b: impl Into<LocationId>, distance_km: f64, cost: f64) -> Self {
        Self { a: a.into(), b: b.into(), distance_km, cost }
    }
}

// ── Query views ───────────────────────────────────────────────────────────────

/// A neighbour of some location, reached over one half-edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor<'g> {
    pub id:          &'g LocationId,
    pub idx:         LocationIdx,
    pub edge:        EdgeIdx,
    pub distance_km: f64,
    pub cost:        f64,
}

/// A directed view of one half-edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge<'g> {
    pub from:        &'g Location,
    pub to:          &'g Location,
    pub distance_km: f64,
    pub cost:        f64,
}

impl Edge<'_> {
    /// Cost per kilometre of this edge.
    pub fn cost_per_km(&self) -> f64 {
        self.cost / self.distance_km
    }
}

// ── RouteGraph ────────────────────────────────────────────────────────────────

/// Undirected dual-weight graph in CSR form.
///
/// Do not construct directly; use [`RouteGraph::build`] or
/// [`RouteGraphBuilder`].
#[derive(Debug)]
pub struct RouteGraph {
    registry: LocationRegistry,

    // ── CSR adjacency ─────────────────────────────────────────────────────
    /// Row pointer.  Length = `location_count + 1`.
    node_out_start: Vec<u32>,

    // ── Half-edge data (indexed by EdgeIdx) ───────────────────────────────
    /// Source of each half-edge.  Redundant with CSR but needed to walk a
    /// predecessor chain back to the origin.
    edge_from:        Vec<LocationIdx>,
    edge_to:          Vec<LocationIdx>,
    edge_distance_km: Vec<f64>,
    edge_cost:        Vec<f64>,
}

impl RouteGraph {
    /// Validate `locations` and `edges` and build the graph.
    ///
    /// Fails on the first configuration problem found; see [`GraphError`].
    pub fn build(locations: Vec<Location>, edges: Vec<EdgeRecord>) -> GraphResult<Self> {
        let registry = LocationRegistry::build(locations)?;

        let mut seen: FxHashSet<(LocationIdx, LocationIdx)> = FxHashSet::default();
        let mut raw: Vec<RawHalfEdge> = Vec::with_capacity(edges.len() * 2);
        // Upper bound on any simple path's weight under either metric.
        let (mut sum_distance, mut sum_cost) = (0.0_f64, 0.0_f64);

        for rec in edges {
            let a_id = rec.a.as_str().trim();
            let b_id = rec.b.as_str().trim();
            let dangling = |missing: &str| GraphError::DanglingEdge {
                from:    LocationId::from(a_id),
                to:      LocationId::from(b_id),
                missing: LocationId::from(missing),
            };
            let a = registry.lookup(a_id).ok_or_else(|| dangling(a_id))?;
            let b = registry.lookup(b_id).ok_or_else(|| dangling(b_id))?;

            if a == b {
                return Err(GraphError::SelfLoop(LocationId::from(a_id)));
            }
            for (weight, value) in [("distance", rec.distance_km), ("cost", rec.cost)] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(GraphError::InvalidWeight {
                        from: LocationId::from(a_id),
                        to:   LocationId::from(b_id),
                        weight,
                        value,
                    });
                }
            }
            if !seen.insert((a.min(b), a.max(b))) {
                return Err(GraphError::DuplicateEdge {
                    a: LocationId::from(a_id),
                    b: LocationId::from(b_id),
                });
            }

            sum_distance += rec.distance_km;
            sum_cost += rec.cost;
            raw.push(RawHalfEdge { from: a, to: b, distance_km: rec.distance_km, cost: rec.cost });
            raw.push(RawHalfEdge { from: b, to: a, distance_km: rec.distance_km, cost: rec.cost });
        }

        for (weight, total) in [("distance", sum_distance), ("cost", sum_cost)] {
            if !total.is_finite() {
                return Err(GraphError::WeightOverflow { weight });
            }
        }

        let graph = Self::from_parts(registry, raw);
        log::info!(
            "route graph built: {} locations, {} edges",
            graph.location_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn from_parts(registry: LocationRegistry, mut raw: Vec<RawHalfEdge>) -> Self {
        let node_count = registry.len();

        raw.sort_unstable_by_key(|e| (e.from, e.to));

        let edge_from:        Vec<LocationIdx> = raw.iter().map(|e| e.from).collect();
        let edge_to:          Vec<LocationIdx> = raw.iter().map(|e| e.to).collect();
        let edge_distance_km: Vec<f64>         = raw.iter().map(|e| e.distance_km).collect();
        let edge_cost:        Vec<f64>         = raw.iter().map(|e| e.cost).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        RouteGraph { registry, node_out_start, edge_from, edge_to, edge_distance_km, edge_cost }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn location_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_to.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // ── Location queries ──────────────────────────────────────────────────

    pub fn has_location(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// The location named `id`, or [`GraphError::UnknownLocation`].
    pub fn location(&self, id: &str) -> GraphResult<&Location> {
        self.registry.resolve(id).map(|idx| self.registry.get(idx))
    }

    /// All locations in lexicographic identifier order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.registry.iter()
    }

    /// The location nearest to `pos`.  `None` only for an empty graph.
    pub fn nearest_location(&self, pos: GeoPoint) -> Option<&Location> {
        self.registry.nearest(pos).map(|idx| self.registry.get(idx))
    }

    /// Up to `k` locations nearest to `pos`, nearest first.
    pub fn k_nearest_locations(&self, pos: GeoPoint, k: usize) -> Vec<&Location> {
        self.registry
            .k_nearest(pos, k)
            .into_iter()
            .map(|idx| self.registry.get(idx))
            .collect()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// `EdgeIdx`s of all half-edges leaving `node`.  A contiguous range; no
    /// allocation.
    #[inline]
    pub fn out_edges(&self, node: LocationIdx) -> impl Iterator<Item = EdgeIdx> + use<> {
        let start = self.node_out_start[node.index()];
        let end   = self.node_out_start[node.index() + 1];
        (start..end).map(EdgeIdx)
    }

    #[inline]
    pub fn edge_source(&self, edge: EdgeIdx) -> LocationIdx {
        self.edge_from[edge.index()]
    }

    #[inline]
    pub fn edge_target(&self, edge: EdgeIdx) -> LocationIdx {
        self.edge_to[edge.index()]
    }

    /// `(distance_km, cost)` of a half-edge.
    #[inline]
    pub fn edge_weights(&self, edge: EdgeIdx) -> (f64, f64) {
        (self.edge_distance_km[edge.index()], self.edge_cost[edge.index()])
    }

    pub fn edge(&self, edge: EdgeIdx) -> Edge<'_> {
        let (distance_km, cost) = self.edge_weights(edge);
        Edge {
            from: self.registry.get(self.edge_source(edge)),
            to:   self.registry.get(self.edge_target(edge)),
            distance_km,
            cost,
        }
    }

    /// Each undirected edge once, oriented from the lexicographically smaller
    /// endpoint.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> + '_ {
        (0..self.edge_to.len() as u32)
            .map(EdgeIdx)
            .filter(|&e| self.edge_source(e) < self.edge_target(e))
            .map(|e| self.edge(e))
    }

    /// Half-edge from `a` to `b`, if the two are adjacent.
    pub fn edge_between(&self, a: LocationIdx, b: LocationIdx) -> Option<EdgeIdx> {
        self.out_edges(a).find(|&e| self.edge_target(e) == b)
    }

    pub fn degree(&self, node: LocationIdx) -> usize {
        (self.node_out_start[node.index() + 1] - self.node_out_start[node.index()]) as usize
    }

    pub(crate) fn neighbor(&self, edge: EdgeIdx) -> Neighbor<'_> {
        let idx = self.edge_target(edge);
        let (distance_km, cost) = self.edge_weights(edge);
        Neighbor { id: &self.registry.get(idx).id, idx, edge, distance_km, cost }
    }

    /// Neighbours of `id` with both weights of the connecting edge, in
    /// identifier order.
    pub fn neighbors(&self, id: &str) -> GraphResult<Vec<Neighbor<'_>>> {
        let idx = self.registry.resolve(id)?;
        Ok(self.out_edges(idx).map(|e| self.neighbor(e)).collect())
    }

    // ── Reachability ──────────────────────────────────────────────────────

    /// Every location reachable from `id`, excluding `id` itself, in
    /// identifier order.
    pub fn reachable_from(&self, id: &str) -> GraphResult<Vec<&LocationId>> {
        let origin = self.registry.resolve(id)?;
        let seen = self.flood(origin);
        Ok(seen
            .iter()
            .enumerate()
            .filter(|&(i, &s)| s && i != origin.index())
            .map(|(i, _)| &self.registry.get(LocationIdx(i as u32)).id)
            .collect())
    }

    /// `true` if `b` can be reached from `a`.  Unknown identifiers yield
    /// `false`; a location always reaches itself.
    pub fn has_path(&self, a: &str, b: &str) -> bool {
        let (Some(a), Some(b)) = (self.registry.lookup(a), self.registry.lookup(b)) else {
            return false;
        };
        a == b || self.flood(a)[b.index()]
    }

    /// Breadth-first flood from `origin`; `seen[i]` marks reachable nodes.
    fn flood(&self, origin: LocationIdx) -> Vec<bool> {
        let mut seen = vec![false; self.location_count()];
        let mut queue = VecDeque::from([origin]);
        seen[origin.index()] = true;
        while let Some(node) = queue.pop_front() {
            for e in self.out_edges(node) {
                let next = self.edge_target(e);
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}

struct RawHalfEdge {
    from:        LocationIdx,
    to:          LocationIdx,
    distance_km: f64,
    cost:        f64,
}

// ── RouteGraphBuilder ─────────────────────────────────────────────────────────

/// Collect locations and edges incrementally, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use wf_graph::{Location, RouteGraphBuilder};
///
/// let mut b = RouteGraphBuilder::new();
/// b.add_location(Location::new("Pune", 18.52, 73.86));
/// b.add_location(Location::new("Mumbai", 19.08, 72.88));
/// b.add_edge("Pune", "Mumbai", 150.0, 700.0);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.location_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Default)]
pub struct RouteGraphBuilder {
    locations: Vec<Location>,
    edges:     Vec<EdgeRecord>,
}

impl RouteGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(locations: usize, edges: usize) -> Self {
        Self {
            locations: Vec::with_capacity(locations),
            edges:     Vec::with_capacity(edges),
        }
    }

    pub fn add_location(&mut self, location: Location) -> &mut Self {
        self.locations.push(location);
        self
    }

    /// Add a bidirectional edge between `a` and `b`.
    pub fn add_edge(
        &mut self,
        a: impl Into<LocationId>,
        b: impl Into<LocationId>,
        distance_km: f64,
        cost: f64,
    ) -> &mut Self {
        self.edges.push(EdgeRecord::new(a, b, distance_km, cost));
        self
    }

    pub fn add_record(&mut self, record: EdgeRecord) -> &mut Self {
        self.edges.push(record);
        self
    }

    pub fn location_count(&self) -> usize { self.locations.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a validated [`RouteGraph`].
    pub fn build(self) -> GraphResult<RouteGraph> {
        RouteGraph::build(self.locations, self.edges)
    }
}
