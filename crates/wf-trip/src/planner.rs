//! The planning facade a transport layer calls.
//!
//! A [`TripPlanner`] owns the route graph and a [`PathFinder`].  It is
//! `Send + Sync` and never mutates after construction, so one instance can
//! serve any number of concurrent requests.

use wf_core::{LocationId, Metric};
use wf_graph::{DijkstraFinder, PathFinder, RouteGraph};

use crate::assembler::assemble_found;
use crate::report::TripReport;
use crate::TripResult;

// ── TripQuery ─────────────────────────────────────────────────────────────────

/// A typed planning request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripQuery {
    pub origin:      String,
    pub destination: String,
    #[cfg_attr(feature = "serde", serde(rename = "optimize_by", default))]
    pub metric:      Metric,
}

impl TripQuery {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, metric: Metric) -> Self {
        Self { origin: origin.into(), destination: destination.into(), metric }
    }

    /// Build a query from untyped boundary input, rejecting unknown metric
    /// labels before any planning happens.
    pub fn parse(origin: &str, destination: &str, metric: &str) -> TripResult<Self> {
        Ok(Self::new(origin, destination, metric.parse()?))
    }
}

/// Reports for the same endpoints under both metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricPair {
    pub by_distance: TripReport,
    pub by_cost:     TripReport,
}

// ── TripPlanner ───────────────────────────────────────────────────────────────

pub struct TripPlanner<F: PathFinder = DijkstraFinder> {
    graph:  RouteGraph,
    finder: F,
}

impl TripPlanner<DijkstraFinder> {
    pub fn new(graph: RouteGraph) -> Self {
        Self::with_finder(graph, DijkstraFinder)
    }
}

impl<F: PathFinder> TripPlanner<F> {
    pub fn with_finder(graph: RouteGraph, finder: F) -> Self {
        Self { graph, finder }
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Plan the `metric`-optimal trip from `origin` to `destination`.
    ///
    /// Unknown identifiers fail with `UnknownLocation` before any search.
    /// An unreachable destination returns a report with `valid == false`.
    pub fn plan(&self, origin: &str, destination: &str, metric: Metric) -> TripResult<TripReport> {
        let found = self.finder.find_path(&self.graph, origin, destination, metric)?;
        let report = assemble_found(&self.graph, origin, destination, &found)?;
        if !report.valid {
            log::debug!("no route from {origin} to {destination}");
        }
        Ok(report)
    }

    pub fn plan_query(&self, query: &TripQuery) -> TripResult<TripReport> {
        self.plan(&query.origin, &query.destination, query.metric)
    }

    /// Plan the same endpoints under both metrics.
    pub fn plan_both(&self, origin: &str, destination: &str) -> TripResult<MetricPair> {
        Ok(MetricPair {
            by_distance: self.plan(origin, destination, Metric::Distance)?,
            by_cost:     self.plan(origin, destination, Metric::Cost)?,
        })
    }

    /// Locations reachable from `origin`, excluding it, in identifier order.
    pub fn reachable(&self, origin: &str) -> TripResult<Vec<LocationId>> {
        Ok(self.graph.reachable_from(origin)?.into_iter().cloned().collect())
    }

    /// Plan every query; results keep input order.
    #[cfg(not(feature = "parallel"))]
    pub fn plan_batch(&self, queries: &[TripQuery]) -> Vec<TripResult<TripReport>> {
        queries.iter().map(|q| self.plan_query(q)).collect()
    }

    /// Plan every query on Rayon's thread pool; results keep input order.
    #[cfg(feature = "parallel")]
    pub fn plan_batch(&self, queries: &[TripQuery]) -> Vec<TripResult<TripReport>> {
        use rayon::prelude::*;
        queries.par_iter().map(|q| self.plan_query(q)).collect()
    }
}
