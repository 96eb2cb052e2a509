//! Trip report types.
//!
//! With the `serde` feature the report serialises with the wire field names
//! transport layers expect:
//!
//! ```json
//! {
//!   "origin": "X", "destination": "Z", "path": ["X", "Y", "Z"],
//!   "total_distance": 200.0, "total_cost": 60.0, "stops": 1,
//!   "optimization_type": "cost",
//!   "segments": [{"step": 1, "from_city": "X", "to_city": "Y", "distance": 100.0, "cost": 50.0}, ...],
//!   "valid": true
//! }
//! ```

use std::fmt;

use wf_core::{LocationId, Metric};

// ── Segment ───────────────────────────────────────────────────────────────────

/// One leg of a trip between two adjacent locations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// 1-based position in the trip.
    pub step:     usize,
    #[cfg_attr(feature = "serde", serde(rename = "from_city"))]
    pub from:     LocationId,
    #[cfg_attr(feature = "serde", serde(rename = "to_city"))]
    pub to:       LocationId,
    pub distance: f64,
    pub cost:     f64,
}

impl Segment {
    pub fn cost_per_km(&self) -> f64 {
        self.cost / self.distance
    }
}

// ── TripReport ────────────────────────────────────────────────────────────────

/// The outcome of one planning request.
///
/// `valid == false` means no route exists; `path` and `segments` are then
/// empty and all totals are zero.  Both totals are always summed, whichever
/// metric drove the search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripReport {
    pub origin:         LocationId,
    pub destination:    LocationId,
    pub path:           Vec<LocationId>,
    pub total_distance: f64,
    pub total_cost:     f64,
    /// Intermediate locations, excluding origin and destination.
    pub stops:          usize,
    #[cfg_attr(feature = "serde", serde(rename = "optimization_type"))]
    pub metric:         Metric,
    pub segments:       Vec<Segment>,
    pub valid:          bool,
}

impl TripReport {
    /// The "no route exists" report.
    pub fn no_route(origin: LocationId, destination: LocationId, metric: Metric) -> Self {
        Self {
            origin,
            destination,
            path:           vec![],
            total_distance: 0.0,
            total_cost:     0.0,
            stops:          0,
            metric,
            segments:       vec![],
            valid:          false,
        }
    }

    /// Compact view of the report.
    pub fn summary(&self) -> TripSummary<'_> {
        TripSummary {
            origin:         &self.origin,
            destination:    &self.destination,
            route:          self.valid.then(|| RouteSummary {
                path:           &self.path,
                stops:          self.stops,
                total_distance: round2(self.total_distance),
                total_cost:     round2(self.total_cost),
            }),
            metric:         self.metric,
        }
    }

    /// Differences `self - other` for two reports of the same endpoints,
    /// typically one optimised by distance and one by cost.
    pub fn compare_with(&self, other: &TripReport) -> TripComparison {
        TripComparison {
            distance_difference:    self.total_distance - other.total_distance,
            cost_difference:        self.total_cost - other.total_cost,
            stops_difference:       self.stops as i64 - other.stops as i64,
            better_by_distance:     self.total_distance < other.total_distance,
            better_by_cost:         self.total_cost < other.total_cost,
        }
    }
}

impl fmt::Display for TripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "No path found from {} to {}", self.origin, self.destination);
        }
        let path: Vec<&str> = self.path.iter().map(LocationId::as_str).collect();
        writeln!(f, "Trip: {}", path.join(" -> "))?;
        writeln!(f, "Distance: {:.2} km", self.total_distance)?;
        writeln!(f, "Cost: {:.2}", self.total_cost)?;
        writeln!(f, "Stops: {}", self.stops)?;
        write!(f, "Optimized by: {}", self.metric)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ── Summary & comparison ──────────────────────────────────────────────────────

/// Short form of a [`TripReport`]; `route` is `None` when no path exists.
/// Totals are rounded to two decimals.
#[derive(Clone, Debug, PartialEq)]
pub struct TripSummary<'a> {
    pub origin:      &'a LocationId,
    pub destination: &'a LocationId,
    pub route:       Option<RouteSummary<'a>>,
    pub metric:      Metric,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteSummary<'a> {
    pub path:           &'a [LocationId],
    pub stops:          usize,
    pub total_distance: f64,
    pub total_cost:     f64,
}

/// Result of [`TripReport::compare_with`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripComparison {
    pub distance_difference: f64,
    pub cost_difference:     f64,
    pub stops_difference:    i64,
    pub better_by_distance:  bool,
    pub better_by_cost:      bool,
}
