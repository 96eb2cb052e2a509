//! The weight dimension a route search minimises.
//!
//! Every edge carries both a distance and a cost; `Metric` picks which one
//! drives the search.  The other weight is still carried along for reporting.

use std::str::FromStr;

use crate::CoreError;

/// Which edge weight to optimise.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    /// Physical distance in kilometres.
    #[default]
    Distance,
    /// Monetary cost in currency units.
    Cost,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Distance, Metric::Cost];

    /// Pick the weight this metric optimises from a `(distance, cost)` pair.
    #[inline]
    pub fn select(self, distance: f64, cost: f64) -> f64 {
        match self {
            Metric::Distance => distance,
            Metric::Cost     => cost,
        }
    }

    /// Wire label, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Distance => "distance",
            Metric::Cost     => "cost",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("distance") {
            Ok(Metric::Distance)
        } else if trimmed.eq_ignore_ascii_case("cost") {
            Ok(Metric::Cost)
        } else {
            Err(CoreError::UnknownMetric(s.to_owned()))
        }
    }
}
