//! Graph-subsystem error type.
//!
//! Every variant except [`GraphError::UnknownLocation`] is a dataset
//! (configuration) problem raised while building the graph.  Those are fatal
//! at startup.  `UnknownLocation` is the only error a query can produce.

use thiserror::Error;

use wf_core::{CoreError, LocationId};

/// Errors produced by `wf-graph`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("unknown location {0:?}")]
    UnknownLocation(LocationId),

    #[error("location identifier must not be empty")]
    EmptyLocationId,

    #[error("duplicate location {0:?}")]
    DuplicateLocation(LocationId),

    #[error("location {id:?}: {source}")]
    InvalidLocation {
        id:     LocationId,
        #[source]
        source: CoreError,
    },

    #[error("edge {from:?} - {to:?} references unknown location {missing:?}")]
    DanglingEdge {
        from:    LocationId,
        to:      LocationId,
        missing: LocationId,
    },

    #[error("edge from {0:?} to itself")]
    SelfLoop(LocationId),

    #[error("edge {from:?} - {to:?}: {weight} must be positive and finite, got {value}")]
    InvalidWeight {
        from:   LocationId,
        to:     LocationId,
        weight: &'static str,
        value:  f64,
    },

    #[error("duplicate edge between {a:?} and {b:?}")]
    DuplicateEdge { a: LocationId, b: LocationId },

    /// The summed `weight` over all edges is not representable, so a path
    /// total could overflow to infinity.
    #[error("sum of all {weight} weights overflows f64")]
    WeightOverflow { weight: &'static str },
}

impl GraphError {
    /// `true` for errors caused by caller input rather than by the dataset.
    pub fn is_input_error(&self) -> bool {
        matches!(self, GraphError::UnknownLocation(_))
    }
}

pub type GraphResult<T> = Result<T, GraphError>;
