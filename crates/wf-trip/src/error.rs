use thiserror::Error;

use wf_core::{CoreError, LocationId};
use wf_graph::GraphError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TripError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A found path contains two consecutive locations with no edge between
    /// them.  Path finder and assembler disagree: this is a bug.
    #[error("internal error: path step {from:?} -> {to:?} has no edge")]
    BrokenPath { from: LocationId, to: LocationId },

    #[error("shared planner is already installed")]
    AlreadyInstalled,

    #[error("shared planner has not been installed")]
    NotInstalled,
}

impl TripError {
    /// `true` for errors the caller should see as a rejected request.
    pub fn is_input_error(&self) -> bool {
        match self {
            TripError::Graph(e) => e.is_input_error(),
            TripError::Core(_)  => true,
            _                   => false,
        }
    }
}

pub type TripResult<T> = Result<T, TripError>;
