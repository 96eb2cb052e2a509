//! Process-wide planner slot.
//!
//! The dataset is loaded once at startup.  [`install`] stores the resulting
//! planner; request handlers on any thread read it with [`planner`].  The
//! slot is write-once, so reads need no locking.

use std::sync::OnceLock;

use crate::planner::TripPlanner;
use crate::{TripError, TripResult};

static PLANNER: OnceLock<TripPlanner> = OnceLock::new();

/// Install the process-wide planner.  Fails with
/// [`TripError::AlreadyInstalled`] on every call after the first.
pub fn install(planner: TripPlanner) -> TripResult<&'static TripPlanner> {
    let mut fresh = false;
    let slot = PLANNER.get_or_init(|| {
        fresh = true;
        planner
    });
    if fresh {
        log::info!(
            "shared planner installed: {} locations, {} edges",
            slot.graph().location_count(),
            slot.graph().edge_count()
        );
        Ok(slot)
    } else {
        Err(TripError::AlreadyInstalled)
    }
}

/// The installed planner, or [`TripError::NotInstalled`].
pub fn planner() -> TripResult<&'static TripPlanner> {
    PLANNER.get().ok_or(TripError::NotInstalled)
}
