//! CSV dataset loader.
//!
//! # CSV format
//!
//! Two files, each with a header row.  Surrounding whitespace in every field
//! is ignored.
//!
//! **Locations**: one row per city.  `name` may be left empty, in which
//! case the identifier doubles as the display name.
//!
//! ```csv
//! id,name,latitude,longitude
//! New Delhi,New Delhi,28.6139,77.2090
//! Mumbai,,19.0760,72.8777
//! ```
//!
//! **Routes**: one row per bidirectional connection.  `distance` is in
//! kilometres, `cost` in currency units; both must be positive.
//!
//! ```csv
//! origin,destination,distance,cost
//! New Delhi,Mumbai,1400,5000
//! ```
//!
//! Parsing only checks that each row is well-formed.  Referential checks
//! (unknown cities, duplicates, self-loops) happen when the graph is built,
//! and any failure there aborts loading.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use wf_core::{GeoPoint, LocationId};
use wf_graph::{EdgeRecord, Location, RouteGraph};

use crate::{DataError, DataResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRow {
    id:        String,
    #[serde(default)]
    name:      Option<String>,
    latitude:  f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct EdgeRow {
    origin:      String,
    destination: String,
    distance:    f64,
    cost:        f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse location rows from any `Read` source.
pub fn read_locations<R: Read>(reader: R) -> DataResult<Vec<Location>> {
    let mut csv_reader = csv_reader(reader);
    csv_reader
        .deserialize::<LocationRow>()
        .map(|row| -> DataResult<Location> {
            let row = row.map_err(|e| DataError::Parse(format!("locations: {e}")))?;
            let id = LocationId::from(row.id);
            let name = row
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| id.as_str().to_owned());
            Ok(Location { id, name, pos: GeoPoint::new(row.latitude, row.longitude) })
        })
        .collect()
}

/// Parse route rows from any `Read` source.
pub fn read_edges<R: Read>(reader: R) -> DataResult<Vec<EdgeRecord>> {
    let mut csv_reader = csv_reader(reader);
    csv_reader
        .deserialize::<EdgeRow>()
        .map(|row| -> DataResult<EdgeRecord> {
            let row = row.map_err(|e| DataError::Parse(format!("routes: {e}")))?;
            Ok(EdgeRecord::new(row.origin, row.destination, row.distance, row.cost))
        })
        .collect()
}

/// Load and build a [`RouteGraph`] from two CSV files.
pub fn load_graph(locations_path: &Path, routes_path: &Path) -> DataResult<RouteGraph> {
    let locations = std::fs::File::open(locations_path)?;
    let routes = std::fs::File::open(routes_path)?;
    log::info!(
        "loading dataset from {} and {}",
        locations_path.display(),
        routes_path.display()
    );
    load_graph_reader(locations, routes)
}

/// Like [`load_graph`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for datasets embedded in
/// the binary.
pub fn load_graph_reader<L: Read, E: Read>(locations: L, routes: E) -> DataResult<RouteGraph> {
    let locations = read_locations(locations)?;
    let edges = read_edges(routes)?;

    let report = crate::lint::lint(&locations, &edges);
    for problem in report.problems() {
        log::warn!("dataset: {problem}");
    }

    Ok(RouteGraph::build(locations, edges)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}
