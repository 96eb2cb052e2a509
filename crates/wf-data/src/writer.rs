//! CSV dataset writer.
//!
//! Produces the same two-file layout [`loader`](crate::loader) reads, so a
//! built graph can be saved and loaded back unchanged.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use wf_graph::RouteGraph;

use crate::DataResult;

/// Write every location of `graph`, in identifier order, with a header row.
pub fn write_locations<W: Write>(writer: W, graph: &RouteGraph) -> DataResult<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["id", "name", "latitude", "longitude"])?;
    for loc in graph.locations() {
        out.write_record(&[
            loc.id.to_string(),
            loc.name.clone(),
            loc.pos.lat.to_string(),
            loc.pos.lon.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write each undirected edge of `graph` once, with a header row.
pub fn write_edges<W: Write>(writer: W, graph: &RouteGraph) -> DataResult<()> {
    let mut out = Writer::from_writer(writer);
    out.write_record(["origin", "destination", "distance", "cost"])?;
    for edge in graph.edges() {
        out.write_record(&[
            edge.from.id.to_string(),
            edge.to.id.to_string(),
            edge.distance_km.to_string(),
            edge.cost.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Save `graph` to two CSV files, creating or truncating them.
pub fn save_graph(graph: &RouteGraph, locations_path: &Path, routes_path: &Path) -> DataResult<()> {
    write_locations(File::create(locations_path)?, graph)?;
    write_edges(File::create(routes_path)?, graph)?;
    log::info!(
        "saved {} locations and {} edges to {} and {}",
        graph.location_count(),
        graph.edge_count(),
        locations_path.display(),
        routes_path.display()
    );
    Ok(())
}
