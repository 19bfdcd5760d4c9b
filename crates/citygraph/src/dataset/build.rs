//! Bulk graph construction from dataset lists.

use super::EdgeRecord;
use crate::error::Result;
use crate::graph::CityGraph;
use log::{debug, info};

/// Build a graph from city names and edges.
///
/// All cities are added first, then every edge in input order. The dataset
/// is not validated; the first invariant violation is returned as an error.
/// Run [`validate_graph_data`](super::validate_graph_data) beforehand to get
/// a full report instead.
///
/// # Errors
///
/// Propagates [`CityGraph::add_city`] and [`CityGraph::add_edge`] errors.
pub fn build_graph<S: AsRef<str>>(cities: &[S], edges: &[EdgeRecord]) -> Result<CityGraph> {
    debug!("Building graph: {} cities, {} edges", cities.len(), edges.len());
    let mut graph = CityGraph::new();

    for city in cities {
        graph.add_city(city.as_ref())?;
    }

    for edge in edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance)?;
    }

    info!(
        "Built graph with {} cities and {} edges",
        graph.city_count(),
        graph.edge_count()
    );
    Ok(graph)
}
