//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.
//! Each undirected edge appears once in "links".

use crate::{CityGraph, GraphError, Result};
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
pub fn export_json(graph: &CityGraph) -> Result<String> {
    export_json_filtered(graph, |_| true, true)
}

/// Export the cities accepted by `city_filter`, optionally with the edges
/// between them.
pub fn export_json_filtered(
    graph: &CityGraph,
    city_filter: impl Fn(&str) -> bool,
    include_edges: bool,
) -> Result<String> {
    let cities: Vec<&str> = graph
        .cities()
        .into_iter()
        .filter(|city| city_filter(*city))
        .collect();

    let nodes_array: Vec<Value> = cities
        .iter()
        .map(|city| {
            json!({
                "id": city,
                "degree": graph.neighbors(city).len(),
            })
        })
        .collect();

    let mut links_array = Vec::new();
    if include_edges {
        for &city in &cities {
            for adj in graph.neighbors(city) {
                // Each edge is stored on both endpoints; emit it from the smaller name
                if city < adj.to.as_str() && city_filter(adj.to.as_str()) {
                    links_array.push(json!({
                        "source": city,
                        "target": adj.to,
                        "distance": adj.distance,
                    }));
                }
            }
        }
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph JSON", Some(e)))
}
