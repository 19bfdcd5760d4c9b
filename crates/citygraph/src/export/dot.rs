//! DOT format export for Graphviz visualization.
//!
//! Generates an undirected Graphviz graph for rendering city maps as images.

use crate::{CityGraph, Result};
use std::collections::HashMap;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Default node fill color (hex color code)
    pub node_color: String,
    /// Per-city fill colors overriding `node_color`
    pub city_colors: HashMap<String, String>,
    /// Node shape (ellipse, box, circle, etc.)
    pub node_shape: String,
    /// Graphviz layout engine hint: neato, fdp, dot, circo
    pub layout: String,
    /// Label edges with their distance
    pub show_distances: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            node_color: "#90CAF9".to_string(),
            city_colors: HashMap::new(),
            node_shape: "ellipse".to_string(),
            layout: "neato".to_string(),
            show_distances: true,
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &CityGraph) -> Result<String> {
    export_dot_styled(graph, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &CityGraph, options: DotOptions) -> Result<String> {
    let mut output = String::new();
    let cities = graph.cities();

    // Header
    output.push_str("graph city_graph {\n");
    output.push_str(&format!(
        "    layout=\"{}\";\n",
        escape_dot_label(&options.layout)
    ));
    output.push_str("    node [style=filled];\n\n");

    for city in &cities {
        let color = options
            .city_colors
            .get(*city)
            .map(String::as_str)
            .unwrap_or(options.node_color.as_str());

        output.push_str(&format!(
            "    \"{}\" [shape=\"{}\", fillcolor=\"{}\"];\n",
            escape_dot_label(city),
            escape_dot_label(&options.node_shape),
            escape_dot_label(color)
        ));
    }

    output.push('\n');

    for city in &cities {
        for adj in graph.neighbors(city) {
            // Stored on both endpoints; write each edge once
            if *city >= adj.to.as_str() {
                continue;
            }

            let label = if options.show_distances {
                format!(" [label=\"{}\"]", adj.distance)
            } else {
                String::new()
            };

            output.push_str(&format!(
                "    \"{}\" -- \"{}\"{label};\n",
                escape_dot_label(city),
                escape_dot_label(&adj.to)
            ));
        }
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT quoted strings (labels and attribute values)
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
