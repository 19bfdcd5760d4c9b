//! Raw datasets supplied from outside the graph.
//!
//! A dataset is the `{cities, edges}` shape a loader hands over, typically
//! parsed from JSON. It can be checked with [`validate_graph_data`] (which
//! never fails) and turned into a [`CityGraph`] with [`build_graph`]
//! (which fails fast).

mod build;
mod sample;
mod validate;

pub use build::build_graph;
pub use sample::sample_data;
pub use validate::{validate_graph_data, validate_graph_value, ValidationResult};

use crate::error::{GraphError, Result};
use crate::graph::CityGraph;
use serde::{Deserialize, Serialize};

/// One edge as it appears in a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// First endpoint
    pub from: String,
    /// Second endpoint
    pub to: String,
    /// Distance between the endpoints
    pub distance: f64,
}

impl EdgeRecord {
    /// Create a new edge record.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

/// A complete dataset: city names plus edges between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// City names
    pub cities: Vec<String>,
    /// Edges between cities
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphData {
    /// Parse a dataset from JSON.
    ///
    /// Only the shape is checked here; call [`validate_graph_data`] for the
    /// graph invariants, or [`validate_graph_value`] on untyped JSON to get
    /// shape problems reported as a list instead of an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if the JSON is malformed or has
    /// the wrong shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GraphError::serialization("Failed to parse graph dataset", Some(e)))
    }

    /// Check this dataset against the graph invariants.
    pub fn validate(&self) -> ValidationResult {
        validate_graph_data(self)
    }
}

impl TryFrom<&GraphData> for CityGraph {
    type Error = GraphError;

    fn try_from(data: &GraphData) -> Result<Self> {
        build_graph(&data.cities, &data.edges)
    }
}
