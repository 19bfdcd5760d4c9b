//! Main CityGraph interface for graph operations.

use super::query::NearbyQuery;
use super::types::{is_valid_city_name, is_valid_distance, Adjacency, AdjacencyLookup};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::HashMap;

/// In-memory undirected graph of cities and the distances between them.
///
/// Invariants are enforced at mutation time: every adjacency record points at
/// a known city, and every edge is stored on both of its endpoints.
#[derive(Debug, Clone, Default)]
pub struct CityGraph {
    adjacency: HashMap<String, Vec<Adjacency>>,
    edge_count: usize,
}

impl CityGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city to the graph.
    ///
    /// Adding a city that already exists is a no-op; its edges are kept.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidInput`] if `name` is empty or whitespace.
    pub fn add_city(&mut self, name: &str) -> Result<()> {
        if !is_valid_city_name(name) {
            return Err(GraphError::invalid_input(format!(
                "city name must be a non-empty string, got {name:?}"
            )));
        }

        if self.adjacency.contains_key(name) {
            trace!("City {name} already present, skipping");
            return Ok(());
        }

        debug!("Adding city: {name}");
        self.adjacency.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Add an undirected edge between two existing cities.
    ///
    /// Adding the same pair twice stores two parallel records on each side.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownCity`] if either endpoint is missing
    /// - [`GraphError::InvalidDistance`] if `distance` is not finite and > 0
    /// - [`GraphError::InvalidInput`] if `from == to`
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        // All checks happen before either list is touched
        for city in [from, to] {
            if !self.adjacency.contains_key(city) {
                return Err(GraphError::UnknownCity {
                    name: city.to_string(),
                });
            }
        }

        if !is_valid_distance(distance) {
            return Err(GraphError::InvalidDistance { distance });
        }

        if from == to {
            return Err(GraphError::invalid_input(format!(
                "self-loop edges are not allowed ({from})"
            )));
        }

        debug!("Adding edge: {from} -- {to} ({distance})");
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Adjacency::new(to, distance));
        }
        if let Some(list) = self.adjacency.get_mut(to) {
            list.push(Adjacency::new(from, distance));
        }
        self.edge_count += 1;

        Ok(())
    }

    /// Adjacency records of `name` in insertion order.
    ///
    /// Unknown cities and cities without edges both yield an empty slice;
    /// use [`has_city`](Self::has_city) to tell them apart.
    pub fn neighbors(&self, name: &str) -> &[Adjacency] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `name` has been added.
    pub fn has_city(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Number of cities in the graph.
    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added (parallel edges count separately).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no cities.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// City names in ascending order.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adjacency.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Start a range query around `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// use citygraph::CityGraph;
    ///
    /// # fn example() -> citygraph::Result<()> {
    /// let mut graph = CityGraph::new();
    /// graph.add_city("A")?;
    /// graph.add_city("B")?;
    /// graph.add_edge("A", "B", 10.0)?;
    ///
    /// let close = graph.nearby("A").within(50.0).execute()?;
    /// assert_eq!(close.len(), 1);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    pub fn nearby<'a>(&'a self, origin: &'a str) -> NearbyQuery<'a, Self> {
        NearbyQuery::new(self, origin)
    }

    // ===== Export Methods =====

    /// Export graph to D3.js-compatible JSON format.
    #[cfg(feature = "export")]
    pub fn export_json(&self) -> Result<String> {
        crate::export::export_json(self)
    }

    /// Export graph to Graphviz DOT format.
    #[cfg(feature = "export")]
    pub fn export_dot(&self) -> Result<String> {
        crate::export::export_dot(self)
    }

    /// Export graph to Graphviz DOT format with custom styling options.
    #[cfg(feature = "export")]
    pub fn export_dot_styled(&self, options: crate::export::DotOptions) -> Result<String> {
        crate::export::export_dot_styled(self, options)
    }
}

impl AdjacencyLookup for CityGraph {
    fn neighbors(&self, city: &str) -> &[Adjacency] {
        CityGraph::neighbors(self, city)
    }

    fn has_city(&self, city: &str) -> bool {
        CityGraph::has_city(self, city)
    }
}
