//! # citygraph
//!
//! An in-memory undirected graph of cities and the distances between them,
//! with dataset validation and a "nearby cities" range query.
//!
//! ## Core Principles
//!
//! - **Fail Fast**: Mutations reject bad input immediately with a typed error
//! - **Report Everything**: Dataset validation never fails and lists every problem
//! - **Zero Magic**: Queries never mutate; unknown cities simply have no neighbors
//!
//! ## Architecture
//!
//! ```text
//! Raw dataset (JSON or GraphData)
//!     ↓
//! Validation (validate_graph_data, validate_graph_value)
//!     ↓
//! Construction (build_graph)
//!     ↓
//! Core Graph (CityGraph)
//!     ↓
//! Range Query (get_nearby_cities, NearbyQuery) / Export
//! ```
//!
//! ## Example
//!
//! ```rust
//! use citygraph::{build_graph, get_nearby_cities, validate_graph_data, sample_data};
//!
//! # fn example() -> citygraph::Result<()> {
//! let data = sample_data();
//!
//! let report = validate_graph_data(&data);
//! assert!(report.ok, "{:?}", report.errors);
//!
//! let graph = build_graph(&data.cities, &data.edges)?;
//! for city in get_nearby_cities(&graph, "Guadalajara", Some(100.0))? {
//!     println!("{} is {} km away", city.to, city.distance);
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod dataset;
pub mod error;
#[cfg(feature = "export")]
pub mod export;
pub mod graph;

// Re-export main types
pub use dataset::{
    build_graph, sample_data, validate_graph_data, validate_graph_value, EdgeRecord, GraphData,
    ValidationResult,
};
pub use error::{GraphError, Result};
pub use graph::{get_nearby_cities, Adjacency, AdjacencyLookup, CityGraph, NearbyQuery};
