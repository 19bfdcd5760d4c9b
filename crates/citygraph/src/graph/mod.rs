//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Adjacency`]: One direct connection stored on a city
//! - [`CityGraph`]: The undirected city graph
//! - [`get_nearby_cities`] / [`NearbyQuery`]: One-hop range queries

mod types;
mod city_graph;
pub mod query;

pub use types::{Adjacency, AdjacencyLookup};
pub(crate) use types::{is_valid_city_name, is_valid_distance};
pub use city_graph::CityGraph;
pub use query::{get_nearby_cities, NearbyQuery};
