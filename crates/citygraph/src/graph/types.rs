//! Core graph types: adjacency records and the lookup capability.

use serde::{Deserialize, Serialize};

/// One direct connection stored on a city.
///
/// The owning city is implicit; `to` names the other endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjacency {
    /// Name of the connected city
    pub to: String,
    /// Distance to the connected city (finite, > 0)
    pub distance: f64,
}

impl Adjacency {
    /// Create a new adjacency record.
    pub fn new(to: impl Into<String>, distance: f64) -> Self {
        Self {
            to: to.into(),
            distance,
        }
    }
}

/// Read access to a city's adjacency list.
///
/// Range queries are generic over this trait, so anything that is not a
/// graph is rejected at compile time.
pub trait AdjacencyLookup {
    /// Adjacency records for `city`, empty if the city is unknown.
    fn neighbors(&self, city: &str) -> &[Adjacency];

    /// Whether `city` is known.
    fn has_city(&self, city: &str) -> bool;
}

/// Returns `true` if `distance` is a usable edge weight.
pub(crate) fn is_valid_distance(distance: f64) -> bool {
    distance.is_finite() && distance > 0.0
}

/// Returns `true` if `name` is a usable city name.
pub(crate) fn is_valid_city_name(name: &str) -> bool {
    !name.trim().is_empty()
}
