//! Nearby-city range queries.
//!
//! A range query is one hop: it looks at the direct neighbors of an origin
//! city and keeps those within an optional maximum distance, closest first.

use super::types::{Adjacency, AdjacencyLookup};
use crate::error::Result;
use log::trace;

/// Direct neighbors of `origin` within `max_distance`, sorted by distance.
///
/// - `max_distance = None` returns every direct neighbor.
/// - An unknown `origin` returns an empty vector.
/// - A negative or NaN `max_distance` matches no neighbor.
/// - Equal distances keep their adjacency insertion order.
///
/// # Errors
///
/// None at present; every input yields `Ok`.
///
/// # Examples
///
/// ```
/// use citygraph::{build_graph, get_nearby_cities, sample_data};
///
/// # fn example() -> citygraph::Result<()> {
/// let data = sample_data();
/// let graph = build_graph(&data.cities, &data.edges)?;
///
/// let close = get_nearby_cities(&graph, "Guadalajara", Some(100.0))?;
/// assert!(!close.is_empty());
/// assert!(close.windows(2).all(|w| w[0].distance <= w[1].distance));
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn get_nearby_cities<G>(
    graph: &G,
    origin: &str,
    max_distance: Option<f64>,
) -> Result<Vec<Adjacency>>
where
    G: AdjacencyLookup + ?Sized,
{
    if !graph.has_city(origin) {
        trace!("Unknown origin {origin}, no neighbors");
        return Ok(Vec::new());
    }

    let mut result: Vec<Adjacency> = graph
        .neighbors(origin)
        .iter()
        .filter(|adj| max_distance.map_or(true, |max| adj.distance <= max))
        .cloned()
        .collect();

    // Stable sort keeps insertion order for ties
    result.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    trace!("{} cities near {origin}", result.len());

    Ok(result)
}

/// Fluent builder for range queries.
///
/// # Examples
///
/// ```
/// use citygraph::{build_graph, sample_data};
///
/// # fn example() -> citygraph::Result<()> {
/// let data = sample_data();
/// let graph = build_graph(&data.cities, &data.edges)?;
///
/// let two_closest = graph.nearby("Guadalajara").within(100.0).limit(2).execute()?;
/// assert_eq!(two_closest.len(), 2);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct NearbyQuery<'a, G: AdjacencyLookup + ?Sized> {
    graph: &'a G,
    origin: &'a str,
    max_distance: Option<f64>,
    limit_value: Option<usize>,
}

impl<'a, G: AdjacencyLookup + ?Sized> NearbyQuery<'a, G> {
    /// Create a query around `origin` with no distance bound or limit.
    pub fn new(graph: &'a G, origin: &'a str) -> Self {
        Self {
            graph,
            origin,
            max_distance: None,
            limit_value: None,
        }
    }

    /// Keep only neighbors at most `max_distance` away.
    pub fn within(mut self, max_distance: f64) -> Self {
        self.max_distance = Some(max_distance);
        self
    }

    /// Return at most `n` results (the closest ones).
    pub fn limit(mut self, n: usize) -> Self {
        self.limit_value = Some(n);
        self
    }

    /// Run the query.
    ///
    /// # Errors
    ///
    /// Same as [`get_nearby_cities`].
    pub fn execute(self) -> Result<Vec<Adjacency>> {
        let mut result = get_nearby_cities(self.graph, self.origin, self.max_distance)?;
        if let Some(n) = self.limit_value {
            result.truncate(n);
        }
        Ok(result)
    }

    /// Count matching neighbors without applying the limit.
    pub fn count(self) -> Result<usize> {
        get_nearby_cities(self.graph, self.origin, self.max_distance).map(|r| r.len())
    }
}
