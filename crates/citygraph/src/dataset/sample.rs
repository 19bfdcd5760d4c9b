//! Built-in demonstration dataset.

use super::{EdgeRecord, GraphData};

const SAMPLE_CITIES: &[&str] = &[
    "Guadalajara",
    "Zapopan",
    "Tlaquepaque",
    "Tonalá",
    "Chapala",
    "Tequila",
    "Puerto Vallarta",
    "León",
    "Aguascalientes",
    "Ciudad de México",
    "Monterrey",
];

// Approximate road distances in km
const SAMPLE_EDGES: &[(&str, &str, f64)] = &[
    ("Guadalajara", "Zapopan", 12.0),
    ("Guadalajara", "Tlaquepaque", 9.0),
    ("Guadalajara", "Tonalá", 15.0),
    ("Guadalajara", "Chapala", 48.0),
    ("Guadalajara", "Tequila", 60.0),
    ("Guadalajara", "Puerto Vallarta", 330.0),
    ("Guadalajara", "León", 220.0),
    ("Guadalajara", "Aguascalientes", 225.0),
    ("Guadalajara", "Ciudad de México", 540.0),
    ("Tlaquepaque", "Tonalá", 8.0),
    ("Tequila", "Puerto Vallarta", 290.0),
    ("León", "Aguascalientes", 130.0),
    ("León", "Ciudad de México", 390.0),
    ("Aguascalientes", "Monterrey", 580.0),
    ("Ciudad de México", "Monterrey", 910.0),
];

/// Sample dataset of cities in western and central Mexico.
///
/// Always passes [`validate_graph_data`](super::validate_graph_data).
pub fn sample_data() -> GraphData {
    GraphData {
        cities: SAMPLE_CITIES.iter().map(|c| c.to_string()).collect(),
        edges: SAMPLE_EDGES
            .iter()
            .map(|&(from, to, distance)| EdgeRecord::new(from, to, distance))
            .collect(),
    }
}
