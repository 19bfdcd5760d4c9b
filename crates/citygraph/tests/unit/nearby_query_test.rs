//! Unit tests for nearby-city range queries.

use citygraph::{build_graph, get_nearby_cities, sample_data, CityGraph};

fn sample_graph() -> CityGraph {
    let data = sample_data();
    build_graph(&data.cities, &data.edges).unwrap()
}

#[test]
fn test_nearby_sorted_by_distance() {
    let graph = sample_graph();

    let result = get_nearby_cities(&graph, "Guadalajara", Some(100.0)).unwrap();

    assert!(!result.is_empty());
    assert!(result.windows(2).all(|w| w[0].distance <= w[1].distance));
    assert!(result.iter().all(|adj| adj.distance <= 100.0));
}

#[test]
fn test_nearby_expected_cities() {
    let graph = sample_graph();

    let names: Vec<_> = get_nearby_cities(&graph, "Guadalajara", Some(50.0))
        .unwrap()
        .into_iter()
        .map(|adj| adj.to)
        .collect();

    assert_eq!(names, vec!["Tlaquepaque", "Zapopan", "Tonalá", "Chapala"]);
}

#[test]
fn test_nearby_without_bound_returns_all_neighbors() {
    let graph = sample_graph();

    let result = get_nearby_cities(&graph, "Guadalajara", None).unwrap();

    assert_eq!(result.len(), graph.neighbors("Guadalajara").len());
}

#[test]
fn test_nearby_unknown_city() {
    let graph = sample_graph();

    assert!(get_nearby_cities(&graph, "Unknown", None).unwrap().is_empty());
    assert!(get_nearby_cities(&graph, "Unknown", Some(10.0)).unwrap().is_empty());
}

#[test]
fn test_nearby_isolated_city() {
    let mut graph = CityGraph::new();
    graph.add_city("Solo").unwrap();

    assert!(get_nearby_cities(&graph, "Solo", None).unwrap().is_empty());
}

#[test]
fn test_nearby_is_one_hop() {
    let mut graph = CityGraph::new();
    for city in ["A", "B", "C"] {
        graph.add_city(city).unwrap();
    }
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("B", "C", 1.0).unwrap();

    let result = get_nearby_cities(&graph, "A", Some(100.0)).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].to, "B");
}

#[test]
fn test_nearby_negative_or_nan_bound_is_empty() {
    let graph = sample_graph();

    assert!(get_nearby_cities(&graph, "Guadalajara", Some(-1.0))
        .unwrap()
        .is_empty());
    assert!(get_nearby_cities(&graph, "Guadalajara", Some(f64::NAN))
        .unwrap()
        .is_empty());
}

#[test]
fn test_nearby_unknown_city_with_negative_bound() {
    let graph = sample_graph();

    let result = get_nearby_cities(&graph, "Unknown", Some(-1.0)).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_nearby_zero_bound_is_empty() {
    let graph = sample_graph();

    assert!(get_nearby_cities(&graph, "Guadalajara", Some(0.0))
        .unwrap()
        .is_empty());
}

#[test]
fn test_query_does_not_mutate_graph() {
    let graph = sample_graph();
    let before = graph.neighbors("Guadalajara").to_vec();

    get_nearby_cities(&graph, "Guadalajara", Some(30.0)).unwrap();

    assert_eq!(graph.neighbors("Guadalajara"), before.as_slice());
}

#[test]
fn test_query_builder_limit() {
    let graph = sample_graph();

    let result = graph.nearby("Guadalajara").within(100.0).limit(2).execute().unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].to, "Tlaquepaque");
    assert_eq!(result[1].to, "Zapopan");
}

#[test]
fn test_query_builder_count_ignores_limit() {
    let graph = sample_graph();

    let count = graph.nearby("Guadalajara").within(100.0).limit(1).count().unwrap();

    assert_eq!(count, 5);
}
