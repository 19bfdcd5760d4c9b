//! Unit tests for dataset parsing and bulk graph construction.

use citygraph::{build_graph, sample_data, CityGraph, EdgeRecord, GraphData, GraphError};

#[test]
fn test_build_graph_from_sample() {
    let data = sample_data();

    let graph = build_graph(&data.cities, &data.edges).unwrap();

    assert_eq!(graph.city_count(), data.cities.len());
    assert_eq!(graph.edge_count(), data.edges.len());
}

#[test]
fn test_build_graph_from_str_slices() {
    let edges = vec![EdgeRecord::new("A", "B", 4.0)];

    let graph = build_graph(&["A", "B"], &edges).unwrap();

    assert_eq!(graph.neighbors("B")[0].to, "A");
}

#[test]
fn test_build_graph_propagates_errors() {
    let unknown = vec![EdgeRecord::new("A", "B", 10.0)];
    assert!(matches!(
        build_graph(&["A"], &unknown),
        Err(GraphError::UnknownCity { .. })
    ));

    let negative = vec![EdgeRecord::new("A", "B", -5.0)];
    assert!(matches!(
        build_graph(&["A", "B"], &negative),
        Err(GraphError::InvalidDistance { .. })
    ));

    let no_edges: Vec<EdgeRecord> = Vec::new();
    assert!(matches!(
        build_graph(&["A", ""], &no_edges),
        Err(GraphError::InvalidInput { .. })
    ));
}

#[test]
fn test_build_graph_tolerates_duplicate_cities() {
    let no_edges: Vec<EdgeRecord> = Vec::new();

    let graph = build_graph(&["A", "A"], &no_edges).unwrap();

    assert_eq!(graph.city_count(), 1);
}

#[test]
fn test_try_from_dataset() {
    let data = sample_data();

    let graph = CityGraph::try_from(&data).unwrap();

    assert!(graph.has_city("Guadalajara"));
}

#[test]
fn test_parse_dataset_json() {
    let json = r#"{
        "cities": ["A", "B"],
        "edges": [{ "from": "A", "to": "B", "distance": 10 }]
    }"#;

    let data = GraphData::from_json_str(json).unwrap();

    assert_eq!(data.cities, vec!["A", "B"]);
    assert_eq!(data.edges, vec![EdgeRecord::new("A", "B", 10.0)]);
    assert!(data.validate().ok);
}

#[test]
fn test_parse_dataset_without_edges() {
    let data = GraphData::from_json_str(r#"{ "cities": ["A"] }"#).unwrap();

    assert!(data.edges.is_empty());
}

#[test]
fn test_parse_dataset_rejects_bad_json() {
    assert!(matches!(
        GraphData::from_json_str("{"),
        Err(GraphError::Serialization { .. })
    ));
    assert!(matches!(
        GraphData::from_json_str(r#"{ "cities": ["A"], "edges": [{ "from": "A", "to": "A", "distance": "x" }] }"#),
        Err(GraphError::Serialization { .. })
    ));
}
