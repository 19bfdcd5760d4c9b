//! Dataset validation.
//!
//! Validation never fails. It walks the whole dataset and returns every
//! problem it finds so that untrusted input can be rejected with a complete,
//! human-readable report.
//!
//! # Rules
//!
//! - City names are non-empty and unique (exact, case-sensitive match)
//! - Edge endpoints name cities listed in the dataset
//! - Edge distances are finite numbers greater than zero
//! - Edges do not connect a city to itself

use super::GraphData;
use crate::graph::{is_valid_city_name, is_valid_distance};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Outcome of validating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// `true` when `errors` is empty
    pub ok: bool,
    /// Every problem found, in dataset order
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        if errors.is_empty() {
            debug!("Dataset passed validation");
        } else {
            warn!("Dataset failed validation with {} error(s)", errors.len());
        }
        Self {
            ok: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a typed dataset.
///
/// # Examples
///
/// ```
/// use citygraph::{validate_graph_data, EdgeRecord, GraphData};
///
/// let data = GraphData {
///     cities: vec!["A".into(), "A".into()],
///     edges: vec![EdgeRecord::new("A", "B", -5.0)],
/// };
///
/// let result = validate_graph_data(&data);
/// assert!(!result.ok);
/// assert_eq!(result.errors.len(), 3);
/// ```
pub fn validate_graph_data(data: &GraphData) -> ValidationResult {
    let mut checker = Checker::default();

    for (index, city) in data.cities.iter().enumerate() {
        checker.city(index, city);
    }

    for (index, edge) in data.edges.iter().enumerate() {
        checker.edge(
            index,
            Some(edge.from.as_str()),
            Some(edge.to.as_str()),
            Some(edge.distance),
        );
    }

    ValidationResult::from_errors(checker.errors)
}

/// Validate an untyped JSON dataset.
///
/// On top of the rules of [`validate_graph_data`], reports shape problems:
/// a non-object root, `cities` missing or not an array, `edges` not an
/// array, non-string city names or endpoints, and non-numeric distances.
/// A missing `edges` key is treated as no edges.
///
/// # Examples
///
/// ```
/// use citygraph::validate_graph_value;
/// use serde_json::json;
///
/// let raw = json!({
///     "cities": ["A", "B"],
///     "edges": [{ "from": "A", "to": "B", "distance": "bad" }]
/// });
///
/// let result = validate_graph_value(&raw);
/// assert!(!result.ok);
/// ```
pub fn validate_graph_value(data: &Value) -> ValidationResult {
    let mut checker = Checker::default();

    let Some(root) = data.as_object() else {
        checker.push(format!(
            "dataset must be a JSON object, got {}",
            type_name(data)
        ));
        return ValidationResult::from_errors(checker.errors);
    };

    match root.get("cities") {
        Some(Value::Array(cities)) => {
            for (index, city) in cities.iter().enumerate() {
                match city.as_str() {
                    Some(name) => checker.city(index, name),
                    None => checker.push(format!(
                        "city at index {index} must be a string, got {}",
                        type_name(city)
                    )),
                }
            }
        }
        Some(other) => checker.push(format!(
            "\"cities\" must be an array, got {}",
            type_name(other)
        )),
        None => checker.push("\"cities\" is missing".to_string()),
    }

    match root.get("edges") {
        Some(Value::Array(edges)) => {
            for (index, edge) in edges.iter().enumerate() {
                raw_edge(&mut checker, index, edge);
            }
        }
        Some(other) => checker.push(format!(
            "\"edges\" must be an array, got {}",
            type_name(other)
        )),
        None => {}
    }

    ValidationResult::from_errors(checker.errors)
}

fn raw_edge(checker: &mut Checker, index: usize, edge: &Value) {
    let Some(fields) = edge.as_object() else {
        checker.push(format!(
            "edge {index} must be an object, got {}",
            type_name(edge)
        ));
        return;
    };

    let from = raw_endpoint(checker, index, fields, "from");
    let to = raw_endpoint(checker, index, fields, "to");

    let distance = match fields.get("distance") {
        Some(Value::Number(n)) => n.as_f64(),
        Some(other) => {
            checker.push(format!(
                "edge {index}: \"distance\" must be a number, got {}",
                type_name(other)
            ));
            None
        }
        None => {
            checker.push(format!("edge {index}: \"distance\" is missing"));
            None
        }
    };

    checker.edge(index, from, to, distance);
}

fn raw_endpoint<'v>(
    checker: &mut Checker,
    index: usize,
    fields: &'v Map<String, Value>,
    key: &str,
) -> Option<&'v str> {
    match fields.get(key) {
        Some(Value::String(name)) => Some(name.as_str()),
        Some(other) => {
            checker.push(format!(
                "edge {index}: \"{key}\" must be a string, got {}",
                type_name(other)
            ));
            None
        }
        None => {
            checker.push(format!("edge {index}: \"{key}\" is missing"));
            None
        }
    }
}

/// Accumulates errors across city and edge checks.
#[derive(Default)]
struct Checker {
    known: HashSet<String>,
    errors: Vec<String>,
}

impl Checker {
    fn push(&mut self, message: String) {
        self.errors.push(message);
    }

    fn city(&mut self, index: usize, name: &str) {
        if !is_valid_city_name(name) {
            self.push(format!("city at index {index} has an empty name"));
        } else if !self.known.insert(name.to_string()) {
            self.push(format!("duplicate city \"{name}\" at index {index}"));
        }
    }

    /// Checks whatever parts of the edge are well-formed; `None` parts were
    /// already reported by the caller.
    fn edge(&mut self, index: usize, from: Option<&str>, to: Option<&str>, distance: Option<f64>) {
        let label = format!(
            "edge {index} ({} -> {})",
            from.unwrap_or("?"),
            to.unwrap_or("?")
        );

        for city in [from, to].into_iter().flatten() {
            if !self.known.contains(city) {
                self.push(format!("{label}: unknown city \"{city}\""));
            }
        }

        if let Some(d) = distance {
            if !is_valid_distance(d) {
                self.push(format!(
                    "{label}: invalid distance {d} (must be a finite number > 0)"
                ));
            }
        }

        if let (Some(a), Some(b)) = (from, to) {
            if a == b {
                self.push(format!("{label}: self-loop on \"{a}\""));
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
