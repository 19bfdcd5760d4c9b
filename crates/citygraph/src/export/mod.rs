//! Export module for handing a built graph to presentation tools.
//!
//! Supported formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_filtered};
