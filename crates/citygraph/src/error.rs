//! Error types for citygraph operations.
//!
//! Mutations and queries return [`Result<T>`] and fail fast on bad calls.
//! Dataset validation never uses these errors; it reports through
//! [`ValidationResult`](crate::ValidationResult) instead.

use thiserror::Error;

/// Result type alias for citygraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph mutations and queries.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed argument (empty city name, self-loop, bad distance bound)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what went wrong
        message: String,
    },

    /// City referenced by an edge is not in the graph
    #[error("Unknown city: {name}")]
    UnknownCity {
        /// Name of the missing city
        name: String,
    },

    /// Edge distance is not a finite number greater than zero
    #[error("Invalid distance: {distance} (must be a finite number > 0)")]
    InvalidDistance {
        /// The rejected distance
        distance: f64,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create an invalid input error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
