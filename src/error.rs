//! Error types.
//!
//! Cancellation is a normal way for a search to end and never shows up here.

use thiserror::Error;

/// Errors raised while building or launching a search.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A city has a NaN or infinite coordinate.
    #[error("city {index} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate {
        /// Position of the offending city in the input.
        index: usize,
        /// X-coordinate as supplied.
        x: f64,
        /// Y-coordinate as supplied.
        y: f64,
    },

    /// A leg between two cities is too long for tour lengths to stay finite.
    #[error("distance from city {from} to city {to} is too large to measure a tour")]
    NonFiniteDistance {
        /// First city of the leg.
        from: usize,
        /// Second city of the leg.
        to: usize,
    },

    /// The search configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The operating system refused to start the search thread.
    #[error("failed to spawn search thread: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Reasons a sequence of stops is not a closed tour over a City Set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The tour does not have the number of stops the City Set requires.
    #[error("expected {expected} stops, got {actual}")]
    WrongLength {
        /// Required number of stops.
        expected: usize,
        /// Number of stops supplied.
        actual: usize,
    },

    /// The tour does not start and end at city 0.
    #[error("tour must start and end at city 0")]
    NotClosed,

    /// A stop names a city that does not exist.
    #[error("city index {index} out of range for {city_count} cities")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Size of the City Set.
        city_count: usize,
    },

    /// A city other than the start is visited more than once.
    #[error("city {index} visited more than once")]
    Repeated {
        /// The repeated index.
        index: usize,
    },
}
