use crate::direction::Direction;
use thiserror::Error;

/// A direction label that is not one of north, east, south or west
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction '{0}'")]
pub struct UnknownDirection(pub String);

/// Errors raised while reading a world description
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO operation failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate city name '{name}' at line {line}")]
    DuplicateCity { name: String, line: usize },

    /// Road token without exactly one `=`
    #[error("invalid road '{token}' for city '{city}'")]
    InvalidRoad { token: String, city: String },

    #[error("unknown neighbor city '{neighbor}' in direction '{direction}' for city '{city}'")]
    UnknownNeighbor {
        neighbor: String,
        direction: String,
        city: String,
    },

    #[error("invalid direction '{direction}' for city '{city}'")]
    InvalidDirection { direction: String, city: String },

    #[error("city '{city}' declares more than one road to the {direction}")]
    DuplicateDirection { direction: Direction, city: String },

    /// A road that the neighbor does not reciprocate
    #[error("neighbor city '{neighbor}' has no road in direction '{direction}' to city '{city}'")]
    MissingReturnRoad {
        neighbor: String,
        direction: Direction,
        city: String,
    },
}

/// Errors raised before a simulation can start
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("cannot place {aliens} aliens in a world without cities")]
    EmptyWorld { aliens: usize },

    #[error("cannot place alien {alien} in unknown city '{city}'")]
    UnknownCity { alien: u32, city: String },
}

/// The world graph lost its road symmetry while a city was being destroyed.
///
/// Only the engine mutates roads, so this always points at a bug and is never
/// recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("neighbor city {neighbor} has no road in direction {} to {city}", .direction.opposite())]
pub struct IntegrityError {
    /// The city being destroyed
    pub city: String,
    /// The neighbor whose return road is missing or wrong
    pub neighbor: String,
    /// Direction of the road from `city` to `neighbor`
    pub direction: Direction,
}

/// Top-level error for the simulator
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to create simulation: {0}")]
    Construction(#[from] ConstructionError),

    #[error("failed to simulate battle: {0}")]
    Integrity(#[from] IntegrityError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Construction(err.into())
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
