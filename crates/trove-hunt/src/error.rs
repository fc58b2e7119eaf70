use std::error::Error;
use std::fmt;

use trove_core::{InputError, Point};

/// Failure modes of the hunt pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuntError {
    /// The map failed boundary validation.
    Input(InputError),
    /// No treasures were placed on the map.
    NoTreasures,
    /// A treasure cannot be reached from the start or cannot reach the goal.
    UnreachableTreasure(Point),
    /// No complete route visits every treasure and reaches the goal.
    NoRoute,
}

impl fmt::Display for HuntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuntError::Input(e) => write!(f, "invalid map: {e}"),
            HuntError::NoTreasures => write!(f, "map has no treasures"),
            HuntError::UnreachableTreasure(p) => write!(f, "treasure at {p} is unreachable"),
            HuntError::NoRoute => write!(f, "no complete route exists"),
        }
    }
}

impl Error for HuntError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HuntError::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for HuntError {
    fn from(e: InputError) -> Self {
        HuntError::Input(e)
    }
}
