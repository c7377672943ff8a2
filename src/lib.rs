//! # Alien Invasion
//!
//! A simulation of aliens invading a world of cities joined by roads.
//!
//! Aliens wander at random; whenever two or more meet in a city they fight,
//! dying and destroying the city along with every road into it. The run ends
//! once no further battle is possible.

pub mod alien;
pub mod cli;
pub mod direction;
pub mod error;
pub mod report;
pub mod simulation;
pub mod world;

pub use alien::{Alien, AlienId};
pub use cli::Args;
pub use direction::Direction;
pub use error::{ConstructionError, Error, IntegrityError, ParseError, Result};
pub use simulation::{Simulation, TerminalState};
pub use world::World;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Args, Direction, Error, Result, Simulation, TerminalState, World};
}
