use crate::simulation::rng::RandomSource;
use crate::world::{CityId, World};
use std::fmt;

/// Alien identity, assigned once at creation (1-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlienId(pub u32);

impl AlienId {
    /// Position in an id-ordered alien list
    #[inline]
    pub fn index(self) -> Option<usize> {
        self.0.checked_sub(1).map(|i| i as usize)
    }
}

impl fmt::Display for AlienId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alien {}", self.0)
    }
}

/// Result of a single movement attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Dead, trapped, or chose to stay
    Stayed,
    Moved { from: CityId, to: CityId },
}

impl MoveOutcome {
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// An alien is alive while it has a city; losing it is permanent
#[derive(Clone, Debug)]
pub struct Alien {
    id: AlienId,
    city: Option<CityId>,
}

impl Alien {
    /// Create a new alien; `None` creates it dead
    pub fn new(id: AlienId, city: Option<CityId>) -> Self {
        Self { id, city }
    }

    #[inline]
    pub fn id(&self) -> AlienId {
        self.id
    }

    /// City the alien is currently in, `None` once dead
    #[inline]
    pub fn city(&self) -> Option<CityId> {
        self.city
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.city.is_none()
    }

    /// Alive, in a city that still stands but has no roads left
    pub fn is_trapped(&self, world: &World) -> bool {
        match self.city {
            Some(id) => {
                let city = world.city(id);
                !city.is_destroyed() && !city.has_roads()
            }
            None => false,
        }
    }

    pub(crate) fn die(&mut self) {
        self.city = None;
    }

    /// Stay or follow one road, each with probability `1 / (roads + 1)`.
    ///
    /// Occupant lists of both cities are updated on a move.
    pub fn move_randomly<R: RandomSource + ?Sized>(
        &mut self,
        world: &mut World,
        rng: &mut R,
    ) -> MoveOutcome {
        let from = match self.city {
            Some(from) if !self.is_trapped(world) => from,
            _ => return MoveOutcome::Stayed,
        };

        let roads = world.city(from).neighbors();
        // 0 means stay, i means the i-th road in direction order
        let pick = rng.below(roads.len() + 1);
        let to = match pick.checked_sub(1).and_then(|i| roads.values().nth(i)) {
            Some(&to) => to,
            None => return MoveOutcome::Stayed,
        };

        world.city_mut(from).remove_occupant(self.id);
        world.city_mut(to).add_occupant(self.id);
        self.city = Some(to);

        MoveOutcome::Moved { from, to }
    }
}
