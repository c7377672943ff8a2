use crate::alien::AlienId;
use crate::direction::Direction;
use std::collections::BTreeMap;

/// Index of a city in the world arena; stable for the whole run.
///
/// Only a [`World`](crate::world::World) hands these out:
///
/// ```compile_fail
/// let _ = alien_invasion::world::CityId(0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(pub(crate) u32);

impl CityId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Graph node: a named city, its roads and the aliens currently in it
#[derive(Clone, Debug)]
pub struct City {
    name: String,
    neighbors: BTreeMap<Direction, CityId>,
    occupants: Vec<AlienId>,
    // separates a destroyed city from one whose neighbors were all destroyed
    destroyed: bool,
}

impl City {
    /// Create a new city without roads
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: BTreeMap::new(),
            occupants: Vec::new(),
            destroyed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Roads leaving this city, in direction label order
    pub fn neighbors(&self) -> &BTreeMap<Direction, CityId> {
        &self.neighbors
    }

    /// Get neighbor in a specific direction
    #[inline]
    pub fn neighbor(&self, direction: Direction) -> Option<CityId> {
        self.neighbors.get(&direction).copied()
    }

    #[inline]
    pub fn has_roads(&self) -> bool {
        !self.neighbors.is_empty()
    }

    pub fn occupants(&self) -> &[AlienId] {
        &self.occupants
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub(crate) fn set_neighbor(&mut self, direction: Direction, neighbor: CityId) {
        self.neighbors.insert(direction, neighbor);
    }

    pub(crate) fn remove_neighbor(&mut self, direction: Direction) -> Option<CityId> {
        self.neighbors.remove(&direction)
    }

    pub(crate) fn add_occupant(&mut self, alien: AlienId) {
        self.occupants.push(alien);
    }

    /// Remove the first occurrence of `alien`; absent aliens are ignored
    pub(crate) fn remove_occupant(&mut self, alien: AlienId) {
        if let Some(pos) = self.occupants.iter().position(|&a| a == alien) {
            self.occupants.remove(pos);
        }
    }

    pub(crate) fn take_occupants(&mut self) -> Vec<AlienId> {
        std::mem::take(&mut self.occupants)
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }
}
