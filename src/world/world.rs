use crate::alien::{Alien, AlienId};
use crate::direction::Direction;
use crate::error::IntegrityError;
use crate::world::city::{City, CityId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// City arena plus a name index; cities are never removed, only destroyed
#[derive(Clone, Debug, Default)]
pub struct World {
    cities: Vec<City>,
    by_name: HashMap<String, CityId>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city without roads; returns the existing id if the name is taken
    pub(crate) fn add_city(&mut self, name: &str) -> CityId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = CityId(self.cities.len() as u32);
        self.cities.push(City::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Add one half of a road; symmetry is the caller's responsibility
    pub(crate) fn add_road(&mut self, from: CityId, direction: Direction, to: CityId) {
        self.city_mut(from).set_neighbor(direction, to);
    }

    /// Get a city by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different, smaller world.
    #[inline]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    #[inline]
    pub(crate) fn city_mut(&mut self, id: CityId) -> &mut City {
        &mut self.cities[id.index()]
    }

    pub fn id_of(&self, name: &str) -> Option<CityId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// City ids in canonical (input) order
    pub fn ids(&self) -> impl Iterator<Item = CityId> + '_ {
        (0..self.cities.len() as u32).map(CityId)
    }

    /// Cities in canonical (input) order
    pub fn cities(&self) -> impl Iterator<Item = (CityId, &City)> + '_ {
        self.ids().zip(self.cities.iter())
    }

    /// First road that is not reciprocated, as (city, direction, neighbor)
    pub fn find_asymmetry(&self) -> Option<(CityId, Direction, CityId)> {
        self.cities().find_map(|(id, city)| {
            city.neighbors().iter().find_map(|(&dir, &n)| {
                (self.city(n).neighbor(dir.opposite()) != Some(id)).then_some((id, dir, n))
            })
        })
    }

    /// Remove every road of the city in both directions and mark it destroyed.
    ///
    /// All roads are checked before any is removed, so a broken graph is
    /// reported without leaving the city half-destroyed. Calling this on an
    /// already destroyed city is a no-op.
    pub fn destroy(&mut self, id: CityId) -> Result<(), IntegrityError> {
        let roads: Vec<(Direction, CityId)> = self
            .city(id)
            .neighbors()
            .iter()
            .map(|(&dir, &n)| (dir, n))
            .collect();

        for &(dir, n) in &roads {
            if self.city(n).neighbor(dir.opposite()) != Some(id) {
                return Err(IntegrityError {
                    city: self.city(id).name().to_string(),
                    neighbor: self.city(n).name().to_string(),
                    direction: dir,
                });
            }
        }

        for (dir, n) in roads {
            // a self-loop's reverse half may already be gone
            if self.city_mut(id).remove_neighbor(dir).is_none() {
                continue;
            }
            self.city_mut(n).remove_neighbor(dir.opposite());
        }

        self.city_mut(id).mark_destroyed();
        debug!(city = self.city(id).name(), "city destroyed");
        Ok(())
    }

    /// Kill every occupant and destroy the city if at least two aliens are in it.
    ///
    /// `aliens` is indexed by id, so alien `n` must sit at position `n - 1`.
    /// Returns the killed aliens, empty when there was no battle. Aliens stay
    /// dead even when the destruction then fails.
    pub fn battle(
        &mut self,
        id: CityId,
        aliens: &mut [Alien],
    ) -> Result<Vec<AlienId>, IntegrityError> {
        if self.city(id).occupants().len() < 2 {
            return Ok(Vec::new());
        }

        let fighters = self.city_mut(id).take_occupants();
        for fighter in &fighters {
            if let Some(alien) = fighter.index().and_then(|i| aliens.get_mut(i)) {
                alien.die();
            }
        }

        self.destroy(id)?;
        Ok(fighters)
    }

    /// Whether `to` can be reached from `from` over the current roads
    pub fn reachable(&self, from: CityId, to: CityId) -> bool {
        let mut visited: HashSet<CityId> = HashSet::new();
        let mut stack = vec![from];

        while let Some(current) = stack.pop() {
            if current == to {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            stack.extend(
                self.city(current)
                    .neighbors()
                    .values()
                    .copied()
                    .filter(|n| !visited.contains(n)),
            );
        }

        false
    }

    /// Display a city as `Name dir=Neighbor ...`, roads in label order
    pub fn city_line(&self, id: CityId) -> CityLine<'_> {
        self.describe(self.city(id))
    }

    /// Like [`World::city_line`], for a city reference already in hand; roads
    /// are resolved against this world
    pub fn describe<'a>(&'a self, city: &'a City) -> CityLine<'a> {
        CityLine { world: self, city }
    }

    /// Cities that have not been destroyed, in canonical order
    pub fn surviving_ids(&self) -> impl Iterator<Item = CityId> + '_ {
        self.cities()
            .filter(|(_, c)| !c.is_destroyed())
            .map(|(id, _)| id)
    }

    /// Count surviving cities
    pub fn count_survivors(&self) -> usize {
        self.surviving_ids().count()
    }
}

/// Borrowed rendering of one city
pub struct CityLine<'a> {
    world: &'a World,
    city: &'a City,
}

impl fmt::Display for CityLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.city.name())?;
        for (dir, &n) in self.city.neighbors() {
            if let Some(neighbor) = self.world.cities.get(n.index()) {
                write!(f, " {}={}", dir, neighbor.name())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::parser::parse_world_from_str;

    /// Helper function to find a city id by name
    fn id_of(world: &World, name: &str) -> CityId {
        world.id_of(name).expect("name not found")
    }

    fn square() -> World {
        parse_world_from_str(
            "City1 north=City2 east=City3\n\
             City2 south=City1 east=City4\n\
             City3 west=City1 north=City4\n\
             City4 west=City2 south=City3\n",
        )
        .unwrap()
    }

    #[test]
    fn test_world_creation() {
        let world = square();

        assert_eq!(world.len(), 4);
        assert!(!world.is_empty());
        assert_eq!(world.count_survivors(), 4);
        assert_eq!(world.find_asymmetry(), None);
    }

    #[test]
    fn test_destroy_removes_both_halves() {
        let mut world = square();
        let c1 = id_of(&world, "City1");
        let c2 = id_of(&world, "City2");
        let c3 = id_of(&world, "City3");

        world.destroy(c1).unwrap();

        assert!(world.city(c1).is_destroyed());
        assert!(!world.city(c1).has_roads());
        assert_eq!(world.city(c2).neighbor(Direction::South), None);
        assert_eq!(world.city(c3).neighbor(Direction::West), None);
        assert_eq!(world.city(c2).neighbor(Direction::East), world.id_of("City4"));
        assert_eq!(world.find_asymmetry(), None);
    }

    #[test]
    fn test_destroy_twice_is_noop() {
        let mut world = square();
        let c1 = id_of(&world, "City1");

        world.destroy(c1).unwrap();
        assert!(world.destroy(c1).is_ok());
        assert!(world.city(c1).is_destroyed());
    }

    #[test]
    fn test_destroy_detects_broken_symmetry() {
        let mut world = square();
        let c1 = id_of(&world, "City1");
        let c2 = id_of(&world, "City2");
        world.city_mut(c2).remove_neighbor(Direction::South);

        let err = world.destroy(c1).unwrap_err();
        assert_eq!(
            err,
            IntegrityError {
                city: "City1".to_string(),
                neighbor: "City2".to_string(),
                direction: Direction::North,
            }
        );

        // nothing was mutated
        assert!(!world.city(c1).is_destroyed());
        assert_eq!(world.city(c1).neighbors().len(), 2);
    }

    #[test]
    fn test_destroy_self_loop() {
        let mut world = parse_world_from_str("Loop north=Loop south=Loop\n").unwrap();
        let id = id_of(&world, "Loop");

        world.destroy(id).unwrap();
        assert!(world.city(id).is_destroyed());
        assert!(!world.city(id).has_roads());
    }

    #[test]
    fn test_battle_kills_everyone() {
        let mut world = square();
        let c1 = id_of(&world, "City1");
        let mut aliens: Vec<Alien> = (1..=3)
            .map(|i| {
                world.city_mut(c1).add_occupant(AlienId(i));
                Alien::new(AlienId(i), Some(c1))
            })
            .collect();

        let killed = world.battle(c1, &mut aliens).unwrap();

        assert_eq!(killed, vec![AlienId(1), AlienId(2), AlienId(3)]);
        assert!(aliens.iter().all(|a| a.is_dead()));
        assert!(world.city(c1).occupants().is_empty());
        assert!(world.city(c1).is_destroyed());
    }

    #[test]
    fn test_battle_kills_by_id_position() {
        let mut world = square();
        let c1 = id_of(&world, "City1");
        let c4 = id_of(&world, "City4");
        let mut aliens: Vec<Alien> = (1..=4)
            .map(|i| Alien::new(AlienId(i), Some(if i % 2 == 0 { c1 } else { c4 })))
            .collect();
        world.city_mut(c1).add_occupant(AlienId(2));
        world.city_mut(c1).add_occupant(AlienId(4));

        world.battle(c1, &mut aliens).unwrap();

        let dead: Vec<bool> = aliens.iter().map(Alien::is_dead).collect();
        assert_eq!(dead, vec![false, true, false, true]);
    }

    #[test]
    fn test_battle_needs_two() {
        let mut world = square();
        let c1 = id_of(&world, "City1");
        world.city_mut(c1).add_occupant(AlienId(1));
        let mut aliens = vec![Alien::new(AlienId(1), Some(c1))];

        assert!(world.battle(c1, &mut aliens).unwrap().is_empty());
        assert!(!aliens[0].is_dead());
        assert!(!world.city(c1).is_destroyed());
    }

    #[test]
    fn test_battle_kills_even_when_destroy_fails() {
        let mut world = square();
        let c1 = id_of(&world, "City1");
        let c3 = id_of(&world, "City3");
        world.city_mut(c3).remove_neighbor(Direction::West);
        let mut aliens: Vec<Alien> = (1..=2)
            .map(|i| {
                world.city_mut(c1).add_occupant(AlienId(i));
                Alien::new(AlienId(i), Some(c1))
            })
            .collect();

        assert!(world.battle(c1, &mut aliens).is_err());
        assert!(aliens.iter().all(|a| a.is_dead()));
    }

    #[test]
    fn test_reachable() {
        let mut world = parse_world_from_str(
            "A east=B\nB west=A east=C\nC west=B\nD north=E\nE south=D\n",
        )
        .unwrap();
        let a = id_of(&world, "A");
        let c = id_of(&world, "C");
        let d = id_of(&world, "D");

        assert!(world.reachable(a, a));
        assert!(world.reachable(a, c));
        assert!(world.reachable(c, a));
        assert!(!world.reachable(a, d));

        let b = id_of(&world, "B");
        world.destroy(b).unwrap();
        assert!(!world.reachable(a, c));
    }

    #[test]
    fn test_reachable_terminates_on_cycles() {
        let world = parse_world_from_str(
            "A east=B south=C\nB west=A south=D\nC north=A east=D\nD north=B west=C\nX\n",
        )
        .unwrap();

        assert!(world.reachable(id_of(&world, "A"), id_of(&world, "D")));
        assert!(!world.reachable(id_of(&world, "A"), id_of(&world, "X")));
    }

    #[test]
    fn test_city_line() {
        let world = parse_world_from_str(
            "City1 north=City2 south=City3 west=City5 east=City4\n\
             City2 south=City1\nCity3 north=City1\nCity4 west=City1\nCity5 east=City1\n",
        )
        .unwrap();

        assert_eq!(
            world.city_line(id_of(&world, "City1")).to_string(),
            "City1 east=City4 north=City2 south=City3 west=City5"
        );
        assert_eq!(world.city_line(id_of(&world, "City2")).to_string(), "City2 south=City1");
    }

    #[test]
    fn test_city_line_without_roads() {
        let world = parse_world_from_str("Lonely\n").unwrap();
        assert_eq!(world.city_line(id_of(&world, "Lonely")).to_string(), "Lonely");
    }
}
