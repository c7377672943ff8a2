use crate::alien::{Alien, AlienId, MoveOutcome};
use crate::error::{ConstructionError, IntegrityError};
use crate::simulation::observer::{SimEvent, SimulationObserver, TracingObserver};
use crate::simulation::rng::RandomSource;
use crate::simulation::termination::{self, TerminalState};
use crate::world::{City, CityId, World};
use std::collections::HashMap;
use tracing::debug;

/// Owns the world and every alien for the duration of a run
pub struct Simulation {
    world: World,
    aliens: Vec<Alien>,
    iteration: u64,
    observer: Box<dyn SimulationObserver>,
}

impl Simulation {
    /// Create `alien_count` aliens (ids `1..=alien_count`) and drop each into a
    /// uniformly random city. Aliens sharing a city do not fight until the
    /// first battle phase.
    pub fn new<R: RandomSource + ?Sized>(
        world: World,
        alien_count: usize,
        rng: &mut R,
    ) -> Result<Self, ConstructionError> {
        if world.is_empty() && alien_count > 0 {
            return Err(ConstructionError::EmptyWorld {
                aliens: alien_count,
            });
        }

        let mut sim = Self::empty(world);
        for n in 1..=alien_count {
            let city = CityId(rng.below(sim.world.len()) as u32);
            sim.place(AlienId(n as u32), Some(city));
        }
        Ok(sim)
    }

    /// Create one alien per entry: alien `i + 1` goes to the named city, or
    /// starts dead for `None`
    pub fn with_placements(
        world: World,
        placements: &[Option<&str>],
    ) -> Result<Self, ConstructionError> {
        let mut sim = Self::empty(world);
        for (i, name) in placements.iter().enumerate() {
            let alien = AlienId(i as u32 + 1);
            let city = match name {
                Some(name) => Some(sim.world.id_of(name).ok_or_else(|| {
                    ConstructionError::UnknownCity {
                        alien: alien.0,
                        city: name.to_string(),
                    }
                })?),
                None => None,
            };
            sim.place(alien, city);
        }
        Ok(sim)
    }

    /// Replace the default tracing observer
    pub fn with_observer(mut self, observer: impl SimulationObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    fn empty(world: World) -> Self {
        Self {
            world,
            aliens: Vec::new(),
            iteration: 0,
            observer: Box::new(TracingObserver),
        }
    }

    fn place(&mut self, alien: AlienId, city: Option<CityId>) {
        if let Some(id) = city {
            self.world.city_mut(id).add_occupant(alien);
            debug!(alien = alien.0, city = self.world.city(id).name(), "alien placed");
        }
        self.aliens.push(Alien::new(alien, city));
    }

    /// Run ticks until a terminal state is reached.
    ///
    /// An `IntegrityError` aborts the run immediately.
    pub fn run<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TerminalState, IntegrityError> {
        loop {
            if let Some(state) = self.step(rng)? {
                return Ok(state);
            }
        }
    }

    /// One tick: every alien moves, then every city battles, then the end
    /// conditions are checked
    pub fn step<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<TerminalState>, IntegrityError> {
        self.iteration += 1;
        self.observer.on_event(&SimEvent::IterationStarted {
            iteration: self.iteration,
        });

        self.move_aliens(rng);
        self.resolve_battles()?;

        let state = termination::evaluate(&self.world, &self.aliens);
        if let Some(state) = state {
            self.observer.on_event(&SimEvent::Terminated {
                state,
                iteration: self.iteration,
            });
        }
        Ok(state)
    }

    fn move_aliens<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for alien in self.aliens.iter_mut() {
            if let MoveOutcome::Moved { from, to } = alien.move_randomly(&mut self.world, rng) {
                self.observer.on_event(&SimEvent::AlienMoved {
                    alien: alien.id(),
                    from: self.world.city(from).name(),
                    to: self.world.city(to).name(),
                });
            }
        }
    }

    fn resolve_battles(&mut self) -> Result<(), IntegrityError> {
        for idx in 0..self.world.len() {
            let id = CityId(idx as u32);
            if self.world.city(id).is_destroyed() {
                continue;
            }

            let killed = self.world.battle(id, &mut self.aliens)?;
            if !killed.is_empty() {
                self.observer.on_event(&SimEvent::CityDestroyed {
                    city: self.world.city(id).name(),
                    aliens: &killed,
                });
            }
        }
        Ok(())
    }

    /// Number of ticks run so far
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// All aliens in id order, dead ones included
    pub fn aliens(&self) -> &[Alien] {
        &self.aliens
    }

    pub fn alien(&self, id: AlienId) -> Option<&Alien> {
        id.index().and_then(|i| self.aliens.get(i))
    }

    /// Cities that were never destroyed, keyed by name
    pub fn survived_cities(&self) -> HashMap<&str, &City> {
        self.world
            .surviving_ids()
            .map(|id| {
                let city = self.world.city(id);
                (city.name(), city)
            })
            .collect()
    }

    /// One line per city, sorted by name, each with its remaining roads
    pub fn render(&self, cities: &HashMap<&str, &City>) -> String {
        let mut entries: Vec<(&str, &City)> = cities.iter().map(|(&n, &c)| (n, c)).collect();
        entries.sort_unstable_by_key(|&(name, _)| name);

        let mut out = String::with_capacity(entries.len() * 32);
        for (_, city) in entries {
            out.push_str(&self.world.describe(city).to_string());
            out.push('\n');
        }
        out
    }
}
