use crate::alien::AlienId;
use crate::simulation::termination::TerminalState;
use tracing::{debug, info, trace};

/// Something that happened during a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimEvent<'a> {
    IterationStarted { iteration: u64 },
    AlienMoved { alien: AlienId, from: &'a str, to: &'a str },
    CityDestroyed { city: &'a str, aliens: &'a [AlienId] },
    Terminated { state: TerminalState, iteration: u64 },
}

/// Receives simulation events; the engine never writes output itself
pub trait SimulationObserver {
    fn on_event(&mut self, event: &SimEvent<'_>);
}

impl<F> SimulationObserver for F
where
    F: FnMut(&SimEvent<'_>),
{
    fn on_event(&mut self, event: &SimEvent<'_>) {
        self(event)
    }
}

/// Forwards every event to `tracing`
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl SimulationObserver for TracingObserver {
    fn on_event(&mut self, event: &SimEvent<'_>) {
        match *event {
            SimEvent::IterationStarted { iteration } => trace!(iteration, "iteration started"),
            SimEvent::AlienMoved { alien, from, to } => {
                debug!(alien = alien.0, from, to, "alien moved")
            }
            SimEvent::CityDestroyed { city, aliens } => {
                info!(city, aliens = %join_aliens(aliens), "city has been destroyed")
            }
            SimEvent::Terminated { state, iteration } => {
                info!(%state, iteration, "simulation ended")
            }
        }
    }
}

/// Discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SimulationObserver for NullObserver {
    fn on_event(&mut self, _event: &SimEvent<'_>) {}
}

/// `alien 1 and alien 2 and alien 5`
pub fn join_aliens(aliens: &[AlienId]) -> String {
    aliens
        .iter()
        .map(AlienId::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}
