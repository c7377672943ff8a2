pub mod engine;
pub mod observer;
pub mod rng;
pub mod termination;

pub use engine::Simulation;
pub use observer::{join_aliens, NullObserver, SimEvent, SimulationObserver, TracingObserver};
pub use rng::RandomSource;
#[doc(hidden)]
pub use rng::ScriptedRng;
pub use termination::TerminalState;
