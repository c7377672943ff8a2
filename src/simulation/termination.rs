use crate::alien::Alien;
use crate::world::World;
use std::fmt;

/// Why a run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminalState {
    /// Every alien is dead or stuck in a city without roads
    AllDeadOrTrapped,
    /// At most one alien is alive, so no battle can happen
    OnlyOneLeft,
    /// Alive aliens exist but none can reach another
    AliveDisconnected,
}

impl TerminalState {
    pub const fn as_str(self) -> &'static str {
        match self {
            TerminalState::AllDeadOrTrapped => "STATE_ALL_ALIENS_DEAD_OR_TRAPPED",
            TerminalState::OnlyOneLeft => "STATE_ONLY_ONE_ALIEN_LEFT",
            TerminalState::AliveDisconnected => "STATE_ALIVE_ALIENS_DISCONNECTED",
        }
    }
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluate the end conditions in priority order; `None` means keep running.
///
/// The zero-alive case is always caught by the first condition, so the
/// second one only ever sees a single mobile alien.
pub fn evaluate(world: &World, aliens: &[Alien]) -> Option<TerminalState> {
    if aliens.iter().all(|a| a.is_dead() || a.is_trapped(world)) {
        return Some(TerminalState::AllDeadOrTrapped);
    }

    // trapped aliens still count as alive from here on
    let alive: Vec<_> = aliens.iter().filter_map(Alien::city).collect();
    if alive.len() <= 1 {
        return Some(TerminalState::OnlyOneLeft);
    }

    for (i, &from) in alive.iter().enumerate() {
        for (j, &to) in alive.iter().enumerate() {
            if i != j && world.reachable(from, to) {
                return None;
            }
        }
    }

    Some(TerminalState::AliveDisconnected)
}
