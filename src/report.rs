use crate::simulation::{join_aliens, SimEvent, SimulationObserver, TerminalState, TracingObserver};
use colored::Colorize;
use std::io::Write;

/// Prints battles to a terminal as they happen and forwards everything to
/// `tracing`
pub struct ConsoleObserver<W: Write> {
    out: W,
    suppress_events: bool,
    tracing: TracingObserver,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, suppress_events: bool) -> Self {
        Self {
            out,
            suppress_events,
            tracing: TracingObserver,
        }
    }
}

impl<W: Write> SimulationObserver for ConsoleObserver<W> {
    fn on_event(&mut self, event: &SimEvent<'_>) {
        self.tracing.on_event(event);
        if self.suppress_events {
            return;
        }
        if let SimEvent::CityDestroyed { city, aliens } = *event {
            // write errors are ignored
            let _ = writeln!(
                self.out,
                "{} {} {} {}",
                "💥".red(),
                city.bright_red(),
                "has been destroyed by".red(),
                join_aliens(aliens).yellow()
            );
        }
    }
}

/// Final counters for the summary line
#[derive(Clone, Copy, Debug)]
pub struct Summary {
    pub state: TerminalState,
    pub iterations: u64,
    pub aliens: usize,
    pub survivors: usize,
}

impl Summary {
    /// One colored line; plain text when colors are disabled
    pub fn line(&self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "Simulation ended:".green().bold(),
            self.state.to_string().cyan(),
            "|".dimmed(),
            format!("iterations={}", self.iterations).cyan(),
            format!("aliens={}", self.aliens).cyan(),
            format!("survivors={}", self.survivors).cyan(),
        )
    }
}
