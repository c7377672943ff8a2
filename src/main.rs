use alien_invasion::prelude::*;
use alien_invasion::report::{ConsoleObserver, Summary};
use alien_invasion::world::{parse_world, parse_world_file};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let world = match &args.map {
        Some(path) => parse_world_file(path)?,
        None => parse_world(std::io::stdin().lock())?,
    };

    let aliens = args.aliens as usize;
    let mut sim = Simulation::new(world, aliens, &mut rng)?
        .with_observer(ConsoleObserver::new(std::io::stderr(), args.suppress_events));
    let state = sim.run(&mut rng)?;

    let survivors = sim.survived_cities();
    print!("{}", sim.render(&survivors));

    let summary = Summary {
        state,
        iterations: sim.iteration(),
        aliens,
        survivors: survivors.len(),
    };
    eprintln!("{}", summary.line());

    Ok(())
}
