use alien_invasion::simulation::{NullObserver, ScriptedRng};
use alien_invasion::world::parse_world_from_str;
use alien_invasion::{Simulation, TerminalState};

fn sim(map: &str, placements: &[Option<&str>]) -> Simulation {
    let world = parse_world_from_str(map).expect("valid map");
    Simulation::with_placements(world, placements)
        .expect("known cities")
        .with_observer(NullObserver)
}

#[test]
fn isolated_aliens_are_trapped() {
    let mut sim = sim(
        "City1\nCity2\nCity3\n",
        &[Some("City1"), Some("City2"), Some("City3")],
    );

    let state = sim.run(&mut ScriptedRng::default()).unwrap();

    assert_eq!(state, TerminalState::AllDeadOrTrapped);
    assert_eq!(
        sim.render(&sim.survived_cities()),
        "City1\nCity2\nCity3\n"
    );
}

#[test]
fn lone_survivor_ends_run_without_battles() {
    let map = "City1 north=City2 east=City3\nCity2 south=City1\nCity3 west=City1\n";
    let mut sim = sim(map, &[Some("City1"), None, None]);

    // stay, so nothing changes in the first tick
    let state = sim.run(&mut ScriptedRng::new([0])).unwrap();

    assert_eq!(state, TerminalState::OnlyOneLeft);
    assert_eq!(sim.iteration(), 1);
    assert_eq!(
        sim.render(&sim.survived_cities()),
        "City1 east=City3 north=City2\nCity2 south=City1\nCity3 west=City1\n"
    );
}

#[test]
fn separate_components_end_disconnected() {
    let map = "City1 north=City2\nCity2 south=City1\nCity3 east=City4\nCity4 west=City3\n";
    let mut sim = sim(map, &[Some("City1"), Some("City4")]);

    // alien 1 walks north, alien 2 walks west
    let state = sim.run(&mut ScriptedRng::new([1, 1])).unwrap();

    assert_eq!(state, TerminalState::AliveDisconnected);
    assert_eq!(sim.survived_cities().len(), 4);
}

#[test]
fn meeting_destroys_city_and_roads() {
    let map = "City1 north=City2 south=City3 west=City5 east=City4\n\
               City2 south=City1\n\
               City3 north=City1\n\
               City4 west=City1\n\
               City5 east=City1\n";
    let mut sim = sim(map, &[Some("City2"), Some("City3"), Some("City5")]);

    // aliens 1 and 2 walk into City1, alien 3 stays in City5
    let state = sim.run(&mut ScriptedRng::new([1, 1, 0])).unwrap();

    assert_eq!(state, TerminalState::AllDeadOrTrapped);
    assert!(sim.aliens()[0].is_dead());
    assert!(sim.aliens()[1].is_dead());
    assert!(sim.aliens()[2].is_trapped(sim.world()));
    assert_eq!(
        sim.render(&sim.survived_cities()),
        "City2\nCity3\nCity4\nCity5\n"
    );
    assert_eq!(sim.world().find_asymmetry(), None);
}
