use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the alien invasion simulation
#[derive(Parser, Debug)]
#[command(name = "alien_invasion", about = "👽 Alien invasion simulator")]
pub struct Args {
    /// Number of aliens (at least 2)
    #[arg(short = 'n', long = "aliens", value_parser = clap::value_parser!(u32).range(2..))]
    pub aliens: u32,

    /// Path to the map file; the map is read from stdin when omitted
    #[arg(short = 'm', long = "map")]
    pub map: Option<PathBuf>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress battle logs
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_args() {
        let args = Args::try_parse_from([
            "alien_invasion",
            "-n",
            "10",
            "--map",
            "world.txt",
            "--seed",
            "7",
            "--suppress-events",
        ])
        .unwrap();

        assert_eq!(args.aliens, 10);
        assert_eq!(args.map, Some(PathBuf::from("world.txt")));
        assert_eq!(args.seed, Some(7));
        assert!(args.suppress_events);
    }

    #[test]
    fn test_map_defaults_to_stdin() {
        let args = Args::try_parse_from(["alien_invasion", "--aliens", "2"]).unwrap();

        assert_eq!(args.map, None);
        assert_eq!(args.seed, None);
        assert!(!args.suppress_events);
    }

    #[test]
    fn test_rejects_fewer_than_two_aliens() {
        assert!(Args::try_parse_from(["alien_invasion", "-n", "1"]).is_err());
        assert!(Args::try_parse_from(["alien_invasion", "-n", "0"]).is_err());
        assert!(Args::try_parse_from(["alien_invasion"]).is_err());
    }
}
