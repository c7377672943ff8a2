use crate::direction::Direction;
use crate::error::ParseError;
use crate::world::city::CityId;
use crate::world::world::World;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// One input line before roads are resolved
struct RawCity {
    id: CityId,
    name: String,
    roads: Vec<String>,
}

/// Parse a world from any buffered reader.
///
/// Every road must be reciprocated by its neighbor in the opposite
/// direction; no world is returned until that holds for all of them.
pub fn parse_world<R: BufRead>(reader: R) -> Result<World, ParseError> {
    let mut raw: Vec<RawCity> = Vec::with_capacity(1024);
    let mut world = World::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            continue;
        };

        if world.id_of(name).is_some() {
            return Err(ParseError::DuplicateCity {
                name: name.to_string(),
                line: idx + 1,
            });
        }
        raw.push(RawCity {
            id: world.add_city(name),
            name: name.to_string(),
            roads: parts.map(str::to_string).collect(),
        });
    }

    for city in &raw {
        link_roads(&mut world, city)?;
    }

    if let Some((from, dir, to)) = world.find_asymmetry() {
        return Err(ParseError::MissingReturnRoad {
            neighbor: world.city(to).name().to_string(),
            direction: dir.opposite(),
            city: world.city(from).name().to_string(),
        });
    }

    debug!(cities = world.len(), "world parsed");
    Ok(world)
}

/// Parse a world from a file path
pub fn parse_world_file(path: impl AsRef<Path>) -> Result<World, ParseError> {
    let file = File::open(path)?;
    parse_world(BufReader::with_capacity(64 * 1024, file))
}

/// Parse a world directly from an in-memory string
pub fn parse_world_from_str(src: &str) -> Result<World, ParseError> {
    parse_world(src.as_bytes())
}

fn link_roads(world: &mut World, city: &RawCity) -> Result<(), ParseError> {
    let from = city.id;
    for token in &city.roads {
        let (dir_s, neighbor) = match token.split_once('=') {
            Some((d, n)) if !n.contains('=') => (d, n),
            _ => {
                return Err(ParseError::InvalidRoad {
                    token: token.clone(),
                    city: city.name.clone(),
                })
            }
        };

        let to = world
            .id_of(neighbor)
            .ok_or_else(|| ParseError::UnknownNeighbor {
                neighbor: neighbor.to_string(),
                direction: dir_s.to_string(),
                city: city.name.clone(),
            })?;

        let dir: Direction = dir_s.parse().map_err(|_| ParseError::InvalidDirection {
            direction: dir_s.to_string(),
            city: city.name.clone(),
        })?;

        if world.city(from).neighbor(dir).is_some() {
            return Err(ParseError::DuplicateDirection {
                direction: dir,
                city: city.name.clone(),
            });
        }
        world.add_road(from, dir, to);
    }

    Ok(())
}
