use crate::error::UnknownDirection;
use std::fmt;
use std::str::FromStr;

/// The four compass directions a road can leave a city in.
///
/// Variants are declared in label order, so the derived `Ord` sorts
/// `east < north < south < west`, which is the order roads are rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    East,
    North,
    South,
    West,
}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"north" => Ok(Direction::North),
            b"south" => Ok(Direction::South),
            b"east" => Ok(Direction::East),
            b"west" => Ok(Direction::West),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

impl Direction {
    /// All possible directions, in label order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::South,
        Direction::West,
    ];

    /// Whether `label` names one of the four directions
    pub fn is_valid(label: &str) -> bool {
        label.parse::<Direction>().is_ok()
    }

    /// The direction a reciprocating road points in
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
