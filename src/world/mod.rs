pub mod city;
pub mod parser;
pub mod world;

pub use city::{City, CityId};
pub use parser::{parse_world, parse_world_file, parse_world_from_str};
pub use world::{CityLine, World};
