pub mod config;
pub mod export;
pub mod grid;
pub mod placement;
pub mod rules;
pub mod sink;

pub use config::{GridConfig, LevelConfig};
pub use grid::{parse, parse_with, TokenMatrix};
pub use placement::{
    map_to_placements, LevelSummary, PlacementCommand, PlacementKind, PlacementMapper, Position,
};
pub use rules::{Emission, RuleTable};
pub use sink::{instantiate_all, PlacementSink, RecordingSink, SinkError};
