//! Token → placement rule table.
//!
//! Each recognized token maps to an ordered list of emissions. Tokens missing
//! from the table emit nothing, which is how free-form level text (comments,
//! decoration) passes through without errors.

use super::config::SPAWN_POSITION;
use super::placement::{PlacementCommand, PlacementKind, Position};
use lazy_static::lazy_static;
use std::collections::HashMap;

/// Valid tile that also spawns the player
pub const PEG: &str = "*";
/// Valid tile
pub const HOLE: &str = "O";
/// Impassable tile
pub const OUT: &str = "█";

/// One command produced by a matching token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Emission {
    /// Placed on the floor position of the matching cell
    AtCell(PlacementKind),
    /// Placed at a fixed position, independent of the cell
    Fixed(PlacementKind, Position),
}

impl Emission {
    pub fn resolve(&self, x: usize, y: usize) -> PlacementCommand {
        match *self {
            Emission::AtCell(kind) => PlacementCommand::new(kind, Position::floor(x, y)),
            Emission::Fixed(kind, position) => PlacementCommand::new(kind, position),
        }
    }
}

lazy_static! {
    static ref STANDARD_RULES: RuleTable = RuleTable::standard(SPAWN_POSITION);
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: HashMap<String, Vec<Emission>>,
}

impl RuleTable {
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Peg, hole and obstacle rules with the player spawning at `spawn`.
    pub fn standard(spawn: Position) -> Self {
        Self::empty()
            .with_rule(
                PEG,
                vec![
                    Emission::AtCell(PlacementKind::FloorValid),
                    Emission::Fixed(PlacementKind::PlayerSpawn, spawn),
                ],
            )
            .with_rule(HOLE, vec![Emission::AtCell(PlacementKind::FloorValid)])
            .with_rule(OUT, vec![Emission::AtCell(PlacementKind::FloorObstacle)])
    }

    pub fn with_rule(mut self, token: impl Into<String>, emissions: Vec<Emission>) -> Self {
        self.insert(token, emissions);
        self
    }

    /// Adds or replaces the rule for `token`, returning the previous one.
    pub fn insert(
        &mut self,
        token: impl Into<String>,
        emissions: Vec<Emission>,
    ) -> Option<Vec<Emission>> {
        self.rules.insert(token.into(), emissions)
    }

    pub fn lookup(&self, token: &str) -> Option<&[Emission]> {
        self.rules.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        STANDARD_RULES.clone()
    }
}
