//! Grid-to-placement mapping.
//!
//! Walks a [`TokenMatrix`] row by row, left to right, and turns every token
//! the [`RuleTable`] knows into placement commands.
//!
//! The column bound is read once from row 0 and used for every row. Rows
//! longer than row 0 are cut off at that bound; cells missing from shorter
//! rows are treated as empty instead of faulting.

use super::grid::TokenMatrix;
use super::rules::{Emission, RuleTable};
use serde::Serialize;
use std::slice;

/// What the instantiator should create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlacementKind {
    FloorValid,
    FloorObstacle,
    /// No standard token produces this; reachable through custom rules.
    FloorCheckpoint,
    PlayerSpawn,
}

impl PlacementKind {
    pub const ALL: [PlacementKind; 4] = [
        PlacementKind::FloorValid,
        PlacementKind::FloorObstacle,
        PlacementKind::FloorCheckpoint,
        PlacementKind::PlayerSpawn,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Floor position of the cell at column `x`, row `y`: `(x, 0, -y)`.
    pub fn floor(x: usize, y: usize) -> Self {
        // 0.0 - y keeps row 0 at +0.0 rather than -0.0
        Self::new(x as f32, 0.0, 0.0 - y as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementCommand {
    pub kind: PlacementKind,
    #[serde(flatten)]
    pub position: Position,
}

impl PlacementCommand {
    pub fn new(kind: PlacementKind, position: Position) -> Self {
        Self { kind, position }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlacementMapper {
    rules: RuleTable,
}

impl PlacementMapper {
    pub fn new(rules: RuleTable) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn map(&self, matrix: &TokenMatrix) -> Vec<PlacementCommand> {
        self.iter(matrix).collect()
    }

    /// Lazy form of [`PlacementMapper::map`]; yields the same sequence.
    pub fn iter<'a>(&'a self, matrix: &'a TokenMatrix) -> Placements<'a> {
        Placements {
            matrix,
            rules: &self.rules,
            column_bound: matrix.column_bound(),
            next_cell: (0, 0),
            pending: None,
        }
    }
}

/// Maps a matrix with the standard peg/hole/obstacle rules.
pub fn map_to_placements(matrix: &TokenMatrix) -> Vec<PlacementCommand> {
    PlacementMapper::default().map(matrix)
}

pub struct Placements<'a> {
    matrix: &'a TokenMatrix,
    rules: &'a RuleTable,
    column_bound: usize,
    /// (y, x) of the next cell to visit
    next_cell: (usize, usize),
    /// Cell currently being expanded and its remaining emissions
    pending: Option<(usize, usize, slice::Iter<'a, Emission>)>,
}

impl<'a> Iterator for Placements<'a> {
    type Item = PlacementCommand;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((x, y, emissions)) = self.pending.as_mut() {
                if let Some(emission) = emissions.next() {
                    return Some(emission.resolve(*x, *y));
                }
            }
            self.pending = None;

            let (y, x) = self.next_cell;
            if self.column_bound == 0 || y >= self.matrix.row_count() {
                return None;
            }
            self.next_cell = if x + 1 < self.column_bound {
                (y, x + 1)
            } else {
                (y + 1, 0)
            };

            let rules = self.rules;
            if let Some(emissions) = self.matrix.get(y, x).and_then(|token| rules.lookup(token)) {
                self.pending = Some((x, y, emissions.iter()));
            }
        }
    }
}

/// Per-kind counts for a mapped level, plus the shape of its matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelSummary {
    pub rows: usize,
    pub columns: usize,
    pub valid: usize,
    pub obstacles: usize,
    pub checkpoints: usize,
    pub spawns: usize,
    pub ragged_rows: Vec<usize>,
}

impl LevelSummary {
    pub fn from_commands(commands: &[PlacementCommand]) -> Self {
        let mut summary = Self::default();
        for command in commands {
            match command.kind {
                PlacementKind::FloorValid => summary.valid += 1,
                PlacementKind::FloorObstacle => summary.obstacles += 1,
                PlacementKind::FloorCheckpoint => summary.checkpoints += 1,
                PlacementKind::PlayerSpawn => summary.spawns += 1,
            }
        }
        summary
    }

    pub fn describe(matrix: &TokenMatrix, commands: &[PlacementCommand]) -> Self {
        Self {
            rows: matrix.row_count(),
            columns: matrix.column_bound(),
            ragged_rows: matrix.ragged_rows(),
            ..Self::from_commands(commands)
        }
    }

    pub fn count(&self, kind: PlacementKind) -> usize {
        match kind {
            PlacementKind::FloorValid => self.valid,
            PlacementKind::FloorObstacle => self.obstacles,
            PlacementKind::FloorCheckpoint => self.checkpoints,
            PlacementKind::PlayerSpawn => self.spawns,
        }
    }

    pub fn floor_tiles(&self) -> usize {
        self.valid + self.obstacles + self.checkpoints
    }
}
