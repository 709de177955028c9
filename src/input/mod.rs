use crate::engine::{LevelSummary, PlacementCommand, TokenMatrix};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read level {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Level is not valid UTF-8: {0}")]
    InvalidEncoding(PathBuf),
}

/// A parsed and mapped level, ready to hand to a placement sink.
#[derive(Debug, Clone)]
pub struct LoadedLevel {
    pub matrix: TokenMatrix,
    pub commands: Vec<PlacementCommand>,
    pub source: String,
}

impl LoadedLevel {
    pub fn summary(&self) -> LevelSummary {
        LevelSummary::describe(&self.matrix, &self.commands)
    }
}

pub mod level;
