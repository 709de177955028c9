//! JSON staging of a command stream.
//!
//! Each command becomes `{"kind": ..., "x": ..., "y": ..., "z": ...}`; the
//! array keeps emission order.

use super::placement::PlacementCommand;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn to_json(commands: &[PlacementCommand]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(commands)?)
}

pub fn write_json(
    path: impl AsRef<Path>,
    commands: &[PlacementCommand],
) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json = to_json(commands)?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
