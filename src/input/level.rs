use super::{LoadError, LoadedLevel};
use crate::engine::config::LevelConfig;
use crate::engine::grid::parse_with;
use crate::engine::placement::PlacementMapper;
use crate::engine::rules::RuleTable;
use std::fs;
use std::io;
use std::path::Path;

/// Reads the whole level file as text.
///
/// The file handle lives only for the duration of this call.
pub fn read_level_text(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::InvalidData {
            LoadError::InvalidEncoding(path.to_path_buf())
        } else {
            LoadError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Load, parse and map a level file with the standard rules.
pub fn load(path: &str) -> Result<LoadedLevel, LoadError> {
    load_with_config(path, &LevelConfig::default())
}

pub fn load_with_config(path: &str, config: &LevelConfig) -> Result<LoadedLevel, LoadError> {
    let mapper = PlacementMapper::new(RuleTable::standard(config.spawn_position));
    load_with_mapper(path, config, &mapper)
}

pub fn load_with_mapper(
    path: &str,
    config: &LevelConfig,
    mapper: &PlacementMapper,
) -> Result<LoadedLevel, LoadError> {
    let path = Path::new(path);
    let text = read_level_text(path)?;

    let matrix = parse_with(&text, &config.grid);
    let commands = mapper.map(&matrix);

    Ok(LoadedLevel {
        matrix,
        commands,
        source: format!("level:{}", path.display()),
    })
}
