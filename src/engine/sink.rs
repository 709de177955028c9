//! PlacementSink trait for pluggable instantiation backends
//!
//! The mapper only produces data. Whatever creates objects from it (a game
//! engine bridge, the terminal preview, a test recorder) implements this
//! trait and receives the commands in emission order.

use super::placement::PlacementCommand;
use thiserror::Error;

/// Errors reported by a sink while instantiating commands
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinkError {
    /// The sink cannot create this kind of object
    #[error("Unsupported placement: {0}")]
    Unsupported(String),

    /// The command falls outside the area the sink can hold
    #[error("Placement out of bounds: {0}")]
    OutOfBounds(String),

    #[error("Instantiation failed: {0}")]
    Failed(String),
}

/// Consumer of placement commands
pub trait PlacementSink {
    /// Create the object described by `command`.
    ///
    /// Called once per command, in the order the mapper emitted them.
    fn instantiate(&mut self, command: &PlacementCommand) -> Result<(), SinkError>;
}

/// Feeds every command to `sink`, stopping at the first failure.
///
/// Returns how many commands were instantiated.
pub fn instantiate_all<'a, S, I>(commands: I, sink: &mut S) -> Result<usize, SinkError>
where
    S: PlacementSink + ?Sized,
    I: IntoIterator<Item = &'a PlacementCommand>,
{
    let mut count = 0;
    for command in commands {
        sink.instantiate(command)?;
        count += 1;
    }
    Ok(count)
}

/// Sink that keeps every command it receives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    commands: Vec<PlacementCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PlacementCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PlacementCommand> {
        self.commands
    }
}

impl PlacementSink for RecordingSink {
    fn instantiate(&mut self, command: &PlacementCommand) -> Result<(), SinkError> {
        self.commands.push(*command);
        Ok(())
    }
}
