//! Error types

use std::path::PathBuf;

use derive_more::{Display, Error};

/// Errors from the board model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Coordinates outside the 8x8 grid
    #[display("coordinate ({col}, {row}) is off the board")]
    InvalidCoordinate { col: usize, row: usize },
}

/// Errors loading the end-of-game font
#[derive(Debug, Display, Error)]
pub enum FontError {
    #[display("failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
