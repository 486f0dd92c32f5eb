//! Error types for the parts of the crate that can genuinely fail.
//!
//! Language-level failures (bad characters, malformed labels, hitting a wall) are not errors:
//! they are returned as data through [`crate::Rejection`] and [`crate::Outcome`].

use glam::IVec2;
use thiserror::Error;

pub type LayoutResult<T> = Result<T, LayoutError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Problems found while loading a maze layout.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("layout has {found} tiles, expected {expected}")]
    TileCount { expected: usize, found: usize },

    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile {
        tile: char,
        row: usize,
        column: usize,
    },

    /// `cell` is stored as `(column, row)`.
    #[error("{what} cell (row {}, column {}) lies outside the grid", .cell.y, .cell.x)]
    OutOfBounds { what: &'static str, cell: IVec2 },

    #[error("{what} cell (row {}, column {}) is a wall", .cell.y, .cell.x)]
    Walled { what: &'static str, cell: IVec2 },
}

/// Problems found while loading a [`crate::LanguageConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}
