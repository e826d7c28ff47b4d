//! Errors reported while loading and validating a puzzle.
//!
//! The per-frame systems have no error channel; everything that can go wrong
//! with outside data is caught here, before the first frame runs.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse level {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("level must have exactly one player piece, found {0}")]
    PlayerCount(usize),
    #[error("level must have exactly one target, found {0}")]
    TargetCount(usize),
    #[error("level has no instruction text")]
    MissingInstruction,
    #[error("level has no movable pieces")]
    NoPieces,
    #[error("unknown key `{token}` on line {line}")]
    UnknownKey { line: usize, token: String },
    #[error("invalid wait count `{token}` on line {line}")]
    InvalidWait { line: usize, token: String },
}
