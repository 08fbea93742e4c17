//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("invalid SAN token '{0}'")]
    InvalidSan(String),

    #[error("illegal move '{san}' at ply {ply}")]
    IllegalMove { san: String, ply: usize },

    #[error("PGN read error: {0}")]
    PgnRead(#[from] std::io::Error),
}
