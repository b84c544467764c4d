use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShelfError>;

/// Startup and serve failures. Request handling never produces these:
/// bad input is coerced and protected routes redirect.
#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io: {0}")]
    Io(#[from] io::Error),
}
