// Error types for track loading and validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("failed to decode track image: {0}")]
    Decode(String),
    #[error("embedded asset `{0}` not found")]
    MissingAsset(String),
    #[error("pixel buffer holds {got} pixels, expected {expected} for a {width}x{height} track")]
    SizeMismatch {
        got: usize,
        expected: usize,
        width: u32,
        height: u32,
    },
    #[error("failed to read track file: {0}")]
    Io(#[from] std::io::Error),
}
