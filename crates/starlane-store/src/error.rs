//! Storage error types.

use crate::snapshot::{FORMAT_VERSION, SNAPSHOT_MAGIC};
use thiserror::Error;

/// Errors that can occur while loading or saving galaxy files.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("bitcode encoding failed: {0}")]
    Encode(String),

    #[error("bitcode decoding failed: {0}")]
    Decode(String),

    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", SNAPSHOT_MAGIC, .0)]
    InvalidMagic(u32),

    #[error("snapshot from future version {0} (this build supports {FORMAT_VERSION})")]
    FutureVersion(u32),

    #[error("unsupported format version: expected {FORMAT_VERSION}, got {0}")]
    UnsupportedVersion(u32),
}
