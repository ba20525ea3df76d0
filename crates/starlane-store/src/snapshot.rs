//! Versioned binary snapshots.
//!
//! Every galaxy file is a `bitcode`-encoded [`Snapshot`]: a header carrying
//! a magic number and format version, then the payload. The header is
//! validated before the payload is handed to anyone, so a stale or foreign
//! file fails loudly instead of decoding into garbage.

use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Magic number identifying a Starlane galaxy file.
pub const SNAPSHOT_MAGIC: u32 = 0x5354_4C4E;

/// Current format version. Increment when breaking the wire format.
pub const FORMAT_VERSION: u32 = 1;

/// Header prepended to every serialized galaxy file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapshotHeader {
    pub magic: u32,
    pub version: u32,
}

impl SnapshotHeader {
    /// A header for the current format version.
    pub fn new() -> Self {
        Self {
            magic: SNAPSHOT_MAGIC,
            version: FORMAT_VERSION,
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        if self.magic != SNAPSHOT_MAGIC {
            return Err(StoreError::InvalidMagic(self.magic));
        }
        if self.version > FORMAT_VERSION {
            return Err(StoreError::FutureVersion(self.version));
        }
        if self.version < FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// A header plus its payload, as written to disk.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub header: SnapshotHeader,
    pub payload: T,
}

/// Encode a payload under a current-version header.
pub fn encode_snapshot<T: Serialize>(payload: &T) -> Result<Vec<u8>, StoreError> {
    let snapshot = Snapshot {
        header: SnapshotHeader::new(),
        payload,
    };
    bitcode::serialize(&snapshot).map_err(|e| StoreError::Encode(e.to_string()))
}

/// Decode a snapshot, validate its header, and return the payload.
pub fn decode_snapshot<T: DeserializeOwned>(data: &[u8]) -> Result<T, StoreError> {
    let snapshot: Snapshot<T> =
        bitcode::deserialize(data).map_err(|e| StoreError::Decode(e.to_string()))?;
    snapshot.header.validate()?;
    Ok(snapshot.payload)
}
