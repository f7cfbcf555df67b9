//! JSON-file-backed almanac source.

use std::collections::HashMap;
use std::path::Path;

use crate::almanac::{AlmanacDay, AlmanacSource};
use crate::error::FeedResult;

/// Almanac months precomputed by an external tool.
///
/// The file maps `"YYYY-MM"` keys to that month's day bundles in ascending
/// day order.
#[derive(Debug)]
pub struct DatasetSource {
    months: HashMap<String, Vec<AlmanacDay>>,
}

impl DatasetSource {
    /// Reads and parses a dataset file.
    ///
    /// ## Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> FeedResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Parses a dataset from raw JSON bytes.
    ///
    /// ## Errors
    /// Returns an error if the bytes are not a valid dataset document.
    pub fn from_slice(bytes: &[u8]) -> FeedResult<Self> {
        Ok(Self {
            months: serde_json::from_slice(bytes)?,
        })
    }
}

impl AlmanacSource for DatasetSource {
    fn month(&self, year: i32, month: u32) -> Option<&[AlmanacDay]> {
        self.months
            .get(&format!("{year:04}-{month:02}"))
            .map(Vec::as_slice)
    }
}
