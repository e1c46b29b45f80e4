//! Progress Set
//!
//! The set of picto ids the user has marked as obtained, plus the
//! portable snapshot format used for export/import.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Ids the user has obtained. Pure state transitions only; persistence
/// lives behind [`crate::storage::ProgressStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSet {
    obtained: HashSet<u32>,
}

impl ProgressSet {
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            obtained: ids.into_iter().collect(),
        }
    }

    /// Flips membership of `id`. Returns whether it is obtained afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.obtained.remove(&id) {
            false
        } else {
            self.obtained.insert(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.obtained.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.obtained.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obtained.is_empty()
    }

    /// Ids in ascending order, for stable serialization.
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.obtained.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Export file contents. Field names match the on-disk JSON format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub export_date: String,
    pub total_pictos: usize,
    pub obtained_pictos: Vec<u32>,
    pub obtained_count: usize,
    pub missing_count: usize,
}

impl ProgressSnapshot {
    pub fn new(progress: &ProgressSet, catalog_size: usize, export_date: String) -> Self {
        let obtained_pictos = progress.sorted_ids();
        let obtained_count = obtained_pictos.len();
        Self {
            export_date,
            total_pictos: catalog_size,
            obtained_pictos,
            obtained_count,
            missing_count: catalog_size.saturating_sub(obtained_count),
        }
    }
}

/// Why an imported snapshot was rejected. Messages are user-facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportError {
    InvalidJson,
    MissingField,
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::InvalidJson => write!(f, "The selected file is not valid JSON."),
            ImportError::MissingField => {
                write!(f, "Invalid file format: missing \"obtainedPictos\" list.")
            }
        }
    }
}

/// Parses a user-supplied snapshot into a new progress set.
///
/// Only the `obtainedPictos` array is read; all other fields are ignored.
/// Array entries that are not non-negative integers are skipped rather
/// than rejected, since a stray value can never match a catalog id anyway.
pub fn parse_snapshot(raw: &str) -> Result<ProgressSet, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|_| ImportError::InvalidJson)?;
    let ids = value
        .get("obtainedPictos")
        .and_then(serde_json::Value::as_array)
        .ok_or(ImportError::MissingField)?;
    Ok(ProgressSet::from_ids(
        ids.iter()
            .filter_map(serde_json::Value::as_u64)
            .filter_map(|id| u32::try_from(id).ok()),
    ))
}
