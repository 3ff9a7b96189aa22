//! Save/restore contract for the selection state.
//!
//! The state is persisted as a plain tuple so the host application can
//! store it wherever it keeps its own lifecycle data. The demo app writes
//! it as a JSON snapshot file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, PickerResult};
use crate::models::calendar_date::CalendarDate;
use crate::services::selection::SelectionState;

const SNAPSHOT_FILE: &str = "selection.json";

/// Persisted selection tuple.
///
/// Serialized untagged, so a snapshot is a bare JSON array:
/// `[2024, 2, 29, "true"]` or `[29, 2, 2024]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavedSelection {
    /// (year, month, day, pending auto-scroll as "true"/"false")
    Full(i32, u32, u32, String),
    /// (day, month, year)
    Compact(u32, u32, i32),
}

impl SelectionState {
    pub fn save(&self) -> SavedSelection {
        SavedSelection::Full(
            self.year(),
            self.month(),
            self.day(),
            self.pending_auto_scroll().to_string(),
        )
    }

    /// Day/month/year only; the scroll flag is not kept.
    pub fn save_compact(&self) -> SavedSelection {
        SavedSelection::Compact(self.day(), self.month(), self.year())
    }

    /// Rebuild a state from a saved tuple.
    ///
    /// The visible range is not persisted; the renderer reports it again
    /// after the first frame.
    pub fn restore(saved: &SavedSelection) -> PickerResult<Self> {
        match saved {
            SavedSelection::Full(year, month, day, pending) => {
                let date = restore_date(*year, *month, *day)?;
                let pending = parse_flag(pending)?;
                Ok(Self::with_pending_scroll(date, pending))
            }
            SavedSelection::Compact(day, month, year) => {
                let date = restore_date(*year, *month, *day)?;
                Ok(Self::with_pending_scroll(date, false))
            }
        }
    }
}

fn restore_date(year: i32, month: u32, day: u32) -> PickerResult<CalendarDate> {
    CalendarDate::new(year, month, day)
        .map_err(|err| PickerError::InvalidDateTuple(err.to_string()))
}

fn parse_flag(value: &str) -> PickerResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(PickerError::InvalidDateTuple(format!(
            "'{}' is not a boolean scroll flag",
            other
        ))),
    }
}

/// Default location of the snapshot file in the user's data directory.
pub fn default_snapshot_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "Ken24T", "HorizontalDatePicker")
        .map(|dirs| dirs.data_dir().join(SNAPSHOT_FILE))
}

/// Load a saved selection. A missing file is not an error.
pub fn load_snapshot(path: &Path) -> Result<Option<SelectionState>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read selection from {}", path.display()))?;
    let saved: SavedSelection = serde_json::from_str(&data)
        .with_context(|| format!("failed to deserialize selection from {}", path.display()))?;
    let state = SelectionState::restore(&saved)
        .with_context(|| format!("invalid selection stored in {}", path.display()))?;
    Ok(Some(state))
}

pub fn save_snapshot(path: &Path, state: &SelectionState) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string(&state.save())?;
    fs::write(path, data)
        .with_context(|| format!("failed to write selection to {}", path.display()))?;
    Ok(())
}
