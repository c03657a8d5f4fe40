use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};

use nearspot_boundary::Snapshot;
use nearspot_db_mem::MemStore;

/// Load the store from the JSON snapshot file.
///
/// A missing file yields an empty store.
pub fn load(path: &Path) -> Result<MemStore> {
    let store = MemStore::new();
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("Snapshot {} not found => empty store", path.display());
            return Ok(store);
        }
        Err(err) => return Err(err.into()),
    };
    let snapshot: Snapshot = serde_json::from_str(&json)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    let locations = snapshot
        .locations
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;
    let reports = snapshot
        .reports
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<Vec<_>, _>>()?;
    store.restore(locations, reports)?;
    Ok(store)
}

/// Persist the current content of the store as a JSON snapshot.
///
/// The file is written to a sibling temporary file first and then
/// renamed over the target, so a crash mid-write leaves the previous
/// snapshot intact.
pub fn save(store: &MemStore, path: &Path) -> Result<()> {
    let (locations, reports) = store.dump()?;
    let snapshot = Snapshot {
        locations: locations.into_iter().map(Into::into).collect(),
        reports: reports.into_iter().map(Into::into).collect(),
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write snapshot {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace snapshot {}", path.display()))?;
    log::debug!("Saved snapshot {}", path.display());
    Ok(())
}
