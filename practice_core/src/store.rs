//! Routine persistence for the CLI collaborator layer.
//!
//! Generated routines are appended to a JSONL (JSON Lines) file with file
//! locking for safe concurrent access. The engine itself never touches
//! this module; it only ever sees the already-loaded routine history.

use crate::{Error, Result, Routine};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Routine sink trait for persisting generated routines
pub trait RoutineSink {
    fn append(&mut self, routine: &Routine) -> Result<()>;
}

/// JSONL-based routine store with file locking
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Create a new JSONL store for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl RoutineSink for JsonlStore {
    fn append(&mut self, routine: &Routine) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::Store(format!("open {}: {}", self.path.display(), e)))?;

        file.lock_exclusive()
            .map_err(|e| Error::Store(format!("lock {}: {}", self.path.display(), e)))?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(routine)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended routine {} to store", routine.id);
        Ok(())
    }
}

/// Load the most recent routines from a store file, newest first
///
/// Corrupt lines are skipped with a warning rather than failing the whole
/// load. A missing file is an empty history, not an error.
pub fn load_recent_routines(path: &Path, limit: usize) -> Result<Vec<Routine>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()
        .map_err(|e| Error::Store(format!("lock {}: {}", path.display(), e)))?;

    let reader = BufReader::new(&file);
    let mut routines = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Routine>(&line) {
            Ok(routine) => routines.push(routine),
            Err(e) => {
                tracing::warn!("Failed to parse routine at line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;

    routines.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    routines.truncate(limit);

    tracing::debug!("Loaded {} recent routines from store", routines.len());
    Ok(routines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SkillBand;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn routine(days_ago: i64) -> Routine {
        Routine {
            id: Uuid::new_v4(),
            created_at: Utc::now() - Duration::days(days_ago),
            player: "Sam".into(),
            skill_band: SkillBand::Intermediate,
            weaknesses: vec!["short_game".into()],
            weeks: vec![],
        }
    }

    #[test]
    fn test_append_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("routines.jsonl");

        let r = routine(0);
        let id = r.id;

        let mut store = JsonlStore::new(&path);
        store.append(&r).unwrap();

        let loaded = load_recent_routines(&path, 6).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, id);
    }

    #[test]
    fn test_newest_first_and_limited() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("routines.jsonl");

        let mut store = JsonlStore::new(&path);
        for days_ago in [5, 1, 3, 9, 2, 7, 4] {
            store.append(&routine(days_ago)).unwrap();
        }

        let loaded = load_recent_routines(&path, 3).unwrap();
        assert_eq!(loaded.len(), 3);
        assert!(loaded[0].created_at > loaded[1].created_at);
        assert!(loaded[1].created_at > loaded[2].created_at);
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");
        assert!(load_recent_routines(&path, 6).unwrap().is_empty());
    }

    #[test]
    fn test_unopenable_path_is_a_store_error() {
        let temp_dir = tempfile::tempdir().unwrap();

        // A directory can't be opened for append
        let mut store = JsonlStore::new(temp_dir.path());
        let err = store.append(&routine(0)).unwrap_err();
        assert!(matches!(err, crate::Error::Store(_)), "got {:?}", err);
        assert!(err.to_string().contains("Store error"));
    }

    #[test]
    fn test_corrupt_lines_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("routines.jsonl");

        let mut store = JsonlStore::new(&path);
        store.append(&routine(1)).unwrap();

        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{not json").unwrap();

        store.append(&routine(0)).unwrap();

        let loaded = load_recent_routines(&path, 6).unwrap();
        assert_eq!(loaded.len(), 2);
    }
}
