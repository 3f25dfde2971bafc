//! Where the CLI keeps its data and logs.
//!
//! Without `--data-dir` both come from the platform locations (XDG on Linux).
//! With `--data-dir` the logs live next to the data, under `<dir>/logs`, so a
//! throwaway data directory never writes into the user's cache.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "evolved";
const APPLICATION: &str = "evolved-palettes";

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "evolved-";

/// Archived logs kept after a rotation.
const KEEP_ARCHIVES: usize = 25;

/// Resolved data and log directories for one invocation.
#[derive(Debug, Clone)]
pub struct AppDirs {
    pub data: PathBuf,
    pub logs: PathBuf,
}

impl AppDirs {
    /// Pick the directories, preferring an explicit data directory.
    pub fn resolve(data_override: Option<PathBuf>) -> Result<Self, CliError> {
        if let Some(data) = data_override {
            let logs = data.join("logs");
            return Ok(Self { data, logs });
        }
        let dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(CliError::NoDataDir)?;
        Ok(Self {
            data: dirs.data_dir().to_path_buf(),
            logs: dirs.cache_dir().to_path_buf(),
        })
    }

    /// Archive the previous run's log, prune old archives and install the logger.
    ///
    /// Returns the path of the new log file.
    pub fn init_logging(&self, level: LevelFilter) -> Result<PathBuf, CliError> {
        fs::create_dir_all(&self.logs)?;
        let latest = self.logs.join(LATEST_LOG);
        if latest.exists() {
            let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
            fs::rename(&latest, self.logs.join(format!("{ARCHIVE_PREFIX}{stamp}.log")))?;
        }
        prune_archives(&self.logs, KEEP_ARCHIVES)?;

        let file = File::create(&latest)?;
        WriteLogger::init(level, Config::default(), file)?;
        Ok(latest)
    }
}

/// Delete all but the newest `keep` archived logs.
///
/// Archive names embed a sortable timestamp, so name order is age order.
fn prune_archives(logs: &Path, keep: usize) -> Result<usize, CliError> {
    let mut archives: Vec<PathBuf> = fs::read_dir(logs)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
        })
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in &archives[..excess] {
        fs::remove_file(path)?;
    }
    Ok(excess)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Resolution
    // ==========================================================================

    #[test]
    fn test_override_keeps_logs_with_data() {
        let dirs = AppDirs::resolve(Some(PathBuf::from("/tmp/palettes"))).unwrap();
        assert_eq!(dirs.data, PathBuf::from("/tmp/palettes"));
        assert_eq!(dirs.logs, PathBuf::from("/tmp/palettes/logs"));
    }

    // ==========================================================================
    // Pruning
    // ==========================================================================

    #[test]
    fn test_prune_keeps_newest_archives() {
        let tmp = tempfile::tempdir().unwrap();
        for day in 1..=5 {
            let name = format!("{ARCHIVE_PREFIX}202601{day:02}-120000.log");
            fs::write(tmp.path().join(name), "").unwrap();
        }
        fs::write(tmp.path().join(LATEST_LOG), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();

        assert_eq!(prune_archives(tmp.path(), 2).unwrap(), 3);

        let mut left: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(
            left,
            vec![
                "evolved-20260104-120000.log".to_string(),
                "evolved-20260105-120000.log".to_string(),
                "latest.log".to_string(),
                "notes.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_prune_under_limit_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("evolved-20260101-000000.log"), "").unwrap();
        assert_eq!(prune_archives(tmp.path(), KEEP_ARCHIVES).unwrap(), 0);
        assert!(tmp.path().join("evolved-20260101-000000.log").exists());
    }
}
