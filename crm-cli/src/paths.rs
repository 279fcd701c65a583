//! Platform-specific directory paths.
//!
//! Only the cache directory is used; it holds the log files.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "crm";
const APPLICATION: &str = "crm";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Cache directory, or `None` if no home directory can be determined.
///
/// - Linux: `$XDG_CACHE_HOME/crm` or `~/.cache/crm`
/// - macOS: `~/Library/Caches/dev.crm.crm`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the log file for this run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under a timestamp and prune old archives.
///
/// Must run before the new log file is created.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{}.log", stamp)));
    }

    prune_archives(&cache, MAX_OLD_LOGS);
}

/// Delete the oldest archived logs in `dir` beyond `keep`.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if archives.len() <= keep {
        return;
    }

    // oldest first
    archives.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());
    let excess = archives.len() - keep;
    for entry in archives.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
