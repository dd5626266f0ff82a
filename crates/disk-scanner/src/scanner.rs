use std::path::Path;
use std::time::{Instant, UNIX_EPOCH};

use llf_common::LlfError;
use llf_domain::{FileEntry, ScanReport};
use log::{debug, info};
use walkdir::WalkDir;

use crate::filters::ScanFilters;
use crate::leaderboard::{Candidate, Leaderboard};

/// Checks the root before walking. An unreadable root is let through so the
/// walk can skip it like any other denied entry.
fn validate_root(root: &Path) -> Result<(), LlfError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(LlfError::InvalidPath(format!(
            "not a directory: {}",
            root.display()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LlfError::InvalidPath(
            format!("path does not exist: {}", root.display()),
        )),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => Ok(()),
        Err(e) => Err(LlfError::from_io(root, e)),
    }
}

fn modified_secs(meta: &std::fs::Metadata) -> Option<u64> {
    meta.modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
}

fn canonical_string(path: &Path) -> Result<String, LlfError> {
    let resolved = std::fs::canonicalize(path).map_err(|e| LlfError::from_io(path, e))?;
    Ok(resolved.display().to_string())
}

/// Walks `root` and collects the `top` largest regular files.
///
/// Symlinks are not followed and never reported; directories whose contents
/// cannot be read for lack of permission are skipped. Any other walk error
/// aborts the scan. Entries are visited in file-name order, so ties resolve
/// the same way on every run.
pub fn scan_largest(
    root: &Path,
    top: usize,
    filters: &ScanFilters,
) -> Result<ScanReport, LlfError> {
    if top == 0 {
        return Err(LlfError::InvalidArgument(
            "top must be at least 1".to_string(),
        ));
    }
    validate_root(root)?;

    let start = Instant::now();
    let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    if let Some(depth) = filters.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut board = Leaderboard::new(top);
    let mut file_count = 0u64;
    let mut skipped_count = 0u64;

    for item in walker.into_iter().filter_entry(|e| filters.admits(e)) {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) if LlfError::is_permission_denied(&err) => {
                debug!(
                    "skipping {}: permission denied",
                    err.path().unwrap_or(root).display()
                );
                skipped_count += 1;
                continue;
            }
            Err(err) => {
                return Err(LlfError::Walk {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    source: err,
                })
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(err) if LlfError::is_permission_denied(&err) => {
                debug!("skipping {}: permission denied", entry.path().display());
                skipped_count += 1;
                continue;
            }
            Err(err) => {
                return Err(LlfError::Walk {
                    path: entry.path().to_path_buf(),
                    source: err,
                })
            }
        };

        file_count += 1;
        board.offer(Candidate {
            path: entry.into_path(),
            size: meta.len(),
            modified: modified_secs(&meta),
        });
    }

    let largest = board
        .into_sorted_vec()
        .into_iter()
        .map(|c| {
            Ok(FileEntry {
                path: canonical_string(&c.path)?,
                size: c.size,
                modified: c.modified,
            })
        })
        .collect::<Result<Vec<_>, LlfError>>()?;
    let root_display = canonical_string(root).unwrap_or_else(|_| root.display().to_string());
    let scan_time_ms = start.elapsed().as_millis() as u64;

    info!(
        "scanned {}: {} files, {} skipped, {} ms",
        root_display, file_count, skipped_count, scan_time_ms
    );

    Ok(ScanReport {
        root: root_display,
        largest,
        file_count,
        skipped_count,
        scan_time_ms,
    })
}

/// Finds the single largest regular file under `root`, or `None` when the
/// tree holds no non-empty regular file.
pub fn find_largest(root: &Path, filters: &ScanFilters) -> Result<Option<FileEntry>, LlfError> {
    let report = scan_largest(root, 1, filters)?;
    Ok(report.largest.into_iter().next())
}
