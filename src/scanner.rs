use crate::error::AppError;
use crate::processor::{hash_file, read_camera_metadata};
use crate::tally::Tallies;
use crate::walker::discover_files;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Count byte-identical files once.
    pub dedup: bool,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub tallies: Tallies,
    pub files_visited: u64,
    pub files_with_metadata: u64,
    pub files_skipped: u64,
    pub duplicates_skipped: u64,
}

/// Walks `root` once and tallies every file's camera attributes.
///
/// Only an invalid `root` is an error; per-file failures are logged and the
/// file contributes nothing.
pub fn scan(root: &Path, options: ScanOptions) -> Result<ScanReport, AppError> {
    let files = discover_files(root)?;
    let mut report = ScanReport::default();
    let mut seen_hashes = HashSet::new();

    for path in files {
        log::info!("---> File to handle: {} <---", path.display());
        report.files_visited += 1;

        if let Err(e) = visit(&path, options, &mut seen_hashes, &mut report) {
            log::warn!("{}", e);
            report.files_skipped += 1;
        }
    }

    log::info!(
        "Scan finished: {} visited, {} with metadata, {} skipped, {} duplicates",
        report.files_visited,
        report.files_with_metadata,
        report.files_skipped,
        report.duplicates_skipped
    );
    Ok(report)
}

fn visit(
    path: &Path,
    options: ScanOptions,
    seen_hashes: &mut HashSet<String>,
    report: &mut ScanReport,
) -> Result<(), AppError> {
    if options.dedup {
        let hash = hash_file(path)?;
        if !seen_hashes.insert(hash) {
            log::debug!("Skipping duplicate content: {:?}", path);
            report.duplicates_skipped += 1;
            return Ok(());
        }
    }

    let metadata = read_camera_metadata(path)?;
    if metadata.is_empty() {
        log::trace!("No tallied tags in {:?}", path);
    }
    report.files_with_metadata += 1;
    report.tallies.record(metadata);
    Ok(())
}
