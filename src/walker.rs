use crate::error::AppError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every file to attempt under `root`, or `root` itself when it is a file.
///
/// No extension filtering happens here. Regular files and symlinks to them are
/// candidates; FIFOs, sockets and device nodes are not.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    if root.is_file() {
        log::debug!("Scan root is a single file: {:?}", root);
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        return Err(AppError::InvalidInput(root.to_path_buf()));
    }

    log::info!("Starting file discovery in {:?}", root);
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable directory entry: {}", e);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            log::trace!("Descending into: {:?}", entry.path());
            continue;
        }
        if file_type.is_symlink() {
            // Dangling links are kept so the open failure gets logged per file.
            match std::fs::metadata(entry.path()) {
                Ok(target) if !target.is_file() => {
                    log::trace!("Not following symlink to non-file: {:?}", entry.path());
                    continue;
                }
                _ => {}
            }
        } else if !file_type.is_file() {
            log::trace!("Skipping special file: {:?}", entry.path());
            continue;
        }

        log::trace!("Discovered file: {:?}", entry.path());
        files.push(entry.into_path());
    }

    log::info!("File discovery complete: {} files found.", files.len());
    Ok(files)
}
