use crate::error::AppError;
use crate::metadata::CameraMetadata;
use exif::{Exif, In, Reader, Tag, Value};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads the EXIF block of `path` and pulls out the tallied tags.
pub fn read_camera_metadata(path: &Path) -> Result<CameraMetadata, AppError> {
    log::trace!("Extracting EXIF data for image: {:?}", path);
    let file = File::open(path).map_err(|source| AppError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buf_reader = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut buf_reader)
        .map_err(|source| AppError::MetadataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let metadata = CameraMetadata {
        model: ascii_field(&exif, Tag::Model),
        lens_model: ascii_field(&exif, Tag::LensModel),
        focal_length_35mm: exif
            .get_field(Tag::FocalLengthIn35mmFilm, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .filter(|focal| *focal > 0),
    };
    log::debug!("Metadata for {:?}: {:?}", path, metadata);

    Ok(metadata)
}

fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref values) => {
            let bytes = values.first()?;
            let text = String::from_utf8_lossy(bytes);
            let trimmed = text.trim_end_matches('\0').trim();
            if trimmed.is_empty() {
                log::trace!("Tag {} is present but empty", tag);
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => {
            log::trace!("Tag {} has a non-ASCII value type, ignoring", tag);
            None
        }
    }
}

/// Streams the file through SHA-256 and returns the lowercase hex digest.
pub fn hash_file(path: &Path) -> Result<String, AppError> {
    log::trace!("Calculating hash for image: {:?}", path);
    let unreadable = |source| AppError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0; 8192];
    loop {
        let n = file.read(&mut buffer).map_err(unreadable)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    let hash = format!("{:x}", hasher.finalize());
    log::debug!("Calculated hash for {:?}: {}", path, hash);
    Ok(hash)
}
