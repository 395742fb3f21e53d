use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions accepted as image candidates, compared case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff"];

/// Lists the image files directly inside `dir` (non-recursive).
///
/// A file is a candidate when its extension, lowercased, is in
/// [`IMAGE_EXTENSIONS`]; each file is matched in a single pass, so case
/// variants are never double-counted. A missing directory yields zero
/// candidates rather than an error. Order is not guaranteed.
pub fn scan_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            files.push(path);
        }
    }
    Ok(files)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lowered.as_str())
        })
}
