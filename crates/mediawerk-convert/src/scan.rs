// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Non-recursive scan of the target folder for convertible images.

use std::path::{Path, PathBuf};

use mediawerk_core::SourceFormat;
use mediawerk_core::error::{MediawerkError, Result};
use tracing::{debug, trace};

/// List the direct children of `dir` that carry a JPEG or PNG extension.
///
/// Entries come back in the order the filesystem yields them. Subdirectories
/// are skipped even when their name ends in an image extension.
pub fn source_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(MediawerkError::TargetNotFound(dir.to_path_buf()));
    }

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            trace!(path = %path.display(), "skipping subdirectory");
            continue;
        }
        match SourceFormat::from_path(&path) {
            Some(format) => {
                trace!(path = %path.display(), %format, "source file");
                sources.push(path);
            }
            None => trace!(path = %path.display(), "skipping non-image"),
        }
    }

    debug!(dir = %dir.display(), count = sources.len(), "scan complete");
    Ok(sources)
}

/// Sibling path with the extension swapped: `tasting/a.jpg` -> `tasting/a.webp`.
pub fn output_path_for(source: &Path, extension: &str) -> PathBuf {
    source.with_extension(extension)
}
