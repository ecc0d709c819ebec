// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Converter configuration. Everything here is fixed at build time; there is no
// configuration file, flag, or environment variable that changes it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Path of the dish media folder, relative to the install root.
pub const TARGET_SUBPATH: [&str; 5] = ["server", "public", "media", "dishes", "tasting"];

/// Extension given to every output file.
pub const OUTPUT_EXTENSION: &str = "webp";

/// Lossy WEBP quality on libwebp's 0-100 scale.
pub const WEBP_QUALITY: f32 = 88.0;

/// libwebp compression method. 6 is the slowest and smallest.
pub const WEBP_METHOD: i32 = 6;

/// Settings for one batch conversion run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Folder whose direct children are converted.
    pub target_dir: PathBuf,
    /// WEBP quality (0-100).
    pub quality: f32,
    /// WEBP compression effort (0-6).
    pub method: i32,
    /// Extension written in place of the source extension.
    pub output_extension: String,
}

impl ConverterConfig {
    /// Fixed configuration for a given install root.
    pub fn for_install_root(root: impl AsRef<Path>) -> Self {
        let target_dir = TARGET_SUBPATH
            .iter()
            .fold(root.as_ref().to_path_buf(), |dir, part| dir.join(part));
        Self::for_target_dir(target_dir)
    }

    /// Fixed quality and effort, pointed at an explicit folder.
    pub fn for_target_dir(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            quality: WEBP_QUALITY,
            method: WEBP_METHOD,
            output_extension: OUTPUT_EXTENSION.to_owned(),
        }
    }
}

/// Install root for an executable: two levels up from the binary itself.
///
/// `<root>/tools/convert-tasting-webp` resolves to `<root>`. Returns `None`
/// when the executable sits too close to the filesystem root.
pub fn install_root_for(executable: &Path) -> Option<&Path> {
    executable.parent()?.parent()
}
