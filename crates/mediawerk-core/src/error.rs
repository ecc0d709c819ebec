// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for mediawerk.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all mediawerk operations.
#[derive(Debug, Error)]
pub enum MediawerkError {
    // -- Environment / configuration --
    #[error("WEBP encoder unavailable: {0}")]
    EncoderUnavailable(String),

    #[error("Folder not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("invalid WEBP settings: {0}")]
    InvalidSettings(String),

    // -- Per-file errors --
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to encode {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MediawerkError>;
