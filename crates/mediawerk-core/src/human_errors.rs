// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable diagnostics for the command-line entry point.
//
// Every error maps to the one line printed to the console, a follow-up
// suggestion for the log, and the process exit status.

use crate::error::MediawerkError;

/// Instruction printed when the WEBP codec cannot be used.
pub const ENCODER_MISSING_MESSAGE: &str =
    "Missing WEBP encoder support. Rebuild mediawerk with the bundled libwebp (the `webp` crate).";

/// Where in the run an error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Before any work: the codec is unusable.
    Environment,
    /// Before iteration: the target folder is missing or settings are wrong.
    Configuration,
    /// While converting a file. Earlier outputs are already written.
    Conversion,
}

/// A console diagnostic with an exit status.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// The single line shown to the user.
    pub message: String,
    /// What to try next (logged, not printed).
    pub suggestion: String,
    pub stage: Stage,
    /// Process exit status for this failure.
    pub exit_code: u8,
}

/// Convert a `MediawerkError` into the diagnostic shown by the binary.
pub fn humanize_error(err: &MediawerkError) -> HumanError {
    match err {
        MediawerkError::EncoderUnavailable(detail) => HumanError {
            message: ENCODER_MISSING_MESSAGE.into(),
            suggestion: format!("libwebp reported: {detail}"),
            stage: Stage::Environment,
            exit_code: 1,
        },

        MediawerkError::TargetNotFound(_) => HumanError {
            message: err.to_string(),
            suggestion: "Create the folder or run the tool from its install location.".into(),
            stage: Stage::Configuration,
            exit_code: 1,
        },

        MediawerkError::InvalidSettings(_) => HumanError {
            message: err.to_string(),
            suggestion: "Quality must be 0-100 and method 0-6.".into(),
            stage: Stage::Configuration,
            exit_code: 1,
        },

        MediawerkError::Decode { .. } => HumanError {
            message: err.to_string(),
            suggestion: "The file is not a readable JPEG or PNG. Replace or remove it and run again."
                .into(),
            stage: Stage::Conversion,
            exit_code: 1,
        },

        MediawerkError::Encode { .. } => HumanError {
            message: err.to_string(),
            suggestion: "libwebp rejected the image. Check its dimensions (max 16383x16383).".into(),
            stage: Stage::Conversion,
            exit_code: 1,
        },

        MediawerkError::Io(_) => HumanError {
            message: err.to_string(),
            suggestion: "Check that the folder is readable and writable.".into(),
            stage: Stage::Conversion,
            exit_code: 1,
        },
    }
}
