// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mediawerk — Core types, fixed configuration, and error definitions shared
// by the converter and the command-line entry point.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::ConverterConfig;
pub use error::MediawerkError;
pub use types::*;
