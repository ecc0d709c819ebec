// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — decoding, RGBA normalisation, and WEBP encoding.

pub mod encoder;
pub mod processor;

pub use encoder::WebpSettings;
pub use processor::ImageProcessor;
