// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// mediawerk-convert — JPEG/PNG to WEBP conversion for the dish media folder.
//
// Provides image processing (decode, RGBA normalisation, lossy WEBP encoding),
// a non-recursive directory scan filtered by extension, and the batch
// converter that ties them together.

pub mod batch;
pub mod image;
pub mod scan;

pub use batch::BatchConverter;
pub use self::image::encoder::WebpSettings;
pub use self::image::processor::ImageProcessor;
