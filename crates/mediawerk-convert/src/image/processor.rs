// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — decode a JPEG/PNG, normalise it to RGBA, and encode it as
// lossy WEBP. Operates on in-memory images using the `image` and `webp`
// crates.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use mediawerk_core::error::{MediawerkError, Result};
use tracing::{debug, info, instrument};

use super::encoder::WebpSettings;

/// Conversion pipeline for a single in-memory image.
///
/// ```ignore
/// let webp = ImageProcessor::open("tart.jpg")?
///     .to_webp_bytes(&WebpSettings::default())?;
/// ```
pub struct ImageProcessor {
    /// Always 4-channel 8-bit RGBA.
    image: RgbaImage,
    /// Where the image came from, for error messages.
    origin: PathBuf,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load and decode an image file.
    ///
    /// The format is detected from the file contents. Read failures surface as
    /// `Io`, undecodable data as `Decode`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let processor = Self::decode(&bytes, path)?;
        info!(
            width = processor.width(),
            height = processor.height(),
            "Image loaded"
        );
        Ok(processor)
    }

    /// Create a processor from raw encoded bytes (JPEG, PNG).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let processor = Self::decode(data, Path::new("<memory>"))?;
        debug!(
            width = processor.width(),
            height = processor.height(),
            "Image decoded from bytes"
        );
        Ok(processor)
    }

    /// Wrap an already-decoded `DynamicImage`, normalising it to RGBA.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: normalise_rgba(image),
            origin: PathBuf::from("<memory>"),
        }
    }

    fn decode(data: &[u8], origin: &Path) -> Result<Self> {
        let decoded = image::load_from_memory(data).map_err(|err| MediawerkError::Decode {
            path: origin.to_path_buf(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            image: normalise_rgba(decoded),
            origin: origin.to_path_buf(),
        })
    }

    // -- Accessors ------------------------------------------------------------

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the image as lossy WEBP with the given settings.
    pub fn to_webp_bytes(&self, settings: &WebpSettings) -> Result<Vec<u8>> {
        settings.encode_rgba(&self.image, &self.origin)
    }
}

/// Force 4-channel RGBA. Sources without alpha get an opaque channel; sources
/// with alpha keep it.
fn normalise_rgba(image: DynamicImage) -> RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}
