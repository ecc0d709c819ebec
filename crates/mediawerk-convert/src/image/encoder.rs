// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Lossy WEBP encoding through libwebp (the `webp` crate).

use std::path::Path;

use image::RgbaImage;
use mediawerk_core::config::{ConverterConfig, WEBP_METHOD, WEBP_QUALITY};
use mediawerk_core::error::{MediawerkError, Result};
use tracing::debug;
use webp::{Encoder, WebPConfig};

/// Quality and effort passed to libwebp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebpSettings {
    /// 0 (smallest) to 100 (best).
    pub quality: f32,
    /// 0 (fastest) to 6 (smallest output).
    pub method: i32,
}

impl Default for WebpSettings {
    fn default() -> Self {
        Self {
            quality: WEBP_QUALITY,
            method: WEBP_METHOD,
        }
    }
}

impl WebpSettings {
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            quality: config.quality,
            method: config.method,
        }
    }

    /// Reject values libwebp would refuse.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(MediawerkError::InvalidSettings(format!(
                "quality {} outside 0-100",
                self.quality
            )));
        }
        if !(0..=6).contains(&self.method) {
            return Err(MediawerkError::InvalidSettings(format!(
                "method {} outside 0-6",
                self.method
            )));
        }
        Ok(())
    }

    /// Build the libwebp configuration for these settings.
    ///
    /// Fails with `EncoderUnavailable` when libwebp cannot initialise a
    /// config, which happens on an ABI/version mismatch with the linked
    /// library.
    pub fn to_webp_config(&self) -> Result<WebPConfig> {
        self.validate()?;
        let mut config = WebPConfig::new().map_err(|_| {
            MediawerkError::EncoderUnavailable("WebPConfigInit failed".into())
        })?;
        config.lossless = 0;
        config.quality = self.quality;
        config.method = self.method;
        Ok(config)
    }

    /// Encode an RGBA buffer. The alpha plane is kept as-is.
    ///
    /// `origin` names the source in an `Encode` error.
    pub fn encode_rgba(&self, rgba: &RgbaImage, origin: &Path) -> Result<Vec<u8>> {
        let config = self.to_webp_config()?;
        let (width, height) = rgba.dimensions();
        let encoded = Encoder::from_rgba(rgba.as_raw(), width, height)
            .encode_advanced(&config)
            .map_err(|err| MediawerkError::Encode {
                path: origin.to_path_buf(),
                reason: format!("{err:?}"),
            })?;
        debug!(width, height, bytes = encoded.len(), "WEBP encoded");
        Ok(encoded.to_vec())
    }
}

/// Check once at startup that libwebp can be configured.
pub fn encoder_available() -> Result<()> {
    WebpSettings::default().to_webp_config().map(|_| ())
}
