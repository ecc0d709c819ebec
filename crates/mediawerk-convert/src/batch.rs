// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch converter — one linear pass over the target folder.
//
// Files are converted one at a time in listing order. The first failure ends
// the run: outputs written before it stay on disk, later sources are left
// untouched.

use std::io::Write;
use std::path::Path;

use mediawerk_core::error::{MediawerkError, Result};
use mediawerk_core::{Conversion, ConverterConfig, RunSummary, SourceFormat};
use tracing::{info, instrument};

use crate::image::encoder::{WebpSettings, encoder_available};
use crate::image::processor::ImageProcessor;
use crate::scan;

/// Converts every JPEG/PNG directly under the configured folder to WEBP.
#[derive(Debug, Clone)]
pub struct BatchConverter {
    config: ConverterConfig,
    settings: WebpSettings,
}

impl BatchConverter {
    /// Check the encoder and settings before any filesystem work.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        encoder_available()?;
        let settings = WebpSettings::from_config(&config);
        settings.validate()?;
        Ok(Self { config, settings })
    }

    /// Run the batch, printing one progress line per file to stdout.
    pub fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        self.run_with_output(&mut stdout.lock())
    }

    /// Run the batch, writing progress lines to `out`.
    #[instrument(skip_all, fields(dir = %self.config.target_dir.display()))]
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let sources = scan::source_files(&self.config.target_dir)?;
        info!(count = sources.len(), "converting sources");

        let mut summary = RunSummary::default();
        for source in &sources {
            let conversion = self.convert_one(source)?;
            writeln!(out, "{conversion}")?;
            summary.conversions.push(conversion);
        }

        info!(converted = summary.converted(), "batch complete");
        Ok(summary)
    }

    /// Convert a single source file into its `.webp` sibling.
    ///
    /// An existing file at the output path is overwritten.
    #[instrument(skip_all, fields(source = %source.display()))]
    pub fn convert_one(&self, source: &Path) -> Result<Conversion> {
        let format = SourceFormat::from_path(source).ok_or_else(|| MediawerkError::Decode {
            path: source.to_path_buf(),
            reason: "extension is not .jpg, .jpeg or .png".into(),
        })?;
        let output = scan::output_path_for(source, &self.config.output_extension);

        let processor = ImageProcessor::open(source)?;
        let (width, height) = (processor.width(), processor.height());
        let encoded = processor.to_webp_bytes(&self.settings)?;
        drop(processor);

        std::fs::write(&output, &encoded)?;
        info!(
            output = %output.display(),
            bytes = encoded.len(),
            "WEBP written"
        );

        Ok(Conversion {
            source: source.to_path_buf(),
            output,
            format,
            width,
            height,
            encoded_len: encoded.len(),
        })
    }
}
