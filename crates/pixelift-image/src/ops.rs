// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bytes-in/bytes-out convenience operations: decode, run the pipeline,
// re-encode. The quality factors applied here are orchestration policy
// carried in the configuration, not pipeline behaviour.

use pixelift_core::error::Result;
use pixelift_core::{EnhanceConfig, OutputFormat};
use tracing::{info, instrument};

use crate::codec;
use crate::enhance::EnhancementPipeline;

/// Decode `data`, upscale it towards 4K with the full enhancement
/// chain, and encode the result as JPEG at the configured upscale
/// quality (0.95 by default).
#[instrument(skip(data, config), fields(data_len = data.len()))]
pub fn upscale_to_4k(data: &[u8], config: &EnhanceConfig) -> Result<Vec<u8>> {
    let source = codec::decode(data)?;
    let pipeline = EnhancementPipeline::new(config.clone());

    let enhanced = pipeline.upscale(&source)?;
    info!(to = %enhanced.dimensions(), "upscale complete, encoding");
    codec::encode(&enhanced, OutputFormat::Jpeg, config.upscale_quality)
}

/// Decode `data`, resample it to exactly `width` x `height`, and encode
/// as JPEG at the configured resize quality (0.90 by default).
///
/// No sharpening or colour stage runs on this path. Aspect-ratio
/// locking, if wanted, is the caller's business — both axes are taken
/// literally.
#[instrument(skip(data, config), fields(data_len = data.len(), width, height))]
pub fn resize_custom(
    data: &[u8],
    width: u32,
    height: u32,
    config: &EnhanceConfig,
) -> Result<Vec<u8>> {
    let source = codec::decode(data)?;
    let pipeline = EnhancementPipeline::new(config.clone());

    let resized = pipeline.resize(&source, width, height)?;
    info!(to = %resized.dimensions(), "resize complete, encoding");
    codec::encode(&resized, OutputFormat::Jpeg, config.resize_quality)
}
