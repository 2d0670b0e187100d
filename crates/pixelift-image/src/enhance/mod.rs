// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Enhancement stages — resampling, convolution sharpening, colour
// boosting — and the pipeline that sequences them.

pub mod color;
pub mod pipeline;
pub mod resample;
pub mod sharpen;

pub use pipeline::EnhancementPipeline;
