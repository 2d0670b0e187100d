// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixelift — Core types, configuration, and error definitions shared across crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::EnhanceConfig;
pub use error::PixeliftError;
pub use types::*;
