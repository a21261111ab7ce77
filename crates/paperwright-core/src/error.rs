// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Paperwright.

use thiserror::Error;

/// Top-level error type for all Paperwright operations.
#[derive(Debug, Error)]
pub enum PaperwrightError {
    // -- Request errors --
    /// Missing or empty content / file name. Raised before any pipeline stage runs.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    // -- Pipeline errors --
    /// Any fault during classification, layout or rendering. No partial
    /// document accompanies this error.
    #[error("rendering failed: {0}")]
    RenderingFailure(String),

    /// A paged-canvas drawing primitive failed.
    #[error("canvas backend error: {0}")]
    Backend(String),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PaperwrightError>;
