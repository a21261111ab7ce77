// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paperwright — Core types, configuration and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod human_errors;
pub mod types;

pub use config::{ExportConfig, PageGeometry, Spacing, Typography};
pub use error::PaperwrightError;
pub use human_errors::{HumanError, humanize_error};
pub use types::*;
