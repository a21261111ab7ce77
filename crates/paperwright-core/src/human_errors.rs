// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Caller-facing failure responses.
//
// Every error is mapped to either a client error (the request itself is
// wrong) or a generic server error. Internal details of rendering faults are
// never exposed; they are logged where they occur.

use serde::Serialize;

use crate::error::PaperwrightError;

/// Status code for a request the caller must fix.
pub const STATUS_CLIENT_ERROR: u16 = 400;
/// Status code for any internal failure.
pub const STATUS_SERVER_ERROR: u16 = 500;

/// A response-shaped error: status code plus a message safe to show a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HumanError {
    /// HTTP-style status code (400 or 500).
    pub status: u16,
    /// Message shown to the caller.
    pub message: String,
    /// Export is deterministic, so retrying the same input never helps.
    pub retriable: bool,
}

impl HumanError {
    pub fn is_client_error(&self) -> bool {
        self.status == STATUS_CLIENT_ERROR
    }
}

/// Convert a `PaperwrightError` into the response a caller receives.
pub fn humanize_error(err: &PaperwrightError) -> HumanError {
    match err {
        PaperwrightError::InvalidInput(detail) => HumanError {
            status: STATUS_CLIENT_ERROR,
            message: if detail.is_empty() {
                "Content and fileName are required".into()
            } else {
                format!("Content and fileName are required ({detail})")
            },
            retriable: false,
        },

        PaperwrightError::RenderingFailure(_)
        | PaperwrightError::Config(_)
        | PaperwrightError::Backend(_)
        | PaperwrightError::Io(_)
        | PaperwrightError::Serialization(_) => HumanError {
            status: STATUS_SERVER_ERROR,
            message: "Failed to generate PDF. Please try again.".into(),
            retriable: false,
        },
    }
}
