// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF backend — a paged canvas over printpdf's builtin fonts.

pub mod encoding;
pub mod writer;

pub use writer::{PdfCanvas, PdfWriter};
