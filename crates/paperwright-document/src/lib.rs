// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// paperwright-document — The export pipeline.
//
// Sanitises loosely-structured text, classifies it into headers, paragraphs,
// bullets and mixed bold/plain runs, lays those onto fixed-size pages with
// word wrap and automatic page breaks, stamps "Page X of N" footers, and
// renders the result through a paged canvas (printpdf by default).

pub mod assemble;
pub mod canvas;
pub mod classify;
pub mod finish;
pub mod layout;
pub mod metrics;
pub mod normalize;
pub mod page;
pub mod pdf;
pub mod sanitize;

// Re-export the primary items so callers can use `paperwright_document::DocumentAssembler` etc.
pub use assemble::{DocumentAssembler, Rendered};
pub use canvas::{PagedCanvas, TextMeasure, render_pages};
pub use classify::{Block, Run, classify};
pub use finish::finish;
pub use layout::{LayoutCursor, LayoutSession, layout};
pub use metrics::StandardMetrics;
pub use normalize::normalize;
pub use page::{DrawOp, Page, RuleOp, TextOp};
pub use pdf::{PdfCanvas, PdfWriter};
pub use sanitize::sanitize;
