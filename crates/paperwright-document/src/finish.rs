// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pagination finisher — stamps "Page X of N" on every page.
//
// Runs strictly after layout: N is unknown until every page exists.

use paperwright_core::{Align, ExportConfig};
use tracing::info;

use crate::page::{Page, TextOp};

/// Write one right-aligned footer per page. Any existing footer is replaced,
/// so each page always ends up with exactly one.
pub fn finish(mut pages: Vec<Page>, config: &ExportConfig) -> Vec<Page> {
    let total = pages.len();
    let geometry = config.geometry;
    let x = geometry.page_width - geometry.margin;
    let y = geometry.page_height - config.spacing.footer_offset;
    let font = config.typography.footer();

    for (index, page) in pages.iter_mut().enumerate() {
        page.footer = Some(TextOp {
            text: format!("Page {} of {}", index + 1, total),
            x,
            y,
            font,
            align: Align::Right,
        });
    }

    info!(total_pages = total, "Pagination finished");
    pages
}
