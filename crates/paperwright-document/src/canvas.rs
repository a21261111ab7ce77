// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The paged-canvas capability consumed by the pipeline.
//
// Layout only needs to measure text. Rendering replays finished pages onto
// any backend that can open a page, pick a font, draw text and draw a rule.

use paperwright_core::error::Result;
use paperwright_core::{Align, FontSpec};
use tracing::debug;

use crate::page::{DrawOp, Page, TextOp};

/// Measures rendered text width in millimetres.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32;
}

/// A paged drawing surface. Every primitive may fail; the assembler turns
/// such failures into a rendering failure with no partial output.
pub trait PagedCanvas: TextMeasure {
    /// Finished document produced by [`PagedCanvas::finish`].
    type Output;

    fn new_page(&mut self) -> Result<()>;

    fn set_font(&mut self, font: FontSpec) -> Result<()>;

    /// Draw in the current font with the anchor at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align) -> Result<()>;

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32, thickness: f32) -> Result<()>;

    fn finish(self) -> Result<Self::Output>;
}

/// Replay pages onto a canvas: content in order, footer last. Fonts are only
/// switched when they change.
pub fn render_pages<C: PagedCanvas>(pages: &[Page], mut canvas: C) -> Result<C::Output> {
    let mut current_font: Option<FontSpec> = None;

    for page in pages {
        canvas.new_page()?;

        for op in &page.ops {
            match op {
                DrawOp::Text(text) => draw(&mut canvas, text, &mut current_font)?,
                DrawOp::Rule(rule) => canvas.draw_rule(rule.x1, rule.x2, rule.y, rule.thickness)?,
            }
        }
        if let Some(footer) = &page.footer {
            draw(&mut canvas, footer, &mut current_font)?;
        }
    }

    debug!(pages = pages.len(), "Replayed pages onto canvas");
    canvas.finish()
}

fn draw<C: PagedCanvas>(canvas: &mut C, op: &TextOp, current: &mut Option<FontSpec>) -> Result<()> {
    if *current != Some(op.font) {
        canvas.set_font(op.font)?;
        *current = Some(op.font);
    }
    canvas.draw_text(&op.text, op.x, op.y, op.align)
}
