// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer — renders laid-out pages with `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Layout coordinates are millimetres from the top-left
// corner; PDF user space is points from the bottom-left, so `y` is flipped
// here and nowhere else. Text is shown through WinAnsi-encoded `Tj` operands
// (see `encoding.rs`).

use paperwright_core::error::{PaperwrightError, Result};
use paperwright_core::{Align, ExportConfig, FontFamily, FontSpec, FontWeight, PageGeometry};
use printpdf::{
    BuiltinFont, Line, LinePoint, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point,
    Pt,
};
use tracing::{debug, instrument, warn};

use super::encoding::show_text;
use crate::canvas::{PagedCanvas, TextMeasure};
use crate::metrics::StandardMetrics;

/// Map a font selection onto one of the builtin standard-14 faces.
fn builtin_font(font: &FontSpec) -> BuiltinFont {
    match (font.family, font.weight) {
        (FontFamily::Times, FontWeight::Normal) => BuiltinFont::TimesRoman,
        (FontFamily::Times, FontWeight::Bold) => BuiltinFont::TimesBold,
        (FontFamily::Helvetica, FontWeight::Normal) => BuiltinFont::Helvetica,
        (FontFamily::Helvetica, FontWeight::Bold) => BuiltinFont::HelveticaBold,
    }
}

/// A [`PagedCanvas`] that accumulates printpdf operations page by page.
pub struct PdfCanvas {
    geometry: PageGeometry,
    title: String,
    pages: Vec<Vec<Op>>,
    font: Option<FontSpec>,
}

impl PdfCanvas {
    pub fn new(geometry: PageGeometry, title: impl Into<String>) -> Self {
        Self {
            geometry,
            title: title.into(),
            pages: Vec::new(),
            font: None,
        }
    }

    fn ops(&mut self) -> Result<&mut Vec<Op>> {
        self.pages
            .last_mut()
            .ok_or_else(|| PaperwrightError::Backend("drawing before the first page".into()))
    }

    /// Top-down millimetres to bottom-up points.
    fn point(&self, x_mm: f32, y_mm: f32) -> Point {
        Point {
            x: Mm(x_mm).into_pt(),
            y: Mm(self.geometry.page_height - y_mm).into_pt(),
        }
    }
}

impl TextMeasure for PdfCanvas {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        StandardMetrics.measure_width(text, font)
    }
}

impl PagedCanvas for PdfCanvas {
    type Output = Vec<u8>;

    fn new_page(&mut self) -> Result<()> {
        self.pages.push(Vec::new());
        Ok(())
    }

    fn set_font(&mut self, font: FontSpec) -> Result<()> {
        if !(font.size.is_finite() && font.size > 0.0) {
            return Err(PaperwrightError::Backend(format!(
                "invalid font size {}",
                font.size
            )));
        }
        self.font = Some(font);
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: Align) -> Result<()> {
        let font = self
            .font
            .ok_or_else(|| PaperwrightError::Backend("no font selected".into()))?;

        let width = self.measure_width(text, &font);
        let left = match align {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        };
        let pos = self.point(left, y);
        let builtin = builtin_font(&font);

        let ops = self.ops()?;
        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextCursor { pos });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(font.size),
            font: builtin,
        });
        // Registers the face in the font resources; draws nothing.
        ops.push(Op::WriteTextBuiltinFont {
            items: Vec::new(),
            font: builtin,
        });
        ops.push(show_text(text));
        ops.push(Op::EndTextSection);
        Ok(())
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32, thickness: f32) -> Result<()> {
        let start = self.point(x1, y);
        let end = self.point(x2, y);

        let ops = self.ops()?;
        ops.push(Op::SetOutlineThickness {
            pt: Mm(thickness).into_pt(),
        });
        ops.push(Op::DrawLine {
            line: Line {
                points: vec![
                    LinePoint {
                        p: start,
                        bezier: false,
                    },
                    LinePoint { p: end, bezier: false },
                ],
                is_closed: false,
            },
        });
        Ok(())
    }

    #[instrument(skip(self), fields(pages = self.pages.len()))]
    fn finish(self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(PaperwrightError::Backend("document has no pages".into()));
        }

        let page_w = Mm(self.geometry.page_width);
        let page_h = Mm(self.geometry.page_height);
        let pages: Vec<PdfPage> = self
            .pages
            .into_iter()
            .map(|ops| PdfPage::new(page_w, page_h, ops))
            .collect();

        let mut doc = PdfDocument::new(&self.title);
        doc.with_pages(pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&save_options(), &mut warnings);
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "printpdf reported warnings while saving");
        }
        debug!(bytes = output.len(), "PDF serialised");

        Ok(output)
    }
}

/// Raw `Tj` operators must survive serialisation.
fn save_options() -> PdfSaveOptions {
    PdfSaveOptions {
        secure: false,
        ..PdfSaveOptions::default()
    }
}

/// Builds PDF canvases for one page size and title.
pub struct PdfWriter {
    /// Page size the layout was computed for.
    geometry: PageGeometry,
    /// Title metadata embedded in the PDF /Info dictionary.
    title: Option<String>,
}

impl PdfWriter {
    /// Create a writer for pages laid out with `config`.
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            geometry: config.geometry,
            title: None,
        }
    }

    /// Set a title for the PDF metadata.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// A fresh canvas for this writer's page size and title.
    pub fn canvas(&self) -> PdfCanvas {
        let title = self.title.as_deref().unwrap_or("Paperwright Document");
        PdfCanvas::new(self.geometry, title)
    }
}
