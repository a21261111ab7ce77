// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout engine — places classified blocks onto fixed-size pages.
//
// A single cursor walks down the page. Before every line is drawn the cursor
// is checked against the break threshold (page height minus the bottom safe
// margin); past it, a new page is opened and the cursor returns to the top
// margin. Lines are never split mid-word, and a word wider than the page
// keeps a line to itself.
//
// Mixed bold/plain paragraphs wrap per run rather than per word: each run is
// drawn whole, so a run wider than the line overflows the right margin.

pub mod wrap;

use paperwright_core::{Align, DocumentKind, ExportConfig, FontSpec};
use tracing::debug;

use crate::canvas::TextMeasure;
use crate::classify::{Block, Run};
use crate::metrics::BULLET_GLYPH;
use crate::normalize::normalize;
use crate::page::{Page, RuleOp, TextOp};

pub use wrap::wrap_words;

/// Current drawing position and the page it is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
    pub page_index: usize,
}

/// Lay out a document: title, rule, then every block in order.
///
/// Pages come back without footers; run [`crate::finish::finish`] once this
/// returns.
pub fn layout<M: TextMeasure>(
    blocks: &[Block],
    config: &ExportConfig,
    measure: &M,
    file_name: &str,
    kind: DocumentKind,
) -> Vec<Page> {
    let mut session = LayoutSession::new(config, measure);
    session.place_title(&kind.title_for(file_name));
    for block in blocks {
        session.place_block(block);
    }
    session.into_pages()
}

/// One document's layout pass. Owns the cursor and the pages built so far.
pub struct LayoutSession<'a, M: TextMeasure> {
    config: &'a ExportConfig,
    measure: &'a M,
    cursor: LayoutCursor,
    pages: Vec<Page>,
}

impl<'a, M: TextMeasure> LayoutSession<'a, M> {
    pub fn new(config: &'a ExportConfig, measure: &'a M) -> Self {
        let margin = config.geometry.margin;
        Self {
            config,
            measure,
            cursor: LayoutCursor {
                x: margin,
                y: margin,
                page_index: 0,
            },
            pages: vec![Page::new()],
        }
    }

    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }

    /// Centered bold title followed by a full-width rule.
    pub fn place_title(&mut self, title: &str) {
        let geometry = self.config.geometry;
        let spacing = self.config.spacing;
        let font = self.config.typography.title();

        for line in self.wrap(&normalize(title), &font, geometry.max_width()) {
            self.break_if_needed();
            self.draw(line, geometry.page_width / 2.0, font, Align::Center);
            self.cursor.y += spacing.title_line_advance;
        }

        self.cursor.y += spacing.gap_before_rule;
        let y = self.cursor.y;
        self.current_page().push_rule(RuleOp {
            x1: geometry.margin,
            x2: geometry.page_width - geometry.margin,
            y,
            thickness: spacing.rule_thickness,
        });
        self.cursor.y += spacing.gap_after_rule;
    }

    pub fn place_block(&mut self, block: &Block) {
        self.break_if_needed();

        match block {
            Block::Header { text } => self.place_header(text),
            Block::Paragraph { text } => {
                self.place_paragraph(text, self.config.spacing.paragraph_trailing)
            }
            Block::Bullet { text } => self.place_bullet(text),
            Block::MixedRun { parts } => self.place_mixed(parts),
        }
    }

    fn place_header(&mut self, text: &str) {
        let geometry = self.config.geometry;
        let font = self.config.typography.header();

        self.cursor.y += self.config.spacing.header_lead;
        for line in self.wrap(text, &font, geometry.max_width()) {
            self.break_if_needed();
            self.draw(line, geometry.margin, font, Align::Left);
            self.cursor.y += geometry.line_height;
        }
        self.cursor.y += self.config.spacing.header_trailing;
    }

    fn place_paragraph(&mut self, text: &str, trailing: f32) {
        let geometry = self.config.geometry;
        let font = self.config.typography.body();

        for line in self.wrap(text, &font, geometry.max_width()) {
            self.break_if_needed();
            self.draw(line, geometry.margin, font, Align::Left);
            self.cursor.y += geometry.line_height;
        }
        self.cursor.y += trailing;
    }

    /// The glyph goes with the first line, and again with the first line on
    /// each page the item continues onto.
    fn place_bullet(&mut self, text: &str) {
        let geometry = self.config.geometry;
        let font = self.config.typography.body();
        let width = geometry.max_width() - geometry.bullet_indent;

        let mut glyph_pending = true;
        for line in self.wrap(text, &font, width) {
            if self.break_if_needed() {
                glyph_pending = true;
            }
            if glyph_pending {
                self.draw(BULLET_GLYPH.to_string(), geometry.margin, font, Align::Left);
                glyph_pending = false;
            }
            self.draw(line, geometry.margin + geometry.bullet_indent, font, Align::Left);
            self.cursor.y += geometry.line_height;
        }
        self.cursor.y += self.config.spacing.bullet_trailing;
    }

    fn place_mixed(&mut self, parts: &[Run]) {
        let spacing = self.config.spacing;

        if !parts.iter().any(|run| run.bold) {
            let joined = parts
                .iter()
                .map(|run| run.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            self.place_paragraph(&joined, spacing.mixed_trailing);
            return;
        }

        let geometry = self.config.geometry;
        let typography = self.config.typography;
        let mut line_open = false;
        self.cursor.x = geometry.margin;

        for run in parts {
            if self.break_if_needed() {
                line_open = false;
            }

            let text = run.text.trim();
            if text.is_empty() {
                continue;
            }
            let font = if run.bold {
                typography.body_bold()
            } else {
                typography.body()
            };
            let width = self.measure.measure_width(text, &font);
            let space = self.measure.measure_width(" ", &font);

            let line_width = self.cursor.x - geometry.margin;
            if line_open && line_width + space + width > geometry.max_width() {
                self.cursor.y += geometry.line_height;
                self.cursor.x = geometry.margin;
                line_open = false;
                self.break_if_needed();
            }

            if line_open {
                self.cursor.x += space;
            }
            let x = self.cursor.x;
            self.draw(text.to_string(), x, font, Align::Left);
            self.cursor.x += width;
            line_open = true;
        }

        self.cursor.x = geometry.margin;
        self.cursor.y += geometry.line_height + spacing.mixed_trailing;
    }

    /// Open a new page if the cursor has passed the break threshold.
    fn break_if_needed(&mut self) -> bool {
        if self.cursor.y <= self.config.geometry.break_threshold() {
            return false;
        }

        let margin = self.config.geometry.margin;
        self.pages.push(Page::new());
        self.cursor = LayoutCursor {
            x: margin,
            y: margin,
            page_index: self.pages.len() - 1,
        };
        debug!(page = self.cursor.page_index + 1, "Page break");
        true
    }

    fn current_page(&mut self) -> &mut Page {
        &mut self.pages[self.cursor.page_index]
    }

    fn draw(&mut self, text: String, x: f32, font: FontSpec, align: Align) {
        if text.is_empty() {
            return;
        }
        let y = self.cursor.y;
        self.current_page().push_text(TextOp {
            text,
            x,
            y,
            font,
            align,
        });
    }

    fn wrap(&self, text: &str, font: &FontSpec, max_width: f32) -> Vec<String> {
        wrap_words(self.measure, text, font, max_width)
    }
}
