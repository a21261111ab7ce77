// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Block classifier — splits sanitised text into paragraphs and decides what
// each one is: header, body paragraph, bullet item, or a run of mixed
// bold/plain text.
//
// Classification is heuristic. Legal prose produces the occasional false
// header; that is accepted behaviour, not a defect.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::normalize::normalize;

/// A contiguous styled fragment of a mixed paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One classified unit of document content, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Header { text: String },
    Paragraph { text: String },
    Bullet { text: String },
    #[serde(rename = "mixed")]
    MixedRun { parts: Vec<Run> },
}

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[•*]\s+").unwrap());
static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());
static BOLD_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]*\*\*").unwrap());

static NUMBERED_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s+[A-Z]").unwrap());
static CAPS_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z\s]{10,}[A-Z]$").unwrap());
static COLON_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][^.]*:$").unwrap());
static SECTION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(LEGAL NOTICE|NOTICE|WHEREAS|THEREFORE|JURISDICTION|PURPOSE|PARTIES|REMEDY|GOVERNING|DISCLAIMER|WITNESS|SIGNATURE|ANNEXURE|NOTE|FOR THE ISSUER)",
    )
    .unwrap()
});
static CAPS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z\s]+[A-Z]:?\s*$").unwrap());

/// Classify sanitised text into an ordered block list.
///
/// Pure and deterministic: the same input always yields the same blocks.
pub fn classify(sanitized: &str) -> Vec<Block> {
    let blocks: Vec<Block> = PARAGRAPH_BREAK
        .split(sanitized)
        .filter_map(classify_paragraph)
        .collect();

    debug!(
        blocks = blocks.len(),
        headers = blocks.iter().filter(|b| matches!(b, Block::Header { .. })).count(),
        bullets = blocks.iter().filter(|b| matches!(b, Block::Bullet { .. })).count(),
        mixed = blocks.iter().filter(|b| matches!(b, Block::MixedRun { .. })).count(),
        "Classified content"
    );

    blocks
}

fn classify_paragraph(paragraph: &str) -> Option<Block> {
    let trimmed = paragraph.trim();
    if trimmed.is_empty() {
        return None;
    }

    let starts_with_bullet = BULLET_MARKER.is_match(trimmed);
    let body = BULLET_MARKER.replace(trimmed, "");
    let body = body.trim();
    let has_bold = BOLD_SPAN.is_match(body);

    match (starts_with_bullet, has_bold) {
        (true, false) => Some(Block::Bullet {
            text: normalize(body),
        }),
        (_, true) => {
            let parts = split_bold_runs(body);
            if parts.is_empty() {
                return None;
            }
            if starts_with_bullet {
                // Bullets carry a single plain string, so bold styling is dropped here.
                let text = parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(Block::Bullet { text })
            } else {
                Some(Block::MixedRun { parts })
            }
        }
        (false, false) => {
            let text = normalize(body);
            if is_header_line(&text) {
                Some(Block::Header { text })
            } else {
                Some(Block::Paragraph { text })
            }
        }
    }
}

/// Split on `**...**` delimiters into alternating plain/bold runs, keeping
/// reading order. Segments that are empty after normalising are dropped.
fn split_bold_runs(text: &str) -> Vec<Run> {
    let mut parts = Vec::new();
    let mut push = |segment: &str, bold: bool| {
        let segment = segment.trim();
        if segment.is_empty() {
            return;
        }
        let normalized = normalize(segment);
        if !normalized.is_empty() {
            parts.push(Run {
                text: normalized,
                bold,
            });
        }
    };

    let mut last = 0;
    for m in BOLD_SEGMENT.find_iter(text) {
        push(&text[last..m.start()], false);
        let inner = &m.as_str()[2..m.as_str().len() - 2];
        push(inner, true);
        last = m.end();
    }
    push(&text[last..], false);

    parts
}

/// Header heuristic over a normalised line.
pub fn is_header_line(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    if len <= 5 || len >= 100 {
        return false;
    }

    NUMBERED_HEADING.is_match(line)
        || CAPS_RUN.is_match(line)
        || COLON_LABEL.is_match(line)
        || SECTION_KEYWORD.is_match(line)
        || CAPS_LINE.is_match(line)
}
