// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Positioned draw instructions, partitioned into pages.
//
// Coordinates are millimetres from the top-left page corner; `y` is the text
// baseline. Backends flip the axis as needed.

use paperwright_core::{Align, FontSpec};
use serde::Serialize;

/// Place `text` with its anchor at (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOp {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font: FontSpec,
    pub align: Align,
}

/// Horizontal rule from `x1` to `x2` at height `y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleOp {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub thickness: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DrawOp {
    Text(TextOp),
    Rule(RuleOp),
}

/// One page of content. The footer is written by the pagination finisher
/// once the page total is known.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub ops: Vec<DrawOp>,
    pub footer: Option<TextOp>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, op: TextOp) {
        self.ops.push(DrawOp::Text(op));
    }

    pub fn push_rule(&mut self, op: RuleOp) {
        self.ops.push(DrawOp::Rule(op));
    }

    /// Content text instructions, footer excluded.
    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            DrawOp::Rule(_) => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
