// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Paperwright export pipeline.

use serde::{Deserialize, Serialize};

/// Whether the exported document is the original text or a translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Original,
    Translated,
}

impl DocumentKind {
    /// Title shown at the top of the first page.
    pub fn title_for(&self, file_name: &str) -> String {
        match self {
            Self::Original => file_name.to_string(),
            Self::Translated => format!("Translated Document: {file_name}"),
        }
    }
}

/// One export request: raw content plus the name used for the title and output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    // Missing fields deserialise empty so validation reports them as client errors.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default, rename = "type")]
    pub kind: DocumentKind,
}

impl ExportRequest {
    pub fn new(content: impl Into<String>, file_name: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            content: content.into(),
            file_name: file_name.into(),
            kind,
        }
    }

    /// Title text before normalisation.
    pub fn title(&self) -> String {
        self.kind.title_for(self.file_name.trim())
    }
}

/// A finished export: the paged-document bytes and how to deliver them.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// Suggested download name, `{fileName}.pdf`.
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

impl ExportedDocument {
    pub const PDF_CONTENT_TYPE: &'static str = "application/pdf";

    pub fn pdf(file_name: &str, bytes: Vec<u8>, page_count: usize) -> Self {
        Self {
            file_name: format!("{file_name}.pdf"),
            content_type: Self::PDF_CONTENT_TYPE,
            bytes,
            page_count,
        }
    }

    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    Legal,
    Custom { width_mm: u32, height_mm: u32 },
}

impl PaperSize {
    /// Dimensions in millimetres (width, height).
    pub fn dimensions_mm(&self) -> (u32, u32) {
        match self {
            Self::A4 => (210, 297),
            Self::A3 => (297, 420),
            Self::A5 => (148, 210),
            Self::Letter => (216, 279),
            Self::Legal => (216, 356),
            Self::Custom {
                width_mm,
                height_mm,
            } => (*width_mm, *height_mm),
        }
    }
}

/// Typeface family. Only the standard-14 faces are supported, so no font
/// files are embedded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Times,
    Helvetica,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font selection for one draw instruction. Size is in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: FontFamily,
    pub weight: FontWeight,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: FontFamily, weight: FontWeight, size: f32) -> Self {
        Self {
            family,
            weight,
            size,
        }
    }

    pub fn normal(family: FontFamily, size: f32) -> Self {
        Self::new(family, FontWeight::Normal, size)
    }

    pub fn bold(family: FontFamily, size: f32) -> Self {
        Self::new(family, FontWeight::Bold, size)
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

/// Horizontal anchor of a text instruction's `x` coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
