// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Export configuration: page geometry, typography and vertical spacing.
//
// All lengths are millimetres measured from the top-left corner of the page;
// font sizes are points.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PaperwrightError, Result};
use crate::types::{FontFamily, FontSpec, PaperSize};

/// Fixed page geometry for a whole document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub line_height: f32,
    pub bullet_indent: f32,
    /// Distance from the page bottom below which no content line may start.
    pub bottom_safe_margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::for_paper(PaperSize::A4)
    }
}

impl PageGeometry {
    /// Default margins and leading on the given paper.
    pub fn for_paper(paper: PaperSize) -> Self {
        let (w, h) = paper.dimensions_mm();
        Self {
            page_width: w as f32,
            page_height: h as f32,
            margin: 15.0,
            line_height: 5.0,
            bullet_indent: 5.0,
            bottom_safe_margin: 30.0,
        }
    }

    /// Printable line width between the left and right margins.
    pub fn max_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// A line whose baseline would sit below this `y` starts a new page.
    pub fn break_threshold(&self) -> f32 {
        self.page_height - self.bottom_safe_margin
    }
}

/// Font family and point sizes for each kind of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub family: FontFamily,
    pub title_size: f32,
    pub header_size: f32,
    pub body_size: f32,
    pub footer_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            family: FontFamily::Times,
            title_size: 12.0,
            header_size: 11.0,
            body_size: 10.0,
            footer_size: 9.0,
        }
    }
}

impl Typography {
    pub fn title(&self) -> FontSpec {
        FontSpec::bold(self.family, self.title_size)
    }

    pub fn header(&self) -> FontSpec {
        FontSpec::bold(self.family, self.header_size)
    }

    pub fn body(&self) -> FontSpec {
        FontSpec::normal(self.family, self.body_size)
    }

    pub fn body_bold(&self) -> FontSpec {
        FontSpec::bold(self.family, self.body_size)
    }

    pub fn footer(&self) -> FontSpec {
        FontSpec::normal(self.family, self.footer_size)
    }
}

/// Vertical gaps around blocks, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Advance per wrapped title line.
    pub title_line_advance: f32,
    pub gap_before_rule: f32,
    pub rule_thickness: f32,
    pub gap_after_rule: f32,
    /// Extra space above a header block.
    pub header_lead: f32,
    pub header_trailing: f32,
    pub paragraph_trailing: f32,
    pub mixed_trailing: f32,
    pub bullet_trailing: f32,
    /// Footer baseline distance from the page bottom.
    pub footer_offset: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            title_line_advance: 6.0,
            gap_before_rule: 3.0,
            rule_thickness: 0.5,
            gap_after_rule: 8.0,
            header_lead: 3.0,
            header_trailing: 2.0,
            paragraph_trailing: 3.0,
            mixed_trailing: 3.0,
            bullet_trailing: 2.0,
            footer_offset: 8.0,
        }
    }
}

/// Everything the export pipeline needs besides the request itself.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub geometry: PageGeometry,
    pub typography: Typography,
    pub spacing: Spacing,
}

impl ExportConfig {
    /// Defaults sized for the given paper.
    pub fn for_paper(paper: PaperSize) -> Self {
        Self {
            geometry: PageGeometry::for_paper(paper),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration over the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Reject non-finite lengths and geometry that leaves no room to lay out a line.
    pub fn validate(&self) -> Result<()> {
        let g = &self.geometry;
        let t = &self.typography;

        let lengths = [
            ("page_width", g.page_width),
            ("page_height", g.page_height),
            ("line_height", g.line_height),
            ("title_size", t.title_size),
            ("header_size", t.header_size),
            ("body_size", t.body_size),
            ("footer_size", t.footer_size),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value > 0.0) {
                return Err(PaperwrightError::Config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let sp = &self.spacing;
        let offsets = [
            ("margin", g.margin),
            ("bullet_indent", g.bullet_indent),
            ("bottom_safe_margin", g.bottom_safe_margin),
            ("title_line_advance", sp.title_line_advance),
            ("gap_before_rule", sp.gap_before_rule),
            ("rule_thickness", sp.rule_thickness),
            ("gap_after_rule", sp.gap_after_rule),
            ("header_lead", sp.header_lead),
            ("header_trailing", sp.header_trailing),
            ("paragraph_trailing", sp.paragraph_trailing),
            ("mixed_trailing", sp.mixed_trailing),
            ("bullet_trailing", sp.bullet_trailing),
            ("footer_offset", sp.footer_offset),
        ];
        for (name, value) in offsets {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PaperwrightError::Config(format!(
                    "{name} must be a non-negative length, got {value}"
                )));
            }
        }
        if g.max_width() <= g.bullet_indent {
            return Err(PaperwrightError::Config(format!(
                "margin {} leaves no printable width on a {}mm page",
                g.margin, g.page_width
            )));
        }
        if g.break_threshold() <= g.margin {
            return Err(PaperwrightError::Config(format!(
                "bottom safe margin {} leaves no printable height on a {}mm page",
                g.bottom_safe_margin, g.page_height
            )));
        }
        Ok(())
    }
}
