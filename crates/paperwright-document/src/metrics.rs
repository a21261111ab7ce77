// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Glyph advance widths for the standard-14 faces used by the PDF backend.
//
// Widths are the Adobe AFM values in 1/1000 em for printable ASCII under
// WinAnsiEncoding. Word wrap and alignment both measure through this table,
// so the layout and the rendered PDF agree on every line break.

use paperwright_core::{FontFamily, FontSpec, FontWeight};

use crate::canvas::TextMeasure;

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Glyph drawn in front of bullet items.
pub const BULLET_GLYPH: &str = "\u{2022}";

const BULLET_WIDTH: u16 = 350;

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    333, 333, 570, 570, 570, 500, 930,
    722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
    722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
    333, 278, 333, 581, 500, 333,
    500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
    556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
    394, 220, 394, 520,
];

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

fn width_table(family: FontFamily, weight: FontWeight) -> &'static [u16; 95] {
    match (family, weight) {
        (FontFamily::Times, FontWeight::Normal) => &TIMES_ROMAN,
        (FontFamily::Times, FontWeight::Bold) => &TIMES_BOLD,
        (FontFamily::Helvetica, FontWeight::Normal) => &HELVETICA,
        (FontFamily::Helvetica, FontWeight::Bold) => &HELVETICA_BOLD,
    }
}

/// Advance width of one character in 1/1000 em.
///
/// Latin-1 supplement characters (and anything else the normaliser let
/// through) use the width of `n`, which is close to the face average.
pub fn glyph_width(ch: char, family: FontFamily, weight: FontWeight) -> u16 {
    let table = width_table(family, weight);
    match ch {
        ' '..='~' => table[ch as usize - 32],
        '\u{2022}' => BULLET_WIDTH,
        _ => table['n' as usize - 32],
    }
}

/// Standard-14 metrics. Stateless; cheap to copy into every layout session.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

impl TextMeasure for StandardMetrics {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        let units: u32 = text
            .chars()
            .map(|ch| u32::from(glyph_width(ch, font.family, font.weight)))
            .sum();
        units as f32 / 1000.0 * font.size * MM_PER_PT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_cover_printable_ascii() {
        assert_eq!(glyph_width(' ', FontFamily::Times, FontWeight::Normal), 250);
        assert_eq!(glyph_width('~', FontFamily::Times, FontWeight::Normal), 541);
        assert_eq!(glyph_width('W', FontFamily::Times, FontWeight::Bold), 1000);
        assert_eq!(glyph_width('i', FontFamily::Helvetica, FontWeight::Normal), 222);
        assert_eq!(glyph_width('m', FontFamily::Helvetica, FontWeight::Bold), 889);
    }

    #[test]
    fn bold_is_wider_than_normal() {
        let metrics = StandardMetrics;
        let text = "Governing law and jurisdiction";
        let normal = metrics.measure_width(text, &FontSpec::normal(FontFamily::Times, 10.0));
        let bold = metrics.measure_width(text, &FontSpec::bold(FontFamily::Times, 10.0));
        assert!(bold > normal);
    }

    #[test]
    fn width_scales_with_size_in_millimetres() {
        let metrics = StandardMetrics;
        // Ten spaces at 250 units, 10pt: 2.5em * 10pt = 25pt.
        let w = metrics.measure_width("          ", &FontSpec::normal(FontFamily::Times, 10.0));
        assert!((w - 25.0 * MM_PER_PT).abs() < 1e-4);
        let w2 = metrics.measure_width("          ", &FontSpec::normal(FontFamily::Times, 20.0));
        assert!((w2 - 2.0 * w).abs() < 1e-4);
    }

    #[test]
    fn measurement_is_additive() {
        let metrics = StandardMetrics;
        let font = FontSpec::normal(FontFamily::Helvetica, 10.0);
        let whole = metrics.measure_width("left right", &font);
        let parts = metrics.measure_width("left", &font)
            + metrics.measure_width(" ", &font)
            + metrics.measure_width("right", &font);
        assert!((whole - parts).abs() < 1e-4);
    }

    #[test]
    fn latin1_and_bullet_have_widths() {
        assert_eq!(glyph_width('é', FontFamily::Times, FontWeight::Normal), 500);
        assert_eq!(glyph_width('\u{2022}', FontFamily::Times, FontWeight::Bold), 350);
    }
}
