// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// WinAnsi (Windows-1252) encoding for the builtin standard-14 faces.
//
// printpdf declares `/Encoding /WinAnsiEncoding` on builtin fonts but writes
// `WriteTextBuiltinFont` text as raw UTF-8, so everything outside ASCII would
// show as two or three glyphs. Text is transcoded here and emitted as a hex
// string operand instead.

use printpdf::{DictItem, Op};

/// Byte drawn for characters WinAnsi cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Map a character to its WinAnsi code, if it has one.
pub fn unicode_to_winansi(ch: char) -> Option<u8> {
    let code = ch as u32;
    if code < 0x80 || (0xA0..=0xFF).contains(&code) {
        return Some(code as u8);
    }

    match ch {
        '\u{20AC}' => Some(0x80),
        '\u{201A}' => Some(0x82),
        '\u{0192}' => Some(0x83),
        '\u{201E}' => Some(0x84),
        '\u{2026}' => Some(0x85),
        '\u{2020}' => Some(0x86),
        '\u{2021}' => Some(0x87),
        '\u{02C6}' => Some(0x88),
        '\u{2030}' => Some(0x89),
        '\u{0160}' => Some(0x8A),
        '\u{2039}' => Some(0x8B),
        '\u{0152}' => Some(0x8C),
        '\u{017D}' => Some(0x8E),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{02DC}' => Some(0x98),
        '\u{2122}' => Some(0x99),
        '\u{0161}' => Some(0x9A),
        '\u{203A}' => Some(0x9B),
        '\u{0153}' => Some(0x9C),
        '\u{017E}' => Some(0x9E),
        '\u{0178}' => Some(0x9F),
        _ => None,
    }
}

/// Encode a whole string, substituting [`REPLACEMENT`] for unmappable characters.
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| unicode_to_winansi(ch).unwrap_or(REPLACEMENT))
        .collect()
}

/// A `Tj` operator showing `text` in the current builtin font.
///
/// Raw operators are dropped unless the document is saved with
/// `PdfSaveOptions::secure` turned off.
pub fn show_text(text: &str) -> Op {
    Op::Unknown {
        key: "Tj".into(),
        value: vec![DictItem::String {
            data: encode_winansi(text),
            literal: false,
        }],
    }
}
