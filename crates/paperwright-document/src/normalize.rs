// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Character normaliser — restricts text to what the standard-14 PDF fonts
// can encode: printable ASCII plus the Latin-1 supplement.

/// Map typographic punctuation to ASCII and blank out anything the builtin
/// fonts cannot show. Line breaks become spaces.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201C}' | '\u{201D}' => out.push('"'),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' => out.push(' '),
            ' '..='~' => out.push(ch),
            '\u{00A1}'..='\u{00FF}' => out.push(ch),
            _ => out.push(' '),
        }
    }

    out.trim().to_string()
}
