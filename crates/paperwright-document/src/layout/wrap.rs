// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Greedy word wrap against measured glyph widths.

use paperwright_core::FontSpec;

use crate::canvas::TextMeasure;

/// Break `text` into lines no wider than `max_width` millimetres.
///
/// Words are separated by any whitespace and rejoined with single spaces. A
/// word wider than `max_width` gets a line of its own and is never split.
/// Text without words yields one empty line, so callers always advance.
pub fn wrap_words<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    font: &FontSpec,
    max_width: f32,
) -> Vec<String> {
    let space = measure.measure_width(" ", font);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0_f32;

    for word in text.split_whitespace() {
        let word_width = measure.measure_width(word, font);

        if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + space + word_width <= max_width {
            line.push(' ');
            line.push_str(word);
            line_width += space + word_width;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_width = word_width;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StandardMetrics;
    use paperwright_core::FontFamily;

    fn body() -> FontSpec {
        FontSpec::normal(FontFamily::Times, 10.0)
    }

    #[test]
    fn short_text_is_one_line() {
        let lines = wrap_words(&StandardMetrics, "Please sign below.", &body(), 180.0);
        assert_eq!(lines, vec!["Please sign below."]);
    }

    #[test]
    fn lines_respect_width() {
        let text = "The parties hereby agree that the terms set out in this agreement \
                    shall govern the relationship between them for the full duration \
                    of the engagement and any renewal thereof.";
        let lines = wrap_words(&StandardMetrics, text, &body(), 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(StandardMetrics.measure_width(line, &body()) <= 60.0 + 1e-3, "{line}");
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn oversized_token_is_not_split() {
        let token = "x".repeat(200);
        let text = format!("before {token} after");
        let lines = wrap_words(&StandardMetrics, &text, &body(), 50.0);
        assert_eq!(lines, vec!["before".to_string(), token, "after".to_string()]);
    }

    #[test]
    fn blank_text_yields_one_empty_line() {
        assert_eq!(wrap_words(&StandardMetrics, "   ", &body(), 50.0), vec![String::new()]);
    }

    #[test]
    fn collapses_inner_whitespace() {
        let lines = wrap_words(&StandardMetrics, "a   b\tc", &body(), 180.0);
        assert_eq!(lines, vec!["a b c"]);
    }
}
