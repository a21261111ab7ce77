// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Markup sanitiser — turns HTML-ish editor output into plain prose.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());
static STYLE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").unwrap());
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static HORIZONTAL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static CONTINUATION_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]+").unwrap());

/// Entities decoded after tags are gone, in this order.
const ENTITIES: [(&str, &str); 7] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#x27;", "'"),
    ("&#39;", "'"),
];

/// Strip markup, decode the common entities, drop `{...}` placeholders and
/// collapse horizontal whitespace.
///
/// Never fails; input that is nothing but markup yields an empty string.
pub fn sanitize(raw: &str) -> String {
    let text = SCRIPT_BODY.replace_all(raw, "");
    let text = STYLE_BODY.replace_all(&text, "");
    let text = TAG.replace_all(&text, "");

    let mut text = text.into_owned();
    for (entity, literal) in ENTITIES {
        if text.contains(entity) {
            text = text.replace(entity, literal);
        }
    }

    let text = PLACEHOLDER.replace_all(&text, "");
    let text = HORIZONTAL_RUN.replace_all(&text, " ");
    let text = CONTINUATION_INDENT.replace_all(&text, "\n");
    text.trim().to_string()
}
