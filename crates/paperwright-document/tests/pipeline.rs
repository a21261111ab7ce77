// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// End-to-end tests for the export pipeline.

use paperwright_core::{
    Align, DocumentKind, ExportConfig, ExportRequest, FontFamily, FontSpec, PaperSize,
    PaperwrightError, humanize_error,
};
use paperwright_document::metrics::BULLET_GLYPH;
use paperwright_document::{
    Block, DocumentAssembler, LayoutSession, Page, PagedCanvas, StandardMetrics, TextMeasure,
    classify, layout,
};

fn request(content: &str) -> ExportRequest {
    ExportRequest::new(content, "Service Agreement", DocumentKind::Original)
}

fn contract(sections: usize) -> String {
    let mut out = String::new();
    for i in 1..=sections {
        out.push_str(&format!("{i}. Obligations of the parties\n\n"));
        out.push_str(
            "The Supplier shall deliver the services described in the schedule with \
             reasonable skill and care, in accordance with good industry practice, \
             and shall notify the Client promptly of any delay.\n\n",
        );
        out.push_str("* Payment falls due within thirty days of invoice.\n\n");
        out.push_str("**Important:** late payment accrues interest at the statutory rate.\n\n");
    }
    out
}

#[test]
fn sign_below_scenario() {
    let blocks = classify("**Important:** Please sign below.\n\nRegards,\nThe Firm");
    assert_eq!(blocks.len(), 2);
    assert!(matches!(&blocks[0], Block::MixedRun { parts } if parts.len() == 2 && parts[0].bold));
    assert_eq!(
        blocks[1],
        Block::Paragraph {
            text: "Regards, The Firm".into()
        }
    );
}

#[test]
fn page_totals_match_page_count() {
    let assembler = DocumentAssembler::default();
    let pages = assembler.layout_pages(&request(&contract(25))).unwrap();
    let total = pages.len();
    assert!(total > 1);

    for (i, page) in pages.iter().enumerate() {
        let footer = page.footer.as_ref().expect("every page has a footer");
        assert_eq!(footer.text, format!("Page {} of {}", i + 1, total));
        assert_eq!(footer.align, Align::Right);
    }
}

#[test]
fn lines_fit_the_printable_width() {
    let config = ExportConfig::default();
    let assembler = DocumentAssembler::default();
    let pages = assembler.layout_pages(&request(&contract(10))).unwrap();
    let max = config.geometry.max_width();

    for page in &pages {
        for op in page.texts() {
            if op.align != Align::Left || op.text == BULLET_GLYPH {
                continue;
            }
            let width = StandardMetrics.measure_width(&op.text, &op.font);
            let single_token = !op.text.contains(' ');
            assert!(
                width <= max + 1e-3 || single_token,
                "line {:?} is {width}mm wide",
                op.text
            );
            assert!(op.x >= config.geometry.margin);
        }
    }
}

#[test]
fn no_line_starts_below_the_safe_margin() {
    let config = ExportConfig::default();
    let pages = DocumentAssembler::default()
        .layout_pages(&request(&contract(30)))
        .unwrap();
    for page in &pages {
        for op in page.texts() {
            assert!(op.y <= config.geometry.break_threshold());
        }
    }
}

#[test]
fn long_paragraph_breaks_deterministically() {
    let config = ExportConfig::default();
    let body = FontSpec::normal(FontFamily::Times, config.typography.body_size);

    let mut text = String::new();
    let mut n = 0;
    while paperwright_document::layout::wrap_words(
        &StandardMetrics,
        &text,
        &body,
        config.geometry.max_width(),
    )
    .len()
        < 60
    {
        text.push_str(&format!("term{n} "));
        n += 1;
    }

    let blocks = vec![Block::Paragraph { text }];
    let first = layout(&blocks, &config, &StandardMetrics, "Deed", DocumentKind::Original);
    let second = layout(&blocks, &config, &StandardMetrics, "Deed", DocumentKind::Original);
    assert!(first.len() >= 2);
    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);
}

#[test]
fn bullet_glyph_once_per_page_run() {
    let config = ExportConfig::default();
    let long_item = (0..900)
        .map(|i| format!("item{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    let mut session = LayoutSession::new(&config, &StandardMetrics);
    session.place_block(&Block::Bullet { text: long_item });
    let pages = session.into_pages();
    assert!(pages.len() > 1);

    for page in &pages {
        assert_eq!(page.texts().filter(|op| op.text == BULLET_GLYPH).count(), 1);
    }
}

#[test]
fn blocks_render_in_classified_order() {
    let content = "TERMS AND CONDITIONS\n\nFirst paragraph.\n\n* A bullet\n\nLast paragraph.";
    let pages = DocumentAssembler::default()
        .layout_pages(&request(content))
        .unwrap();
    let texts: Vec<_> = pages[0]
        .texts()
        .map(|op| op.text.as_str())
        .filter(|t| *t != BULLET_GLYPH)
        .collect();
    assert_eq!(
        texts,
        vec![
            "Service Agreement",
            "TERMS AND CONDITIONS",
            "First paragraph.",
            "A bullet",
            "Last paragraph.",
        ]
    );
}

#[test]
fn empty_after_sanitising_is_client_error() {
    let err = DocumentAssembler::default()
        .export_pdf(&request("<style>p{}</style>{placeholder}"))
        .unwrap_err();
    assert!(matches!(err, PaperwrightError::InvalidInput(_)));
    assert_eq!(humanize_error(&err).status, 400);
}

#[test]
fn export_pdf_produces_named_document() {
    let req = ExportRequest::new(contract(3), "lease", DocumentKind::Translated);
    let doc = DocumentAssembler::default().export_pdf(&req).unwrap();
    assert_eq!(doc.file_name, "lease.pdf");
    assert_eq!(doc.content_type, "application/pdf");
    assert!(doc.bytes.starts_with(b"%PDF"));
    assert_eq!(doc.content_length(), doc.bytes.len());
    assert!(doc.page_count >= 1);
}

#[test]
fn bullets_and_accents_reach_the_pdf_as_winansi() {
    let doc = DocumentAssembler::default()
        .export_pdf(&request("* Zebra item\n\nCaf\u{e9} ok"))
        .unwrap();
    let contains = |needle: &[u8]| doc.bytes.windows(needle.len()).any(|w| w == needle);

    assert!(contains(b"<95> Tj"));
    assert!(contains(b"<436166E9206F6B> Tj"));
    assert!(!contains(b"<E280A2>"));
    assert!(!contains(b"C3A9206F6B>"));
}

#[test]
fn request_json_without_content_is_client_error() {
    let req: ExportRequest = serde_json::from_str(r#"{"fileName":"x"}"#).unwrap();
    let err = DocumentAssembler::default().export_pdf(&req).unwrap_err();
    assert_eq!(humanize_error(&err).status, 400);
}

#[test]
fn smaller_paper_needs_more_pages() {
    let content = contract(20);
    let a4 = DocumentAssembler::default()
        .layout_pages(&request(&content))
        .unwrap();
    let a5 = DocumentAssembler::new(ExportConfig::for_paper(PaperSize::A5))
        .unwrap()
        .layout_pages(&request(&content))
        .unwrap();
    assert!(a5.len() > a4.len());
}

#[test]
fn independent_documents_in_parallel() {
    let assembler = &DocumentAssembler::default();
    let content = &contract(8);
    let expected = assembler.layout_pages(&request(content)).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || assembler.layout_pages(&request(content)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// Canvas whose text primitive fails after a number of successful draws.
struct FailingCanvas {
    remaining: usize,
    drawn: Vec<String>,
}

impl TextMeasure for FailingCanvas {
    fn measure_width(&self, text: &str, font: &FontSpec) -> f32 {
        StandardMetrics.measure_width(text, font)
    }
}

impl PagedCanvas for FailingCanvas {
    type Output = Vec<String>;

    fn new_page(&mut self) -> paperwright_core::error::Result<()> {
        Ok(())
    }

    fn set_font(&mut self, _font: FontSpec) -> paperwright_core::error::Result<()> {
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        _x: f32,
        _y: f32,
        _align: Align,
    ) -> paperwright_core::error::Result<()> {
        if self.remaining == 0 {
            return Err(PaperwrightError::Backend("glyph stream closed".into()));
        }
        self.remaining -= 1;
        self.drawn.push(text.to_string());
        Ok(())
    }

    fn draw_rule(
        &mut self,
        _x1: f32,
        _x2: f32,
        _y: f32,
        _thickness: f32,
    ) -> paperwright_core::error::Result<()> {
        Ok(())
    }

    fn finish(self) -> paperwright_core::error::Result<Self::Output> {
        Ok(self.drawn)
    }
}

#[test]
fn backend_fault_is_a_rendering_failure_without_output() {
    let canvas = FailingCanvas {
        remaining: 3,
        drawn: Vec::new(),
    };
    let result = DocumentAssembler::default().export_with(&request(&contract(2)), canvas);
    let err = result.unwrap_err();
    assert!(matches!(err, PaperwrightError::RenderingFailure(_)));
    let human = humanize_error(&err);
    assert_eq!(human.status, 500);
    assert!(!human.message.contains("glyph stream"));
}

#[test]
fn custom_canvas_receives_every_page() {
    let canvas = FailingCanvas {
        remaining: usize::MAX,
        drawn: Vec::new(),
    };
    let rendered = DocumentAssembler::default()
        .export_with(&request(&contract(12)), canvas)
        .unwrap();
    let footers: Vec<_> = rendered
        .output
        .iter()
        .filter(|t| t.starts_with("Page "))
        .collect();
    assert_eq!(footers.len(), rendered.page_count);
    assert_eq!(
        footers.last().unwrap().as_str(),
        format!("Page {0} of {0}", rendered.page_count)
    );
}

#[test]
fn pages_serialise_for_inspection() {
    let pages: Vec<Page> = DocumentAssembler::default()
        .layout_pages(&request("NOTICE OF TERMINATION\n\nEffective immediately."))
        .unwrap();
    let json = serde_json::to_value(&pages).unwrap();
    assert_eq!(json[0]["footer"]["text"], "Page 1 of 1");
    assert_eq!(json[0]["ops"][1]["op"], "rule");
}
