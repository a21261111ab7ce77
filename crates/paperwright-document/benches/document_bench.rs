// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the paperwright-document export pipeline.
// Measures classification and full layout (stages 1–5) on a synthetic
// multi-page contract, plus end-to-end PDF serialisation.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use paperwright_core::{DocumentKind, ExportRequest};
use paperwright_document::{DocumentAssembler, classify, sanitize};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A contract of `sections` numbered sections, each with a body paragraph,
/// a bullet and a bold lead-in. Forty sections spill over roughly eight pages.
fn synthetic_contract(sections: usize) -> String {
    let mut out = String::from("<h1>AGREEMENT</h1>\n\n");
    for i in 1..=sections {
        out.push_str(&format!("{i}. Obligations of the parties\n\n"));
        out.push_str(
            "The Supplier shall deliver the services described in the schedule with \
             reasonable skill and care, in accordance with good industry practice, \
             and shall notify the Client promptly of any delay &amp; its cause.\n\n",
        );
        out.push_str("\u{2022} Payment falls due within thirty days of invoice.\n\n");
        out.push_str("**Important:** late payment accrues interest at the statutory rate.\n\n");
    }
    out
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_classify(c: &mut Criterion) {
    let sanitized = sanitize(&synthetic_contract(40));

    c.bench_function("classify (40 sections)", |b| {
        b.iter(|| black_box(classify(black_box(&sanitized))));
    });
}

fn bench_layout(c: &mut Criterion) {
    let assembler = DocumentAssembler::default();
    let request = ExportRequest::new(synthetic_contract(40), "Agreement", DocumentKind::Original);

    c.bench_function("layout_pages (40 sections)", |b| {
        b.iter(|| black_box(assembler.layout_pages(black_box(&request)).unwrap()));
    });
}

fn bench_export_pdf(c: &mut Criterion) {
    let assembler = DocumentAssembler::default();
    let request = ExportRequest::new(synthetic_contract(40), "Agreement", DocumentKind::Original);

    c.bench_function("export_pdf (40 sections)", |b| {
        b.iter(|| black_box(assembler.export_pdf(black_box(&request)).unwrap()));
    });
}

criterion_group!(benches, bench_classify, bench_layout, bench_export_pdf);
criterion_main!(benches);
