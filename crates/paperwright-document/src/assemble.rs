// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document assembler — runs the whole export pipeline for one request:
//
//   sanitise → classify (normalising as it goes) → layout → finish → render
//
// Each call owns its cursor and pages; nothing is shared between requests,
// so independent assemblers (or one shared immutable assembler) can serve
// documents in parallel.

use paperwright_core::error::{PaperwrightError, Result};
use paperwright_core::{ExportConfig, ExportRequest, ExportedDocument};
use tracing::{debug, error, info, instrument};

use crate::canvas::{PagedCanvas, TextMeasure, render_pages};
use crate::classify::classify;
use crate::finish::finish;
use crate::layout::layout;
use crate::metrics::StandardMetrics;
use crate::normalize::normalize;
use crate::page::Page;
use crate::pdf::PdfWriter;
use crate::sanitize::sanitize;

/// Output of a canvas plus the number of pages it holds.
#[derive(Debug, Clone)]
pub struct Rendered<T> {
    pub output: T,
    pub page_count: usize,
}

/// Orchestrates the export pipeline under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    config: ExportConfig,
}

impl DocumentAssembler {
    /// Create an assembler, rejecting configurations that cannot lay out a line.
    pub fn new(config: ExportConfig) -> Result<Self> {
        config
            .validate()
            .inspect_err(|err| error!(error = %err, "Rejected export configuration"))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Run stages 1–5 and return finished pages, footers included, measured
    /// with the standard-14 metrics.
    pub fn layout_pages(&self, request: &ExportRequest) -> Result<Vec<Page>> {
        self.layout_pages_with(request, &StandardMetrics)
    }

    /// As [`Self::layout_pages`], measuring with a caller-supplied backend.
    #[instrument(skip_all, fields(file_name = %request.file_name, content_len = request.content.len()))]
    pub fn layout_pages_with<M: TextMeasure>(
        &self,
        request: &ExportRequest,
        measure: &M,
    ) -> Result<Vec<Page>> {
        let sanitized = validate(request)?;
        debug!(
            raw_len = request.content.len(),
            sanitized_len = sanitized.len(),
            "Sanitised content"
        );

        let blocks = classify(&sanitized);
        let pages = layout(
            &blocks,
            &self.config,
            measure,
            request.file_name.trim(),
            request.kind,
        );
        Ok(finish(pages, &self.config))
    }

    /// Lay out the request and replay it onto `canvas`.
    ///
    /// Any fault after validation surfaces as [`PaperwrightError::RenderingFailure`]
    /// and no partial output is returned.
    pub fn export_with<C: PagedCanvas>(
        &self,
        request: &ExportRequest,
        canvas: C,
    ) -> Result<Rendered<C::Output>> {
        let pages = self.layout_pages_with(request, &canvas)?;
        let page_count = pages.len();

        let output = render_pages(&pages, canvas)
            .map_err(|err| rendering_failure(err, &request.file_name))?;

        Ok(Rendered { output, page_count })
    }

    /// Export the request as a PDF ready for download.
    pub fn export_pdf(&self, request: &ExportRequest) -> Result<ExportedDocument> {
        let mut writer = PdfWriter::new(&self.config);
        writer.set_title(normalize(&request.title()));

        let rendered = self.export_with(request, writer.canvas())?;
        let document =
            ExportedDocument::pdf(request.file_name.trim(), rendered.output, rendered.page_count);

        info!(
            file_name = %document.file_name,
            pages = document.page_count,
            content_length = document.content_length(),
            "Export complete"
        );
        Ok(document)
    }
}

/// Check the request and return its sanitised content.
fn validate(request: &ExportRequest) -> Result<String> {
    if request.file_name.trim().is_empty() {
        return Err(PaperwrightError::InvalidInput("fileName is required".into()));
    }
    if request.content.trim().is_empty() {
        return Err(PaperwrightError::InvalidInput("content is required".into()));
    }

    let sanitized = sanitize(&request.content);
    if sanitized.is_empty() {
        return Err(PaperwrightError::InvalidInput(
            "content is empty once markup is removed".into(),
        ));
    }
    Ok(sanitized)
}

fn rendering_failure(err: PaperwrightError, file_name: &str) -> PaperwrightError {
    match err {
        PaperwrightError::InvalidInput(_) | PaperwrightError::RenderingFailure(_) => err,
        other => {
            error!(file_name, error = %other, "PDF generation failed");
            PaperwrightError::RenderingFailure(other.to_string())
        }
    }
}
