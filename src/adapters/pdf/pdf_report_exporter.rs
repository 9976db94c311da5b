//! pdf-writer based report exporter.
//!
//! Lays the report out on A4 pages: a centered title, a bordered
//! three-column summary table and the overall score line. Rows that no
//! longer fit above the bottom margin continue on a new page. Text uses the
//! built-in Helvetica fonts, so no font files are embedded.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use crate::domain::report::ReportDocument;
use crate::ports::{ExportError, ExportFormat, ReportExporter};

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Page and table geometry in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub row_height: f32,
    /// Widths of the Dimension, Average Score and Maturity Level columns.
    pub column_widths: [f32; 3],
}

impl Default for PdfLayout {
    /// A4 portrait with 10 mm margins and 10 mm rows.
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 28.35,
            row_height: 28.35,
            column_widths: [170.0, 113.4, 170.0],
        }
    }
}

/// Report exporter producing a PDF document.
#[derive(Debug, Clone, Default)]
pub struct PdfReportExporter {
    layout: PdfLayout,
}

impl PdfReportExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: PdfLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Draws the content stream of every page, in page order.
    fn page_contents(&self, document: &ReportDocument) -> Vec<Vec<u8>> {
        let layout = &self.layout;
        let top = layout.page_height - layout.margin - layout.row_height;
        let mut pages = Vec::new();
        let mut content = Content::new();
        let mut cursor = top;

        // Title, approximately centered (Helvetica averages half an em per glyph).
        let title_size = 12.0;
        let title_width = document.title.chars().count() as f32 * title_size * 0.5;
        let title_x = ((layout.page_width - title_width) / 2.0).max(layout.margin);
        write_text(&mut content, FONT_REGULAR, title_size, title_x, cursor + 10.0, &document.title);
        cursor -= 2.0 * layout.row_height;

        content.set_line_width(0.5);
        self.table_row(
            &mut content,
            FONT_BOLD,
            cursor,
            ["Dimension", "Avg Score", "Maturity Level"],
        );
        cursor -= layout.row_height;

        for row in &document.rows {
            if cursor < layout.margin {
                cursor = self.break_page(&mut pages, &mut content);
            }
            let average = row.average_score.to_string();
            let maturity = row.maturity_level.label();
            self.table_row(
                &mut content,
                FONT_REGULAR,
                cursor,
                [row.dimension.as_str(), average.as_str(), maturity],
            );
            cursor -= layout.row_height;
        }

        cursor -= layout.row_height / 2.0;
        if cursor < layout.margin {
            cursor = self.break_page(&mut pages, &mut content);
        }
        write_text(
            &mut content,
            FONT_BOLD,
            12.0,
            layout.margin + 4.0,
            cursor + 10.0,
            &document.overall_line(),
        );

        pages.push(content.finish());
        pages
    }

    /// Closes the current page and returns the cursor for the next one.
    fn break_page(&self, pages: &mut Vec<Vec<u8>>, content: &mut Content) -> f32 {
        pages.push(std::mem::replace(content, Content::new()).finish());
        content.set_line_width(0.5);
        self.layout.page_height - self.layout.margin - self.layout.row_height
    }

    /// Draws one bordered table row whose bottom edge sits at `y`.
    fn table_row(&self, content: &mut Content, font: Name<'_>, y: f32, cells: [&str; 3]) {
        let mut x = self.layout.margin;
        for (width, text) in self.layout.column_widths.iter().zip(cells) {
            content.rect(x, y, *width, self.layout.row_height);
            content.stroke();
            write_text(content, font, 11.0, x + 4.0, y + 10.0, text);
            x += width;
        }
    }
}

impl ReportExporter for PdfReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn export(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError> {
        if document.rows.is_empty() {
            return Err(ExportError::EmptyDocument(
                "summary table has no dimensions".to_string(),
            ));
        }

        let mut next_id = Ref::new(1);
        let catalog_id = next_id.bump();
        let page_tree_id = next_id.bump();
        let regular_id = next_id.bump();
        let bold_id = next_id.bump();

        let contents = self.page_contents(document);
        let page_ids: Vec<(Ref, Ref)> = contents
            .iter()
            .map(|_| (next_id.bump(), next_id.bump()))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        for ((page_id, content_id), content) in page_ids.into_iter().zip(&contents) {
            let mut page = pdf.page(page_id);
            page.media_box(Rect::new(
                0.0,
                0.0,
                self.layout.page_width,
                self.layout.page_height,
            ));
            page.parent(page_tree_id);
            page.contents(content_id);
            page.resources()
                .fonts()
                .pair(FONT_REGULAR, regular_id)
                .pair(FONT_BOLD, bold_id);
            page.finish();
            pdf.stream(content_id, content);
        }

        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Ok(pdf.finish())
    }
}

fn write_text(content: &mut Content, font: Name<'_>, size: f32, x: f32, y: f32, text: &str) {
    let encoded = latin1(text);
    content.begin_text();
    content.set_font(font, size);
    content.next_line(x, y);
    content.show(Str(&encoded));
    content.end_text();
}

/// Encodes text for the standard fonts; characters outside Latin-1 become `?`.
fn latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
