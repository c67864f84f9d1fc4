//! PDF serialization of a laid-out [`Document`].
//!
//! One PDF page per layout page. Text uses the Times standard fonts, so nothing is
//! embedded and every item is a single `BT … Tf … Td … Tj ET` run.

mod winansi;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};
use thiserror::Error;

use crate::layout::font_metrics::FontFamily;
use crate::layout::paginator::COVER_TITLE;
use crate::layout::{Document, PageConfig};

pub use winansi::to_winansi_bytes;

const FONTS: [FontFamily; 2] = [FontFamily::TimesRoman, FontFamily::TimesBold];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document has no pages")]
    Empty,
}

/// Serializes `doc` to PDF bytes.
pub fn render_pdf(doc: &Document, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    if doc.pages.is_empty() {
        return Err(RenderError::Empty);
    }

    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();
    let info_id = alloc();
    let font_refs: Vec<(FontFamily, Ref)> = FONTS.iter().map(|&f| (f, alloc())).collect();
    let page_ids: Vec<Ref> = doc.pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = doc.pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(page_ids.len() as i32);
    pdf.document_info(info_id).title(TextStr(COVER_TITLE));

    for (font, font_ref) in &font_refs {
        pdf.type1_font(*font_ref)
            .base_font(Name(font.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    for (i, page) in doc.pages.iter().enumerate() {
        let mut content = Content::new();
        for item in page.items.iter().filter(|item| !item.text.is_empty()) {
            let (r, g, b) = item.style.rgb();
            let bytes = to_winansi_bytes(&item.text);
            content
                .begin_text()
                .set_font(
                    Name(item.style.font().resource_name().as_bytes()),
                    item.style.size_pt(config),
                )
                .set_fill_rgb(r, g, b)
                .next_line(item.x, item.y)
                .show(Str(&bytes))
                .end_text();
        }
        pdf.stream(content_ids[i], &content.finish());

        let mut pdf_page = pdf.page(page_ids[i]);
        pdf_page
            .media_box(Rect::new(0.0, 0.0, config.page_width_pt, config.page_height_pt))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = pdf_page.resources();
        let mut fonts = resources.fonts();
        for (font, font_ref) in &font_refs {
            fonts.pair(Name(font.resource_name().as_bytes()), *font_ref);
        }
    }

    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{default_page_config, layout_document};
    use crate::models::report::Report;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_render_empty_document_fails() {
        let config = default_page_config();
        assert!(matches!(
            render_pdf(&Document::default(), &config),
            Err(RenderError::Empty)
        ));
    }

    #[test]
    fn test_render_produces_pdf_with_standard_fonts() {
        let config = default_page_config();
        let reports = vec![Report {
            dimension: "Clarity".to_string(),
            report: "1. CSA Score: He is ready.\n2. CSA Summary: Calm – and “steady”.".to_string(),
        }];
        let doc = layout_document("a@b.com", &reports, &config);
        let bytes = render_pdf(&doc, &config).unwrap();

        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Times-Roman"));
        assert!(contains(&bytes, b"/Times-Bold"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
        assert!(contains(&bytes, b"(Dimension 1: Clarity)"));
        assert!(contains(&bytes, b"(1. CSA Score:)"));
    }

    #[test]
    fn test_render_writes_one_pdf_page_per_layout_page() {
        let config = default_page_config();
        let body = vec!["insight"; 600].join(" ");
        let reports = vec![Report {
            dimension: "Clarity".to_string(),
            report: format!("1. CSA Score: {body}"),
        }];
        let doc = layout_document("a@b.com", &reports, &config);
        assert!(doc.page_count() > 2);

        let bytes = render_pdf(&doc, &config).unwrap();
        let count = format!("/Count {}", doc.page_count());
        assert!(contains(&bytes, count.as_bytes()));
    }
}
