//! Page Layout Engine — places per-dimension reports onto fixed-size pages.
//!
//! # Flow
//! cover page → for each report: new page + "Dimension N" header →
//! `extract_sections` → `split_label` → `wrap_text` → draw label + lines.
//!
//! # Cursor
//! Drawing position is an explicit [`LayoutCursor`] value. Every drawing step takes
//! the current cursor and returns the next one; a page break is the transition
//! that returns a cursor at the top of a freshly opened page. Continuation pages
//! opened by a break do not repeat the dimension header.

use tracing::debug;

use crate::layout::document::{Document, PageConfig, TextStyle};
use crate::layout::font_metrics::get_metrics;
use crate::layout::sections::{extract_sections, split_label, LabeledBlock};
use crate::layout::wrap::wrap_text;
use crate::models::report::Report;

pub const COVER_TITLE: &str = "Career Acceleration Readiness Report";

/// Where the next baseline goes: page index and vertical offset in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub page: usize,
    pub y: f32,
}

impl LayoutCursor {
    pub fn new(page: usize, y: f32) -> Self {
        Self { page, y }
    }

    /// Moves the cursor `dy` points down the same page.
    pub fn down(self, dy: f32) -> Self {
        Self {
            y: self.y - dy,
            ..self
        }
    }
}

/// Lays out the cover page and one section of pages per report, in input order.
pub fn layout_document(email: &str, reports: &[Report], config: &PageConfig) -> Document {
    let mut doc = Document::default();
    draw_cover(&mut doc, email, config);

    for (i, report) in reports.iter().enumerate() {
        let mut cursor = open_dimension_page(&mut doc, i + 1, &report.dimension, config);
        for section in extract_sections(&report.report) {
            let block = split_label(&section);
            cursor = draw_block(&mut doc, cursor, &block, config);
        }
    }

    debug!(
        pages = doc.page_count(),
        blocks = doc.block_count(),
        "Report layout complete"
    );
    doc
}

fn draw_cover(doc: &mut Document, email: &str, config: &PageConfig) {
    let page = doc.add_page();
    let top = config.page_height_pt;
    doc.pages[page].draw_text(
        COVER_TITLE,
        config.margin_pt,
        top - config.cover_title_offset_pt,
        TextStyle::Title,
    );
    doc.pages[page].draw_text(
        format!("Candidate Email: {email}"),
        config.margin_pt,
        top - config.cover_subtitle_offset_pt,
        TextStyle::Subtitle,
    );
}

/// Opens the first page of a dimension and draws its header.
fn open_dimension_page(
    doc: &mut Document,
    number: usize,
    dimension: &str,
    config: &PageConfig,
) -> LayoutCursor {
    let page = doc.add_page();
    let cursor = LayoutCursor::new(page, config.page_height_pt - config.heading_offset_pt);
    doc.pages[page].draw_text(
        format!("Dimension {number}: {dimension}"),
        config.margin_pt,
        cursor.y,
        TextStyle::Heading,
    );
    cursor.down(config.heading_gap_pt)
}

/// Returns `cursor` if its baseline is at or above `floor`; otherwise opens a
/// continuation page and returns a cursor at its top.
pub fn ensure_room(
    doc: &mut Document,
    cursor: LayoutCursor,
    floor: f32,
    config: &PageConfig,
) -> LayoutCursor {
    if cursor.y >= floor {
        return cursor;
    }
    let page = doc.add_page();
    LayoutCursor::new(page, config.page_height_pt - config.continuation_offset_pt)
}

/// Character budget for body lines of a block whose label is `label_width_pt` wide.
pub fn effective_line_chars(label_width_pt: f32, config: &PageConfig) -> usize {
    let correction = if config.label_width_divisor > 0.0 {
        label_width_pt / config.label_width_divisor
    } else {
        0.0
    };
    (config.max_line_chars as f32 - correction).floor().max(1.0) as usize
}

/// Draws one LabeledBlock: bold label and first line on one baseline, then the
/// remaining wrapped lines, then the paragraph gap.
fn draw_block(
    doc: &mut Document,
    cursor: LayoutCursor,
    block: &LabeledBlock,
    config: &PageConfig,
) -> LayoutCursor {
    let label_metrics = get_metrics(&TextStyle::Label.font());
    let label_width = label_metrics.width_of_text(&block.label, config.body_size_pt);
    let mut lines = wrap_text(&block.body, effective_line_chars(label_width, config)).into_iter();
    let line_height = config.line_height_pt;

    let mut cursor = ensure_room(doc, cursor, config.min_y_pt + 2.0 * line_height, config);
    let page = &mut doc.pages[cursor.page];
    page.draw_text(block.label.as_str(), config.margin_pt, cursor.y, TextStyle::Label);
    if let Some(first) = lines.next() {
        if block.label.is_empty() {
            page.draw_text(first, config.margin_pt, cursor.y, TextStyle::Body);
        } else {
            page.draw_text(
                format!(" {first}"),
                config.margin_pt + label_width + config.label_gap_pt,
                cursor.y,
                TextStyle::Body,
            );
        }
    }
    cursor = cursor.down(line_height);

    for line in lines {
        cursor = ensure_room(doc, cursor, config.min_y_pt, config);
        doc.pages[cursor.page].draw_text(line, config.margin_pt, cursor.y, TextStyle::Body);
        cursor = cursor.down(line_height);
    }

    cursor.down(line_height * config.paragraph_gap_lines)
}
