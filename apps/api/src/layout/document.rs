//! Laid-out document model: pages of positioned text, plus the page geometry.
//!
//! Coordinates are PDF points with the origin at the bottom-left corner, so the
//! vertical cursor starts near `page_height_pt` and decreases as lines are drawn.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFamily;

// ────────────────────────────────────────────────────────────────────────────
// Page configuration
// ────────────────────────────────────────────────────────────────────────────

/// Geometry, type sizes and spacing for a CARR report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub page_width_pt: f32,
    pub page_height_pt: f32,
    /// Left margin; every line starts here except the first body line of a block.
    pub margin_pt: f32,
    pub line_height_pt: f32,
    /// Lowest baseline a body line may be drawn on.
    pub min_y_pt: f32,
    pub title_size_pt: f32,
    pub subtitle_size_pt: f32,
    pub heading_size_pt: f32,
    pub body_size_pt: f32,
    /// Character budget of a wrapped body line before the label correction.
    pub max_line_chars: usize,
    /// Points of label width that cost one character of line budget.
    /// A crude stand-in for measuring the body text itself.
    pub label_width_divisor: f32,
    /// Horizontal gap between a label and the first body line.
    pub label_gap_pt: f32,
    pub cover_title_offset_pt: f32,
    pub cover_subtitle_offset_pt: f32,
    /// Distance from the page top to a dimension header baseline.
    pub heading_offset_pt: f32,
    /// Distance from the page top to the first baseline of a continuation page.
    pub continuation_offset_pt: f32,
    /// Vertical space consumed by a dimension header.
    pub heading_gap_pt: f32,
    /// Extra space after each block, as a fraction of `line_height_pt`.
    pub paragraph_gap_lines: f32,
}

/// A4 portrait, Times 11pt body, 50pt margins.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        page_width_pt: 595.28,
        page_height_pt: 841.89,
        margin_pt: 50.0,
        line_height_pt: 16.0,
        min_y_pt: 40.0,
        title_size_pt: 20.0,
        subtitle_size_pt: 12.0,
        heading_size_pt: 14.0,
        body_size_pt: 11.0,
        max_line_chars: 90,
        label_width_divisor: 6.0,
        label_gap_pt: 3.0,
        cover_title_offset_pt: 80.0,
        cover_subtitle_offset_pt: 110.0,
        heading_offset_pt: 60.0,
        continuation_offset_pt: 50.0,
        heading_gap_pt: 30.0,
        paragraph_gap_lines: 0.7,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drawn content
// ────────────────────────────────────────────────────────────────────────────

/// Role of a text item; decides font, size and colour at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextStyle {
    /// Cover page title.
    Title,
    /// Cover page candidate line.
    Subtitle,
    /// "Dimension N: name" header.
    Heading,
    /// Bold section label. One per LabeledBlock, even when the label is empty.
    Label,
    Body,
}

impl TextStyle {
    pub fn font(self) -> FontFamily {
        match self {
            TextStyle::Label => FontFamily::TimesBold,
            _ => FontFamily::TimesRoman,
        }
    }

    pub fn size_pt(self, config: &PageConfig) -> f32 {
        match self {
            TextStyle::Title => config.title_size_pt,
            TextStyle::Subtitle => config.subtitle_size_pt,
            TextStyle::Heading => config.heading_size_pt,
            TextStyle::Label | TextStyle::Body => config.body_size_pt,
        }
    }

    /// Fill colour as RGB components in 0.0..=1.0.
    pub fn rgb(self) -> (f32, f32, f32) {
        match self {
            TextStyle::Title => (0.0, 0.0, 0.7),
            TextStyle::Subtitle => (0.1, 0.1, 0.1),
            _ => (0.0, 0.0, 0.0),
        }
    }
}

/// A single run of text placed at a baseline position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawnText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub style: TextStyle,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<DrawnText>,
}

impl Page {
    pub fn draw_text(&mut self, text: impl Into<String>, x: f32, y: f32, style: TextStyle) {
        self.items.push(DrawnText {
            text: text.into(),
            x,
            y,
            style,
        });
    }

    /// Number of LabeledBlocks that start on this page.
    pub fn block_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.style == TextStyle::Label)
            .count()
    }
}

/// Ordered pages of a report. The first page is the cover.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    /// Appends an empty page and returns its index.
    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn block_count(&self) -> usize {
        self.pages.iter().map(Page::block_count).sum()
    }
}
