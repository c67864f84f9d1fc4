//! Section extraction and label/body splitting for AI-generated report text.
//!
//! A report is expected to contain six numbered paragraphs ("1. CSA Score: ...").
//! Boundaries are found with a line scanner and an anchored prefix test instead of
//! a pattern-matching engine, so segmentation does not depend on regex semantics.

use serde::{Deserialize, Serialize};

/// A numbered section split into its bold label and its body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledBlock {
    /// `"1. CSA Score:"`, or empty when the section carries no recognizable label.
    pub label: String,
    pub body: String,
}

/// True if `line` (already trimmed) opens a new section: a digit 1–6, a period,
/// whitespace, then content.
pub fn is_section_boundary(line: &str) -> bool {
    let mut chars = line.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('1'..='6'), Some('.'), Some(c)) if c.is_whitespace()
    )
}

/// Splits raw report text into its numbered sections, in source order.
///
/// Lines that do not open a section are appended to the open one, joined by a
/// single space. Non-blank text before the first numbered line is kept as a
/// leading section of its own. Text with no numbered line at all is returned
/// unchanged as the only section.
pub fn extract_sections(text: &str) -> Vec<String> {
    if !text.lines().any(|line| is_section_boundary(line.trim())) {
        return vec![text.to_string()];
    }

    let mut sections = Vec::new();
    let mut current = String::new();

    for line in text.lines().map(str::trim) {
        if is_section_boundary(line) {
            flush_section(&mut sections, &mut current);
            current.push_str(line);
        } else if !line.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(line);
        }
    }
    flush_section(&mut sections, &mut current);

    sections
}

fn flush_section(sections: &mut Vec<String>, current: &mut String) {
    let section = current.trim();
    if !section.is_empty() {
        sections.push(section.to_string());
    }
    current.clear();
}

/// Splits a section into label and body on the first colon after the leading
/// `"N. "` marker.
///
/// The label is `digit '.' whitespace+ non-colon+ ':'`. When the section does not
/// start that way the label is empty and the body is the whole section, untouched.
pub fn split_label(section: &str) -> LabeledBlock {
    match label_end(section) {
        Some(end) => LabeledBlock {
            label: section[..end].trim().to_string(),
            body: section[end..].trim().to_string(),
        },
        None => LabeledBlock {
            label: String::new(),
            body: section.to_string(),
        },
    }
}

/// Byte offset just past the label's colon, if the section has a label.
fn label_end(section: &str) -> Option<usize> {
    let mut chars = section.char_indices();

    match chars.next() {
        Some((_, c)) if c.is_ascii_digit() => {}
        _ => return None,
    }
    match chars.next() {
        Some((_, '.')) => {}
        _ => return None,
    }
    match chars.next() {
        Some((_, c)) if c.is_whitespace() => {}
        _ => return None,
    }

    // At least one more character must sit between the whitespace and the colon:
    // either further whitespace or the start of the label text.
    let mut seen_before_colon = 0usize;
    for (idx, c) in chars {
        if c == ':' {
            return (seen_before_colon > 0).then_some(idx + c.len_utf8());
        }
        seen_before_colon += 1;
    }
    None
}
