// Report Paginator: section extraction, label splitting, word-wrap, pagination.
// Layout is CPU-bound and synchronous; async callers run it inside tokio::task::spawn_blocking.

pub mod document;
pub mod font_metrics;
pub mod paginator;
pub mod sections;
pub mod wrap;

// Re-export the public API consumed by other modules (render, generation).
pub use document::{default_page_config, Document, PageConfig, TextStyle};
pub use paginator::layout_document;
