//! Per-document orchestration: pull pages from a page source, chunk each
//! page, then assign positions across the whole document.

mod error;
mod file_info;
mod processor;
mod source;


pub use error::DocumentError;
pub use file_info::FileInfo;
pub use processor::{assign_global_positions, DocumentProcessor};
pub use source::{source_for_path, split_pages, PdfPageSource, TextPageSource};

use std::path::Path;

/// Raw text of one page as handed over by an extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number
    pub page_number: usize,
    pub text: String,
    pub total_pages: usize,
}

/// Anything that can turn a document on disk into ordered page texts
pub trait PageSource: Send + Sync {
    /// Extract all pages of the document at `path`
    ///
    /// A failure here fails the whole document; sources that can detect a
    /// single bad page should skip it and log a warning instead.
    fn pages(&self, path: &Path) -> Result<Vec<PageText>, DocumentError>;
}
