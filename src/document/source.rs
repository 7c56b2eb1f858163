use std::fs;
use std::path::Path;

use super::{DocumentError, PageSource, PageText};

/// Form feed: the page separator in extracted text
const PAGE_BREAK: char = '\x0C';

/// PDF pages via `pdf-extract`
pub struct PdfPageSource;

impl PageSource for PdfPageSource {
    fn pages(&self, path: &Path) -> Result<Vec<PageText>, DocumentError> {
        tracing::info!(path = %path.display(), "extracting text from PDF");

        let text = pdf_extract::extract_text(path).map_err(|e| DocumentError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let pages = split_pages(&text);
        tracing::info!(path = %path.display(), pages = pages.len(), "extracted pages");
        Ok(pages)
    }
}

/// UTF-8 text files, paginated by form feeds
pub struct TextPageSource;

impl PageSource for TextPageSource {
    fn pages(&self, path: &Path) -> Result<Vec<PageText>, DocumentError> {
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), "invalid UTF-8, decoding lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        Ok(split_pages(&text))
    }
}

/// Pick a page source from the file extension
pub fn source_for_path(path: &Path) -> Box<dyn PageSource> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        Box::new(PdfPageSource)
    } else {
        Box::new(TextPageSource)
    }
}

/// Split extracted text into pages on form feeds
///
/// A trailing form feed does not open an extra page. Text without any
/// form feed is a single page.
pub fn split_pages(text: &str) -> Vec<PageText> {
    let mut raw: Vec<&str> = text.split(PAGE_BREAK).collect();
    if raw.len() > 1 && raw.last().is_some_and(|last| last.trim().is_empty()) {
        raw.pop();
    }

    let total_pages = raw.len();
    raw.into_iter()
        .enumerate()
        .map(|(i, page)| PageText {
            page_number: i + 1,
            text: page.to_string(),
            total_pages,
        })
        .collect()
}
