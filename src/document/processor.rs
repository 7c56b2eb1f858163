use serde_json::Value;
use std::path::Path;

use super::{source_for_path, DocumentError, FileInfo, PageSource, PageText};
use crate::chunker::Chunker;
use crate::metadata::Chunk;

/// Turns whole documents into one ordered chunk list
pub struct DocumentProcessor {
    chunker: Chunker,
    include_page_numbers: bool,
}

impl DocumentProcessor {
    pub fn new(chunker: Chunker) -> Self {
        Self {
            chunker,
            include_page_numbers: true,
        }
    }

    /// Whether `page_number` is added to each page's metadata (default: yes)
    pub fn include_page_numbers(mut self, include: bool) -> Self {
        self.include_page_numbers = include;
        self
    }

    pub fn chunker(&self) -> &Chunker {
        &self.chunker
    }

    /// Chunk one document, choosing the page source by extension
    pub fn process(&self, path: &Path) -> Result<Vec<Chunk>, DocumentError> {
        let source = source_for_path(path);
        self.process_with(path, source.as_ref())
    }

    /// Chunk one document with an explicit page source
    pub fn process_with(
        &self,
        path: &Path,
        source: &dyn PageSource,
    ) -> Result<Vec<Chunk>, DocumentError> {
        if !path.exists() {
            return Err(DocumentError::NotFound(path.to_path_buf()));
        }

        let pages = source.pages(path)?;
        let file_info = FileInfo::from_path(path)?;
        let chunks = self.process_pages(&file_info, &pages);

        tracing::info!(
            path = %path.display(),
            pages = pages.len(),
            chunks = chunks.len(),
            "chunked document"
        );
        Ok(chunks)
    }

    /// Chunk already-extracted pages and assign document-wide positions
    pub fn process_pages(&self, file_info: &FileInfo, pages: &[PageText]) -> Vec<Chunk> {
        let base = file_info.to_metadata();
        let mut chunks = Vec::new();

        for page in pages {
            if page.text.is_empty() {
                continue;
            }

            let tokens = self.chunker.count_tokens(page.text.trim());
            if tokens < self.chunker.min_chunk_size() {
                tracing::warn!(page = page.page_number, tokens, "skipping short page");
                continue;
            }

            let mut metadata = base.clone();
            metadata.insert("total_pages".into(), Value::from(page.total_pages));
            if self.include_page_numbers {
                metadata.insert("page_number".into(), Value::from(page.page_number));
            }

            chunks.extend(self.chunker.build(&page.text, Some(&metadata)));
        }

        assign_global_positions(&mut chunks);
        chunks
    }

    /// Chunk several documents in order
    ///
    /// A document that fails is logged and skipped; none of its chunks are kept.
    pub fn process_many<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<Chunk> {
        let mut all_chunks = Vec::new();

        for path in paths {
            let path = path.as_ref();
            match self.process(path) {
                Ok(chunks) => all_chunks.extend(chunks),
                Err(e) => {
                    tracing::error!(path = %path.display(), "failed to process document: {}", e);
                }
            }
        }

        all_chunks
    }
}

/// Rewrite every chunk's position as `index / total * 100`
///
/// Per-page estimates made while chunking are superseded; this needs the
/// final chunk count, so it runs once after all pages are done.
pub fn assign_global_positions(chunks: &mut [Chunk]) {
    let total = chunks.len();
    for (index, chunk) in chunks.iter_mut().enumerate() {
        chunk.set_position(index as f64 / total as f64 * 100.0);
    }
}
