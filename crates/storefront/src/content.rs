//! Content management for markdown-based policy pages.
//!
//! This module loads markdown files from `<content_dir>/pages` at startup,
//! parses frontmatter metadata, and renders markdown to HTML. The Privacy,
//! Terms and Shipping pages are served from this store.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use comrak::{Options, markdown_to_html};
use gray_matter::{Matter, ParsedEntity, engine::YAML};
use serde::Deserialize;

/// Metadata for static pages (terms, privacy, etc.)
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

/// A rendered page with metadata and HTML content
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub meta: PageMeta,
    pub content_html: String,
}

/// Content store that holds all loaded pages in memory
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    pages: Arc<HashMap<String, Page>>,
}

impl ContentStore {
    /// Load all content from the filesystem.
    ///
    /// A missing `pages` directory yields an empty store; pages that fail to
    /// parse are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pages directory exists but cannot be read.
    pub fn load(content_dir: &Path) -> Result<Self, ContentError> {
        let pages = Self::load_pages(&content_dir.join("pages"))?;
        Ok(Self {
            pages: Arc::new(pages),
        })
    }

    fn load_pages(dir: &Path) -> Result<HashMap<String, Page>, ContentError> {
        let mut pages = HashMap::new();

        if !dir.exists() {
            tracing::warn!("Pages directory does not exist: {:?}", dir);
            return Ok(pages);
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ContentError::Io(e.to_string()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "md") {
                match Self::load_page(&path) {
                    Ok(page) => {
                        tracing::info!("Loaded page: {}", page.slug);
                        pages.insert(page.slug.clone(), page);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load page {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(pages)
    }

    fn load_page(path: &Path) -> Result<Page, ContentError> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::Io(e.to_string()))?;

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ContentError::Parse("Invalid filename".to_string()))?;

        parse_page(slug, &content)
    }

    /// Get a page by slug
    #[must_use]
    pub fn get_page(&self, slug: &str) -> Option<&Page> {
        self.pages.get(slug)
    }

    /// Number of loaded pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Parse a markdown document with YAML frontmatter into a page.
///
/// # Errors
///
/// Returns `ContentError::Parse` if the frontmatter is missing or malformed.
pub fn parse_page(slug: &str, source: &str) -> Result<Page, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed: ParsedEntity<PageMeta> = matter
        .parse(source)
        .map_err(|e| ContentError::Parse(format!("Failed to parse frontmatter: {e}")))?;
    let meta = parsed
        .data
        .ok_or_else(|| ContentError::Parse("Missing frontmatter".to_string()))?;

    Ok(Page {
        slug: slug.to_string(),
        meta,
        content_html: render_markdown(&parsed.content),
    })
}

fn render_markdown(content: &str) -> String {
    let mut options = Options::default();

    // Enable GFM extensions
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.header_ids = Some(String::new());

    // Content is authored in-repo, so raw HTML stays escaped
    options.render.r#unsafe = false;

    markdown_to_html(content, &options)
}

/// Content loading errors
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\ntitle: Shipping Policy\ndescription: How we ship\nupdated_at: 2024-06-01\n---\n\n## Processing\n\nOrders ship in **1-2** days.\n\n| Zone | Days |\n|---|---|\n| US | 5 |\n";

    #[test]
    fn test_parse_page_reads_frontmatter() {
        let page = parse_page("shipping", SAMPLE).unwrap();
        assert_eq!(page.slug, "shipping");
        assert_eq!(page.meta.title, "Shipping Policy");
        assert_eq!(page.meta.description.as_deref(), Some("How we ship"));
        assert_eq!(
            page.meta.updated_at,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
    }

    #[test]
    fn test_parse_page_renders_gfm() {
        let page = parse_page("shipping", SAMPLE).unwrap();
        assert!(page.content_html.contains("<h2"));
        assert!(page.content_html.contains("<strong>1-2</strong>"));
        assert!(page.content_html.contains("<table>"));
    }

    #[test]
    fn test_parse_page_without_frontmatter_fails() {
        let err = parse_page("bare", "# Just markdown\n").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_raw_html_is_not_passed_through() {
        let page = parse_page("x", "---\ntitle: X\n---\n<script>alert(1)</script>\n").unwrap();
        assert!(!page.content_html.contains("<script>"));
    }

    #[test]
    fn test_load_bundled_pages() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("content");
        let store = ContentStore::load(&dir).unwrap();
        for slug in ["privacy", "terms", "shipping"] {
            assert!(store.get_page(slug).is_some(), "missing {slug}");
        }
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let store = ContentStore::load(Path::new("/nonexistent/atelier")).unwrap();
        assert!(store.is_empty());
    }
}
