//! Locates the description file and converts it to HTML.

use crate::error::SyncError;
use markdown_ppp::html_printer::{config::Config as HtmlConfig, render_html};
use markdown_ppp::parser::{parse_markdown, MarkdownParserState};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk format of the resolved description file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Html,
    Markdown,
}

/// Raw description content, read once from disk.
#[derive(Debug, Clone)]
pub struct DescriptionSource {
    pub content: String,
    pub format: DescriptionFormat,
}

/// Resolves the description for a base path, trying `<base>.html` before
/// `<base>.md`.
pub fn resolve(base: &Path) -> Result<DescriptionSource, SyncError> {
    let html_path = with_suffix(base, ".html");
    if html_path.is_file() {
        return Ok(DescriptionSource {
            content: read(&html_path)?,
            format: DescriptionFormat::Html,
        });
    }

    let md_path = with_suffix(base, ".md");
    if md_path.is_file() {
        return Ok(DescriptionSource {
            content: read(&md_path)?,
            format: DescriptionFormat::Markdown,
        });
    }

    Err(SyncError::DescriptionNotFound(base.display().to_string()))
}

impl DescriptionSource {
    /// Returns the description as HTML, rendering Markdown sources.
    ///
    /// HTML sources are passed through verbatim.
    pub fn into_html(self) -> Result<String, SyncError> {
        match self.format {
            DescriptionFormat::Html => Ok(self.content),
            DescriptionFormat::Markdown => {
                let doc = parse_markdown(MarkdownParserState::default(), &self.content)
                    .map_err(|err| SyncError::MarkdownParse(err.to_string()))?;
                Ok(render_html(&doc, HtmlConfig::default()))
            }
        }
    }
}

// The extension is appended, not substituted: a base path like
// `descriptions/zabbix-7.0` must not lose its trailing component.
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = base.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}

fn read(path: &Path) -> Result<String, SyncError> {
    fs::read_to_string(path)
        .map_err(|err| SyncError::Io(format!("{}: {}", path.display(), err)))
}
