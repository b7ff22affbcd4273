//! # Schematic Document Ingestion
//!
//! Pulls the outline elements out of an uploaded SVG schematic. Only
//! `<path>` elements are read; each contributes its `d` command string plus
//! the optional `id` and `stroke` attributes used to name and color the
//! resulting path definition.

use serde::{Deserialize, Serialize};
use stitchgrid_core::{GeometryError, Result};

/// One outline element as found in the source document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathSource {
    /// Raw path command string (`d` attribute).
    pub commands: String,
    /// Element id, used as the definition name when present.
    pub name: Option<String>,
    /// Stroke color, used as the definition color when present.
    pub stroke: Option<String>,
}

impl PathSource {
    /// Creates a source from a bare command string.
    pub fn new(commands: impl Into<String>) -> Self {
        Self {
            commands: commands.into(),
            ..Default::default()
        }
    }
}

/// Outline elements extracted from one schematic document, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchematicDocument {
    pub paths: Vec<PathSource>,
}

impl SchematicDocument {
    /// Builds a document from bare command strings.
    pub fn from_commands<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: commands.into_iter().map(PathSource::new).collect(),
        }
    }

    /// Builds a document from text holding one command string per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::from_commands(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Extracts every `<path>` element from SVG content.
    pub fn from_svg(svg_content: &str) -> Result<Self> {
        if !svg_content.contains("<svg") {
            return Err(GeometryError::MissingSvgRoot.into());
        }

        let mut paths = Vec::new();
        let mut search_pos = 0;
        while let Some(tag_start) = svg_content[search_pos..].find("<path") {
            let abs_tag_start = search_pos + tag_start;
            let Some(tag_len) = svg_content[abs_tag_start..].find('>') else {
                tracing::warn!("Unterminated <path> tag at byte {}", abs_tag_start);
                break;
            };
            let tag = &svg_content[abs_tag_start..abs_tag_start + tag_len];
            search_pos = abs_tag_start + tag_len + 1;

            match extract_attr(tag, "d").map(str::trim) {
                Some(d) if !d.is_empty() => paths.push(PathSource {
                    commands: d.to_string(),
                    name: extract_attr(tag, "id").map(str::to_string),
                    stroke: extract_attr(tag, "stroke")
                        .filter(|s| !s.is_empty() && *s != "none")
                        .map(str::to_string),
                }),
                _ => tracing::warn!("Skipping <path> without path data at byte {}", abs_tag_start),
            }
        }

        tracing::debug!("Extracted {} outline paths from SVG", paths.len());
        Ok(Self { paths })
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}

/// Reads a quoted attribute value from a tag body.
///
/// The attribute name must be preceded by whitespace so that `d` does not
/// match the tail of `id`.
fn extract_attr<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    for quote in ['"', '\''] {
        let pattern = format!("{attr}={quote}");
        let mut from = 0;
        while let Some(found) = tag[from..].find(&pattern) {
            let start = from + found;
            let preceded_by_space = tag[..start]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
            let value_start = start + pattern.len();
            if preceded_by_space {
                if let Some(end) = tag[value_start..].find(quote) {
                    return Some(&tag[value_start..value_start + end]);
                }
            }
            from = value_start;
        }
    }
    None
}
