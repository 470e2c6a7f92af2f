//! Canonical serialized representation of a design, used by save and load.

use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, BuilderResult};
use crate::page::{Document, Page, DEFAULT_CANVAS_HEIGHT};
use crate::viewport::Viewport;

/// Current design file format version.
pub const DESIGN_VERSION: u32 = 1;

/// Default filename for saved designs.
pub const DEFAULT_DESIGN_FILENAME: &str = "website-design.json";

/// The on-disk design document: `{version, viewport, canvas_height, pages}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    /// File format version.
    #[serde(default = "DesignDocument::default_version")]
    pub version: u32,
    /// Preview viewport at save time.
    pub viewport: Viewport,
    /// Canvas height in pixels.
    #[serde(default = "DesignDocument::default_canvas_height")]
    pub canvas_height: f32,
    /// All pages with their elements.
    pub pages: Vec<Page>,
}

impl DesignDocument {
    const fn default_version() -> u32 {
        DESIGN_VERSION
    }

    const fn default_canvas_height() -> f32 {
        DEFAULT_CANVAS_HEIGHT
    }

    /// Build a design document from the live document.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        Self {
            version: DESIGN_VERSION,
            viewport: document.viewport,
            canvas_height: document.canvas_height,
            pages: document.pages.clone(),
        }
    }

    /// Materialize a runtime document, validating structure first.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidDesign`] if the design has no pages or
    /// an unsupported version.
    pub fn into_document(self) -> BuilderResult<Document> {
        if self.version > DESIGN_VERSION {
            return Err(BuilderError::InvalidDesign(format!(
                "unsupported design version {} (newest supported: {DESIGN_VERSION})",
                self.version,
            )));
        }
        if self.pages.is_empty() {
            return Err(BuilderError::InvalidDesign(
                "design has no pages".to_string(),
            ));
        }
        let selected_page = self.pages[0].id;
        Ok(Document {
            pages: self.pages,
            selected_page,
            viewport: self.viewport,
            canvas_height: self.canvas_height,
        })
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BuilderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a design document from JSON.
    ///
    /// Parsing is complete before any state is produced, so a malformed file
    /// can never leave a caller with a partially-applied design.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind, Position};

    fn sample_document() -> Document {
        let mut document = Document::new(Viewport::Tablet);
        let element = Element::new(ElementKind::Heading, 320.0)
            .with_position(Position::new(40.0, 60.0))
            .with_content("Welcome");
        document.current_page_mut().elements.push(element);
        document
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let document = sample_document();
        let json = DesignDocument::from_document(&document)
            .to_json()
            .expect("serialize");
        let restored = DesignDocument::from_json(&json)
            .expect("parse")
            .into_document()
            .expect("materialize");

        assert_eq!(restored.viewport, Viewport::Tablet);
        assert_eq!(restored.pages, document.pages);
        assert!((restored.canvas_height - document.canvas_height).abs() < f32::EPSILON);
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(DesignDocument::from_json("{not json").is_err());
        assert!(DesignDocument::from_json(r#"{"pages": "nope"}"#).is_err());
    }

    #[test]
    fn test_empty_pages_rejected() {
        let design = DesignDocument {
            version: DESIGN_VERSION,
            viewport: Viewport::Desktop,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            pages: Vec::new(),
        };
        assert!(matches!(
            design.into_document(),
            Err(BuilderError::InvalidDesign(_))
        ));
    }

    #[test]
    fn test_newer_version_rejected() {
        let design = DesignDocument {
            version: DESIGN_VERSION + 1,
            viewport: Viewport::Desktop,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            pages: vec![Page::new("only")],
        };
        assert!(design.into_document().is_err());
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{"viewport": "mobile", "pages": [{"id": "7a9f66b9-1c9e-4d7e-9f0a-67f6f3b7b0aa", "name": "Landing"}]}"#;
        let document = DesignDocument::from_json(json)
            .expect("parse")
            .into_document()
            .expect("materialize");
        assert_eq!(document.viewport, Viewport::Mobile);
        assert!((document.canvas_height - DEFAULT_CANVAS_HEIGHT).abs() < f32::EPSILON);
        assert!(document.pages[0].elements.is_empty());
    }
}
