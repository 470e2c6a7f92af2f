//! Page elements - the building blocks of designs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse an element ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of element kinds a design can place.
///
/// The kind of an element is fixed at creation; changing kind is
/// delete-and-recreate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Single-line text input.
    Input,
    /// Password input.
    Password,
    /// Clickable button.
    Button,
    /// Paragraph text.
    Text,
    /// Heading text.
    Heading,
    /// Horizontal divider rule.
    Divider,
    /// Checkbox with a label.
    Checkbox,
    /// Hyperlink.
    Link,
    /// Image placeholder.
    Image,
    /// Row of social links.
    Social,
}

impl ElementKind {
    /// All kinds, in palette order.
    pub const ALL: [Self; 10] = [
        Self::Input,
        Self::Password,
        Self::Button,
        Self::Text,
        Self::Heading,
        Self::Divider,
        Self::Checkbox,
        Self::Link,
        Self::Image,
        Self::Social,
    ];

    /// Whether this kind accepts a placeholder string.
    #[must_use]
    pub const fn is_input_like(self) -> bool {
        matches!(self, Self::Input | Self::Password)
    }

    /// Human-readable label for palettes and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Password => "Password",
            Self::Button => "Button",
            Self::Text => "Text",
            Self::Heading => "Heading",
            Self::Divider => "Divider",
            Self::Checkbox => "Checkbox",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Social => "Social",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A position on the canvas, in pixels from the top-left origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the left edge.
    pub x: f32,
    /// Pixels from the top edge.
    pub y: f32,
}

impl Position {
    /// Create a position from x/y coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single style value: either a CSS string (`"16px"`, `"#ffffff"`) or a
/// bare number. Values are stored and exported verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// String-valued style, e.g. `"100%"` or `"center"`.
    Str(String),
    /// Numeric style, e.g. a z-offset or opacity.
    Num(f64),
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

/// Style-property map keyed by camelCase property name.
///
/// A `BTreeMap` keeps serialization and exported style strings deterministic.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A single placeable unit on the builder canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, immutable after creation.
    pub id: ElementId,
    /// Element kind, immutable after creation.
    pub kind: ElementKind,
    /// Style properties, camelCase keys, last write wins per key.
    #[serde(default)]
    pub styles: StyleMap,
    /// Display text or value; meaning depends on `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Placeholder text for input-like kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Position in pixels relative to the canvas origin.
    #[serde(default)]
    pub position: Position,
    /// Element width in pixels, used for clamping and export.
    pub width: f32,
    /// Paint and selection order.
    #[serde(default)]
    pub z_index: i32,
}

impl Element {
    /// Create a new element of the given kind with a fresh ID.
    #[must_use]
    pub fn new(kind: ElementKind, width: f32) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            styles: StyleMap::new(),
            content: None,
            placeholder: None,
            position: Position::default(),
            width,
            z_index: 0,
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the style map.
    #[must_use]
    pub fn with_styles(mut self, styles: StyleMap) -> Self {
        self.styles = styles;
        self
    }

    /// Set the content text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the z-index.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Merge a style patch into this element, last write wins per key.
    pub fn merge_styles(&mut self, patch: StyleMap) {
        for (key, value) in patch {
            self.styles.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_id_display_parse_round_trip() {
        let id = ElementId::new();
        let parsed = ElementId::parse(&id.to_string()).expect("parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_kind_input_like() {
        assert!(ElementKind::Input.is_input_like());
        assert!(ElementKind::Password.is_input_like());
        assert!(!ElementKind::Button.is_input_like());
        assert!(!ElementKind::Divider.is_input_like());
    }

    #[test]
    fn test_merge_styles_last_write_wins() {
        let mut element = Element::new(ElementKind::Button, 120.0);
        element
            .styles
            .insert("backgroundColor".to_string(), "#ffffff".into());

        let mut patch = StyleMap::new();
        patch.insert("backgroundColor".to_string(), "#000000".into());
        patch.insert("borderRadius".to_string(), "4px".into());
        element.merge_styles(patch);

        assert_eq!(
            element.styles.get("backgroundColor"),
            Some(&StyleValue::Str("#000000".to_string()))
        );
        assert_eq!(element.styles.len(), 2);
    }

    #[test]
    fn test_style_value_untagged_serde() {
        let styles: StyleMap =
            serde_json::from_str(r#"{"fontSize": "16px", "opacity": 0.5}"#).expect("parse");
        assert_eq!(styles.get("fontSize"), Some(&StyleValue::Str("16px".into())));
        assert_eq!(styles.get("opacity"), Some(&StyleValue::Num(0.5)));
    }
}
