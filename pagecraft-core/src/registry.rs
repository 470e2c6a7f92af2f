//! Default appearance and content per element kind.
//!
//! One registry shared by the create and export paths, so the two cannot
//! drift apart. Every new element starts from the values returned here.

use crate::element::{ElementKind, StyleMap};

/// Vertical space reserved below a drop or drag target, in pixels.
///
/// Elements have no tracked height; clamping against the bottom canvas edge
/// uses this fixed allowance instead.
pub const ELEMENT_HEIGHT_ALLOWANCE: f32 = 50.0;

/// Default appearance and content for one element kind.
#[derive(Debug, Clone)]
pub struct KindDefaults {
    /// Initial style properties.
    pub styles: StyleMap,
    /// Initial content text, if the kind displays any.
    pub content: Option<&'static str>,
    /// Initial placeholder, for input-like kinds.
    pub placeholder: Option<&'static str>,
    /// Initial width in pixels.
    pub width: f32,
}

/// Look up the defaults for an element kind.
#[must_use]
pub fn defaults(kind: ElementKind) -> KindDefaults {
    match kind {
        ElementKind::Input => KindDefaults {
            styles: styles(&[
                ("padding", "8px 12px"),
                ("fontSize", "14px"),
                ("border", "1px solid #d1d5db"),
                ("borderRadius", "6px"),
                ("backgroundColor", "#ffffff"),
                ("color", "#111827"),
            ]),
            content: None,
            placeholder: Some("Enter text"),
            width: 220.0,
        },
        ElementKind::Password => KindDefaults {
            styles: styles(&[
                ("padding", "8px 12px"),
                ("fontSize", "14px"),
                ("border", "1px solid #d1d5db"),
                ("borderRadius", "6px"),
                ("backgroundColor", "#ffffff"),
                ("color", "#111827"),
            ]),
            content: None,
            placeholder: Some("Password"),
            width: 220.0,
        },
        ElementKind::Button => KindDefaults {
            styles: styles(&[
                ("padding", "10px 20px"),
                ("fontSize", "14px"),
                ("fontWeight", "600"),
                ("border", "none"),
                ("borderRadius", "6px"),
                ("backgroundColor", "#2563eb"),
                ("color", "#ffffff"),
                ("cursor", "pointer"),
            ]),
            content: Some("Click me"),
            placeholder: None,
            width: 140.0,
        },
        ElementKind::Text => KindDefaults {
            styles: styles(&[
                ("fontSize", "14px"),
                ("lineHeight", "1.5"),
                ("color", "#374151"),
            ]),
            content: Some("Lorem ipsum dolor sit amet."),
            placeholder: None,
            width: 280.0,
        },
        ElementKind::Heading => KindDefaults {
            styles: styles(&[
                ("fontSize", "28px"),
                ("fontWeight", "700"),
                ("color", "#111827"),
            ]),
            content: Some("Heading"),
            placeholder: None,
            width: 320.0,
        },
        ElementKind::Divider => KindDefaults {
            styles: styles(&[
                ("border", "none"),
                ("borderTop", "1px solid #e5e7eb"),
            ]),
            content: None,
            placeholder: None,
            width: 300.0,
        },
        ElementKind::Checkbox => KindDefaults {
            styles: styles(&[("fontSize", "14px"), ("color", "#374151")]),
            content: Some("I agree"),
            placeholder: None,
            width: 160.0,
        },
        ElementKind::Link => KindDefaults {
            styles: styles(&[
                ("fontSize", "14px"),
                ("color", "#2563eb"),
                ("textDecoration", "underline"),
            ]),
            content: Some("Learn more"),
            placeholder: None,
            width: 120.0,
        },
        ElementKind::Image => KindDefaults {
            styles: styles(&[("borderRadius", "4px"), ("objectFit", "cover")]),
            content: None,
            placeholder: None,
            width: 240.0,
        },
        ElementKind::Social => KindDefaults {
            styles: styles(&[("fontSize", "18px"), ("color", "#6b7280")]),
            content: None,
            placeholder: None,
            width: 180.0,
        },
    }
}

fn styles(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_positive_width() {
        for kind in ElementKind::ALL {
            assert!(defaults(kind).width > 0.0, "{kind} width");
        }
    }

    #[test]
    fn test_placeholder_only_for_input_like_kinds() {
        for kind in ElementKind::ALL {
            let d = defaults(kind);
            assert_eq!(
                d.placeholder.is_some(),
                kind.is_input_like(),
                "{kind} placeholder",
            );
        }
    }

    #[test]
    fn test_style_keys_are_camel_case() {
        for kind in ElementKind::ALL {
            for key in defaults(kind).styles.keys() {
                assert!(
                    !key.contains('-') && !key.contains('_'),
                    "{kind} style key {key} must be camelCase",
                );
            }
        }
    }
}
