//! Design export to a self-contained static HTML document.
//!
//! Walks each page's elements in ascending z-order and emits one absolutely
//! positioned fragment per element kind. Style maps are converted from
//! camelCase keys to kebab-case inline CSS; multi-page designs get a
//! navigation bar and a small inline script toggling an `.active` class.

use std::fmt::Write;

use pagecraft_core::{Document, Element, ElementKind, Page};

use crate::error::{ExportError, ExportResult};

/// Configuration for HTML export.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Document title.
    pub title: String,
    /// The single placeholder endpoint used for image elements.
    pub placeholder_image_url: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            title: "PageCraft Design".to_string(),
            placeholder_image_url: "https://placehold.co/240x160".to_string(),
        }
    }
}

/// Exports a design [`Document`] to a static HTML string.
pub struct HtmlExporter {
    config: ExportConfig,
}

impl HtmlExporter {
    /// Create a new exporter with the given configuration.
    #[must_use]
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Create an exporter with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ExportConfig::default())
    }

    /// Export a design to a complete HTML document.
    ///
    /// The entire document is built in memory as one string; there is no
    /// streaming and no size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyDesign`] if the document has no pages.
    pub fn export(&self, document: &Document) -> ExportResult<String> {
        if document.pages.is_empty() {
            return Err(ExportError::EmptyDesign);
        }

        let canvas_width = document.canvas_width();
        let canvas_height = document.canvas_height;
        let multi_page = document.pages.len() > 1;

        let mut html = String::with_capacity(4096);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.config.title));
        let _ = write!(
            html,
            "<style>\nbody {{ margin: 0; font-family: sans-serif; background: #f3f4f6; }}\n\
             .page-nav {{ display: flex; gap: 8px; padding: 12px; justify-content: center; }}\n\
             .page {{ position: relative; width: {canvas_width}px; height: {canvas_height}px; \
             margin: 0 auto; background: #ffffff; overflow: hidden; display: none; }}\n\
             .page.active {{ display: block; }}\n</style>\n",
        );
        html.push_str("</head>\n<body>\n");

        if multi_page {
            html.push_str("<nav class=\"page-nav\">\n");
            for page in &document.pages {
                let _ = writeln!(
                    html,
                    "<button onclick=\"showPage('page-{}')\">{}</button>",
                    page.id,
                    escape_html(&page.name),
                );
            }
            html.push_str("</nav>\n");
        }

        for (index, page) in document.pages.iter().enumerate() {
            self.render_page(&mut html, page, index == 0);
        }

        if multi_page {
            html.push_str(
                "<script>\nfunction showPage(id) {\n\
                 document.querySelectorAll('.page').forEach(function (page) {\n\
                 page.classList.toggle('active', page.id === id);\n\
                 });\n}\n</script>\n",
            );
        }

        html.push_str("</body>\n</html>\n");

        tracing::debug!(
            "exported {} pages / {} elements ({} bytes)",
            document.pages.len(),
            document.element_count(),
            html.len(),
        );
        Ok(html)
    }

    /// Render one page container with its elements in ascending z-order.
    fn render_page(&self, html: &mut String, page: &Page, active: bool) {
        let class = if active { "page active" } else { "page" };
        let _ = writeln!(html, "<div class=\"{class}\" id=\"page-{}\">", page.id);
        for element in page.elements_in_z_order() {
            self.render_element(html, element);
        }
        html.push_str("</div>\n");
    }

    /// Render a single element as a positioned HTML fragment.
    fn render_element(&self, html: &mut String, element: &Element) {
        let style = inline_style(element);
        let content = element.content.as_deref().unwrap_or("");
        let escaped = escape_html(content);

        match element.kind {
            ElementKind::Input => {
                let placeholder = escape_html(element.placeholder.as_deref().unwrap_or(""));
                let _ = writeln!(
                    html,
                    "<input type=\"text\" placeholder=\"{placeholder}\" style=\"{style}\">",
                );
            }
            ElementKind::Password => {
                let placeholder = escape_html(element.placeholder.as_deref().unwrap_or(""));
                let _ = writeln!(
                    html,
                    "<input type=\"password\" placeholder=\"{placeholder}\" style=\"{style}\">",
                );
            }
            ElementKind::Button => {
                let _ = writeln!(html, "<button style=\"{style}\">{escaped}</button>");
            }
            ElementKind::Text => {
                let _ = writeln!(html, "<p style=\"{style}\">{escaped}</p>");
            }
            ElementKind::Heading => {
                let _ = writeln!(html, "<h1 style=\"{style}\">{escaped}</h1>");
            }
            ElementKind::Divider => {
                let _ = writeln!(html, "<hr style=\"{style}\">");
            }
            ElementKind::Checkbox => {
                let _ = writeln!(
                    html,
                    "<label style=\"{style}\"><input type=\"checkbox\"> {escaped}</label>",
                );
            }
            ElementKind::Link => {
                let _ = writeln!(html, "<a href=\"#\" style=\"{style}\">{escaped}</a>");
            }
            ElementKind::Image => {
                let _ = writeln!(
                    html,
                    "<img src=\"{}\" alt=\"{escaped}\" style=\"{style}\">",
                    escape_html(&self.config.placeholder_image_url),
                );
            }
            ElementKind::Social => {
                let _ = writeln!(
                    html,
                    "<div style=\"{style}\"><a href=\"#\">Twitter</a> <a href=\"#\">Facebook</a> \
                     <a href=\"#\">Instagram</a></div>",
                );
            }
        }
    }
}

/// Build the inline style string for an element.
///
/// Style keys are converted from camelCase to kebab-case; position and width
/// are appended from the element's typed fields.
fn inline_style(element: &Element) -> String {
    let mut style = String::with_capacity(128);
    for (key, value) in &element.styles {
        let _ = write!(style, "{}: {value}; ", camel_to_kebab(key));
    }
    let _ = write!(
        style,
        "position: absolute; left: {}px; top: {}px; width: {}px;",
        element.position.x, element.position.y, element.width,
    );
    style
}

/// Convert a camelCase style key to kebab-case.
///
/// This must exactly invert the casing convention of the style map or
/// exported styles are silently mis-applied.
fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Escape special HTML characters in text and attribute values.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
