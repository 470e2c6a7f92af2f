//! Simulated device viewports and the proportional rescale between them.

use serde::{Deserialize, Serialize};

use crate::element::Element;

/// The simulated device width used to preview responsive layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Phone preview, 375px reference width.
    Mobile,
    /// Tablet preview, 768px reference width.
    Tablet,
    /// Desktop preview, 1200px reference width.
    Desktop,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::Desktop
    }
}

impl Viewport {
    /// Reference canvas width for this viewport, in pixels.
    #[must_use]
    pub const fn width(self) -> f32 {
        match self {
            Self::Mobile => 375.0,
            Self::Tablet => 768.0,
            Self::Desktop => 1200.0,
        }
    }

    /// Lowercase name matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rescale element x-positions proportionally for a viewport width change.
///
/// `x' = x * (to / from)`; y is left unchanged, and no re-clamp is applied
/// afterwards, so elements can land outside the new canvas. This is a lossy,
/// approximate transform: widths are not resized and repeated switching
/// accumulates rounding drift.
pub fn rescale_positions(elements: &mut [Element], from_width: f32, to_width: f32) {
    if from_width <= 0.0 || (from_width - to_width).abs() < f32::EPSILON {
        return;
    }
    let factor = to_width / from_width;
    for element in elements {
        element.position.x *= factor;
    }
}
