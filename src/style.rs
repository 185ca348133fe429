//! Style resolution for text claims
//!
//! A text claim's background color and font are decided exactly once, when
//! the claim is accepted, and stored on the claim. Renderers read the stored
//! values and never roll new ones.
//!
//! # Example
//!
//! ```
//! use pixelwall_core::style::{resolve_style, Palette, Style};
//! use pixelwall_core::StyleMode;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let palette = Palette::default();
//! let fallback = Style::fallback();
//! let mut rng1 = StdRng::seed_from_u64(7);
//! let mut rng2 = StdRng::seed_from_u64(7);
//!
//! let a = resolve_style(StyleMode::Random, None, &palette, &fallback, &mut rng1);
//! let b = resolve_style(StyleMode::Random, None, &palette, &fallback, &mut rng2);
//! assert_eq!(a, b);
//! ```

use crate::claim::StyleMode;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Resolved visual style of a text claim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    /// CSS color string
    pub background_color: String,

    /// CSS font-family string
    pub font_family: String,
}

impl Style {
    pub fn new(background_color: impl Into<String>, font_family: impl Into<String>) -> Self {
        Self {
            background_color: background_color.into(),
            font_family: font_family.into(),
        }
    }

    /// White background, monospace font
    pub fn fallback() -> Self {
        Self::new("#ffffff", "monospace")
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Colors and fonts that random styling draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<String>,
    pub fonts: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>, fonts: Vec<String>) -> Self {
        Self { colors, fonts }
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() || self.fonts.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            "#ffadad", "#ffd6a5", "#fdffb6", "#caffbf", "#9bf6ff", "#a0c4ff", "#bdb2ff",
            "#ffc6ff", "#fffffc", "#d8e2dc",
        ];
        let fonts = [
            "Arial",
            "Courier New",
            "Georgia",
            "Impact",
            "Tahoma",
            "Times New Roman",
            "Trebuchet MS",
            "Verdana",
            "monospace",
        ];

        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            fonts: fonts.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Decide the style for a new text claim
///
/// # Arguments
///
/// * `mode` - `Random` draws from `palette`; `Custom` uses `requested`
/// * `requested` - Caller-supplied style; empty fields fall back individually
/// * `palette` - Colors and fonts for random styling
/// * `fallback` - Used for empty custom fields and for an empty palette list
/// * `rng` - Random source, injectable for deterministic tests
pub fn resolve_style<R: Rng + ?Sized>(
    mode: StyleMode,
    requested: Option<&Style>,
    palette: &Palette,
    fallback: &Style,
    rng: &mut R,
) -> Style {
    match mode {
        StyleMode::Random => {
            let background_color = palette
                .colors
                .choose(rng)
                .unwrap_or(&fallback.background_color)
                .clone();
            let font_family = palette
                .fonts
                .choose(rng)
                .unwrap_or(&fallback.font_family)
                .clone();
            Style {
                background_color,
                font_family,
            }
        }
        StyleMode::Custom => {
            let requested = requested.unwrap_or(fallback);
            Style {
                background_color: non_empty_or(
                    &requested.background_color,
                    &fallback.background_color,
                ),
                font_family: non_empty_or(&requested.font_family, &fallback.font_family),
            }
        }
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
