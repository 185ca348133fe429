//! Claims and claim requests
//!
//! A [`ClaimRequest`] is what an input form hands to the store: raw signed
//! coordinates, content and a styling choice. A [`Claim`] is what the store
//! keeps once the request is accepted. Claims are never edited afterwards.

use crate::region::{Cell, Region};
use crate::style::Style;
use crate::ClaimId;
use serde::{Deserialize, Serialize};

/// What a claim displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Literal message text
    #[serde(alias = "texto")]
    Text,

    /// URL of an image
    #[serde(alias = "imagen")]
    Image,
}

/// How a text claim's style is chosen at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleMode {
    #[default]
    Random,
    Custom,
}

/// Input shape produced by an input collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub anchor_row: i64,
    pub anchor_col: i64,
    pub size: i64,
    pub kind: ContentKind,
    pub value: String,
    #[serde(default)]
    pub style_mode: StyleMode,
    #[serde(default)]
    pub style: Option<Style>,
}

impl ClaimRequest {
    /// Text request with size 1 and random styling
    pub fn text(anchor_row: i64, anchor_col: i64, value: impl Into<String>) -> Self {
        Self {
            anchor_row,
            anchor_col,
            size: 1,
            kind: ContentKind::Text,
            value: value.into(),
            style_mode: StyleMode::Random,
            style: None,
        }
    }

    /// Image request pointing at `url`
    pub fn image(anchor_row: i64, anchor_col: i64, size: i64, url: impl Into<String>) -> Self {
        Self {
            anchor_row,
            anchor_col,
            size,
            kind: ContentKind::Image,
            value: url.into(),
            style_mode: StyleMode::Random,
            style: None,
        }
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    /// Switch to custom styling with the given values
    pub fn with_style(mut self, style: Style) -> Self {
        self.style_mode = StyleMode::Custom;
        self.style = Some(style);
        self
    }

    /// Normalized region, or `None` if the raw values cannot form one
    pub fn region(&self) -> Option<Region> {
        Region::from_signed(self.anchor_row, self.anchor_col, self.size)
    }
}

/// A stored, immutable claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier assigned on acceptance
    pub id: ClaimId,

    /// Covered cells
    pub region: Region,

    pub kind: ContentKind,

    /// Message text or image URL
    pub value: String,

    pub style_mode: StyleMode,

    /// Resolved style; `None` for image claims
    pub style: Option<Style>,

    /// Price quoted when the claim was accepted
    pub price: u64,
}

impl Claim {
    /// Anchor (top-left) cell
    pub fn anchor(&self) -> Cell {
        self.region.anchor()
    }

    /// Check whether this claim covers a cell
    pub fn covers(&self, cell: Cell) -> bool {
        self.region.contains(cell)
    }

    /// Check whether a cell is this claim's anchor, where content is drawn
    pub fn is_anchor(&self, cell: Cell) -> bool {
        self.anchor() == cell
    }
}
