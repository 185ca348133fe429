//! PixelWall Core - Region allocation and occupancy engine
//!
//! This is the Rust core of PixelWall, compiled to both native and WASM.
//! It implements:
//! - A fixed-size grid of addressable cells
//! - Append-only storage of square claims with frozen content and style
//! - Overlap testing and per-cell owner resolution
//! - Versioned JSON snapshots for persistence collaborators
//!
//! # Examples
//!
//! ```rust
//! use pixelwall_core::{ClaimRequest, Grid, RegionStore, RejectionReason};
//!
//! let mut store = RegionStore::new(Grid::default());
//!
//! let claim = store
//!     .add_claim(ClaimRequest::text(0, 0, "HI").with_size(3))
//!     .unwrap();
//! assert_eq!(claim.region.area(), 9);
//!
//! let rejected = store.add_claim(ClaimRequest::text(1, 1, "X").with_size(2));
//! assert!(matches!(rejected, Err(RejectionReason::Overlap { .. })));
//! assert_eq!(store.list_claims().len(), 1);
//! ```

pub mod claim;
pub mod config;
pub mod error;
pub mod grid;
pub mod occupancy;
pub mod persistence;
pub mod region;
pub mod store;
pub mod style;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use claim::{Claim, ClaimRequest, ContentKind, StyleMode};
pub use config::WallConfig;
pub use error::{RejectionKind, RejectionReason, Result, WallError};
pub use grid::Grid;
pub use occupancy::{CellIndex, CellView};
pub use persistence::WallSnapshot;
pub use region::{Cell, Region};
pub use store::{RegionStore, SharedRegionStore};
pub use style::{Palette, Style};

/// Claim identifier type
pub type ClaimId = uuid::Uuid;
