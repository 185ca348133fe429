//! Region Store - the authoritative, append-only list of claims
//!
//! All mutation goes through [`RegionStore::add_claim`], which validates a
//! request against the grid and every stored claim before appending it.
//! A rejected request leaves the store untouched.
//!
//! # Validation order
//!
//! The first failing check wins:
//! 1. Empty content → `EmptyContent`
//! 2. Image smaller than the configured minimum → `ImageTooSmall`
//! 3. Region off the grid (or negative / zero-sized) → `OutOfBounds`
//! 4. Region intersecting a stored claim → `Overlap`
//!
//! # Example
//!
//! ```
//! use pixelwall_core::{Cell, ClaimRequest, Grid, RegionStore};
//!
//! let mut store = RegionStore::new(Grid::default());
//! store.add_claim(ClaimRequest::text(0, 0, "A").with_size(5)).unwrap();
//! store.add_claim(ClaimRequest::text(0, 5, "B").with_size(5)).unwrap();
//!
//! assert_eq!(store.claim_at(Cell::new(4, 5)).unwrap().value, "B");
//! assert_eq!(store.anchor_at(Cell::new(4, 4)), Some(Cell::new(0, 0)));
//! ```

use crate::claim::{Claim, ClaimRequest, ContentKind};
use crate::config::WallConfig;
use crate::error::{RejectionReason, Result, WallError};
use crate::grid::Grid;
use crate::occupancy::{self, CellIndex, CellView};
use crate::region::{Cell, Region};
use crate::style::resolve_style;
use crate::ClaimId;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Append-only claim storage for one grid
#[derive(Debug, Clone)]
pub struct RegionStore {
    grid: Grid,
    config: WallConfig,

    /// Claims in insertion order
    claims: Vec<Claim>,

    /// Covered cell → position in `claims`
    index: CellIndex,

    /// Random source for style resolution
    rng: StdRng,
}

impl RegionStore {
    /// Create an empty store with default configuration
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, WallConfig::default())
    }

    /// Create an empty store with the given configuration
    pub fn with_config(grid: Grid, config: WallConfig) -> Self {
        let rng = StdRng::from_rng(&mut rand::rng());
        Self::with_rng(grid, config, rng)
    }

    /// Create an empty store with an explicit random source
    pub fn with_rng(grid: Grid, config: WallConfig, rng: StdRng) -> Self {
        Self {
            grid,
            config,
            claims: Vec::new(),
            index: CellIndex::new(),
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Snapshot of all claims in insertion order
    pub fn list_claims(&self) -> Vec<Claim> {
        self.claims.clone()
    }

    /// Borrowed view of all claims in insertion order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Look up a claim by id
    pub fn get(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|claim| &claim.id == id)
    }

    /// Run every validation step without mutating the store
    ///
    /// Returns the normalized region the request would occupy.
    pub fn check(&self, request: &ClaimRequest) -> std::result::Result<Region, RejectionReason> {
        if request.value.is_empty() {
            return Err(RejectionReason::EmptyContent);
        }

        if request.kind == ContentKind::Image
            && request.size < i64::from(self.config.min_image_size)
        {
            return Err(RejectionReason::ImageTooSmall {
                size: request.size,
                min: self.config.min_image_size,
            });
        }

        let region = request
            .region()
            .filter(|region| occupancy::is_within_bounds(&self.grid, region))
            .ok_or(RejectionReason::OutOfBounds)?;

        if let Some(position) = self.index.find_conflict(&region) {
            return Err(RejectionReason::Overlap {
                conflicting: self.claims[position].id,
            });
        }

        Ok(region)
    }

    /// Validate a request and, on success, append it as a new claim
    ///
    /// Text claims get their style resolved here, once.
    pub fn add_claim(&mut self, request: ClaimRequest) -> std::result::Result<Claim, RejectionReason> {
        let region = match self.check(&request) {
            Ok(region) => region,
            Err(reason) => {
                tracing::debug!(
                    row = request.anchor_row,
                    col = request.anchor_col,
                    size = request.size,
                    %reason,
                    "claim rejected"
                );
                return Err(reason);
            }
        };

        let style = match request.kind {
            ContentKind::Text => Some(resolve_style(
                request.style_mode,
                request.style.as_ref(),
                &self.config.palette,
                &self.config.fallback,
                &mut self.rng,
            )),
            ContentKind::Image => None,
        };

        let claim = Claim {
            id: ClaimId::new_v4(),
            region,
            kind: request.kind,
            value: request.value,
            style_mode: request.style_mode,
            style,
            price: self.quote(&region),
        };

        tracing::debug!(
            id = %claim.id,
            row = region.anchor_row,
            col = region.anchor_col,
            size = region.size,
            "claim accepted"
        );

        self.append(claim.clone());
        Ok(claim)
    }

    /// Append previously accepted claims in one step
    ///
    /// Bounds and content are verified as a guard against corrupt input.
    /// Overlap is detected while the claims are indexed, against both the
    /// claims already stored and earlier claims in the same batch. The load
    /// is all-or-nothing: if any claim fails, nothing is appended.
    pub fn bulk_load(&mut self, claims: Vec<Claim>) -> Result<usize> {
        let offset = self.claims.len();
        let mut staged = CellIndex::new();

        for (index, claim) in claims.iter().enumerate() {
            if !occupancy::is_within_bounds(&self.grid, &claim.region) {
                tracing::warn!(index, id = %claim.id, "corrupt claim outside grid");
                return Err(WallError::CorruptClaim {
                    index,
                    reason: RejectionReason::OutOfBounds,
                });
            }
            if claim.value.is_empty() {
                tracing::warn!(index, id = %claim.id, "corrupt claim without content");
                return Err(WallError::CorruptClaim {
                    index,
                    reason: RejectionReason::EmptyContent,
                });
            }

            let conflicting = match self.index.find_conflict(&claim.region) {
                Some(position) => Some(self.claims[position].id),
                None => staged
                    .find_conflict(&claim.region)
                    .map(|position| claims[position - offset].id),
            };
            if let Some(conflicting) = conflicting {
                tracing::warn!(index, id = %claim.id, %conflicting, "corrupt claim overlaps");
                return Err(WallError::CorruptClaim {
                    index,
                    reason: RejectionReason::Overlap { conflicting },
                });
            }

            staged.insert(&claim.region, offset + index);
        }

        let count = claims.len();
        self.claims.extend(claims);
        self.index.merge(staged);

        tracing::info!(count, total = self.claims.len(), "claims loaded");
        Ok(count)
    }

    fn append(&mut self, claim: Claim) {
        self.index.insert(&claim.region, self.claims.len());
        self.claims.push(claim);
    }

    /// Check whether a region is on the grid and unclaimed
    pub fn is_free(&self, region: &Region) -> bool {
        occupancy::is_within_bounds(&self.grid, region) && self.index.find_conflict(region).is_none()
    }

    /// Claim covering a cell
    pub fn claim_at(&self, cell: Cell) -> Option<&Claim> {
        self.index.owner(cell).and_then(|pos| self.claims.get(pos))
    }

    /// Anchor cell of the claim covering a cell
    pub fn anchor_at(&self, cell: Cell) -> Option<Cell> {
        self.claim_at(cell).map(Claim::anchor)
    }

    /// Renderer view of one cell
    pub fn cell_view(&self, cell: Cell) -> CellView<'_> {
        occupancy::cell_view_indexed(cell, &self.index, &self.claims)
    }

    /// Price of claiming a region under this store's configuration
    pub fn quote(&self, region: &Region) -> u64 {
        region.area().saturating_mul(self.config.price_per_cell)
    }

    /// Number of cells covered by any claim
    pub fn total_claimed_cells(&self) -> u64 {
        self.index.occupied() as u64
    }
}

/// Thread-safe store handle for multi-session use
///
/// `add_claim` holds the lock across validation and append, so two
/// concurrent requests can never both pass the overlap check.
#[derive(Debug, Clone)]
pub struct SharedRegionStore {
    inner: Arc<Mutex<RegionStore>>,
}

impl SharedRegionStore {
    pub fn new(store: RegionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Mutation is all-or-nothing, so a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, RegionStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_claim(&self, request: ClaimRequest) -> std::result::Result<Claim, RejectionReason> {
        self.lock().add_claim(request)
    }

    pub fn list_claims(&self) -> Vec<Claim> {
        self.lock().list_claims()
    }

    pub fn claim_at(&self, cell: Cell) -> Option<Claim> {
        self.lock().claim_at(cell).cloned()
    }

    /// Run a read-only closure against a consistent view of the store
    pub fn read<T>(&self, f: impl FnOnce(&RegionStore) -> T) -> T {
        f(&*self.lock())
    }
}
