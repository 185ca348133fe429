//! Snapshot layer - convert a store to/from a durable JSON form
//!
//! A persistence collaborator (browser local storage, a file, a database
//! row) saves [`WallSnapshot`] JSON and re-seeds a store from it at startup.
//! The snapshot also carries the store's [`WallConfig`], so a restored
//! store accepts and prices claims by the same rules. Restoring goes
//! through [`RegionStore::bulk_load`].

use crate::claim::Claim;
use crate::config::WallConfig;
use crate::error::{Result, WallError};
use crate::grid::Grid;
use crate::store::RegionStore;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Current snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable state of a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSnapshot {
    pub version: u32,
    pub grid: Grid,

    /// Rules the claims were accepted under; defaults when absent
    #[serde(default)]
    pub config: WallConfig,

    pub claims: Vec<Claim>,
}

impl WallSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot, rejecting unknown format versions and invalid config
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: WallSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(WallError::UnsupportedVersion(snapshot.version));
        }
        snapshot.config.validate()?;
        Ok(snapshot)
    }
}

impl RegionStore {
    /// Capture the current claims
    pub fn snapshot(&self) -> WallSnapshot {
        WallSnapshot {
            version: SNAPSHOT_VERSION,
            grid: *self.grid(),
            config: self.config().clone(),
            claims: self.list_claims(),
        }
    }

    /// Build a new store, with the snapshot's grid and config
    pub fn restore(snapshot: WallSnapshot) -> Result<Self> {
        let mut store = RegionStore::with_config(snapshot.grid, snapshot.config);
        store.bulk_load(snapshot.claims)?;
        Ok(store)
    }

    /// Build a new store from a snapshot with an explicit random source
    pub fn restore_with_rng(snapshot: WallSnapshot, rng: StdRng) -> Result<Self> {
        let mut store = RegionStore::with_rng(snapshot.grid, snapshot.config, rng);
        store.bulk_load(snapshot.claims)?;
        Ok(store)
    }

    /// Append a snapshot's claims to this store
    ///
    /// The snapshot must have been taken on a grid of the same dimensions.
    /// This store keeps its own config, and claims overlapping ones already
    /// stored reject the whole load.
    pub fn load_snapshot(&mut self, snapshot: WallSnapshot) -> Result<usize> {
        if snapshot.grid.width() != self.grid().width()
            || snapshot.grid.height() != self.grid().height()
        {
            return Err(WallError::GridMismatch {
                expected: self.grid().to_string(),
                found: snapshot.grid.to_string(),
            });
        }
        self.bulk_load(snapshot.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimRequest;
    use crate::region::Cell;

    fn populated() -> RegionStore {
        let mut store = RegionStore::new(Grid::default());
        store
            .add_claim(ClaimRequest::text(0, 0, "HI").with_size(3))
            .unwrap();
        store
            .add_claim(ClaimRequest::image(10, 10, 10, "https://example.com/cat.png"))
            .unwrap();
        store
    }

    #[test]
    fn test_snapshot_restores_claims_and_index() {
        let store = populated();
        let json = store.snapshot().to_json().unwrap();

        let restored = RegionStore::restore(WallSnapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.list_claims(), store.list_claims());
        assert_eq!(restored.anchor_at(Cell::new(19, 19)), Some(Cell::new(10, 10)));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut snapshot = populated().snapshot();
        snapshot.version = 99;
        let json = serde_json::to_string(&snapshot).unwrap();

        assert!(matches!(
            WallSnapshot::from_json(&json),
            Err(WallError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn test_grid_mismatch() {
        let snapshot = populated().snapshot();
        let mut other = RegionStore::new(Grid::new(100, 100, 10).unwrap());

        assert!(matches!(
            other.load_snapshot(snapshot),
            Err(WallError::GridMismatch { .. })
        ));
        assert!(other.is_empty());
    }

    #[test]
    fn test_snapshot_carries_config() {
        let config = WallConfig::from_json_str(
            r#"{"min_image_size": 2, "price_per_cell": 5, "palette": {"colors": ["teal"], "fonts": ["Impact"]}}"#,
        )
        .unwrap();
        let mut store = RegionStore::with_config(Grid::default(), config.clone());
        store
            .add_claim(ClaimRequest::image(0, 0, 2, "https://example.com/a.png"))
            .unwrap();

        let json = store.snapshot().to_json().unwrap();
        let mut restored = RegionStore::restore(WallSnapshot::from_json(&json).unwrap()).unwrap();

        assert_eq!(restored.config(), &config);
        let claim = restored
            .add_claim(ClaimRequest::image(5, 5, 2, "https://example.com/b.png"))
            .unwrap();
        assert_eq!(claim.price, 20);
        let text = restored.add_claim(ClaimRequest::text(9, 9, "hi")).unwrap();
        assert_eq!(text.style, Some(crate::style::Style::new("teal", "Impact")));
    }

    #[test]
    fn test_snapshot_without_config_uses_defaults() {
        let json = r#"{"version": 1, "grid": {"width": 10, "height": 10, "cell_size": 10}, "claims": []}"#;
        let snapshot = WallSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.config, WallConfig::default());
    }

    #[test]
    fn test_zero_sized_grid_rejected() {
        let json = r#"{"version": 1, "grid": {"width": 0, "height": 10, "cell_size": 10}, "claims": []}"#;
        assert!(matches!(
            WallSnapshot::from_json(json),
            Err(WallError::Serialization(_))
        ));
    }

    #[test]
    fn test_load_snapshot_twice_rejected() {
        let snapshot = populated().snapshot();
        let mut store = RegionStore::new(Grid::default());

        assert_eq!(store.load_snapshot(snapshot.clone()).unwrap(), 2);
        assert!(matches!(
            store.load_snapshot(snapshot),
            Err(WallError::CorruptClaim { index: 0, .. })
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            WallSnapshot::from_json("not json"),
            Err(WallError::Serialization(_))
        ));
    }
}
