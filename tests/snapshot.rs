use pixelwall_core::{
    Cell, ClaimRequest, Grid, RegionStore, RejectionReason, WallConfig, WallError, WallSnapshot,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_restore_then_continue_claiming() {
    let mut store = RegionStore::new(Grid::default());
    let first = store
        .add_claim(ClaimRequest::text(0, 0, "HI").with_size(3))
        .unwrap();

    let json = store.snapshot().to_json().unwrap();
    let snapshot = WallSnapshot::from_json(&json).unwrap();
    let mut restored =
        RegionStore::restore_with_rng(snapshot, StdRng::seed_from_u64(3)).unwrap();

    // Restored claims still block overlapping requests
    assert_eq!(
        restored.add_claim(ClaimRequest::text(2, 2, "X")),
        Err(RejectionReason::Overlap {
            conflicting: first.id
        })
    );
    assert!(restored.add_claim(ClaimRequest::text(3, 3, "ok")).is_ok());
    assert_eq!(restored.claim_at(Cell::new(1, 1)).map(|c| c.id), Some(first.id));
    assert_eq!(restored.len(), 2);
}

#[test]
fn test_corrupt_snapshot_is_rejected() {
    let json = r#"{
        "version": 1,
        "grid": {"width": 10, "height": 10, "cell_size": 10},
        "claims": [{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "region": {"anchor_row": 8, "anchor_col": 0, "size": 3},
            "kind": "text",
            "value": "spill",
            "style_mode": "random",
            "style": null,
            "price": 9
        }]
    }"#;

    let snapshot = WallSnapshot::from_json(json).unwrap();
    let err = RegionStore::restore(snapshot).unwrap_err();
    assert!(matches!(
        err,
        WallError::CorruptClaim {
            index: 0,
            reason: RejectionReason::OutOfBounds
        }
    ));
}

#[test]
fn test_custom_rules_survive_round_trip() {
    let config = WallConfig::default().with_min_image_size(2);
    let mut store = RegionStore::with_config(Grid::default(), config);
    store
        .add_claim(ClaimRequest::image(0, 0, 2, "https://example.com/a.png"))
        .unwrap();

    let json = store.snapshot().to_json().unwrap();
    let mut restored = RegionStore::restore(WallSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.config().min_image_size, 2);
    assert!(restored
        .add_claim(ClaimRequest::image(4, 4, 2, "https://example.com/b.png"))
        .is_ok());
}
