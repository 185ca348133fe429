//! JavaScript bindings for the PixelWall store

use crate::claim::ClaimRequest;
use crate::config::WallConfig;
use crate::grid::Grid;
use crate::occupancy::CellView;
use crate::persistence::WallSnapshot;
use crate::region::{Cell, Region};
use crate::store::RegionStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Per-cell answer handed to the renderer
#[derive(Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
enum JsCellView<'a> {
    Free,
    Anchor {
        claim: &'a crate::claim::Claim,
    },
    Covered {
        anchor_row: u32,
        anchor_col: u32,
    },
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn encode<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
}

/// JavaScript-friendly wrapper for RegionStore
#[wasm_bindgen]
pub struct WasmWall {
    inner: RegionStore,
}

#[wasm_bindgen]
impl WasmWall {
    /// Create an empty wall with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<WasmWall, JsValue> {
        let grid = Grid::new(width, height, cell_size).map_err(to_js_error)?;
        Ok(Self {
            inner: RegionStore::new(grid),
        })
    }

    /// Create a wall from a JSON configuration and a style seed
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(
        width: u32,
        height: u32,
        cell_size: u32,
        config_json: String,
        seed: u64,
    ) -> Result<WasmWall, JsValue> {
        let grid = Grid::new(width, height, cell_size).map_err(to_js_error)?;
        let config = WallConfig::from_json_str(&config_json).map_err(to_js_error)?;
        Ok(Self {
            inner: RegionStore::with_rng(grid, config, StdRng::seed_from_u64(seed)),
        })
    }

    /// Submit a claim request (JSON); returns the stored claim as JSON
    ///
    /// On rejection, throws the JSON-encoded rejection reason so the page
    /// can choose its own message.
    #[wasm_bindgen(js_name = addClaim)]
    pub fn add_claim(&mut self, request_json: String) -> Result<String, JsValue> {
        let request: ClaimRequest = serde_json::from_str(&request_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid JSON: {}", e)))?;

        match self.inner.add_claim(request) {
            Ok(claim) => encode(&claim),
            Err(reason) => Err(JsValue::from_str(&encode(&reason)?)),
        }
    }

    /// All claims as a JSON array
    #[wasm_bindgen(js_name = listClaims)]
    pub fn list_claims(&self) -> Result<String, JsValue> {
        encode(&self.inner.claims())
    }

    /// Claim covering a cell (JSON), if any
    #[wasm_bindgen(js_name = claimAt)]
    pub fn claim_at(&self, row: u32, col: u32) -> Result<Option<String>, JsValue> {
        self.inner
            .claim_at(Cell::new(row, col))
            .map(encode)
            .transpose()
    }

    /// What to draw at a cell, as JSON tagged by `state`
    #[wasm_bindgen(js_name = cellView)]
    pub fn cell_view(&self, row: u32, col: u32) -> Result<String, JsValue> {
        let view = match self.inner.cell_view(Cell::new(row, col)) {
            CellView::Free => JsCellView::Free,
            CellView::Anchor(claim) => JsCellView::Anchor { claim },
            CellView::Covered { anchor, .. } => JsCellView::Covered {
                anchor_row: anchor.row,
                anchor_col: anchor.col,
            },
        };
        encode(&view)
    }

    /// Whether a square region is on the grid and unclaimed
    #[wasm_bindgen(js_name = isFree)]
    pub fn is_free(&self, row: u32, col: u32, size: u32) -> bool {
        self.inner.is_free(&Region::new(row, col, size))
    }

    /// Price of a square region
    #[wasm_bindgen(js_name = quote)]
    pub fn quote(&self, size: u32) -> u64 {
        self.inner.quote(&Region::new(0, 0, size))
    }

    /// Get claim count
    #[wasm_bindgen(js_name = claimCount)]
    pub fn claim_count(&self) -> usize {
        self.inner.len()
    }

    /// Export a snapshot as JSON string
    #[wasm_bindgen(js_name = toJSON)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.inner.snapshot().to_json().map_err(to_js_error)
    }

    /// Rebuild a wall, including its configuration, from a snapshot JSON string
    #[wasm_bindgen(js_name = fromJSON)]
    pub fn from_json(snapshot_json: String) -> Result<WasmWall, JsValue> {
        let snapshot = WallSnapshot::from_json(&snapshot_json).map_err(to_js_error)?;
        let inner = RegionStore::restore(snapshot).map_err(to_js_error)?;
        Ok(Self { inner })
    }
}
