//! WASM bindings for PixelWall
//!
//! This module provides JavaScript-friendly bindings for the claim store.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::WasmWall;
