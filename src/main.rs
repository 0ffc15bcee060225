//! Zellij plugin entry point.
//!
//! The plugin shim only exists on `wasm32`; see `plugin.rs`. Native builds get
//! a stub binary so the library and its tests build on any host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
mod plugin;

#[cfg(target_arch = "wasm32")]
use plugin::State;
#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("bookcase is a Zellij plugin: build it with `--target wasm32-wasip1` and load the .wasm from a layout");
}
