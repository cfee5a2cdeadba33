//! Starlance: workspace facade crate.
//!
//! The implementation lives in dedicated crates under `crates/`; this crate
//! re-exports them under one name and adds the glue the binaries need: a
//! self-contained demo world and the JSON save layer.

pub mod demo;
pub mod save;

pub use starlance_core as core;
pub use starlance_engine as engine;
pub use starlance_gfx as gfx;
pub use starlance_input as input;
pub use starlance_term as term;
pub use starlance_types as types;
