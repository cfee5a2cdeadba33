//! Terminal presentation backend.
//!
//! Implements the engine's [`starlance_engine::VideoOut`] seam on top of a
//! plain terminal: the 800x600 pixel frame is downsampled into half-block
//! cells (two pixels per cell) and flushed with changed-run diffing, so the
//! game is playable over ssh without any graphics stack.

pub mod grid;
pub mod presenter;

pub use starlance_gfx as gfx;
pub use starlance_types as types;

pub use grid::{downsample_into, CellGrid, HalfCell, Rgb};
pub use presenter::{encode_diff_into, encode_full_into, TermPresenter};
