#![forbid(unsafe_code)]
//! point_field: interactive point-field visualization over a fixed ARGB raster.
//!
//! Modules:
//! - store: the growing point sequence with the live cursor at slot 0
//! - burst: deterministic point generation on right-click (spiral + connectors)
//! - raster: packed ARGB8888 pixel grid with saturating gray accumulation
//! - render: the two data-parallel rasterizer passes (grid overlay, splatting)
//! - event: explicit input event types delivered by a display frontend
//! - frame: the per-frame driver tying snapshot, render, and presentation together
//!
//! The display/compositor integration lives outside this crate, behind the
//! [`frame::Frontend`] trait.
pub mod burst;
pub mod error;
pub mod event;
pub mod frame;
pub mod raster;
pub mod render;
pub mod store;

/// Convenient re-exports for common types. Import with `use point_field::prelude::*;`.
pub mod prelude {
    pub use crate::burst::{burst_len, generate, SPIRAL_ARM_POINTS};
    pub use crate::error::{Error, Result};
    pub use crate::event::{InputEvent, KeyCode, PointerButton};
    pub use crate::frame::{FrameDriver, Frontend};
    pub use crate::raster::{Raster, SurfaceSize};
    pub use crate::render::{render, GRID_BACKDROP, GRID_LINE};
    pub use crate::store::PointStore;
}
