//! Tile-grid interaction engine for pixel and tile editors.
//!
//! [`GridEngine`] turns pointer and keyboard input into hover, selection and
//! drag state on a scrollable, zoomable grid of tiles; [`GridRenderer`] draws
//! that state, plus the tiles a [`GridHost`] supplies, into RGBA buffers.

pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit_test;
pub mod host;
pub mod render;

pub use config::GridConfig;
pub use engine::{GridEngine, GridKey};
pub use error::ConfigError;
pub use geometry::{Axis, EdgeMask, TilePoint, TileRect, MARGIN_SIZE, SEL_BORDER};
pub use grid::{DragGesture, GridState, Hover, MAX_ZOOM};
pub use hit_test::{HitResult, MarginEdge};
pub use host::GridHost;
pub use render::{GridRenderer, Margins, PixelBuffer};
