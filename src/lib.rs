//! Wall visualization geometry: how big an artwork looks in a room, where it
//! hangs, and how the room view is laid out on screen.
//!
//! Pure computation: no I/O, no timers, no platform calls, `no_std`
//! compatible. The host UI owns all state and feeds events in.
//!
//! # Modules
//!
//! - [`dimensions`]: Parse free-text dimension strings, normalize to inches
//! - [`scale`]: Inches to room pixels, minimum render size, eye-level placement
//! - [`drag`]: Drag sessions clamped to a scene's wall region
//! - [`viewport`]: Window size to layout mode and room container size
//! - [`scene`]: Authored and generated room scenes (requires `alloc`)
//! - [`compose`]: The full chain for one render
//! - `svg`: SVG preview of a composed view (feature `svg`)
//!
//! # Example
//!
//! ```
//! use zenwall::{ViewportTracker, ScaleOptions, compose, SceneCatalog};
//!
//! let mut viewport = ViewportTracker::new();
//! let info = viewport.measure(390.0, 844.0);
//!
//! let scenes = SceneCatalog::new();
//! let room = scenes.first().unwrap();
//!
//! let view = compose(Some("20 × 24 inches"), room.constraints(), &info, &ScaleOptions::default());
//! let session = view.drag_session().unwrap();
//! assert!(room.constraints().contains(session.position()));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod compose;
pub mod dimensions;
pub mod drag;
pub mod scale;
#[cfg(feature = "alloc")]
pub mod scene;
#[cfg(feature = "svg")]
pub mod svg;
pub mod viewport;

pub use compose::{ArtworkLayout, PixelRect, WallComposition, compose};
pub use dimensions::{DimensionError, InchSize, ParsedDimensions, Unit, parse_dimensions};
pub use drag::{
    ConstraintsError, ContainerRect, DragConstraints, DragPosition, DragSession, PointerAction,
    PointerEvent, PointerId,
};
pub use scale::{
    PixelSize, Placement, ScaleOptions, artwork_position, calculate_artwork_scale, chair_scale,
};
#[cfg(feature = "alloc")]
pub use scene::{GeneratedScene, RoomScene, SceneCatalog, Spotlight, StaticScene};
pub use viewport::{AspectRatio, ViewportInfo, ViewportMode, ViewportTracker, classify};
