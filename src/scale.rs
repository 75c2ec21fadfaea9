//! Real-world artwork size to on-screen pixels.
//!
//! A room photo is assumed to show a wall [`DEFAULT_WALL_HEIGHT_INCHES`]
//! tall, so the rendered room height fixes a pixels-per-inch ratio. Artwork
//! and the reference chair are scaled with that ratio.
//!
//! # Example
//!
//! ```
//! use zenwall::{calculate_artwork_scale, PixelSize};
//!
//! // 540px room, 96" wall → 5.625 px/in → 24" × 36" is 135 × 203 px
//! let size = calculate_artwork_scale("24 x 36 in", 540.0).unwrap();
//! assert_eq!(size, PixelSize::new(135, 203));
//!
//! // Tiny pieces are bumped up so the short side is 50px.
//! let tiny = calculate_artwork_scale("4 x 4 inches", 540.0).unwrap();
//! assert_eq!(tiny, PixelSize::new(50, 50));
//! ```

use num_traits::Float;

use crate::dimensions::{InchSize, parse_dimensions};

/// Wall height assumed visible in a room photo, in inches (8 ft).
pub const DEFAULT_WALL_HEIGHT_INCHES: f64 = 96.0;

/// Smallest rendered artwork side, in pixels.
pub const MIN_RENDER_PX: f64 = 50.0;

/// Artwork center sits this fraction of the container height from the top.
pub const EYE_LEVEL_FRACTION: f64 = 0.30;

/// Initial placement never puts the artwork's top edge above this, in pixels.
pub const MIN_TOP_PX: f64 = 20.0;

/// Seat-back height of the reference chair, in inches.
pub const REFERENCE_HEIGHT_INCHES: f64 = 32.0;

/// Artwork size in device pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Top-left pixel offset of the artwork inside the room container.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

/// Scaling and placement parameters.
///
/// Defaults come from the module constants; every field can be overridden.
///
/// ```
/// use zenwall::ScaleOptions;
///
/// // A gallery wall photographed at 12 ft.
/// let opts = ScaleOptions::default().wall_height_inches(144.0);
/// assert_eq!(opts.chair_scale(540.0), 120);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleOptions {
    pub wall_height_inches: f64,
    pub min_render_px: f64,
    pub eye_level: f64,
    pub min_top_px: f64,
    pub reference_height_inches: f64,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            wall_height_inches: DEFAULT_WALL_HEIGHT_INCHES,
            min_render_px: MIN_RENDER_PX,
            eye_level: EYE_LEVEL_FRACTION,
            min_top_px: MIN_TOP_PX,
            reference_height_inches: REFERENCE_HEIGHT_INCHES,
        }
    }
}

impl ScaleOptions {
    /// Set the wall height the room photo represents.
    pub fn wall_height_inches(mut self, inches: f64) -> Self {
        self.wall_height_inches = inches;
        self
    }

    /// Set the minimum rendered side length.
    pub fn min_render_px(mut self, px: f64) -> Self {
        self.min_render_px = px;
        self
    }

    /// Set the vertical fraction used for the artwork's initial center.
    pub fn eye_level(mut self, fraction: f64) -> Self {
        self.eye_level = fraction;
        self
    }

    /// Set the minimum top offset for initial placement.
    pub fn min_top_px(mut self, px: f64) -> Self {
        self.min_top_px = px;
        self
    }

    /// Set the reference object's real height.
    pub fn reference_height_inches(mut self, inches: f64) -> Self {
        self.reference_height_inches = inches;
        self
    }

    fn pixels_per_inch(&self, room_height_px: f64) -> f64 {
        room_height_px / self.wall_height_inches
    }

    /// Parse `text` and scale it to the room. `None` iff parsing fails.
    pub fn artwork_scale(&self, text: &str, room_height_px: f64) -> Option<PixelSize> {
        let inches = parse_dimensions(text)?.to_inches();
        Some(self.scale_inches(inches, room_height_px))
    }

    /// Scale an already-normalized size to the room.
    ///
    /// If either side would render under [`min_render_px`](Self::min_render_px),
    /// both sides grow by the same factor until the short side hits it.
    pub fn scale_inches(&self, inches: InchSize, room_height_px: f64) -> PixelSize {
        let ppi = self.pixels_per_inch(room_height_px);
        let width = inches.width * ppi;
        let height = inches.height * ppi;

        // NaN compares false, so degenerate ratios also take the min-size path.
        let (width, height) = if width >= self.min_render_px && height >= self.min_render_px {
            (width, height)
        } else {
            // Derive from inches rather than pixels: same ratio when ppi > 0,
            // and still well-defined when the room height is zero.
            let factor = self.min_render_px / inches.width.min(inches.height);
            tracing::debug!(
                raw_width = width,
                raw_height = height,
                min = self.min_render_px,
                "artwork below minimum render size, scaling up"
            );
            (inches.width * factor, inches.height * factor)
        };

        PixelSize::new(round_px(width), round_px(height))
    }

    /// Pixel height of the reference chair for a room of the given height.
    pub fn chair_scale(&self, room_height_px: f64) -> u32 {
        round_px(self.reference_height_inches * self.pixels_per_inch(room_height_px))
    }

    /// Initial placement: centered horizontally, center at eye level vertically.
    pub fn artwork_position(
        &self,
        artwork_w: f64,
        artwork_h: f64,
        container_w: f64,
        container_h: f64,
    ) -> Placement {
        let left = ((container_w - artwork_w) / 2.0).max(0.0);
        let top = (container_h * self.eye_level - artwork_h / 2.0).max(self.min_top_px);
        Placement { top, left }
    }
}

/// [`ScaleOptions::artwork_scale`] with default options.
pub fn calculate_artwork_scale(text: &str, room_height_px: f64) -> Option<PixelSize> {
    ScaleOptions::default().artwork_scale(text, room_height_px)
}

/// [`ScaleOptions::chair_scale`] with default options.
pub fn chair_scale(room_height_px: f64) -> u32 {
    ScaleOptions::default().chair_scale(room_height_px)
}

/// [`ScaleOptions::artwork_position`] with default options.
pub fn artwork_position(
    artwork_w: f64,
    artwork_h: f64,
    container_w: f64,
    container_h: f64,
) -> Placement {
    ScaleOptions::default().artwork_position(artwork_w, artwork_h, container_w, container_h)
}

/// Round half away from zero, saturating into `u32`. Negative and NaN map to 0.
pub(crate) fn round_px(v: f64) -> u32 {
    Float::round(v) as u32
}
