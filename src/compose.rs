//! One-shot composition of the wall view.
//!
//! Runs the whole chain for a single render: viewport → room size → artwork
//! pixels → initial placement → initial drag anchor. The result is plain data
//! for the rendering layer; dragging continues in the [`DragSession`] it seeds.
//!
//! ```
//! use zenwall::{compose, classify, DragConstraints, ScaleOptions, PixelSize};
//!
//! let viewport = classify(1920.0, 1080.0);
//! let wall = DragConstraints::new(0.05, 0.95, 0.05, 0.70).unwrap();
//! let view = compose(Some("24 x 36 in"), wall, &viewport, &ScaleOptions::default());
//!
//! assert_eq!(view.room, PixelSize::new(1152, 540));
//! assert_eq!(view.chair_height_px, 180);
//!
//! let art = view.artwork.unwrap();
//! assert_eq!(art.size, PixelSize::new(135, 203));
//! assert!(view.drag_session().is_some());
//! ```

use crate::drag::{DragConstraints, DragPosition, DragSession};
use crate::scale::{PixelSize, Placement, ScaleOptions};
use crate::viewport::ViewportInfo;

/// Axis-aligned rectangle in container pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Sized and placed artwork.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtworkLayout {
    pub size: PixelSize,
    /// Eye-level top-left offset.
    pub placement: Placement,
    /// Center of the placed artwork, clamped into the wall region.
    pub initial_position: DragPosition,
}

/// Everything the renderer needs for one wall view.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallComposition {
    pub viewport: ViewportInfo,
    /// Room container size.
    pub room: PixelSize,
    pub constraints: DragConstraints,
    /// Pixel height of the reference chair.
    pub chair_height_px: u32,
    /// `None` when the dimension text can't be parsed; the caller shows a
    /// fallback instead of a to-scale overlay.
    pub artwork: Option<ArtworkLayout>,
}

/// Compose a wall view for an artwork's dimension text in a room.
pub fn compose(
    dimensions: Option<&str>,
    constraints: DragConstraints,
    viewport: &ViewportInfo,
    options: &ScaleOptions,
) -> WallComposition {
    let room = PixelSize::new(viewport.room_width_px, viewport.room_height_px);
    let room_w = room.width as f64;
    let room_h = room.height as f64;

    let artwork = dimensions
        .and_then(|text| options.artwork_scale(text, room_h))
        .map(|size| {
            let placement =
                options.artwork_position(size.width as f64, size.height as f64, room_w, room_h);
            let center = DragPosition::from_placement(placement, size, room_w, room_h);
            ArtworkLayout {
                size,
                placement,
                initial_position: constraints.clamp(center.x, center.y),
            }
        });

    if artwork.is_none() {
        tracing::debug!(?dimensions, "no to-scale artwork for this record");
    }

    WallComposition {
        viewport: *viewport,
        room,
        constraints,
        chair_height_px: options.chair_scale(room_h),
        artwork,
    }
}

impl WallComposition {
    /// Start a drag session at the artwork's initial position.
    pub fn drag_session(&self) -> Option<DragSession> {
        self.artwork
            .map(|a| DragSession::new(a.initial_position, self.constraints))
    }

    /// The wall region in room pixels.
    pub fn wall_region(&self) -> PixelRect {
        let w = self.room.width as f64;
        let h = self.room.height as f64;
        let c = self.constraints;
        PixelRect {
            left: c.min_x * w,
            top: c.min_y * h,
            width: (c.max_x - c.min_x) * w,
            height: (c.max_y - c.min_y) * h,
        }
    }

    /// Artwork box for a drag anchor, in room pixels.
    pub fn artwork_rect(&self, position: DragPosition) -> Option<PixelRect> {
        let art = self.artwork?;
        let (cx, cy) = position.to_pixels(self.room.width as f64, self.room.height as f64);
        let w = art.size.width as f64;
        let h = art.size.height as f64;
        Some(PixelRect {
            left: cx - w / 2.0,
            top: cy - h / 2.0,
            width: w,
            height: h,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::classify;

    const WALL: DragConstraints = DragConstraints {
        min_x: 0.05,
        max_x: 0.95,
        min_y: 0.05,
        max_y: 0.70,
    };

    fn desktop() -> ViewportInfo {
        ViewportInfo::default()
    }

    #[test]
    fn unparseable_dimensions_leave_artwork_empty() {
        let v = compose(Some("framed"), WALL, &desktop(), &ScaleOptions::default());
        assert!(v.artwork.is_none());
        assert!(v.drag_session().is_none());
        assert!(v.artwork_rect(DragPosition::new(50.0, 50.0)).is_none());
        // Chair reference still renders.
        assert_eq!(v.chair_height_px, 180);
    }

    #[test]
    fn missing_dimensions_field() {
        let v = compose(None, WALL, &desktop(), &ScaleOptions::default());
        assert!(v.artwork.is_none());
    }

    #[test]
    fn initial_placement_at_eye_level() {
        let v = compose(Some("20 x 24 in"), WALL, &desktop(), &ScaleOptions::default());
        let art = v.artwork.unwrap();
        assert_eq!(art.size, PixelSize::new(113, 135));
        // (1152 - 113) / 2
        assert_eq!(art.placement.left, 519.5);
        // 540 * 0.3 - 67.5 = 94.5
        assert!((art.placement.top - 94.5).abs() < 1e-9);
        // Center at 50% across, 30% down.
        assert!((art.initial_position.x - 50.0).abs() < 1e-9);
        assert!((art.initial_position.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn initial_position_clamped_into_wall() {
        let high_wall = DragConstraints {
            min_x: 0.2,
            max_x: 0.8,
            min_y: 0.5,
            max_y: 0.9,
        };
        let v = compose(Some("20 x 24 in"), high_wall, &desktop(), &ScaleOptions::default());
        let art = v.artwork.unwrap();
        assert!(high_wall.contains(art.initial_position));
        assert_eq!(art.initial_position.y, 50.0);
    }

    #[test]
    fn mobile_portrait_scales_down() {
        let vp = classify(390.0, 844.0);
        let v = compose(Some("24 x 36 in"), WALL, &vp, &ScaleOptions::default());
        assert_eq!(v.room, PixelSize::new(374, 280));
        // 280 / 96 = 2.9167 px/in → 70 × 105
        assert_eq!(v.artwork.unwrap().size, PixelSize::new(70, 105));
        assert_eq!(v.chair_height_px, 93);
    }

    #[test]
    fn session_starts_at_initial_position() {
        let v = compose(Some("20 x 24 in"), WALL, &desktop(), &ScaleOptions::default());
        let s = v.drag_session().unwrap();
        assert_eq!(s.position(), v.artwork.unwrap().initial_position);
        assert_eq!(s.constraints(), WALL);
        assert!(!s.is_dragging());
    }

    #[test]
    fn artwork_rect_round_trips_placement() {
        let v = compose(Some("20 x 24 in"), WALL, &desktop(), &ScaleOptions::default());
        let art = v.artwork.unwrap();
        let r = v.artwork_rect(art.initial_position).unwrap();
        assert!((r.left - art.placement.left).abs() < 1e-9);
        assert!((r.top - art.placement.top).abs() < 1e-9);
        assert_eq!(r.width, 113.0);
        assert_eq!(r.height, 135.0);
    }

    #[test]
    fn wall_region_in_pixels() {
        let v = compose(None, WALL, &desktop(), &ScaleOptions::default());
        let r = v.wall_region();
        assert!((r.left - 57.6).abs() < 1e-9);
        assert!((r.top - 27.0).abs() < 1e-9);
        assert!((r.width - 1036.8).abs() < 1e-9);
        assert!((r.height - 351.0).abs() < 1e-9);
    }
}
