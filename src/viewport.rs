//! Viewport classification and room container sizing.
//!
//! [`classify`] maps a window size to one of three layouts and the pixel size
//! of the room image. [`ViewportTracker`] coalesces resize and orientation
//! bursts so the host recomputes at most once per animation frame.
//!
//! ```text
//!     width < 768, portrait      width < 768, landscape     width ≥ 768
//!     ┌────────┐                 ┌──────────────────┐       ┌──────────────────────┐
//!     │┌──────┐│                 │┌────────────────┐│       │┌────────────────────┐│
//!     ││ 4:3  ││                 ││      16:9      ││       ││  16:9, ≤1152×540   ││
//!     │└──────┘│                 │└────────────────┘│       ││  controls overlaid ││
//!     │controls│                 │ controls below   │       │└────────────────────┘│
//!     └────────┘                 └──────────────────┘       └──────────────────────┘
//! ```

use core::fmt;

use num_traits::Float;

/// Widths below this are mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Horizontal margin around the room image on mobile (both sides combined).
pub const MOBILE_MARGIN_PX: f64 = 16.0;

/// Horizontal margin around the room image on desktop (both sides combined).
pub const DESKTOP_MARGIN_PX: f64 = 32.0;

/// Vertical space kept for browser and page chrome in mobile landscape.
pub const LANDSCAPE_CHROME_PX: f64 = 100.0;

/// Widest desktop room image.
pub const DESKTOP_MAX_WIDTH_PX: f64 = 1152.0;

/// Tallest desktop room image; also the pre-measurement default height.
pub const DESKTOP_MAX_HEIGHT_PX: f64 = 540.0;

/// Layout family for the visualizer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewportMode {
    #[default]
    Desktop,
    MobilePortrait,
    MobileLandscape,
}

impl ViewportMode {
    pub fn is_mobile(self) -> bool {
        !matches!(self, Self::Desktop)
    }
}

/// Room container aspect ratio.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AspectRatio {
    FourThree,
    #[default]
    SixteenNine,
}

impl AspectRatio {
    /// CSS `aspect-ratio` value: `"4/3"` or `"16/9"`.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::FourThree => "4/3",
            Self::SixteenNine => "16/9",
        }
    }

    /// Height per unit of width.
    pub const fn height_per_width(self) -> f64 {
        match self {
            Self::FourThree => 3.0 / 4.0,
            Self::SixteenNine => 9.0 / 16.0,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Layout decision for one window size.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportInfo {
    pub mode: ViewportMode,
    pub room_width_px: u32,
    pub room_height_px: u32,
    /// Slider and scene strip render outside the room image instead of over it.
    pub external_controls: bool,
    pub aspect_ratio: AspectRatio,
}

impl Default for ViewportInfo {
    /// Desktop at full height, used before any measurement exists.
    fn default() -> Self {
        Self {
            mode: ViewportMode::Desktop,
            room_width_px: DESKTOP_MAX_WIDTH_PX as u32,
            room_height_px: DESKTOP_MAX_HEIGHT_PX as u32,
            external_controls: false,
            aspect_ratio: AspectRatio::SixteenNine,
        }
    }
}

/// Classify a window size. Total: any input yields a value. Negative room
/// sizes floor at zero; NaN lands on the desktop default.
pub fn classify(width: f64, height: f64) -> ViewportInfo {
    if width < MOBILE_BREAKPOINT_PX {
        if height > width {
            let room_w = (width - MOBILE_MARGIN_PX).max(0.0);
            let room_h = room_w * AspectRatio::FourThree.height_per_width();
            return ViewportInfo {
                mode: ViewportMode::MobilePortrait,
                room_width_px: round_even(room_w),
                room_height_px: round_even(room_h),
                external_controls: true,
                aspect_ratio: AspectRatio::FourThree,
            };
        }

        let available_h = (height - LANDSCAPE_CHROME_PX).max(0.0);
        let room_w = (width - MOBILE_MARGIN_PX)
            .min(available_h * 16.0 / 9.0)
            .max(0.0);
        let room_h = room_w * AspectRatio::SixteenNine.height_per_width();
        return ViewportInfo {
            mode: ViewportMode::MobileLandscape,
            room_width_px: round_even(room_w),
            room_height_px: round_even(room_h),
            external_controls: true,
            aspect_ratio: AspectRatio::SixteenNine,
        };
    }

    let room_w = (width - DESKTOP_MARGIN_PX).min(DESKTOP_MAX_WIDTH_PX).max(0.0);
    let room_h =
        (room_w * AspectRatio::SixteenNine.height_per_width()).min(DESKTOP_MAX_HEIGHT_PX);
    ViewportInfo {
        mode: ViewportMode::Desktop,
        room_width_px: round_even(room_w),
        room_height_px: round_even(room_h),
        external_controls: false,
        aspect_ratio: AspectRatio::SixteenNine,
    }
}

/// Nearest integer, ties to even (280.5 → 280). NaN and negatives map to 0.
fn round_even(v: f64) -> u32 {
    let r = Float::round(v);
    let tie = Float::abs(r - v) == 0.5;
    let snapped = if tie && r % 2.0 != 0.0 { r - 1.0 } else { r };
    snapped as u32
}

/// Host-driven recompute scheduler.
///
/// Resize and orientation events only record the latest window size. The
/// first event of a burst returns `true`, telling the host to request an
/// animation frame; the frame callback then recomputes once.
///
/// ```
/// use zenwall::{ViewportMode, ViewportTracker};
///
/// let mut tracker = ViewportTracker::new();
/// assert!(tracker.on_resize(1280.0, 800.0));   // schedule a frame
/// assert!(!tracker.on_resize(390.0, 700.0));   // already scheduled
/// assert!(!tracker.on_orientation_change(390.0, 844.0));
///
/// let info = tracker.on_animation_frame().unwrap();
/// assert_eq!(info.mode, ViewportMode::MobilePortrait);
/// assert!(tracker.on_animation_frame().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportTracker {
    current: ViewportInfo,
    pending: Option<(f64, f64)>,
}

impl ViewportTracker {
    /// Starts at [`ViewportInfo::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest computed layout.
    pub fn current(&self) -> ViewportInfo {
        self.current
    }

    /// Whether a frame has been requested and not yet serviced.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Measure immediately (first mount). Clears anything pending.
    pub fn measure(&mut self, width: f64, height: f64) -> ViewportInfo {
        self.pending = None;
        self.apply(width, height)
    }

    /// Window resized. Returns `true` if the host must request a frame.
    pub fn on_resize(&mut self, width: f64, height: f64) -> bool {
        let first = self.pending.is_none();
        self.pending = Some((width, height));
        first
    }

    /// Device rotated. Same coalescing as [`on_resize`](Self::on_resize).
    pub fn on_orientation_change(&mut self, width: f64, height: f64) -> bool {
        self.on_resize(width, height)
    }

    /// Animation frame fired. Recomputes from the most recent measurement,
    /// or returns `None` if nothing arrived since the last frame.
    pub fn on_animation_frame(&mut self) -> Option<ViewportInfo> {
        let (width, height) = self.pending.take()?;
        Some(self.apply(width, height))
    }

    fn apply(&mut self, width: f64, height: f64) -> ViewportInfo {
        let next = classify(width, height);
        if next.mode != self.current.mode {
            tracing::debug!(
                from = ?self.current.mode,
                to = ?next.mode,
                width,
                height,
                "viewport mode changed"
            );
        }
        self.current = next;
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── classify ────────────────────────────────────────────────────────

    #[test]
    fn iphone_portrait() {
        let v = classify(390.0, 844.0);
        assert_eq!(v.mode, ViewportMode::MobilePortrait);
        assert_eq!(v.aspect_ratio.as_css(), "4/3");
        assert!(v.external_controls);
        assert_eq!(v.room_width_px, 374);
        assert_eq!(v.room_height_px, 280);
    }

    #[test]
    fn landscape_height_limited() {
        // 360 - 100 = 260 tall → 462.2 wide, narrower than 740 - 16
        let v = classify(740.0, 360.0);
        assert_eq!(v.mode, ViewportMode::MobileLandscape);
        assert_eq!(v.aspect_ratio, AspectRatio::SixteenNine);
        assert!(v.external_controls);
        assert_eq!(v.room_width_px, 462);
        assert_eq!(v.room_height_px, 260);
    }

    #[test]
    fn landscape_width_limited() {
        let v = classify(700.0, 650.0);
        assert_eq!(v.mode, ViewportMode::MobileLandscape);
        assert_eq!(v.room_width_px, 684);
        // 684 * 9/16 = 384.75
        assert_eq!(v.room_height_px, 385);
    }

    #[test]
    fn square_mobile_is_landscape() {
        assert_eq!(classify(500.0, 500.0).mode, ViewportMode::MobileLandscape);
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let v = classify(768.0, 1024.0);
        assert_eq!(v.mode, ViewportMode::Desktop);
        assert!(!v.external_controls);
        assert_eq!(v.room_width_px, 736);
        assert_eq!(v.room_height_px, 414);

        assert_eq!(classify(767.0, 1024.0).mode, ViewportMode::MobilePortrait);
        assert_eq!(classify(767.9, 500.0).mode, ViewportMode::MobileLandscape);
    }

    #[test]
    fn desktop_caps() {
        let v = classify(1920.0, 1080.0);
        assert_eq!(v.mode, ViewportMode::Desktop);
        assert_eq!(v.room_width_px, 1152);
        // 1152 * 9/16 = 648 → capped
        assert_eq!(v.room_height_px, 540);
        assert_eq!(v.aspect_ratio.as_css(), "16/9");
    }

    #[test]
    fn desktop_below_cap() {
        let v = classify(800.0, 600.0);
        // 768 * 9/16 = 432
        assert_eq!(v.room_width_px, 768);
        assert_eq!(v.room_height_px, 432);
    }

    #[test]
    fn tiny_landscape_floors_at_zero() {
        let v = classify(300.0, 80.0);
        assert_eq!(v.mode, ViewportMode::MobileLandscape);
        assert_eq!(v.room_width_px, 0);
        assert_eq!(v.room_height_px, 0);
    }

    #[test]
    fn nan_falls_back_to_desktop_default() {
        assert_eq!(classify(f64::NAN, f64::NAN), ViewportInfo::default());
    }

    #[test]
    fn classify_is_deterministic() {
        for w in (200..2000).step_by(37) {
            for h in (200..1400).step_by(53) {
                assert_eq!(classify(w as f64, h as f64), classify(w as f64, h as f64));
            }
        }
    }

    #[test]
    fn default_is_desktop_540() {
        let v = ViewportInfo::default();
        assert_eq!(v.mode, ViewportMode::Desktop);
        assert_eq!(v.room_height_px, 540);
        assert!(!v.external_controls);
        assert_eq!(v.aspect_ratio, AspectRatio::SixteenNine);
    }

    #[test]
    fn round_even_ties() {
        assert_eq!(round_even(280.5), 280);
        assert_eq!(round_even(281.5), 282);
        assert_eq!(round_even(384.75), 385);
        assert_eq!(round_even(-4.0), 0);
    }

    // ── ViewportTracker ─────────────────────────────────────────────────

    #[test]
    fn tracker_starts_at_default() {
        assert_eq!(ViewportTracker::new().current(), ViewportInfo::default());
    }

    #[test]
    fn burst_coalesces_to_latest() {
        let mut t = ViewportTracker::new();
        assert!(t.on_resize(1000.0, 800.0));
        assert!(!t.on_resize(900.0, 800.0));
        assert!(!t.on_resize(390.0, 844.0));
        assert!(t.is_pending());

        let info = t.on_animation_frame().unwrap();
        assert_eq!(info, classify(390.0, 844.0));
        assert_eq!(t.current(), info);
        assert!(!t.is_pending());
        assert_eq!(t.on_animation_frame(), None);
    }

    #[test]
    fn next_burst_requests_a_new_frame() {
        let mut t = ViewportTracker::new();
        t.on_resize(1000.0, 800.0);
        t.on_animation_frame();
        assert!(t.on_orientation_change(800.0, 1000.0));
    }

    #[test]
    fn measure_clears_pending() {
        let mut t = ViewportTracker::new();
        t.on_resize(390.0, 844.0);
        let info = t.measure(1280.0, 720.0);
        assert_eq!(info.mode, ViewportMode::Desktop);
        assert_eq!(t.on_animation_frame(), None);
    }
}
