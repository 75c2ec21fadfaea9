//! Drag-to-reposition within a room's wall region.
//!
//! [`DragSession`] is the explicit state a host UI keeps between pointer
//! events. Positions are percentages of the room container; every move is
//! clamped into the scene's [`DragConstraints`]. The session never touches
//! the platform directly: pointer capture and release are returned as
//! [`PointerAction`]s for the host to perform.
//!
//! ```
//! use zenwall::{ContainerRect, DragConstraints, DragPosition, DragSession, PointerEvent};
//!
//! let rect = ContainerRect::new(0.0, 0.0, 1000.0, 500.0);
//! let wall = DragConstraints::new(0.05, 0.95, 0.05, 0.70).unwrap();
//! let mut session = DragSession::new(DragPosition::new(50.0, 30.0), wall);
//!
//! // Grab the artwork 20px right of its anchor, then fling far outside.
//! session.down(PointerEvent::new(1, 520.0, 150.0), &rect);
//! let moved = session.move_to(PointerEvent::new(1, 5000.0, -300.0), &rect).unwrap();
//! assert_eq!(moved, DragPosition::new(95.0, 5.0));
//!
//! session.up(PointerEvent::new(1, 5000.0, -300.0));
//! assert_eq!(session.reset_position(), DragPosition::new(50.0, 30.0));
//! ```

use core::fmt;

use whereat::{At, at};

use crate::scale::{PixelSize, Placement};

/// Artwork anchor as a percentage (0–100) of the container's width and height.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragPosition {
    pub x: f64,
    pub y: f64,
}

impl DragPosition {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Anchor of an artwork placed at `placement`: the artwork's center as a
    /// percentage of the container.
    pub fn from_placement(
        placement: Placement,
        artwork: PixelSize,
        container_w: f64,
        container_h: f64,
    ) -> Self {
        let cx = placement.left + artwork.width as f64 / 2.0;
        let cy = placement.top + artwork.height as f64 / 2.0;
        Self {
            x: percent_of(cx, container_w),
            y: percent_of(cy, container_h),
        }
    }

    /// Anchor in container pixels.
    pub fn to_pixels(self, container_w: f64, container_h: f64) -> (f64, f64) {
        (self.x / 100.0 * container_w, self.y / 100.0 * container_h)
    }
}

/// Permitted anchor rectangle as fractions (0–1) of the room image.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragConstraints {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Invalid [`DragConstraints`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConstraintsError {
    /// A bound is NaN, infinite, or outside `0.0..=1.0`.
    OutOfRange,
    /// `min_x > max_x` or `min_y > max_y`.
    Inverted,
}

impl fmt::Display for ConstraintsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OutOfRange => "drag bounds must be within 0.0..=1.0",
            Self::Inverted => "drag bound minimum exceeds maximum",
        })
    }
}

impl core::error::Error for ConstraintsError {}

impl DragConstraints {
    /// The whole container.
    pub const FULL: Self = Self {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
    };

    /// Validated constructor for bounds that come from outside the crate.
    pub fn new(
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<Self, At<ConstraintsError>> {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        if ![min_x, max_x, min_y, max_y].into_iter().all(in_range) {
            return Err(at(ConstraintsError::OutOfRange));
        }
        if min_x > max_x || min_y > max_y {
            return Err(at(ConstraintsError::Inverted));
        }
        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Clamp a candidate percentage position into the wall region.
    ///
    /// Uses `max` then `min` rather than `clamp`, so inverted bounds pin to
    /// the max edge and NaN input pins to the min edge instead of panicking.
    pub fn clamp(&self, x: f64, y: f64) -> DragPosition {
        DragPosition {
            x: x.max(self.min_x * 100.0).min(self.max_x * 100.0),
            y: y.max(self.min_y * 100.0).min(self.max_y * 100.0),
        }
    }

    /// Whether `pos` lies within the region (edges inclusive).
    pub fn contains(&self, pos: DragPosition) -> bool {
        (self.min_x * 100.0..=self.max_x * 100.0).contains(&pos.x)
            && (self.min_y * 100.0..=self.max_y * 100.0).contains(&pos.y)
    }
}

/// Platform pointer identifier.
pub type PointerId = i32;

/// A pointer event in client (viewport) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub const fn new(pointer_id: PointerId, client_x: f64, client_y: f64) -> Self {
        Self {
            pointer_id,
            client_x,
            client_y,
        }
    }
}

/// Bounding box of the room container in client coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer location as a percentage of this box. `None` for an empty box.
    pub fn percent(&self, ev: PointerEvent) -> Option<(f64, f64)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        Some((
            percent_of(ev.client_x - self.left, self.width),
            percent_of(ev.client_y - self.top, self.height),
        ))
    }
}

/// Platform side effect the host must perform for the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// Route all further events for this pointer to the artwork element.
    Capture(PointerId),
    /// Stop routing events for this pointer.
    Release(PointerId),
}

/// Drag state for one artwork overlay. Only one pointer drags at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    initial: DragPosition,
    position: DragPosition,
    constraints: DragConstraints,
    /// Pointer minus artwork position at pointer-down, in percent.
    offset: (f64, f64),
    active: Option<PointerId>,
}

impl DragSession {
    pub fn new(initial: DragPosition, constraints: DragConstraints) -> Self {
        Self {
            initial,
            position: initial,
            constraints,
            offset: (0.0, 0.0),
            active: None,
        }
    }

    /// Current anchor.
    pub fn position(&self) -> DragPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    pub fn constraints(&self) -> DragConstraints {
        self.constraints
    }

    /// Pointer-down on the artwork. Records the grab offset so the artwork
    /// doesn't jump to center on the pointer.
    ///
    /// Ignored (returns `None`) while another pointer is dragging or when the
    /// container has no area.
    pub fn down(&mut self, ev: PointerEvent, rect: &ContainerRect) -> Option<PointerAction> {
        if self.active.is_some() {
            return None;
        }
        let (px, py) = rect.percent(ev)?;
        self.offset = (px - self.position.x, py - self.position.y);
        self.active = Some(ev.pointer_id);
        tracing::trace!(
            pointer = ev.pointer_id,
            x = self.position.x,
            y = self.position.y,
            "drag start"
        );
        Some(PointerAction::Capture(ev.pointer_id))
    }

    /// Pointer-move. Returns the new clamped position, or `None` if this
    /// pointer isn't dragging.
    pub fn move_to(&mut self, ev: PointerEvent, rect: &ContainerRect) -> Option<DragPosition> {
        if self.active != Some(ev.pointer_id) {
            return None;
        }
        let (px, py) = rect.percent(ev)?;
        self.position = self.constraints.clamp(px - self.offset.0, py - self.offset.1);
        Some(self.position)
    }

    /// Pointer-up. Ends the drag and asks the host to release capture.
    pub fn up(&mut self, ev: PointerEvent) -> Option<PointerAction> {
        if self.active != Some(ev.pointer_id) {
            return None;
        }
        self.active = None;
        tracing::trace!(
            pointer = ev.pointer_id,
            x = self.position.x,
            y = self.position.y,
            "drag end"
        );
        Some(PointerAction::Release(ev.pointer_id))
    }

    /// Pointer-cancel (capture lost, touch interrupted). Same as [`up`](Self::up)
    /// but doesn't need the event's coordinates.
    pub fn cancel(&mut self) -> Option<PointerAction> {
        self.active.take().map(PointerAction::Release)
    }

    /// Restore the caller-supplied initial position, whatever the drag state.
    pub fn reset_position(&mut self) -> DragPosition {
        self.position = self.initial;
        self.position
    }

    /// Swap in a new scene's wall region; the current position is re-clamped.
    pub fn set_constraints(&mut self, constraints: DragConstraints) {
        self.constraints = constraints;
        self.position = constraints.clamp(self.position.x, self.position.y);
    }
}

fn percent_of(v: f64, total: f64) -> f64 {
    v / total * 100.0
}
