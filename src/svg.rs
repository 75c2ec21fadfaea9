//! SVG preview of a composed wall view.
//!
//! Draws the room box, the permitted wall region, the reference chair and
//! the artwork at a drag position, with size labels. Meant for debugging
//! layouts and for snapshot pages, not for the live site.
//!
//! # Example
//!
//! ```
//! use zenwall::{compose, DragConstraints, ScaleOptions, ViewportInfo, svg::render_wall_svg};
//!
//! let view = compose(
//!     Some("24 x 36 in"),
//!     DragConstraints::FULL,
//!     &ViewportInfo::default(),
//!     &ScaleOptions::default(),
//! );
//! let position = view.artwork.unwrap().initial_position;
//!
//! let svg = render_wall_svg(&view, position);
//! assert!(svg.starts_with("<svg"));
//! assert!(svg.contains("135×203"));
//! ```

use crate::compose::{PixelRect, WallComposition};
use crate::drag::DragPosition;

/// Outer margin around the room box.
const MARGIN: f64 = 24.0;
/// Height of the label row above the room box.
const LABEL_H: f64 = 22.0;
/// Height of the annotation row below the room box.
const FOOTER_H: f64 = 20.0;
/// Chair silhouette width relative to its height.
const CHAIR_ASPECT: f64 = 0.6;
/// Chair distance from the room's left edge, as a fraction of room width.
const CHAIR_INSET: f64 = 0.08;

/// Render a complete SVG document for `view` with the artwork anchored at
/// `position`. Artwork is omitted when the composition has none.
pub fn render_wall_svg(view: &WallComposition, position: DragPosition) -> String {
    let room_w = view.room.width as f64;
    let room_h = view.room.height as f64;
    let total_w = room_w + 2.0 * MARGIN;
    let total_h = MARGIN + LABEL_H + room_h + FOOTER_H + MARGIN;

    let mut svg = String::with_capacity(2048);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .room { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .wall { fill: none; stroke: #7baed0; stroke-width: 1; stroke-dasharray: 4,2; }
  .chair { fill: #b3a594; stroke: #7d6f5e; stroke-width: 1; }
  .artwork { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .room { fill: #2d2d2d; stroke: #555; }
    .wall { stroke: #4a7a9e; }
    .chair { fill: #5e5346; stroke: #8d7f6e; }
    .artwork { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    // Label
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        MARGIN + 14.0,
        escape_xml(&format!(
            "Room  {}×{}  {:?}",
            view.room.width, view.room.height, view.viewport.mode
        ))
    ));
    svg.push('\n');

    let ox = MARGIN;
    let oy = MARGIN + LABEL_H;

    svg.push_str(&rect(ox, oy, &room_rect(room_w, room_h), "room", 2.0));

    let wall = view.wall_region();
    svg.push_str(&rect(ox, oy, &wall, "wall", 0.0));

    // Chair stands on the floor at the left of the room.
    let chair_h = view.chair_height_px as f64;
    let chair = PixelRect {
        left: room_w * CHAIR_INSET,
        top: room_h - chair_h,
        width: chair_h * CHAIR_ASPECT,
        height: chair_h,
    };
    svg.push_str(&rect(ox, oy, &chair, "chair", 3.0));

    let mut annotation = format!("chair {}px", view.chair_height_px);
    if let Some(art) = view.artwork_rect(position) {
        svg.push_str(&rect(ox, oy, &art, "artwork", 1.0));
        annotation = format!(
            "artwork {}×{} at ({:.1}%, {:.1}%), {}",
            art.width as u32, art.height as u32, position.x, position.y, annotation
        );
    } else {
        annotation = format!("no to-scale artwork, {annotation}");
    }

    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        total_w / 2.0,
        oy + room_h + 14.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');

    svg.push_str("</svg>\n");
    svg
}

fn room_rect(w: f64, h: f64) -> PixelRect {
    PixelRect {
        left: 0.0,
        top: 0.0,
        width: w,
        height: h,
    }
}

fn rect(ox: f64, oy: f64, r: &PixelRect, class: &str, rx: f64) -> String {
    format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" class=\"{class}\" rx=\"{rx}\"/>\n",
        ox + r.left,
        oy + r.top,
        r.width.max(0.0),
        r.height.max(0.0),
    )
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;
    use crate::drag::DragConstraints;
    use crate::scale::ScaleOptions;
    use crate::viewport::{ViewportInfo, classify};

    fn view(dimensions: Option<&str>) -> WallComposition {
        compose(
            dimensions,
            DragConstraints::FULL,
            &ViewportInfo::default(),
            &ScaleOptions::default(),
        )
    }

    #[test]
    fn svg_document_shape() {
        let v = view(Some("20 x 24 in"));
        let svg = render_wall_svg(&v, v.artwork.unwrap().initial_position);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Room  1152×540  Desktop"));
        assert!(svg.contains(r#"class="artwork""#));
        assert!(svg.contains("113×135"));
        assert!(svg.contains("chair 180px"));
    }

    #[test]
    fn svg_without_artwork() {
        let v = view(Some("framed"));
        let svg = render_wall_svg(&v, DragPosition::new(50.0, 50.0));
        assert!(!svg.contains(r#"class="artwork""#));
        assert!(svg.contains("no to-scale artwork"));
        assert!(svg.contains(r#"class="chair""#));
    }

    #[test]
    fn svg_artwork_follows_position() {
        let v = view(Some("20 x 24 in"));
        let svg = render_wall_svg(&v, DragPosition::new(25.0, 50.0));
        // center (288, 270) → top-left (231.5, 202.5), offset by margins
        assert!(svg.contains(r#"x="255.5" y="248.5" width="113.0" height="135.0""#));
        assert!(svg.contains("(25.0%, 50.0%)"));
    }

    #[test]
    fn svg_mobile_label() {
        let v = compose(
            Some("20 x 24 in"),
            DragConstraints::FULL,
            &classify(390.0, 844.0),
            &ScaleOptions::default(),
        );
        let svg = render_wall_svg(&v, DragPosition::new(50.0, 50.0));
        assert!(svg.contains("MobilePortrait"));
        assert!(svg.contains(r#"width="422" height="370""#));
    }

    #[test]
    fn escape_xml_entities() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }
}
