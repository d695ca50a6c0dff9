//! Landscape terrain - the static pixels droplets collide with.
//!
//! Drawn once per landscape (re)initialization, not per tick. The border
//! goes on the landscape surface (`area.height` rows); the funnel walls go
//! on the top `bucket_size` rows of the composite surface.

use crate::domain::area::LandscapeArea;
use crate::spatial::framebuffer::FramebufferView;

/// Fill the inclusive rectangle (x1,y1)-(x2,y2); corners in either order.
pub fn fill_area(view: &mut FramebufferView<'_>, colour: u32, x1: u32, y1: u32, x2: u32, y2: u32) {
    let (left, right) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    let (top, bottom) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    for y in top..=bottom {
        for x in left..=right {
            let offset = view.offset_of(x, y);
            view.write(offset, colour);
        }
    }
}

/// Draw the play-area border: four solid 1-pixel edges, then the funnel
/// neck gap punched into the top edge and the drain pixel into the bottom.
pub fn draw_border(view: &mut FramebufferView<'_>, area: &LandscapeArea, colour: u32) {
    let w = area.width;
    let h = area.height;
    let cx = w / 2;
    let neck = area.neck_size;

    fill_area(view, colour, 0, 0, w - 1, 0);
    fill_area(view, colour, 0, h - 1, w - 1, h - 1);
    fill_area(view, colour, 0, 0, 0, h - 1);
    fill_area(view, colour, w - 1, 0, w - 1, h - 1);
    fill_area(view, 0, cx - (neck - 1), 0, cx + (neck - 1), 0);
    fill_area(view, 0, cx, h - 1, cx, h - 1);
}

/// Draw the funnel walls: each bucket row is filled from both edges up to
/// `max(i, neck)` pixels short of the centre, leaving a V-shaped opening
/// that narrows to the neck just above the landscape border.
pub fn draw_bucket(view: &mut FramebufferView<'_>, area: &LandscapeArea, colour: u32) {
    let cx = area.width / 2;
    for i in 1..=area.bucket_size {
        let cy = area.bucket_size - i;
        let dx = i.max(area.neck_size);
        // Rows wider than the surface have no wall left to draw.
        if dx <= cx {
            fill_area(view, colour, 0, cy, cx - dx, cy);
        }
        if cx + dx <= area.width - 1 {
            fill_area(view, colour, cx + dx, cy, area.width - 1, cy);
        }
    }
}
