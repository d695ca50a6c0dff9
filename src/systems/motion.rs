//! Droplet motion - the per-tick update rule and the draw-only pass.
//!
//! Both passes run against the live surface: a droplet decides from
//! whatever the pixels say right now, including moves made earlier in the
//! same pass. That ordering is part of the look; keep array order.

use crate::domain::area::LandscapeArea;
use crate::domain::palette::DropletPalette;
use crate::fast;
use crate::spatial::droplets::DropletSet;
use crate::spatial::framebuffer::FramebufferView;
use crate::systems::drift::DriftTable;

/// Repaint every droplet at its current offset, colour AND-ed with `mask`.
/// `mask = 0` erases, `mask = !0` paints plainly. No droplet moves.
pub fn draw_all(
    droplets: &DropletSet,
    view: &mut FramebufferView<'_>,
    palette: &DropletPalette,
    mask: u32,
) {
    for j in 0..droplets.len() {
        let offset = *fast!(droplets.offsets, [j]) as usize;
        let kind = *fast!(droplets.kinds, [j]) as usize;
        view.write(offset, palette.colours[kind] & mask);
    }
}

/// Advance every droplet one tick.
///
/// With `redraw_in_place` set, every droplet is first repainted where it
/// stands - compensating for a host-side surface erase - before the
/// normal update runs. Returns the number of droplets processed.
pub fn advance_all(
    droplets: &mut DropletSet,
    view: &mut FramebufferView<'_>,
    drift: &mut DriftTable,
    palette: &DropletPalette,
    area: &LandscapeArea,
    redraw_in_place: bool,
) -> u32 {
    let pitch = view.pitch();
    let bpp = view.bpp() as usize;
    let land = palette.land_marker;
    // -1: a droplet falling into the drain comes back out on top instead
    // of sinking below the bucket.
    let wrap = (area.height + area.bucket_size - 1) as usize * pitch;

    if redraw_in_place {
        for j in 0..droplets.len() {
            let offset = *fast!(droplets.offsets, [j]) as usize;
            let kind = *fast!(droplets.kinds, [j]) as usize;
            view.write(offset, palette.colours[kind]);
        }
    }

    let count = droplets.len();
    for j in 0..count {
        let mut t_p = *fast!(droplets.offsets, [j]) as usize;
        let kind = *fast!(droplets.kinds, [j]) as usize;

        view.write(t_p, 0);
        let below = view.read(t_p + pitch);
        if below == 0 {
            t_p += pitch;
        } else {
            // The very first pixel has no left neighbour; read it as solid.
            let lval = if t_p >= bpp { view.read(t_p - bpp) } else { 1 };
            let rval = view.read(t_p + bpp);
            if lval == 0 {
                if rval == 0 {
                    // Free on both sides: resting on landscape drifts by
                    // kind, anything else takes the next pooled nudge.
                    let delta = if below == land {
                        palette.dirs[kind]
                    } else {
                        drift.next_delta()
                    };
                    t_p = (t_p as i64 + delta as i64) as usize;
                } else {
                    t_p -= bpp; // can move left only
                }
            } else if rval == 0 {
                t_p += bpp; // can move right only
            } else if t_p >= pitch && view.read(t_p - pitch) == 0 {
                // Jammed on all sides: climb if the cell above is free.
                t_p -= pitch;
            }
        }

        t_p %= wrap;
        view.write(t_p, palette.colours[kind]);
        fast!(droplets.offsets, [j] = t_p as u32);
    }

    count as u32
}
