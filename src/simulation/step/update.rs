//! Per-pass orchestration: geometry reconciliation, then the passes.

use crate::spatial::framebuffer::FramebufferView;
use crate::systems::motion;

use super::{PerfTimer, SimCore};

/// Bring stored droplet offsets in line with this surface's geometry.
/// Runs before any pixel access in the same call - a stale pitch would
/// alias every droplet into the wrong row.
fn reconcile_geometry(core: &mut SimCore, view: &FramebufferView<'_>) {
    if core.droplets.remap(view.pitch() as u32, view.bpp()) {
        core.drift.regenerate(view.bpp(), &mut core.rng_state);
    }
}

pub(super) fn advance(
    core: &mut SimCore,
    view: &mut FramebufferView<'_>,
    redraw_in_place: bool,
    steps: u32,
) {
    debug_assert!(
        view.len() >= core.area.total_height() as usize * view.pitch(),
        "surface too small for {} rows at pitch {}",
        core.area.total_height(),
        view.pitch()
    );
    debug_assert_eq!(view.bpp(), core.format.bpp);

    let perf_on = core.perf_enabled;
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };

    reconcile_geometry(core, view);

    let mut processed = 0;
    let mut redraw = redraw_in_place;
    for _ in 0..steps.max(1) {
        processed += motion::advance_all(
            &mut core.droplets,
            view,
            &mut core.drift,
            &core.palette,
            &core.area,
            redraw,
        );
        redraw = false;
        core.frame += 1;
    }

    if let Some(t0) = t0 {
        core.perf_stats.step_ms = t0.elapsed_ms();
        core.perf_stats.droplets_processed = processed;
        core.perf_stats.frame = core.frame;
    }
}

pub(super) fn draw(core: &mut SimCore, view: &mut FramebufferView<'_>, mask: u32) {
    debug_assert_eq!(view.bpp(), core.format.bpp);

    reconcile_geometry(core, view);
    motion::draw_all(&core.droplets, view, &core.palette, mask);
}
