use crate::domain::format::PixelFormat;
use crate::domain::palette::DropletPalette;
use crate::domain::settings::SimSettings;

use super::perf_stats::PerfStats;
use super::SimCore;

pub(super) fn set_paused(core: &mut SimCore, paused: bool) {
    core.paused = paused;
}

pub(super) fn set_random_seed(core: &mut SimCore, seed: u32) {
    // xorshift32 has a fixed point at zero
    core.rng_state = if seed == 0 { 1 } else { seed };
}

pub(super) fn set_pixel_format(core: &mut SimCore, format: PixelFormat) {
    core.palette = DropletPalette::for_format(&format);
    core.format = format;
}

pub(super) fn enable_perf_metrics(core: &mut SimCore, enabled: bool) {
    core.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(core: &SimCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn load_settings_json(core: &mut SimCore, json: &str) -> Result<(), String> {
    let settings = SimSettings::from_json(json)?;
    core.area.width = settings.area_width;
    core.area.height = settings.area_height;
    core.area.neck_size = settings.neck_size;
    core.settings = settings;
    // A new play area invalidates every stored position; reseed, same as
    // the landscape-resize path.
    let count = core.settings.num_droplets;
    core.set_droplet_count(count);
    Ok(())
}
