use crate::domain::area::LandscapeArea;
use crate::domain::format::PixelFormat;
use crate::domain::palette::DropletPalette;
use crate::domain::settings::SimSettings;
use crate::spatial::droplets::DropletSet;
use crate::systems::drift::DriftTable;

use super::perf_stats::PerfStats;
use super::SimCore;

pub(super) fn create_core(settings: SimSettings) -> Result<SimCore, String> {
    settings.validate()?;

    let format = PixelFormat::XRGB8888;
    let mut core = SimCore {
        area: LandscapeArea {
            width: settings.area_width,
            height: settings.area_height,
            bucket_size: 0,
            neck_size: settings.neck_size,
        },
        droplets: DropletSet::new(),
        drift: DriftTable::new(),
        palette: DropletPalette::for_format(&format),
        format,
        paused: true,
        frame: 0,
        rng_state: 12345,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        settings,
    };

    let count = core.settings.num_droplets;
    core.set_droplet_count(count);
    Ok(core)
}
