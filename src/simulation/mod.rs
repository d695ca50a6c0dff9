//! Simulation - droplet orchestration
//!
//! One context object owns everything that outlives a single
//! locked-surface call: the droplet set, the drift table, the palette, the
//! landscape bounds and the counters. The host hands the locked surface
//! in, the passes work against it, nothing is retained.

use crate::domain::area::LandscapeArea;
use crate::domain::format::PixelFormat;
use crate::domain::palette::DropletPalette;
use crate::domain::settings::SimSettings;
use crate::spatial::droplets::DropletSet;
use crate::spatial::framebuffer::FramebufferView;
use crate::systems::drift::DriftTable;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/update.rs"]
mod update;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation core
pub struct SimCore {
    settings: SimSettings,
    area: LandscapeArea,
    droplets: DropletSet,
    drift: DriftTable,
    format: PixelFormat,
    palette: DropletPalette,

    // State
    paused: bool,
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimCore {
    /// Create a core from validated settings; seeds the initial droplets.
    pub fn new(settings: SimSettings) -> Result<Self, String> {
        init::create_core(settings)
    }

    pub fn width(&self) -> u32 { self.area.width }

    pub fn height(&self) -> u32 { self.area.height }

    pub fn bucket_size(&self) -> u32 { self.area.bucket_size }

    pub fn neck_size(&self) -> u32 { self.area.neck_size }

    pub fn area(&self) -> &LandscapeArea { &self.area }

    pub fn format(&self) -> &PixelFormat { &self.format }

    pub fn droplet_count(&self) -> u32 { self.droplets.len() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn paused(&self) -> bool { self.paused }

    /// Tick interval for the host's scheduler, in milliseconds.
    pub fn update_ms(&self) -> u32 { self.settings.update_ms }

    /// The pause flag is advisory: the host decides whether to call
    /// `advance`, the core just keeps the flag for it.
    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn set_random_seed(&mut self, seed: u32) {
        settings::set_random_seed(self, seed);
    }

    /// Adopt a new surface format. Stored offsets are untouched here; the
    /// next pass remaps them against the surface it is actually handed.
    pub fn set_pixel_format(&mut self, format: PixelFormat) {
        settings::set_pixel_format(self, format);
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    /// Enable or disable per-pass perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last pass perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Destroy the droplet set and pour a fresh one of `count` droplets.
    /// Resizes the bucket to hold them all.
    pub fn set_droplet_count(&mut self, count: u32) {
        commands::set_droplet_count(self, count);
    }

    /// Advance the simulation by `steps` ticks against the locked surface.
    /// `redraw_in_place` repaints droplets before the first step,
    /// compensating for a host-side surface erase.
    pub fn advance(&mut self, view: &mut FramebufferView<'_>, redraw_in_place: bool, steps: u32) {
        update::advance(self, view, redraw_in_place, steps);
    }

    /// Repaint every droplet without moving any, colour AND-ed with `mask`.
    pub fn draw(&mut self, view: &mut FramebufferView<'_>, mask: u32) {
        update::draw(self, view, mask);
    }

    /// Paint the landscape border onto a landscape-sized surface.
    pub fn draw_border(&self, view: &mut FramebufferView<'_>) {
        commands::draw_border(self, view);
    }

    /// Paint the funnel walls onto the composite surface.
    pub fn draw_bucket(&self, view: &mut FramebufferView<'_>) {
        commands::draw_bucket(self, view);
    }

    /// Diagnostic droplet dump, one line per droplet.
    pub fn dump_droplets(&self) -> String {
        commands::dump_droplets(self)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
