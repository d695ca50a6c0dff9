use wasm_bindgen::prelude::*;

use crate::domain::format::PixelFormat;
use crate::domain::settings::SimSettings;
use crate::spatial::framebuffer::FramebufferView;

use super::perf_stats::PerfStats;
use super::SimCore;

/// Host-facing facade. The host locks its surface, hands the mapped bytes
/// in, and unlocks when the call returns; nothing here retains the buffer.
#[wasm_bindgen]
pub struct Simulation {
    core: SimCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with the given play area and defaults elsewhere.
    #[wasm_bindgen(constructor)]
    pub fn new(area_width: u32, area_height: u32) -> Result<Simulation, JsValue> {
        let settings = SimSettings {
            area_width,
            area_height,
            ..SimSettings::default()
        };
        let core = SimCore::new(settings).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    /// Replace the settings from a JSON document. Reseeds the droplets.
    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn settings_json(&self) -> String {
        self.core.settings_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn bucket_size(&self) -> u32 { self.core.bucket_size() }

    #[wasm_bindgen(getter)]
    pub fn droplet_count(&self) -> u32 { self.core.droplet_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.paused() }

    /// Tick interval for the host's scheduler, in milliseconds.
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> u32 { self.core.update_ms() }

    /// Destroy the droplet set and pour a fresh one
    pub fn set_droplet_count(&mut self, count: u32) {
        self.core.set_droplet_count(count);
    }

    /// Adopt the surface format the host reports (bytes per pixel plus
    /// RGB channel masks)
    pub fn set_pixel_format(
        &mut self,
        bpp: u32,
        r_mask: u32,
        g_mask: u32,
        b_mask: u32,
    ) -> Result<(), JsValue> {
        let format =
            PixelFormat::new(bpp, r_mask, g_mask, b_mask).map_err(|e| JsValue::from_str(&e))?;
        self.core.set_pixel_format(format);
        Ok(())
    }

    pub fn set_random_seed(&mut self, seed: u32) {
        self.core.set_random_seed(seed);
    }

    pub fn pause(&mut self) {
        self.core.set_paused(true);
    }

    pub fn run(&mut self) {
        self.core.set_paused(false);
    }

    /// Advance `steps` ticks against the locked surface
    pub fn advance(
        &mut self,
        surface: &mut [u8],
        pitch: u32,
        redraw_in_place: bool,
        steps: u32,
    ) -> Result<(), JsValue> {
        let bpp = self.core.format().bpp;
        let mut view =
            FramebufferView::new(surface, pitch as usize, bpp).map_err(|e| JsValue::from_str(&e))?;
        self.core.advance(&mut view, redraw_in_place, steps);
        Ok(())
    }

    /// Repaint every droplet in place (no movement)
    pub fn draw(&mut self, surface: &mut [u8], pitch: u32) -> Result<(), JsValue> {
        self.draw_masked(surface, pitch, !0)
    }

    /// Repaint every droplet with its colour AND-ed with `mask`
    /// (`mask = 0` erases them)
    pub fn draw_masked(&mut self, surface: &mut [u8], pitch: u32, mask: u32) -> Result<(), JsValue> {
        let bpp = self.core.format().bpp;
        let mut view =
            FramebufferView::new(surface, pitch as usize, bpp).map_err(|e| JsValue::from_str(&e))?;
        self.core.draw(&mut view, mask);
        Ok(())
    }

    /// Paint the landscape border onto a landscape-sized surface
    pub fn draw_border(&self, land: &mut [u8], pitch: u32) -> Result<(), JsValue> {
        let bpp = self.core.format().bpp;
        let mut view =
            FramebufferView::new(land, pitch as usize, bpp).map_err(|e| JsValue::from_str(&e))?;
        self.core.draw_border(&mut view);
        Ok(())
    }

    /// Paint the funnel walls onto the composite surface
    pub fn draw_bucket(&self, surface: &mut [u8], pitch: u32) -> Result<(), JsValue> {
        let bpp = self.core.format().bpp;
        let mut view =
            FramebufferView::new(surface, pitch as usize, bpp).map_err(|e| JsValue::from_str(&e))?;
        self.core.draw_bucket(&mut view);
        Ok(())
    }

    /// Zero a surface
    pub fn clear_surface(&self, surface: &mut [u8], pitch: u32) -> Result<(), JsValue> {
        let bpp = self.core.format().bpp;
        let mut view =
            FramebufferView::new(surface, pitch as usize, bpp).map_err(|e| JsValue::from_str(&e))?;
        view.clear();
        Ok(())
    }

    /// Diagnostic droplet dump, one line per droplet
    pub fn dump_droplets(&self) -> String {
        self.core.dump_droplets()
    }

    /// Enable or disable per-pass perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last pass perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
