use wasm_bindgen::prelude::*;

/// Snapshot of the last instrumented pass (zeros while perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) droplets_processed: u32,
    pub(super) frame: u64,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    #[wasm_bindgen(getter)]
    pub fn droplets_processed(&self) -> u32 {
        self.droplets_processed
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
