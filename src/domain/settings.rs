//! Engine settings, loadable from a JSON document supplied by the host.

use serde::{Deserialize, Serialize};

pub const MIN_AREA_WIDTH: u32 = 640;
pub const MIN_AREA_HEIGHT: u32 = 400;
pub const DEFAULT_NUM_DROPLETS: u32 = 100_000;
pub const DEFAULT_NECK_SIZE: u32 = 5;
pub const DEFAULT_UPDATE_MS: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub area_width: u32,
    pub area_height: u32,
    pub neck_size: u32,
    pub num_droplets: u32,
    /// Milliseconds between updates; consumed by the host's tick scheduler.
    pub update_ms: u32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            area_width: MIN_AREA_WIDTH,
            area_height: MIN_AREA_HEIGHT,
            neck_size: DEFAULT_NECK_SIZE,
            num_droplets: DEFAULT_NUM_DROPLETS,
            update_ms: DEFAULT_UPDATE_MS,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.area_width < MIN_AREA_WIDTH || self.area_height < MIN_AREA_HEIGHT {
            return Err(format!(
                "play area must be at least {}x{} (got {}x{})",
                MIN_AREA_WIDTH, MIN_AREA_HEIGHT, self.area_width, self.area_height
            ));
        }
        if self.neck_size == 0 || self.neck_size >= self.area_width / 2 {
            return Err(format!(
                "neck size {} does not fit a {}-wide play area",
                self.neck_size, self.area_width
            ));
        }
        if self.update_ms == 0 {
            return Err("update interval must be at least 1ms".to_string());
        }
        Ok(())
    }
}
