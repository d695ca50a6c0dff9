//! Pixel formats the engine can encode droplets into.
//!
//! The host reports its surface format as bytes-per-pixel plus the three
//! RGB channel masks; every colour the engine writes is derived from the
//! masks, so the simulation works unchanged across display depths.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelFormat {
    /// Bytes per pixel (1 to 4).
    pub bpp: u32,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
}

impl PixelFormat {
    /// 16bpp, 5-6-5.
    pub const RGB565: PixelFormat = PixelFormat {
        bpp: 2,
        r_mask: 0xF800,
        g_mask: 0x07E0,
        b_mask: 0x001F,
    };

    /// 32bpp, 8-8-8 with an unused high byte.
    pub const XRGB8888: PixelFormat = PixelFormat {
        bpp: 4,
        r_mask: 0x00FF_0000,
        g_mask: 0x0000_FF00,
        b_mask: 0x0000_00FF,
    };

    pub fn new(bpp: u32, r_mask: u32, g_mask: u32, b_mask: u32) -> Result<Self, String> {
        if !(1..=4).contains(&bpp) {
            return Err(format!("unsupported pixel width: {} bytes", bpp));
        }
        Ok(Self { bpp, r_mask, g_mask, b_mask })
    }

    /// All channels on - the terrain colour.
    #[inline]
    pub fn white(&self) -> u32 {
        self.r_mask | self.g_mask | self.b_mask
    }

    /// The green channel mask doubles as the "resting on landscape" marker:
    /// the update rule treats a pixel holding exactly this value as ground,
    /// whoever painted it.
    #[inline]
    pub fn land_marker(&self) -> u32 {
        self.g_mask
    }
}
