//! Bulk (re)generation of the droplet set.
//!
//! Droplets are poured into a triangle hanging under the bucket apex, row
//! `i` holding `2*i - 1` of them, so the fresh set looks like water heaped
//! in the funnel before the first tick.

use crate::systems::rng;

use super::DropletSet;

/// Extra bucket rows beyond the triangle that holds every droplet.
const BUCKET_MARGIN: u32 = 10;

impl DropletSet {
    /// Destroy all droplets and lay out `count` fresh ones.
    ///
    /// Positions are encoded with a provisional geometry (1 byte per
    /// pixel, pitch = `area_width`); the first pass over a real surface
    /// remaps them. Returns the bucket size the new set needs, or None
    /// when `count` is zero (empty set, the previous bucket stands).
    pub fn reseed(&mut self, count: u32, area_width: u32, rng_state: &mut u32) -> Option<u32> {
        self.bpp = 1;
        self.pitch = area_width;
        if count == 0 {
            // Drop the backing storage too - an empty set allocates nothing.
            self.offsets = Vec::new();
            self.kinds = Vec::new();
            return None;
        }

        // Bucket must be big enough to contain all droplets at rest.
        let bucket_size = (count as f64).sqrt() as u32 + BUCKET_MARGIN;

        self.offsets.clear();
        self.kinds.clear();
        self.offsets.reserve(count as usize);
        self.kinds.reserve(count as usize);

        let half = (area_width / 2) as i64;
        let mut placed: u32 = 0;
        let mut i: u32 = 1;
        while placed <= count && i < bucket_size {
            let mut j: u32 = 1;
            while placed < count && j < i * 2 {
                // Wide rows may stick out past the surface edge; the byte
                // arithmetic folds those droplets into the adjacent row,
                // same as any other out-of-row offset.
                let x = half - i as i64 + j as i64;
                let y = (bucket_size - i) as i64;
                let offset = x * self.bpp as i64 + y * self.pitch as i64;
                self.offsets.push(offset as u32);
                self.kinds.push(rng::coin_flip(rng_state) as u8);
                placed += 1;
                j += 1;
            }
            i += 1;
        }

        Some(bucket_size)
    }
}
