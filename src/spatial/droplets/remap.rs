//! Geometry remap - re-encode stored offsets when the surface changes.

use super::DropletSet;

impl DropletSet {
    /// Reconcile stored offsets with the surface's current geometry.
    ///
    /// Offsets are byte positions, so they go stale the moment the pitch
    /// or pixel width changes (a display mode switch). Each one is decoded
    /// under the recorded geometry and re-encoded under the new one; the
    /// cell a droplet occupies never changes. No-op when the geometry
    /// already matches.
    ///
    /// Returns true when a remap ran - the drift table must then be
    /// rebuilt, since its deltas are byte steps of the old pixel width.
    pub fn remap(&mut self, pitch: u32, bpp: u32) -> bool {
        if self.pitch == pitch && self.bpp == bpp {
            return false;
        }
        for offset in self.offsets.iter_mut() {
            let x = (*offset % self.pitch) / self.bpp;
            let y = *offset / self.pitch;
            *offset = x * bpp + y * pitch;
        }
        self.pitch = pitch;
        self.bpp = bpp;
        true
    }
}
