use crate::spatial::framebuffer::FramebufferView;
use crate::systems::landscape;

use super::SimCore;

pub(super) fn set_droplet_count(core: &mut SimCore, count: u32) {
    if let Some(bucket_size) = core
        .droplets
        .reseed(count, core.area.width, &mut core.rng_state)
    {
        core.area.bucket_size = bucket_size;
    }
    core.settings.num_droplets = count;
}

pub(super) fn draw_border(core: &SimCore, view: &mut FramebufferView<'_>) {
    landscape::draw_border(view, &core.area, core.format.white());
}

pub(super) fn draw_bucket(core: &SimCore, view: &mut FramebufferView<'_>) {
    landscape::draw_bucket(view, &core.area, core.format.white());
}

pub(super) fn dump_droplets(core: &SimCore) -> String {
    core.droplets.dump()
}
