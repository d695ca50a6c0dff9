//! FramebufferView - a transient view of the host's locked surface.
//!
//! The host locks its surface, wraps the mapped bytes in a view for the
//! duration of one engine call, and unlocks on return. The engine never
//! retains a view past the call that received it.

pub mod codec;

pub struct FramebufferView<'a> {
    buf: &'a mut [u8],
    /// Bytes between the start of one row and the next.
    pitch: usize,
    /// Bytes per pixel (1 to 4).
    bpp: u32,
}

impl<'a> FramebufferView<'a> {
    pub fn new(buf: &'a mut [u8], pitch: usize, bpp: u32) -> Result<Self, String> {
        if !(1..=4).contains(&bpp) {
            return Err(format!("unsupported pixel width: {} bytes", bpp));
        }
        if pitch < bpp as usize {
            return Err(format!("pitch {} is narrower than one pixel", pitch));
        }
        Ok(Self { buf, pitch, bpp })
    }

    #[inline]
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    #[inline]
    pub fn bpp(&self) -> u32 {
        self.bpp
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Read the pixel at a byte offset. The offset is the caller's
    /// contract; debug builds assert it.
    #[inline(always)]
    pub fn read(&self, offset: usize) -> u32 {
        codec::read_pixel(self.buf, offset, self.bpp)
    }

    /// Write the pixel at a byte offset. Same contract as `read`.
    #[inline(always)]
    pub fn write(&mut self, offset: usize, value: u32) {
        codec::write_pixel(self.buf, offset, value, self.bpp)
    }

    /// Byte offset of pixel (x, y).
    #[inline]
    pub fn offset_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.pitch + x as usize * self.bpp as usize
    }

    /// Zero the whole surface.
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }
}
