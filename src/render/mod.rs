//! Per-frame rendering: the shared framebuffer, the row-band fork-join
//! dispatcher and the band-renderer seam the shading backend plugs into.

mod dispatcher;
mod framebuffer;
mod preview;

pub use dispatcher::FrameDispatcher;
pub use framebuffer::Framebuffer;
pub use preview::SkyRenderer;

use std::ops::Range;

use crate::camera::Camera;
use crate::math::Vec3;
use crate::scene::Geometry;

/// A contiguous row range of the output raster assigned to one worker for
/// one frame. Passed by value; the matching pixel slice is handed to the
/// worker separately and covers exactly `rows * width` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    /// First raster row of the band.
    pub start_row: usize,
    /// Number of rows in the band.
    pub rows: usize,
    /// Width of the raster in pixels.
    pub width: usize,
}

impl Band {
    /// The raster rows this band covers.
    pub fn row_range(&self) -> Range<usize> {
        self.start_row..self.start_row + self.rows
    }
}

/// Shading backend invoked once per band per frame.
///
/// Implementations read the scene and camera for the frame and write every
/// pixel of their band; they never see pixels outside it. Implementors
/// must be [`Sync`]: one instance is shared by all workers. A panic here
/// is fatal to the frame.
pub trait BandRenderer: Sync {
    fn render_band(&self, geometry: &Geometry, camera: &Camera, band: Band, pixels: &mut [u32]);
}

/// Packs an RGB color in `[0, 1]` into an ARGB8888 pixel.
#[inline]
pub fn pack_color(color: Vec3) -> u32 {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u32;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_row_range_is_half_open() {
        let band = Band {
            start_row: 33,
            rows: 33,
            width: 640,
        };
        assert_eq!(band.row_range(), 33..66);
    }

    #[test]
    fn colors_pack_to_opaque_argb() {
        assert_eq!(pack_color(Vec3::ZERO), 0xFF00_0000);
        assert_eq!(pack_color(Vec3::ONE), 0xFFFF_FFFF);
        assert_eq!(pack_color(Vec3::new(1.0, 0.0, 0.0)), 0xFFFF_0000);
        // Out-of-range components are clamped, not wrapped.
        assert_eq!(pack_color(Vec3::new(2.0, -1.0, 0.0)), 0xFFFF_0000);
    }
}
