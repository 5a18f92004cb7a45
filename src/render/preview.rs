//! Built-in shading backend: a primary-ray sky gradient.
//!
//! Stands in for a full integrator so the frame loop renders end to end.
//! It reads only the camera; scene geometry passes through untouched.

use crate::camera::Camera;
use crate::math::Vec3;
use crate::render::{pack_color, Band, BandRenderer};
use crate::scene::Geometry;

/// Blends between a horizon and a zenith color along the ray direction.
pub struct SkyRenderer {
    horizon: Vec3,
    zenith: Vec3,
}

impl SkyRenderer {
    pub fn new() -> Self {
        Self {
            horizon: Vec3::ONE,
            zenith: Vec3::new(0.5, 0.7, 1.0),
        }
    }
}

impl Default for SkyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl BandRenderer for SkyRenderer {
    fn render_band(
        &self,
        _geometry: &Geometry,
        camera: &Camera,
        band: Band,
        pixels: &mut [u32],
    ) {
        for (i, pixel) in pixels.iter_mut().enumerate() {
            let x = (i % band.width) as u32;
            let y = (band.start_row + i / band.width) as u32;

            let direction = camera.ray_direction(x, y);
            let t = 0.5 * (direction.y + 1.0);
            let color = self.horizon * (1.0 - t) + self.zenith * t;
            *pixel = pack_color(color);
        }
    }
}
