//! Interactive pinhole camera.
//!
//! # Coordinate System
//!
//! Left-handed: X right, Y up, Z forward (into the screen).
//!
//! Orientation is yaw/pitch, applied to the +Z axis on demand:
//!
//! - **Yaw**: rotation around Y (positive = look right)
//! - **Pitch**: rotation around X (positive = look up, clamped to ±89°)
//!
//! The camera also carries the size of the raster it renders to, which the
//! dispatcher uses to partition the frame.

use std::f32::consts::TAU;

use crate::input::{InputState, Key};
use crate::math::Vec3;

const MOVE_SPEED: f32 = 5.0; // world units per second
const LOOK_SPEED: f32 = 1.5; // radians per second
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;
const FOV_Y: f32 = 60.0 * std::f32::consts::PI / 180.0;

/// First-person camera advanced once per frame, before workers spawn.
#[derive(Clone, Debug)]
pub struct Camera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    width: u32,
    height: u32,
}

impl Camera {
    /// Creates a camera at `position`, looking along +Z, rendering to a
    /// `width` x `height` raster.
    pub fn new(position: Vec3, width: u32, height: u32) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            width,
            height,
        }
    }

    /// Advances the camera for the elapsed frame time.
    ///
    /// Runs on the orchestrating thread only; workers read the result
    /// through a shared reference for the rest of the frame.
    pub fn update(&mut self, delta: f32, input: &InputState) {
        let turn = LOOK_SPEED * delta;
        if input.is_down(Key::Left) {
            self.yaw -= turn;
        }
        if input.is_down(Key::Right) {
            self.yaw += turn;
        }
        if input.is_down(Key::Up) {
            self.pitch += turn;
        }
        if input.is_down(Key::Down) {
            self.pitch -= turn;
        }
        self.yaw = self.yaw.rem_euclid(TAU);
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let step = MOVE_SPEED * delta;
        let forward = self.forward();
        let right = self.right();
        if input.is_down(Key::W) {
            self.position = self.position + forward * step;
        }
        if input.is_down(Key::S) {
            self.position = self.position - forward * step;
        }
        if input.is_down(Key::D) {
            self.position = self.position + right * step;
        }
        if input.is_down(Key::A) {
            self.position = self.position - right * step;
        }
        if input.is_down(Key::Space) {
            self.position = self.position + Vec3::UP * step;
        }
        if input.is_down(Key::LShift) {
            self.position = self.position - Vec3::UP * step;
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Size of the output raster this camera renders to.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// View direction.
    pub fn forward(&self) -> Vec3 {
        Vec3::FORWARD.rotate_x(-self.pitch).rotate_y(self.yaw)
    }

    /// Horizontal right vector, perpendicular to the view direction.
    pub fn right(&self) -> Vec3 {
        Vec3::UP.cross(self.forward()).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }

    /// Normalized direction of the primary ray through pixel `(x, y)`.
    ///
    /// Samples the pixel center; `y` grows downward in raster space.
    pub fn ray_direction(&self, x: u32, y: u32) -> Vec3 {
        let aspect = self.width as f32 / self.height as f32;
        let half = (FOV_Y * 0.5).tan();

        let ndc_x = ((x as f32 + 0.5) / self.width as f32) * 2.0 - 1.0;
        let ndc_y = 1.0 - ((y as f32 + 0.5) / self.height as f32) * 2.0;

        let dir = self.forward()
            + self.right() * (ndc_x * half * aspect)
            + self.up() * (ndc_y * half);
        dir.normalize()
    }
}

// =============================================================================
// Tests
// =============================================================================
