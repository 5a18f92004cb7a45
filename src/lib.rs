//! A CPU renderer core: Wavefront scene ingestion plus a per-frame
//! concurrent row-band dispatcher.
//!
//! SDL2 is used only for window management, presentation and input; all
//! pixel work happens on the CPU across a fixed pool of worker threads.
//!
//! # Quick Start
//!
//! ```ignore
//! use glint::prelude::*;
//!
//! let file = WavefrontFile::load("scene.obj")?;
//! let mut scene = Scene::new();
//! scene.set_camera(Camera::new(Vec3::ZERO, 1024, 576));
//! scene.build_geometry(&file);
//!
//! let dispatcher = FrameDispatcher::new(glint::config::thread_count())?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod config;
pub mod input;
pub mod math;
pub mod render;
pub mod scene;
pub mod wavefront;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use render::{Band, BandRenderer, FrameDispatcher, Framebuffer};
pub use scene::Scene;
pub use wavefront::{ParseError, WavefrontFile};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use glint::prelude::*;
/// ```
pub mod prelude {
    // Loader
    pub use crate::wavefront::{Face, Material, Mesh, ParseError, WavefrontFile};

    // Scene
    pub use crate::camera::Camera;
    pub use crate::scene::{Geometry, Scene};

    // Rendering
    pub use crate::render::{Band, BandRenderer, FrameDispatcher, Framebuffer, SkyRenderer};

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Window & Input
    pub use crate::input::{InputState, Key};
    pub use crate::window::{Display, FpsCounter};
}
