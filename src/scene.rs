//! Scene state consumed by the per-frame dispatcher.
//!
//! A [`Scene`] holds the camera and the geometry built once from a loaded
//! [`WavefrontFile`]. Rendering only proceeds when both are present; the
//! dispatcher checks readiness every frame.

use std::collections::HashMap;

use log::info;

use crate::camera::Camera;
use crate::math::Vec3;
use crate::wavefront::{Material, WavefrontFile};

/// A world-space triangle with resolved vertex data.
#[derive(Clone, Debug)]
pub struct Triangle {
    pub points: [Vec3; 3],
    pub normals: Option<[Vec3; 3]>,
    /// Index into [`Geometry::materials`], `None` for unresolved names
    /// (including the `"NULL"` sentinel).
    pub material: Option<usize>,
}

/// Flattened, render-ready scene geometry.
///
/// Built once after loading, before the first frame. Holds plain triangle
/// soup; spatial acceleration is a consumer concern.
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    triangles: Vec<Triangle>,
    materials: Vec<Material>,
}

impl Geometry {
    pub fn new(triangles: Vec<Triangle>, materials: Vec<Material>) -> Self {
        Self {
            triangles,
            materials,
        }
    }

    /// Resolves every mesh of a loaded file into world-space triangles.
    ///
    /// Indices are valid by the loader's contract, so resolution is a
    /// straight pool lookup. Meshes are visited in file order.
    pub fn from_file(file: &WavefrontFile) -> Self {
        let mut materials = Vec::new();
        let mut material_index: HashMap<&str, usize> = HashMap::new();
        for (name, material) in file.materials() {
            material_index.insert(name.as_str(), materials.len());
            materials.push(material.clone());
        }

        let points = file.points();
        let normals = file.normals();

        let mut triangles = Vec::new();
        for mesh in file.meshes() {
            for face in &mesh.faces {
                triangles.push(Triangle {
                    points: [
                        points[face.points[0]],
                        points[face.points[1]],
                        points[face.points[2]],
                    ],
                    normals: face
                        .normals
                        .map(|[a, b, c]| [normals[a], normals[b], normals[c]]),
                    material: material_index.get(face.material.as_str()).copied(),
                });
            }
        }

        Self {
            triangles,
            materials,
        }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }
}

/// Camera plus built geometry; the dispatcher's view of the world.
#[derive(Default)]
pub struct Scene {
    camera: Option<Camera>,
    geometry: Option<Geometry>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Builds render-ready geometry from a loaded file.
    pub fn build_geometry(&mut self, file: &WavefrontFile) {
        let geometry = Geometry::from_file(file);
        info!(
            "scene geometry ready: {} triangles, {} materials",
            geometry.triangles().len(),
            geometry.materials().len()
        );
        self.geometry = Some(geometry);
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Whether a frame can be rendered at all.
    pub fn is_ready(&self) -> bool {
        self.camera.is_some() && self.geometry.is_some()
    }

    /// Splits the scene into the mutable camera and the shared geometry
    /// for one frame. `None` until both are present.
    pub(crate) fn frame_state(&mut self) -> Option<(&mut Camera, &Geometry)> {
        match (&mut self.camera, &self.geometry) {
            (Some(camera), Some(geometry)) => Some((camera, geometry)),
            _ => None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
