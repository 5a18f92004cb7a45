//! Record types produced by the Wavefront loader.

use crate::math::Vec3;

/// Material name applied to faces parsed before any `usemtl` directive.
pub const DEFAULT_MATERIAL: &str = "NULL";

/// One triangle of a mesh.
///
/// Faces are fixed-arity: polygon face lines are fan-triangulated by the
/// loader before a `Face` is ever built. Point indices are 0-based into
/// the owning file's position pool and always in range after a successful
/// load. Normal/texcoord triples are present only when every vertex group
/// on the source face line supplied that attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub points: [usize; 3],
    pub normals: Option<[usize; 3]>,
    pub texcoords: Option<[usize; 3]>,
    pub material: String,
}

impl Face {
    pub(crate) fn new(
        points: [usize; 3],
        normals: Option<[usize; 3]>,
        texcoords: Option<[usize; 3]>,
        material: &str,
    ) -> Self {
        Self {
            points,
            normals,
            texcoords,
            material: material.to_string(),
        }
    }
}

/// A named group of faces, in file order.
///
/// `has_normals`/`has_texcoords` are set the first time any face in the
/// mesh carries the attribute. A set flag does not guarantee every face
/// carries it; check the per-face `Option` for the per-face truth.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    name: String,
    pub faces: Vec<Face>,
    pub has_normals: bool,
    pub has_texcoords: bool,
}

impl Mesh {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            faces: Vec::new(),
            has_normals: false,
            has_texcoords: false,
        }
    }

    /// The group/object label this mesh was declared under.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named bundle of shading parameters and optional texture-map references.
///
/// Immutable once parsed; re-declaring the same name in a material library
/// replaces the previous value.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Illumination mode (`illum`).
    pub illum: u16,
    /// Diffuse texture map filename (`map_Kd`).
    pub diffuse_texture: Option<String>,
    /// Specular texture map filename (`map_Ks`).
    pub specular_texture: Option<String>,
    /// Emissive texture map filename (`map_Ke`).
    pub emissive_texture: Option<String>,
    /// Ambient color (`Ka`).
    pub ambient: Vec3,
    /// Diffuse color (`Kd`).
    pub diffuse: Vec3,
    /// Specular color (`Ks`).
    pub specular: Vec3,
    /// Emissive color (`Ke`).
    pub emissive: Vec3,
    /// Specular exponent (`Ns`).
    pub specular_exponent: f32,
    /// Index of refraction (`Ni`).
    pub refraction_index: f32,
    /// Fresnel reflectance (`Fr`).
    pub reflectance: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            illum: 0,
            diffuse_texture: None,
            specular_texture: None,
            emissive_texture: None,
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular: Vec3::ZERO,
            emissive: Vec3::ZERO,
            specular_exponent: 100.0,
            refraction_index: 1.0,
            reflectance: 0.75,
        }
    }
}
