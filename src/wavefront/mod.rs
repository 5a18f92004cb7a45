//! Wavefront OBJ/MTL text-format loader.
//!
//! Parses a geometry file (and any companion material libraries it names)
//! into global vertex pools plus name-keyed meshes and materials. Polygon
//! faces are fan-triangulated at parse time, so consumers only ever see
//! fixed-arity triangle records.
//!
//! Loading is single-threaded and runs once, before rendering starts. Any
//! parse failure is fatal to the load call: the partially populated state
//! must not be used.

mod error;
mod types;

pub use error::ParseError;
pub use types::{Face, Material, Mesh, DEFAULT_MATERIAL};

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::math::{Vec2, Vec3};

/// Name of the mesh that receives faces declared before any `g`/`o`.
const DEFAULT_MESH: &str = "default";

/// One vertex group of a face line (`p`, `p/t`, `p/t/n` or `p//n`),
/// with indices already resolved to 0-based pool positions.
#[derive(Clone, Copy, Debug)]
struct VertexGroup {
    point: usize,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

/// In-memory representation of one OBJ file and its material libraries.
///
/// The aggregate root of the loader: owns the position/normal/texcoord
/// pools, the meshes (in file order) and the material map. Mutated only
/// by [`load_obj`](Self::load_obj) / [`load_mtl`](Self::load_mtl);
/// afterwards consumers read through the accessors.
#[derive(Debug, Default)]
pub struct WavefrontFile {
    obj_path: PathBuf,
    mtl_path: PathBuf,
    points: Vec<Vec3>,
    normals: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    meshes: Vec<Mesh>,
    mesh_index: HashMap<String, usize>,
    materials: HashMap<String, Material>,
}

impl WavefrontFile {
    /// Loads a geometry file, returning the fully populated representation.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let mut file = Self::default();
        file.load_obj(path)?;
        Ok(file)
    }

    /// Parses an OBJ file into the vertex pools and mesh map.
    ///
    /// Blank lines and `#` comments are skipped; unrecognized directives
    /// are ignored for forward compatibility. `mtllib` directives are
    /// resolved relative to the OBJ file's directory and loaded eagerly,
    /// each accumulating into the same material map.
    pub fn load_obj(&mut self, path: impl AsRef<Path>) -> Result<(), ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
        let reader = BufReader::new(file);
        self.obj_path = path.to_path_buf();

        let mut active_mesh: Option<usize> = None;
        let mut active_material = DEFAULT_MATERIAL.to_string();

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|e| ParseError::io(path, e))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens[0] {
                "v" => {
                    let point = parse_vec3(&tokens[1..], path, number)?;
                    self.points.push(point);
                }
                "vn" => {
                    let normal = parse_vec3(&tokens[1..], path, number)?;
                    self.normals.push(normal);
                }
                "vt" => {
                    let texcoord = parse_vec2(&tokens[1..], path, number)?;
                    self.texcoords.push(texcoord);
                }
                "g" | "o" => {
                    let name = directive_value(&tokens[1..], tokens[0], path, number)?;
                    active_mesh = Some(self.mesh_entry(name));
                }
                "usemtl" => {
                    let name = directive_value(&tokens[1..], "usemtl", path, number)?;
                    active_material = name.to_string();
                }
                "mtllib" => {
                    let name = directive_value(&tokens[1..], "mtllib", path, number)?;
                    let library = path.parent().unwrap_or_else(|| Path::new("")).join(name);
                    debug!("loading material library {}", library.display());
                    self.load_mtl(library)?;
                }
                "f" => {
                    if tokens.len() - 1 < 3 {
                        return Err(ParseError::syntax(
                            path,
                            number,
                            "face references fewer than 3 vertex groups",
                        ));
                    }
                    let mut groups = Vec::with_capacity(tokens.len() - 1);
                    for token in &tokens[1..] {
                        groups.push(self.parse_vertex_group(token, path, number)?);
                    }
                    let mesh = match active_mesh {
                        Some(index) => index,
                        None => {
                            let index = self.mesh_entry(DEFAULT_MESH);
                            active_mesh = Some(index);
                            index
                        }
                    };
                    self.emit_faces(mesh, &groups, &active_material);
                }
                _ => {}
            }
        }

        info!(
            "loaded {}: {} points, {} normals, {} texcoords, {} meshes, {} materials",
            path.display(),
            self.points.len(),
            self.normals.len(),
            self.texcoords.len(),
            self.meshes.len(),
            self.materials.len()
        );
        Ok(())
    }

    /// Parses a material library file into the material map.
    ///
    /// A `newmtl` directive opens a block; recognized keys inside a block
    /// set the corresponding material fields, unknown keys are skipped.
    /// A block commits when the next `newmtl` starts and at end of file,
    /// overwriting any prior material of the same name.
    pub fn load_mtl(&mut self, path: impl AsRef<Path>) -> Result<(), ParseError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ParseError::io(path, e))?;
        let reader = BufReader::new(file);
        self.mtl_path = path.to_path_buf();

        let mut block: Option<(String, Material)> = None;

        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|e| ParseError::io(path, e))?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens[0] == "newmtl" {
                if let Some((name, material)) = block.take() {
                    self.materials.insert(name, material);
                }
                let name = directive_value(&tokens[1..], "newmtl", path, number)?;
                block = Some((name.to_string(), Material::default()));
                continue;
            }

            // Keys outside any newmtl block have nothing to apply to.
            let Some((_, material)) = block.as_mut() else {
                continue;
            };
            match tokens[0] {
                "Ka" => material.ambient = parse_vec3(&tokens[1..], path, number)?,
                "Kd" => material.diffuse = parse_vec3(&tokens[1..], path, number)?,
                "Ks" => material.specular = parse_vec3(&tokens[1..], path, number)?,
                "Ke" => material.emissive = parse_vec3(&tokens[1..], path, number)?,
                "Ns" => material.specular_exponent = parse_scalar(&tokens[1..], path, number)?,
                "Ni" => material.refraction_index = parse_scalar(&tokens[1..], path, number)?,
                "Fr" => material.reflectance = parse_scalar(&tokens[1..], path, number)?,
                "illum" => {
                    let raw = directive_value(&tokens[1..], "illum", path, number)?;
                    material.illum = raw.parse().map_err(|_| {
                        ParseError::syntax(
                            path,
                            number,
                            format!("malformed illumination mode '{raw}'"),
                        )
                    })?;
                }
                "map_Kd" => {
                    let name = directive_value(&tokens[1..], "map_Kd", path, number)?;
                    material.diffuse_texture = Some(name.to_string());
                }
                "map_Ks" => {
                    let name = directive_value(&tokens[1..], "map_Ks", path, number)?;
                    material.specular_texture = Some(name.to_string());
                }
                "map_Ke" => {
                    let name = directive_value(&tokens[1..], "map_Ke", path, number)?;
                    material.emissive_texture = Some(name.to_string());
                }
                _ => {}
            }
        }

        if let Some((name, material)) = block.take() {
            self.materials.insert(name, material);
        }

        info!(
            "loaded {}: {} materials total",
            path.display(),
            self.materials.len()
        );
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the last OBJ file loaded.
    pub fn obj_path(&self) -> &Path {
        &self.obj_path
    }

    /// Path of the last material library loaded.
    pub fn mtl_path(&self) -> &Path {
        &self.mtl_path
    }

    /// The position pool, in file order.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// The normal pool, in file order.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// An independent copy of the texcoord pool.
    pub fn texcoords(&self) -> Vec<Vec2> {
        self.texcoords.clone()
    }

    /// All meshes, in order of first appearance in the file.
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Looks up a mesh by its group/object name.
    pub fn mesh(&self, name: &str) -> Option<&Mesh> {
        self.mesh_index.get(name).map(|&index| &self.meshes[index])
    }

    /// The material map.
    pub fn materials(&self) -> &HashMap<String, Material> {
        &self.materials
    }

    /// Looks up a material by name.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    // =========================================================================
    // Parsing internals
    // =========================================================================

    /// Returns the index of the mesh with the given name, creating it on
    /// first use. Repeated `g`/`o` directives with one name share a mesh.
    fn mesh_entry(&mut self, name: &str) -> usize {
        if let Some(&index) = self.mesh_index.get(name) {
            return index;
        }
        let index = self.meshes.len();
        self.meshes.push(Mesh::new(name));
        self.mesh_index.insert(name.to_string(), index);
        index
    }

    /// Parses one `p[/t][/n]` vertex group against the current pool sizes.
    fn parse_vertex_group(
        &self,
        token: &str,
        path: &Path,
        line: usize,
    ) -> Result<VertexGroup, ParseError> {
        let fields: Vec<&str> = token.split('/').collect();
        if fields.len() > 3 || fields[0].is_empty() {
            return Err(ParseError::syntax(
                path,
                line,
                format!("invalid vertex group '{token}'"),
            ));
        }

        let point = resolve_index(fields[0], self.points.len(), "point", path, line)?;
        let texcoord = match fields.get(1) {
            Some(raw) if !raw.is_empty() => {
                Some(resolve_index(raw, self.texcoords.len(), "texcoord", path, line)?)
            }
            _ => None,
        };
        let normal = match fields.get(2) {
            Some(raw) if !raw.is_empty() => {
                Some(resolve_index(raw, self.normals.len(), "normal", path, line)?)
            }
            _ => None,
        };

        Ok(VertexGroup {
            point,
            texcoord,
            normal,
        })
    }

    /// Fan-triangulates a parsed face line into the given mesh.
    ///
    /// For `n` vertex groups, emits `n-2` triangles `(g1, gi, gi+1)` in the
    /// original winding order. A triangle records normal/texcoord indices
    /// only when every one of its groups supplied the attribute, and each
    /// recorded attribute sets the mesh's presence flag.
    fn emit_faces(&mut self, mesh: usize, groups: &[VertexGroup], material: &str) {
        let mesh = &mut self.meshes[mesh];
        for i in 1..groups.len() - 1 {
            let corners = [groups[0], groups[i], groups[i + 1]];
            let points = [corners[0].point, corners[1].point, corners[2].point];
            let normals = match (corners[0].normal, corners[1].normal, corners[2].normal) {
                (Some(a), Some(b), Some(c)) => Some([a, b, c]),
                _ => None,
            };
            let texcoords = match (corners[0].texcoord, corners[1].texcoord, corners[2].texcoord)
            {
                (Some(a), Some(b), Some(c)) => Some([a, b, c]),
                _ => None,
            };

            mesh.has_normals |= normals.is_some();
            mesh.has_texcoords |= texcoords.is_some();
            mesh.faces.push(Face::new(points, normals, texcoords, material));
        }
    }
}

/// Resolves a 1-based or negative-relative OBJ index against a pool length.
fn resolve_index(
    raw: &str,
    pool_len: usize,
    what: &str,
    path: &Path,
    line: usize,
) -> Result<usize, ParseError> {
    let value: i64 = raw.parse().map_err(|_| {
        ParseError::syntax(path, line, format!("malformed {what} index '{raw}'"))
    })?;

    let resolved = if value > 0 {
        value - 1
    } else {
        pool_len as i64 + value
    };
    if resolved < 0 || resolved >= pool_len as i64 {
        return Err(ParseError::syntax(
            path,
            line,
            format!("{what} index {raw} out of range (pool holds {pool_len})"),
        ));
    }
    Ok(resolved as usize)
}

fn parse_float(raw: &str, path: &Path, line: usize) -> Result<f32, ParseError> {
    raw.parse().map_err(|_| {
        ParseError::syntax(path, line, format!("malformed numeric literal '{raw}'"))
    })
}

fn parse_scalar(args: &[&str], path: &Path, line: usize) -> Result<f32, ParseError> {
    match args.first() {
        Some(raw) => parse_float(raw, path, line),
        None => Err(ParseError::syntax(path, line, "expected 1 numeric component")),
    }
}

fn parse_vec2(args: &[&str], path: &Path, line: usize) -> Result<Vec2, ParseError> {
    if args.len() < 2 {
        return Err(ParseError::syntax(path, line, "expected 2 numeric components"));
    }
    Ok(Vec2::new(
        parse_float(args[0], path, line)?,
        parse_float(args[1], path, line)?,
    ))
}

fn parse_vec3(args: &[&str], path: &Path, line: usize) -> Result<Vec3, ParseError> {
    if args.len() < 3 {
        return Err(ParseError::syntax(path, line, "expected 3 numeric components"));
    }
    Ok(Vec3::new(
        parse_float(args[0], path, line)?,
        parse_float(args[1], path, line)?,
        parse_float(args[2], path, line)?,
    ))
}

fn directive_value<'a>(
    args: &[&'a str],
    directive: &str,
    path: &Path,
    line: usize,
) -> Result<&'a str, ParseError> {
    args.first().copied().ok_or_else(|| {
        ParseError::syntax(path, line, format!("'{directive}' is missing a value"))
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn pool_lengths_match_directive_counts() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pools.obj",
            "v 0 0 0\nv 1 0 0\nv 0 1 0\n\
             vn 0 0 1\nvn 0 1 0\n\
             vt 0.5 0.5\n\
             # a comment\n\
             \n\
             f 1 2 3\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        assert_eq!(file.points().len(), 3);
        assert_eq!(file.normals().len(), 2);
        assert_eq!(file.texcoords().len(), 1);
        assert_relative_eq!(file.points()[1].x, 1.0);
        assert_relative_eq!(file.texcoords()[0].y, 0.5);
    }

    #[test]
    fn polygon_faces_fan_triangulate_around_first_vertex() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "pentagon.obj",
            "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\n\
             g Pentagon\n\
             f 1 2 3 4 5\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        let mesh = file.mesh("Pentagon").unwrap();
        assert_eq!(mesh.faces.len(), 3); // n-2 for n=5
        assert_eq!(mesh.faces[0].points, [0, 1, 2]);
        assert_eq!(mesh.faces[1].points, [0, 2, 3]);
        assert_eq!(mesh.faces[2].points, [0, 3, 4]);
    }

    #[test]
    fn negative_indices_resolve_like_positive_ones() {
        let dir = TempDir::new().unwrap();
        let positive = write_file(
            &dir,
            "positive.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n",
        );
        let negative = write_file(
            &dir,
            "negative.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nf -3 -2 -1\n",
        );

        let a = WavefrontFile::load(&positive).unwrap();
        let b = WavefrontFile::load(&negative).unwrap();
        assert_eq!(
            a.meshes()[0].faces[0].points,
            b.meshes()[0].faces[0].points
        );
    }

    #[test]
    fn repeated_group_directive_appends_to_one_mesh() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "groups.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             g Foo\n\
             f 1 2 3\n\
             g Bar\n\
             f 2 3 4\n\
             g Foo\n\
             f 1 3 4\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        assert_eq!(file.meshes().len(), 2);

        let foo = file.mesh("Foo").unwrap();
        assert_eq!(foo.faces.len(), 2);
        // File order is preserved across the g Bar interruption.
        assert_eq!(foo.faces[0].points, [0, 1, 2]);
        assert_eq!(foo.faces[1].points, [0, 2, 3]);
        assert_eq!(file.mesh("Bar").unwrap().faces.len(), 1);
    }

    #[test]
    fn out_of_range_index_reports_the_face_line() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "range.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 4\n",
        );

        let err = WavefrontFile::load(&path).unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn index_just_past_pool_end_is_rejected() {
        let dir = TempDir::new().unwrap();
        // Pool length 3; 1-based index 4 resolves to 3 == poolLength.
        let path = write_file(
            &dir,
            "edge.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nf 2 3 4\n",
        );
        assert!(WavefrontFile::load(&path).is_err());
    }

    #[test]
    fn short_face_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "short.obj", "v 0 0 0\nv 1 0 0\nf 1 2\n");

        let err = WavefrontFile::load(&path).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert!(err.to_string().contains("fewer than 3"));
    }

    #[test]
    fn malformed_numeric_literal_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.obj", "v 0 zero 0\n");

        let err = WavefrontFile::load(&path).unwrap_err();
        assert_eq!(err.line(), Some(1));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = WavefrontFile::load("/nonexistent/scene.obj").unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn unknown_directives_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "future.obj",
            "s 1\nv 0 0 0\nv 1 0 0\nv 1 1 0\nl 1 2\nf 1 2 3\n",
        );
        let file = WavefrontFile::load(&path).unwrap();
        assert_eq!(file.meshes()[0].faces.len(), 1);
    }

    #[test]
    fn faces_before_usemtl_carry_the_null_sentinel() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "sentinel.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\n\
             f 1 2 3\n\
             usemtl Stone\n\
             f 1 2 3\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        let mesh = file.mesh("default").unwrap();
        assert_eq!(mesh.faces[0].material, DEFAULT_MATERIAL);
        assert_eq!(mesh.faces[1].material, "Stone");
    }

    #[test]
    fn attribute_indices_follow_the_group_grammar() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "grammar.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\n\
             vn 0 0 1\n\
             vt 0 0\nvt 1 0\nvt 1 1\n\
             g Full\n\
             f 1/1/1 2/2/1 3/3/1\n\
             g NormalsOnly\n\
             f 1//1 2//1 3//1\n\
             g PointsOnly\n\
             f 1 2 3\n",
        );

        let file = WavefrontFile::load(&path).unwrap();

        let full = &file.mesh("Full").unwrap().faces[0];
        assert_eq!(full.texcoords, Some([0, 1, 2]));
        assert_eq!(full.normals, Some([0, 0, 0]));

        let normals_only = file.mesh("NormalsOnly").unwrap();
        assert!(normals_only.has_normals);
        assert!(!normals_only.has_texcoords);
        assert_eq!(normals_only.faces[0].texcoords, None);

        let points_only = file.mesh("PointsOnly").unwrap();
        assert!(!points_only.has_normals);
        assert!(!points_only.has_texcoords);
    }

    #[test]
    fn presence_flags_stick_once_any_face_supplies_the_attribute() {
        // A mesh mixing attribute-less and attributed faces keeps the flag
        // set; the per-face Option carries the per-face truth.
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "mixed.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nvt 0 0\nvt 1 0\nvt 1 1\n\
             g Mixed\n\
             f 1 2 3\n\
             f 1/1 2/2 3/3\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        let mesh = file.mesh("Mixed").unwrap();
        assert!(mesh.has_texcoords);
        assert_eq!(mesh.faces[0].texcoords, None);
        assert_eq!(mesh.faces[1].texcoords, Some([0, 1, 2]));
    }

    #[test]
    fn end_to_end_quad_becomes_two_triangles() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "quad.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
             g Quad\n\
             usemtl M\n\
             f 1 2 3 4\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        assert_eq!(file.meshes().len(), 1);

        let quad = file.mesh("Quad").unwrap();
        assert_eq!(quad.faces.len(), 2);
        assert_eq!(quad.faces[0].points, [0, 1, 2]);
        assert_eq!(quad.faces[1].points, [0, 2, 3]);
        assert!(quad.faces.iter().all(|f| f.material == "M"));
        assert!(!quad.has_normals);
        assert!(!quad.has_texcoords);
    }

    #[test]
    fn mtllib_is_resolved_relative_to_the_obj_directory() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir,
            "scene.mtl",
            "newmtl Red\nKd 1 0 0\nNs 32\nillum 2\nmap_Kd red.png\n",
        );
        let path = write_file(
            &dir,
            "scene.obj",
            "mtllib scene.mtl\nv 0 0 0\nv 1 0 0\nv 1 1 0\nusemtl Red\nf 1 2 3\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        let red = file.material("Red").unwrap();
        assert_relative_eq!(red.diffuse.x, 1.0);
        assert_relative_eq!(red.specular_exponent, 32.0);
        assert_eq!(red.illum, 2);
        assert_eq!(red.diffuse_texture.as_deref(), Some("red.png"));
    }

    #[test]
    fn multiple_mtllib_directives_accumulate() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.mtl", "newmtl A\nKd 1 0 0\n");
        write_file(&dir, "b.mtl", "newmtl B\nKd 0 1 0\n");
        let path = write_file(
            &dir,
            "scene.obj",
            "mtllib a.mtl\nmtllib b.mtl\nv 0 0 0\nv 1 0 0\nv 1 1 0\nf 1 2 3\n",
        );

        let file = WavefrontFile::load(&path).unwrap();
        assert_eq!(file.materials().len(), 2);
        assert!(file.material("A").is_some());
        assert!(file.material("B").is_some());
    }

    #[test]
    fn redeclaring_a_material_keeps_the_last_value() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "twice.mtl",
            "newmtl Red\nKd 1 0 0\nnewmtl Red\nKd 0 0 1\n",
        );

        let mut file = WavefrontFile::default();
        file.load_mtl(&path).unwrap();
        assert_eq!(file.materials().len(), 1);
        assert_relative_eq!(file.material("Red").unwrap().diffuse.z, 1.0);
    }

    #[test]
    fn bare_material_block_gets_the_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bare.mtl", "newmtl Plain\n");

        let mut file = WavefrontFile::default();
        file.load_mtl(&path).unwrap();

        let plain = file.material("Plain").unwrap();
        assert_eq!(plain.illum, 0);
        assert_relative_eq!(plain.specular_exponent, 100.0);
        assert_relative_eq!(plain.refraction_index, 1.0);
        assert_relative_eq!(plain.reflectance, 0.75);
        assert_eq!(plain.diffuse_texture, None);
    }

    #[test]
    fn malformed_mtl_scalar_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "bad.mtl", "newmtl Red\nNs shiny\n");

        let mut file = WavefrontFile::default();
        let err = file.load_mtl(&path).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
