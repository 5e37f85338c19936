//! Minimal OBJ loader.
//!
//! Reads `v` (position) and `f` (triangular face) records, ignoring
//! everything else. Face vertices may use the `index/uv/normal` form;
//! only the position index is consumed. Per-face normals are derived
//! from the index winding, since the renderer shades with face normals
//! only.

use glimmer_math::Vec3;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed vertex at line {line}")]
    InvalidVertex { line: usize },

    #[error("malformed face at line {line}")]
    InvalidFace { line: usize },

    #[error("face index {index} out of range at line {line}")]
    IndexOutOfRange { index: usize, line: usize },
}

/// Result type for OBJ loading.
pub type ObjResult<T> = Result<T, ObjError>;

/// Geometry loaded from an OBJ file, ready to drop into a
/// [`TriangleMesh`](crate::TriangleMesh).
#[derive(Debug, Clone, Default)]
pub struct ObjData {
    pub positions: Vec<Vec3>,
    /// One derived normal per face
    pub normals: Vec<Vec3>,
    /// Flattened triangle indices, stride 3
    pub indices: Vec<u32>,
}

/// Load and triangle-index an OBJ file.
pub fn load_obj(path: &Path) -> ObjResult<ObjData> {
    let content = fs::read_to_string(path)?;
    let data = parse_obj(&content)?;

    log::info!(
        "loaded {:?}: {} vertices, {} triangles",
        path.file_name().unwrap_or_default(),
        data.positions.len(),
        data.indices.len() / 3
    );
    Ok(data)
}

/// Parse OBJ text. Split out from the file read for testability.
pub fn parse_obj(content: &str) -> ObjResult<ObjData> {
    let mut data = ObjData::default();

    for (number, line) in content.lines().enumerate() {
        let line_no = number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut component = || -> ObjResult<f32> {
                    tokens
                        .next()
                        .and_then(|t| t.parse().ok())
                        .ok_or(ObjError::InvalidVertex { line: line_no })
                };
                let x = component()?;
                let y = component()?;
                let z = component()?;
                data.positions.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                for _ in 0..3 {
                    let token = tokens.next().ok_or(ObjError::InvalidFace { line: line_no })?;
                    // "i", "i/t", "i/t/n", "i//n" - position index first
                    let position = token
                        .split('/')
                        .next()
                        .and_then(|t| t.parse::<usize>().ok())
                        .ok_or(ObjError::InvalidFace { line: line_no })?;

                    // OBJ indices are 1-based
                    if position == 0 || position > data.positions.len() {
                        return Err(ObjError::IndexOutOfRange {
                            index: position,
                            line: line_no,
                        });
                    }
                    data.indices.push((position - 1) as u32);
                }
            }
            // Comments, vt/vn records, object/group/material commands
            _ => {}
        }
    }

    derive_face_normals(&mut data);
    Ok(data)
}

/// One normal per index triple, from the authored winding. Degenerate
/// faces get +Y so a bad asset cannot inject NaN into the render.
fn derive_face_normals(data: &mut ObjData) {
    data.normals.reserve(data.indices.len() / 3);

    for face in data.indices.chunks_exact(3) {
        let p0 = data.positions[face[0] as usize];
        let p1 = data.positions[face[1] as usize];
        let p2 = data.positions[face[2] as usize];

        let normal = (p1 - p0).cross(p2 - p0);
        let length = normal.length();
        if length > 0.0 {
            data.normals.push(normal / length);
        } else {
            log::warn!("degenerate OBJ face [{}, {}, {}]", face[0], face[1], face[2]);
            data.normals.push(Vec3::Y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT_QUAD: &str = "\
# a unit quad
v -1.0 -1.0 0.0
v -1.0 1.0 0.0
v 1.0 1.0 0.0
v 1.0 -1.0 0.0
f 1 2 3
f 1 3 4
";

    #[test]
    fn test_parse_positions_and_faces() {
        let data = parse_obj(UNIT_QUAD).unwrap();

        assert_eq!(data.positions.len(), 4);
        assert_eq!(data.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(data.normals.len(), 2);
    }

    #[test]
    fn test_face_normals_follow_winding() {
        let data = parse_obj(UNIT_QUAD).unwrap();

        // Both faces wind the same way; normals agree and are unit
        for n in &data.normals {
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!((*n - data.normals[0]).length() < 1e-5);
        }
    }

    #[test]
    fn test_slash_face_forms() {
        let content = "\
v 0 0 0
v 1 0 0
v 0 1 0
f 1/1/1 2/2/2 3/3/3
";
        let data = parse_obj(content).unwrap();
        assert_eq!(data.indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_ignores_unknown_records() {
        let content = "\
o quad
vt 0.0 0.0
vn 0.0 0.0 1.0
v 0 0 0
v 1 0 0
v 0 1 0
usemtl none
f 1 2 3
";
        let data = parse_obj(content).unwrap();
        assert_eq!(data.positions.len(), 3);
        assert_eq!(data.indices.len(), 3);
    }

    #[test]
    fn test_bad_vertex_is_an_error() {
        let err = parse_obj("v 1.0 nope 2.0\n").unwrap_err();
        assert!(matches!(err, ObjError::InvalidVertex { line: 1 }));
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let content = "\
v 0 0 0
v 1 0 0
f 1 2 3
";
        let err = parse_obj(content).unwrap_err();
        assert!(matches!(err, ObjError::IndexOutOfRange { index: 3, line: 3 }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_obj(Path::new("/definitely/not/here.obj")).unwrap_err();
        assert!(matches!(err, ObjError::Io(_)));
    }
}
