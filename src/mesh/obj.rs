//! Wavefront OBJ reader.
//!
//! Produces an unindexed triangle list (three corners per triangle) with one
//! UV and one normal per corner. Polygons are fan-triangulated. Corners
//! without a `vt` reference get `(0, 0)`; corners without a `vn` reference
//! get the flat normal of their triangle.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::{Vec2, Vec3};

use crate::error::OrbitError;

/// Unindexed triangle corners, three per triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleSoup {
    /// Corner positions.
    pub positions: Vec<Vec3>,
    /// Corner texture coordinates (V flipped to a top-left origin).
    pub uvs: Vec<Vec2>,
    /// Corner normals.
    pub normals: Vec<Vec3>,
}

impl TriangleSoup {
    /// Number of complete triangles.
    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// One `v/vt/vn` reference, already resolved to zero-based indices.
#[derive(Debug, Clone, Copy)]
struct Corner {
    position: usize,
    uv: Option<usize>,
    normal: Option<usize>,
}

/// Open and parse an OBJ file.
///
/// # Errors
///
/// Returns [`OrbitError::MeshLoad`] naming the path on any I/O or parse
/// failure.
pub fn load_obj(path: &Path) -> Result<TriangleSoup, OrbitError> {
    let file = File::open(path).map_err(|e| {
        OrbitError::MeshLoad(format!("failed to open {}: {e}", path.display()))
    })?;
    parse_obj(BufReader::new(file))
        .map_err(|e| OrbitError::MeshLoad(format!("{}: {e}", path.display())))
}

/// Parse OBJ text from any buffered reader.
///
/// Errors are plain strings carrying the 1-based line number; [`load_obj`]
/// wraps them with the file name.
pub fn parse_obj<R: BufRead>(reader: R) -> Result<TriangleSoup, String> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut tex_coords: Vec<Vec2> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();

    let mut soup = TriangleSoup::default();

    for (line_no, line) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line.map_err(|e| format!("line {line_no}: {e}"))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let Some(tag) = parts.next() else {
            continue;
        };
        let rest: Vec<&str> = parts.collect();

        match tag {
            "v" => positions.push(parse_vec3(&rest, line_no)?),
            "vn" => normals.push(parse_vec3(&rest, line_no)?),
            "vt" => {
                let uv = parse_floats::<2>(&rest, line_no)?;
                // OBJ puts v = 0 at the bottom; wgpu samples from the top
                tex_coords.push(Vec2::new(uv[0], 1.0 - uv[1]));
            }
            "f" => {
                if rest.len() < 3 {
                    return Err(format!(
                        "line {line_no}: face needs at least 3 vertices"
                    ));
                }
                let corners = rest
                    .iter()
                    .map(|token| {
                        parse_corner(
                            token,
                            (positions.len(), tex_coords.len(), normals.len()),
                            line_no,
                        )
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                // Fan around the first corner
                for i in 1..corners.len() - 1 {
                    let tri = [corners[0], corners[i], corners[i + 1]];
                    push_triangle(
                        &mut soup,
                        tri,
                        &positions,
                        &tex_coords,
                        &normals,
                    );
                }
            }
            // Groups, objects, materials and smoothing are not needed
            _ => {}
        }
    }

    if soup.positions.is_empty() {
        return Err("no faces found".into());
    }

    Ok(soup)
}

fn push_triangle(
    soup: &mut TriangleSoup,
    tri: [Corner; 3],
    positions: &[Vec3],
    tex_coords: &[Vec2],
    normals: &[Vec3],
) {
    let p = tri.map(|c| positions[c.position]);
    let flat = (p[1] - p[0]).cross(p[2] - p[0]).normalize_or_zero();

    for (corner, position) in tri.iter().zip(p) {
        soup.positions.push(position);
        soup.uvs.push(corner.uv.map_or(Vec2::ZERO, |i| tex_coords[i]));
        soup.normals.push(corner.normal.map_or(flat, |i| normals[i]));
    }
}

/// Parse `v`, `v/vt`, `v//vn` or `v/vt/vn`.
///
/// `counts` is (positions, uvs, normals) seen so far, for bounds checks
/// and negative (relative) indices.
fn parse_corner(
    token: &str,
    counts: (usize, usize, usize),
    line_no: usize,
) -> Result<Corner, String> {
    let mut fields = token.split('/');
    let position = fields
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("line {line_no}: missing vertex index in '{token}'"))?;
    let position = resolve_index(position, counts.0, line_no)?;

    let uv = match fields.next() {
        Some(s) if !s.is_empty() => Some(resolve_index(s, counts.1, line_no)?),
        _ => None,
    };
    let normal = match fields.next() {
        Some(s) if !s.is_empty() => Some(resolve_index(s, counts.2, line_no)?),
        _ => None,
    };

    Ok(Corner {
        position,
        uv,
        normal,
    })
}

/// OBJ indices are 1-based; negative values count back from the end.
fn resolve_index(raw: &str, count: usize, line_no: usize) -> Result<usize, String> {
    let value: i64 = raw
        .parse()
        .map_err(|_| format!("line {line_no}: bad index '{raw}'"))?;
    let resolved = match value {
        v if v > 0 => v - 1,
        v if v < 0 => count as i64 + v,
        _ => return Err(format!("line {line_no}: index 0 is not valid")),
    };
    if resolved < 0 || resolved >= count as i64 {
        return Err(format!(
            "line {line_no}: index {value} out of range (have {count})"
        ));
    }
    Ok(resolved as usize)
}

fn parse_floats<const N: usize>(
    parts: &[&str],
    line_no: usize,
) -> Result<[f32; N], String> {
    if parts.len() < N {
        return Err(format!(
            "line {line_no}: expected {N} components, found {}",
            parts.len()
        ));
    }
    let mut out = [0.0; N];
    for (slot, raw) in out.iter_mut().zip(parts) {
        *slot = raw
            .parse()
            .map_err(|_| format!("line {line_no}: bad number '{raw}'"))?;
    }
    Ok(out)
}

fn parse_vec3(parts: &[&str], line_no: usize) -> Result<Vec3, String> {
    parse_floats::<3>(parts, line_no).map(Vec3::from_array)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &str = "\
# one textured triangle
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

    #[test]
    fn parses_full_corner_references() {
        let soup = parse_obj(TRIANGLE.as_bytes()).unwrap();
        assert_eq!(soup.triangle_count(), 1);
        assert_eq!(soup.positions[1], Vec3::X);
        assert_eq!(soup.normals, vec![Vec3::Z; 3]);
        // V is flipped
        assert_eq!(soup.uvs[0], Vec2::new(0.0, 1.0));
        assert_eq!(soup.uvs[2], Vec2::new(0.0, 0.0));
    }

    #[test]
    fn quad_is_fan_triangulated() {
        let src = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3 4
";
        let soup = parse_obj(src.as_bytes()).unwrap();
        assert_eq!(soup.triangle_count(), 2);
        assert_eq!(soup.positions[3], Vec3::ZERO);
        assert_eq!(soup.positions[4], Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(soup.positions[5], Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn missing_normals_use_face_normal() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.5 0.25
f 1/1 2/1 3/1
";
        let soup = parse_obj(src.as_bytes()).unwrap();
        assert_eq!(soup.normals, vec![Vec3::Z; 3]);
        assert_eq!(soup.uvs[0], Vec2::new(0.5, 0.75));
    }

    #[test]
    fn normal_only_references() {
        let src = "\
v 0 0 0
v 0 1 0
v 1 0 0
vn 0 0 -1
f 1//1 2//1 3//1
";
        let soup = parse_obj(src.as_bytes()).unwrap();
        assert_eq!(soup.uvs, vec![Vec2::ZERO; 3]);
        assert_eq!(soup.normals[0], Vec3::NEG_Z);
    }

    #[test]
    fn negative_indices_are_relative() {
        let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
f -3 -2 -1
";
        let soup = parse_obj(src.as_bytes()).unwrap();
        assert_eq!(soup.positions[0], Vec3::ZERO);
        assert_eq!(soup.positions[2], Vec3::Y);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 4\n";
        let err = parse_obj(src.as_bytes()).unwrap_err();
        assert!(err.contains("line 4"), "{err}");
        assert!(err.contains("out of range"), "{err}");
    }

    #[test]
    fn zero_index_and_garbage_are_rejected() {
        assert!(parse_obj("v 0 0 0\nf 0 1 1\n".as_bytes()).is_err());
        assert!(parse_obj("v 0 zero 0\n".as_bytes()).is_err());
        assert!(parse_obj("v 0 0 0\nf 1 1\n".as_bytes()).is_err());
    }

    #[test]
    fn file_without_faces_is_rejected() {
        let err = parse_obj("v 0 0 0\n".as_bytes()).unwrap_err();
        assert_eq!(err, "no faces found");
    }

    #[test]
    fn load_obj_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        std::fs::write(&path, TRIANGLE).unwrap();
        assert_eq!(load_obj(&path).unwrap().triangle_count(), 1);

        let missing = dir.path().join("missing.obj");
        match load_obj(&missing) {
            Err(OrbitError::MeshLoad(msg)) => {
                assert!(msg.contains("missing.obj"), "{msg}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
