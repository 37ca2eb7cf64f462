//! STL export of the lathe solid.
//!
//! ASCII: `solid <name>` / `facet normal` blocks / `endsolid <name>`.
//! Binary: 80-byte header, u32 triangle count, then 50 bytes per facet
//! (normal + 3 vertices as little-endian f32, u16 attribute).

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::viewport::mesh::MeshData;

/// Binary STL header text (zero-padded to 80 bytes)
const STL_HEADER: &[u8] = b"Binary STL from lathe-gui";
const STL_HEADER_LEN: usize = 80;
const STL_FACET_LEN: usize = 50;

/// Solid name written into ASCII STL files
pub const STL_SOLID_NAME: &str = "lathe";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StlFormat {
    Ascii,
    #[default]
    Binary,
}

/// Serialize the mesh in the requested STL flavor
pub fn build_stl(mesh: &MeshData, format: StlFormat) -> Vec<u8> {
    match format {
        StlFormat::Ascii => build_stl_ascii(mesh, STL_SOLID_NAME).into_bytes(),
        StlFormat::Binary => build_stl_binary(mesh),
    }
}

/// Build a binary STL file from mesh data
pub fn build_stl_binary(mesh: &MeshData) -> Vec<u8> {
    let n_tris = mesh.triangle_count();
    let mut out = Vec::with_capacity(STL_HEADER_LEN + 4 + n_tris * STL_FACET_LEN);

    let mut header = [0u8; STL_HEADER_LEN];
    header[..STL_HEADER.len()].copy_from_slice(STL_HEADER);
    out.extend_from_slice(&header);
    out.extend_from_slice(&(n_tris as u32).to_le_bytes());

    for [v0, v1, v2] in triangles(mesh) {
        let n = facet_normal(v0, v1, v2);
        for v in [n, v0, v1, v2] {
            out.extend_from_slice(&floats_to_bytes(&v.to_array()));
        }
        // Attribute byte count (unused)
        out.extend_from_slice(&0u16.to_le_bytes());
    }

    out
}

/// Build an ASCII STL document from mesh data
pub fn build_stl_ascii(mesh: &MeshData, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "solid {name}");
    for [v0, v1, v2] in triangles(mesh) {
        let n = facet_normal(v0, v1, v2);
        let _ = writeln!(out, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z);
        let _ = writeln!(out, "    outer loop");
        for v in [v0, v1, v2] {
            let _ = writeln!(out, "      vertex {:e} {:e} {:e}", v.x, v.y, v.z);
        }
        let _ = writeln!(out, "    endloop");
        let _ = writeln!(out, "  endfacet");
    }
    let _ = writeln!(out, "endsolid {name}");
    out
}

fn triangles(mesh: &MeshData) -> impl Iterator<Item = [Vec3; 3]> + '_ {
    mesh.indices.chunks_exact(3).map(|tri| {
        [
            mesh.position(tri[0] as usize),
            mesh.position(tri[1] as usize),
            mesh.position(tri[2] as usize),
        ]
    })
}

/// Facet normal from the winding; falls back to +Z for slivers
fn facet_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    let n = (v1 - v0).cross(v2 - v0);
    if n.length_squared() > 1e-20 {
        n.normalize()
    } else {
        Vec3::Z
    }
}

fn floats_to_bytes(data: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(data.len() * 4);
    for &f in data {
        bytes.extend_from_slice(&f.to_le_bytes());
    }
    bytes
}
