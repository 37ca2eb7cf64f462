//! Lathe mesh: a closed revolution profile spun around the model Y axis

use glam::Vec3;
use shared::Point2D;

use super::BuildError;
use crate::viewport::mesh::MeshData;

/// Angular resolution of the solid
pub const LATHE_SEGMENTS: u32 = 32;

/// Revolve `profile` (x = radius, y = height) through a full turn.
///
/// Each profile segment sweeps a band of `segments` quads; the seam closes
/// back onto the first ring. Quads get flat normals pointing away from the
/// axis regardless of whether the profile was drawn top-down or bottom-up.
/// Quads with zero area (from zero-length profile segments) are skipped.
pub fn lathe_mesh(
    profile: &[Point2D],
    segments: u32,
    color: [f32; 3],
) -> Result<MeshData, BuildError> {
    if profile.len() < 2 {
        return Err(BuildError::DegenerateProfile(profile.len()));
    }
    if segments < 3 {
        return Err(BuildError::InvalidSegments(segments));
    }

    let rings: Vec<Vec<Vec3>> = (0..segments)
        .map(|s| {
            let theta = (s as f64 / segments as f64) * std::f64::consts::TAU;
            let (sin_t, cos_t) = theta.sin_cos();
            profile
                .iter()
                .map(|p| {
                    Vec3::new(
                        (p.x * cos_t) as f32,
                        p.y as f32,
                        (p.x * sin_t) as f32,
                    )
                })
                .collect()
        })
        .collect();

    // Clockwise in (radius, height) means a top-down profile
    let flip = signed_area(profile) > 0.0;

    let n = profile.len();
    let quad_count = segments as usize * (n - 1);
    let mut vertices: Vec<f32> = Vec::with_capacity(quad_count * 4 * 9);
    let mut indices: Vec<u32> = Vec::with_capacity(quad_count * 6);

    for s in 0..segments as usize {
        let s_next = (s + 1) % segments as usize;
        for p in 0..n - 1 {
            let p00 = rings[s][p];
            let p01 = rings[s][p + 1];
            let p10 = rings[s_next][p];
            let p11 = rings[s_next][p + 1];

            let mut normal = (p11 - p00).cross(p01 - p10).normalize_or_zero();
            if normal == Vec3::ZERO {
                continue;
            }

            let quad = if flip {
                normal = -normal;
                [p00, p01, p11, p10]
            } else {
                [p00, p10, p11, p01]
            };

            let base = (vertices.len() / 9) as u32;
            for v in quad {
                push_vertex(&mut vertices, v, normal, color);
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    if indices.is_empty() {
        return Err(BuildError::DegenerateProfile(profile.len()));
    }

    Ok(MeshData { vertices, indices })
}

/// Twice the signed area of the profile closed back along the axis
fn signed_area(profile: &[Point2D]) -> f64 {
    let n = profile.len();
    (0..n)
        .map(|i| {
            let a = profile[i];
            let b = profile[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

fn push_vertex(vertices: &mut Vec<f32>, pos: Vec3, normal: Vec3, color: [f32; 3]) {
    vertices.extend_from_slice(&[
        pos.x, pos.y, pos.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
    ]);
}
