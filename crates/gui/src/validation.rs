//! Structural checks for lathe meshes.
//!
//! Besides buffer integrity, a lathe solid has a shape that can be checked
//! without the profile it came from: every vertex keeps at least
//! [`MIN_RADIUS`] from the Y axis, every profile point becomes a ring of
//! exactly one vertex per angular step, and the surface is sealed. The only
//! open edges allowed are the pinholes left where a cap meets the axis.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use glam::Vec3;

use crate::build::MIN_RADIUS;
use crate::viewport::mesh::{Aabb, MeshData};

const FLOATS_PER_VERTEX: usize = 9;
/// Slack on radius comparisons (positions are f32)
const RADIUS_EPS: f32 = 1e-5;

type PosKey = [u32; 3];

fn key(p: Vec3) -> PosKey {
    [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]
}

fn axial_radius(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

/// Validator for a built lathe solid.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Vertex buffer is whole vertices and index buffer whole triangles
    pub fn is_layout_valid(&self) -> bool {
        self.mesh.vertices.len() % FLOATS_PER_VERTEX == 0 && self.mesh.indices.len() % 3 == 0
    }

    pub fn are_indices_in_range(&self) -> bool {
        let count = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < count)
    }

    pub fn are_normals_unit(&self, epsilon: f32) -> bool {
        (0..self.vertex_count()).all(|i| (self.mesh.normal(i).length() - 1.0).abs() <= epsilon)
    }

    pub fn are_positions_finite(&self) -> bool {
        (0..self.vertex_count()).all(|i| self.mesh.position(i).is_finite())
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Bounding box extent along X, Y, Z
    pub fn dimensions(&self) -> [f32; 3] {
        self.bounds().size().to_array()
    }

    pub fn has_dimensions(&self, expected: [f32; 3], tolerance: f32) -> bool {
        self.dimensions()
            .iter()
            .zip(expected)
            .all(|(got, want)| (got - want).abs() < tolerance)
    }

    /// Smallest and largest distance of a vertex from the Y axis
    pub fn radius_range(&self) -> Option<(f32, f32)> {
        (0..self.vertex_count())
            .map(|i| axial_radius(self.mesh.position(i)))
            .fold(None, |acc, r| match acc {
                None => Some((r, r)),
                Some((lo, hi)) => Some((lo.min(r), hi.max(r))),
            })
    }

    pub fn is_within_radius(&self, max_radius: f32) -> bool {
        self.radius_range().map_or(true, |(_, hi)| hi <= max_radius)
    }

    /// No vertex sits closer to the axis than the closure floor
    pub fn is_clear_of_axis(&self) -> bool {
        let floor = MIN_RADIUS as f32 - RADIUS_EPS;
        self.radius_range().map_or(true, |(lo, _)| lo >= floor)
    }

    /// Distinct vertex positions per ring, rings keyed by height and radius
    pub fn ring_sizes(&self) -> Vec<usize> {
        let mut rings: BTreeMap<(u32, i64), BTreeSet<PosKey>> = BTreeMap::new();
        for i in 0..self.vertex_count() {
            let p = self.mesh.position(i);
            let radius = (axial_radius(p) * 1e4).round() as i64;
            rings.entry((p.y.to_bits(), radius)).or_default().insert(key(p));
        }
        rings.values().map(BTreeSet::len).collect()
    }

    /// Every ring has exactly `segments` vertices (the seam closes onto the first)
    pub fn is_sampled_with(&self, segments: u32) -> bool {
        let sizes = self.ring_sizes();
        !sizes.is_empty() && sizes.iter().all(|&n| n == segments as usize)
    }

    /// Edges used by exactly one triangle, compared by position
    pub fn boundary_edges(&self) -> Vec<[Vec3; 2]> {
        let mut uses: HashMap<(PosKey, PosKey), (u32, [Vec3; 2])> = HashMap::new();
        for tri in self.mesh.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let pa = self.mesh.position(a as usize);
                let pb = self.mesh.position(b as usize);
                let (ka, kb) = (key(pa), key(pb));
                let edge = if ka <= kb { (ka, kb) } else { (kb, ka) };
                uses.entry(edge).or_insert((0, [pa, pb])).0 += 1;
            }
        }
        uses.into_values()
            .filter(|(count, _)| *count == 1)
            .map(|(_, edge)| edge)
            .collect()
    }

    /// Surface is closed apart from pinholes on the axis
    pub fn is_sealed_except_axis(&self) -> bool {
        let pinhole = MIN_RADIUS as f32 + RADIUS_EPS;
        self.boundary_edges()
            .iter()
            .all(|edge| edge.iter().all(|&p| axial_radius(p) <= pinhole))
    }

    /// Run all checks that hold for any lathe mesh.
    /// An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_layout_valid() {
            errors.push(format!(
                "Buffer layout broken: {} floats, {} indices",
                self.mesh.vertices.len(),
                self.mesh.indices.len()
            ));
            return errors;
        }

        if !self.are_indices_in_range() {
            errors.push(format!(
                "Indices out of range (vertex_count={})",
                self.vertex_count()
            ));
            return errors;
        }

        if !self.are_positions_finite() {
            errors.push("Mesh contains non-finite vertex positions".to_string());
        }

        if !self.are_normals_unit(1e-3) {
            errors.push("Some normals are not unit-length".to_string());
        }

        if !self.is_clear_of_axis() {
            let lo = self.radius_range().map_or(0.0, |(lo, _)| lo);
            errors.push(format!("Vertex at radius {lo} is inside the axis clearance"));
        }

        errors
    }
}
