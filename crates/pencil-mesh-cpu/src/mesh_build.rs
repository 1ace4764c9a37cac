use pencil_geom::{Aabb, Mat3, Vec3};

use crate::constants::QUAD_TRIANGLES;
use crate::face::FaceDescriptor;

/// CPU-side mesh buffers: interleaved positions/normals (x,y,z), UVs (u,v)
/// and a triangle index list.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.uv.reserve(n_quads * 4 * 2);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.idx.len() / QUAD_TRIANGLES.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Index the next pushed vertex will get.
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.vertex_count() as u32
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.norm[i * 3], self.norm[i * 3 + 1], self.norm[i * 3 + 2])
    }

    /// Appends a quad as two triangles `(0,1,2),(0,2,3)`. Normals and UVs are
    /// left for [`MeshBuild::finalize`].
    pub fn push_face(&mut self, face: &FaceDescriptor) {
        debug_assert_eq!(face.indices[0], self.next_index());
        for v in face.vertices {
            self.pos.extend_from_slice(&[v.x, v.y, v.z]);
        }
        let base = face.indices[0];
        self.idx.extend(QUAD_TRIANGLES.iter().map(|&o| base + o));
    }

    /// Rotates every vertex about the local origin.
    pub fn rotate(&mut self, m: &Mat3) {
        for p in self.pos.chunks_exact_mut(3) {
            let r = m.mul_vec3(Vec3::new(p[0], p[1], p[2]));
            p.copy_from_slice(&[r.x, r.y, r.z]);
        }
    }

    /// Planar UVs: each vertex's own (x, y).
    pub fn recompute_uvs(&mut self) {
        self.uv.clear();
        for p in self.pos.chunks_exact(3) {
            self.uv.extend_from_slice(&[p[0], p[1]]);
        }
    }

    /// Per-vertex normals accumulated from triangle winding and normalized.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertex_count()];
        for tri in self.idx.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (a, b, c) = (self.vertex(ia), self.vertex(ib), self.vertex(ic));
            let n = (b - a).cross(c - a);
            acc[ia] += n;
            acc[ib] += n;
            acc[ic] += n;
        }
        self.norm.clear();
        for n in acc {
            let n = n.normalized();
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    /// Applies the authoring-to-world rotation then derives UVs and normals.
    pub fn finalize(&mut self, rotation: &Mat3) {
        self.rotate(rotation);
        self.recompute_uvs();
        self.recompute_normals();
    }

    /// Bounds of all vertices, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut it = self.pos.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2]));
        let first = it.next()?;
        Some(it.fold(Aabb::new(first, first), |bb, v| {
            bb.union(&Aabb::new(v, v))
        }))
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }
    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }
}
