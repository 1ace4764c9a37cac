use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use pencil_mesh_cpu::MeshBuild;

/// Wavefront OBJ text for `mesh`: positions, UVs, normals and 1-based
/// `v/vt/vn` faces, one object named `name`.
pub fn mesh_to_obj_string(mesh: &MeshBuild, name: &str) -> String {
    let mut out = String::with_capacity(64 + mesh.vertex_count() * 96);
    let _ = writeln!(out, "# pencil");
    let _ = writeln!(out, "o {name}");
    for p in mesh.positions().chunks_exact(3) {
        let _ = writeln!(out, "v {} {} {}", p[0], p[1], p[2]);
    }
    for t in mesh.uv.chunks_exact(2) {
        let _ = writeln!(out, "vt {} {}", t[0], t[1]);
    }
    for n in mesh.normals().chunks_exact(3) {
        let _ = writeln!(out, "vn {} {} {}", n[0], n[1], n[2]);
    }
    for tri in mesh.idx.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        let _ = writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}");
    }
    out
}

pub fn write_obj(path: &Path, mesh: &MeshBuild, name: &str) -> io::Result<()> {
    fs::write(path, mesh_to_obj_string(mesh, name))
}
