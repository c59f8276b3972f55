//! Procedural meshes for the showcase objects and the shared vertex format.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Indexed triangle list, counter-clockwise front faces.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec3, normal: Vec3, color: [f32; 3]) {
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
            color,
        });
    }

    /// Append another mesh, rebasing its indices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Axis-aligned bounds as (min, max); `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Replace normals with area-weighted smooth normals.
    pub fn recompute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if a >= acc.len() || b >= acc.len() || c >= acc.len() {
                continue;
            }
            let pa = Vec3::from(self.vertices[a].position);
            let pb = Vec3::from(self.vertices[b].position);
            let pc = Vec3::from(self.vertices[c].position);
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            v.normal = n.normalize_or_zero().to_array();
        }
    }
}

/// UV sphere with `width_segments` around and `height_segments` pole to pole.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32, color: [f32; 3]) -> MeshData {
    let (w, h) = (width_segments.max(3), height_segments.max(2));
    let mut mesh = MeshData::default();
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let p = Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.push(p, p, color);
        }
    }
    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend([a, b, d]);
            }
            if iy != h - 1 {
                mesh.indices.extend([b, c, d]);
            }
        }
    }
    mesh
}

/// Cone standing on the XZ plane centre, apex up, with a closed base.
pub fn cone(radius: f32, height: f32, radial_segments: u32, color: [f32; 3]) -> MeshData {
    let n = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    // side: apex row then base row
    for (row, r) in [0.0, radius].into_iter().enumerate() {
        let y = half - row as f32 * height;
        for x in 0..=n {
            let theta = x as f32 / n as f32 * TAU;
            let (s, c) = theta.sin_cos();
            mesh.push(Vec3::new(r * s, y, r * c), Vec3::new(s, slope, c), color);
        }
    }
    for x in 0..n {
        let a = x;
        let b = n + 1 + x;
        let c = n + 2 + x;
        let d = x + 1;
        mesh.indices.extend([a, b, d, b, c, d]);
    }

    // base cap
    let centre_start = mesh.vertices.len() as u32;
    for _ in 0..n {
        mesh.push(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y, color);
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=n {
        let theta = x as f32 / n as f32 * TAU;
        let (s, c) = theta.sin_cos();
        mesh.push(Vec3::new(radius * s, -half, radius * c), Vec3::NEG_Y, color);
    }
    for x in 0..n {
        let i = ring_start + x;
        mesh.indices.extend([i + 1, i, centre_start + x]);
    }
    mesh
}

fn torus_knot_curve(u: f32, radius: f32, p: f32, q: f32) -> Vec3 {
    let qu = q / p * u;
    let cs = qu.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu.sin() * 0.5,
    )
}

/// (p, q) torus knot swept by a circular tube.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
    color: [f32; 3],
) -> MeshData {
    let (ts, rs) = (tubular_segments.max(3), radial_segments.max(3));
    let (pf, qf) = (p.max(1) as f32, q as f32);
    let mut mesh = MeshData::default();
    for i in 0..=ts {
        let u = i as f32 / ts as f32 * pf * TAU;
        let p1 = torus_knot_curve(u, radius, pf, qf);
        let p2 = torus_knot_curve(u + 0.01, radius, pf, qf);
        let t = p2 - p1;
        let n0 = p2 + p1;
        let b = t.cross(n0);
        let n = b.cross(t).normalize_or_zero();
        let b = b.normalize_or_zero();
        for j in 0..=rs {
            let v = j as f32 / rs as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.push(pos, pos - p1, color);
        }
    }
    let row = rs + 1;
    for j in 1..=ts {
        for i in 1..=rs {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.indices.extend([a, b, d, b, c, d]);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices_in_range(m: &MeshData) -> bool {
        m.indices.iter().all(|&i| (i as usize) < m.vertices.len())
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let m = sphere(1.0, 32, 32, [1.0; 3]);
        assert_eq!(m.vertices.len(), 33 * 33);
        assert!(indices_in_range(&m));
        for v in &m.vertices {
            assert!((Vec3::from(v.position).length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn cone_bounds_match_dimensions() {
        let m = cone(1.5, 2.0, 4, [1.0; 3]);
        assert!(indices_in_range(&m));
        let (lo, hi) = m.bounds().unwrap();
        assert!((hi.y - 1.0).abs() < 1e-5 && (lo.y + 1.0).abs() < 1e-5);
        assert!((hi.x - 1.5).abs() < 1e-4);
    }

    #[test]
    fn torus_knot_is_closed_grid() {
        let m = torus_knot(0.8, 0.35, 100, 16, 2, 3, [1.0; 3]);
        assert_eq!(m.vertices.len(), 101 * 17);
        assert_eq!(m.triangle_count(), 100 * 16 * 2);
        assert!(indices_in_range(&m));
    }

    #[test]
    fn recompute_normals_on_flat_quad_points_up() {
        let mut m = MeshData::default();
        for p in [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 0.0, 0.0]] {
            m.vertices.push(Vertex {
                position: p,
                ..Vertex::default()
            });
        }
        m.indices = vec![0, 1, 2, 0, 2, 3];
        m.recompute_normals();
        for v in &m.vertices {
            assert!((Vec3::from(v.normal) - Vec3::Y).length() < 1e-5);
        }
    }
}
