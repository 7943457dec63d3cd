//! Parametric mesh generators.
//!
//! Both shapes follow the usual three.js-style parameterisation so scenes
//! authored with those numbers look the same here. Generated meshes are
//! only used for ray casting; there are no normals or UVs.

use std::f32::consts::TAU;

use glam::Vec3;

/// Indexed triangle soup in local space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangles as vertex-index triples.
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Radius of the origin-centred sphere enclosing every vertex.
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p.length())
            .fold(0.0, f32::max)
    }

    /// Iterate triangles as vertex position triples.
    pub fn triangle_positions(
        &self,
    ) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangles.iter().map(|&[a, b, c]| {
            [
                self.positions[a as usize],
                self.positions[b as usize],
                self.positions[c as usize],
            ]
        })
    }
}

/// Shape description for a pickable mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Y-aligned (possibly truncated) cone centred on the origin.
    Cylinder {
        /// Radius at `+height / 2`.
        radius_top: f32,
        /// Radius at `-height / 2`.
        radius_bottom: f32,
        /// Extent along Y.
        height: f32,
        /// Facets around the circumference.
        radial_segments: u32,
        /// Rows along the height.
        height_segments: u32,
    },
    /// Tube swept along a (p, q) torus knot.
    TorusKnot {
        /// Radius of the underlying torus.
        radius: f32,
        /// Tube radius.
        tube: f32,
        /// Samples along the knot curve.
        tubular_segments: u32,
        /// Samples around the tube.
        radial_segments: u32,
        /// Winds around the axis of rotational symmetry.
        p: u32,
        /// Winds around the interior circle.
        q: u32,
    },
}

impl Geometry {
    /// Cylinder with the given radii, height and segment counts.
    #[must_use]
    pub fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    ) -> Self {
        Self::Cylinder {
            radius_top,
            radius_bottom,
            height,
            radial_segments: radial_segments.max(3),
            height_segments: height_segments.max(1),
        }
    }

    /// Trefoil (p = 2, q = 3) torus knot.
    #[must_use]
    pub fn torus_knot(
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
    ) -> Self {
        Self::TorusKnot {
            radius,
            tube,
            tubular_segments: tubular_segments.max(3),
            radial_segments: radial_segments.max(3),
            p: 2,
            q: 3,
        }
    }

    /// Generate the triangle mesh for this shape.
    #[must_use]
    pub fn build(&self) -> TriangleMesh {
        match *self {
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
            } => build_cylinder(
                radius_top,
                radius_bottom,
                height,
                radial_segments,
                height_segments,
            ),
            Self::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => build_torus_knot(
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            ),
        }
    }
}

/// Row-major grid triangulation; `columns` counts quads per row.
fn push_grid(
    triangles: &mut Vec<[u32; 3]>,
    first: u32,
    rows: u32,
    columns: u32,
) {
    let stride = columns + 1;
    for row in 0..rows {
        for col in 0..columns {
            let a = first + row * stride + col;
            let b = first + (row + 1) * stride + col;
            let c = first + (row + 1) * stride + col + 1;
            let d = first + row * stride + col + 1;
            triangles.push([a, b, d]);
            triangles.push([b, c, d]);
        }
    }
}

fn build_cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    radial_segments: u32,
    height_segments: u32,
) -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    let half_height = height * 0.5;

    for y in 0..=height_segments {
        let v = y as f32 / height_segments as f32;
        let radius = v * (radius_bottom - radius_top) + radius_top;
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            mesh.positions.push(Vec3::new(
                radius * theta.sin(),
                -v * height + half_height,
                radius * theta.cos(),
            ));
        }
    }
    push_grid(&mut mesh.triangles, 0, height_segments, radial_segments);

    for (radius, y) in [(radius_top, half_height), (radius_bottom, -half_height)]
    {
        if radius <= 0.0 {
            continue;
        }
        let center = mesh.positions.len() as u32;
        mesh.positions.push(Vec3::new(0.0, y, 0.0));
        for x in 0..=radial_segments {
            let theta = x as f32 / radial_segments as f32 * TAU;
            mesh.positions.push(Vec3::new(
                radius * theta.sin(),
                y,
                radius * theta.cos(),
            ));
        }
        for x in 0..radial_segments {
            mesh.triangles.push([center, center + 1 + x, center + 2 + x]);
        }
    }

    mesh
}

fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let q_over_p = q / p * u;
    let cs = q_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * q_over_p.sin() * 0.5,
    )
}

fn build_torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> TriangleMesh {
    let mut mesh = TriangleMesh::default();
    let (pf, qf) = (p as f32, q as f32);

    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32 * pf * TAU;
        let p1 = knot_curve(u, pf, qf, radius);
        let p2 = knot_curve(u + 0.01, pf, qf, radius);

        // Frenet-like frame from a forward difference
        let tangent = p2 - p1;
        let binormal = tangent.cross(p2 + p1).normalize_or_zero();
        let normal = binormal.cross(tangent).normalize_or_zero();

        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            mesh.positions.push(p1 + normal * cx + binormal * cy);
        }
    }
    push_grid(&mut mesh.triangles, 0, tubular_segments, radial_segments);

    mesh
}
