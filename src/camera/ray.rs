use glam::{Mat4, Vec2, Vec3, Vec4};

use super::core::Camera;

/// Half-line in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Ray from `origin` along `direction` (normalized here).
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera through a point in normalized device
    /// coordinates (`[-1, 1]` on both axes, +Y up).
    ///
    /// The ray starts at the eye and passes through the NDC point
    /// unprojected onto the far plane, so hit distances are measured from
    /// the eye.
    #[must_use]
    pub fn from_camera(ndc: Vec2, camera: &Camera) -> Self {
        let inv_view_proj = camera.build_matrix().inverse();

        // [0,1] depth range
        let far = unproject(inv_view_proj, ndc, 1.0);

        Self::new(camera.eye, far - camera.eye)
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The same ray expressed in another space.
    ///
    /// The direction is re-normalized, so distances along the result are
    /// in the target space's units.
    #[must_use]
    pub fn transformed(&self, matrix: Mat4) -> Self {
        let origin = matrix.transform_point3(self.origin);
        let direction = matrix.transform_vector3(self.direction);
        Self::new(origin, direction)
    }

    /// Nearest positive distance to a sphere, if hit.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - c;

        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t = -b - root;
        if t > 0.0 {
            Some(t)
        } else {
            // Origin inside the sphere: take the far hit
            let t2 = -b + root;
            (t2 > 0.0).then_some(t2)
        }
    }

    /// Möller–Trumbore ray/triangle test, double-sided. Returns the
    /// distance along the ray.
    #[must_use]
    pub fn intersect_triangle(&self, [a, b, c]: [Vec3; 3]) -> Option<f32> {
        const EPSILON: f32 = 1e-7;

        let edge1 = b - a;
        let edge2 = c - a;
        let h = self.direction.cross(edge2);
        let det = edge1.dot(h);
        if det.abs() < EPSILON {
            return None;
        }

        let inv_det = 1.0 / det;
        let s = self.origin - a;
        let u = inv_det * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = inv_det * self.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = inv_det * edge2.dot(q);
        (t > EPSILON).then_some(t)
    }
}

fn unproject(inv_view_proj: Mat4, ndc: Vec2, depth: f32) -> Vec3 {
    let world = inv_view_proj * Vec4::new(ndc.x, ndc.y, depth, 1.0);
    world.truncate() / world.w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_ray_points_at_target() {
        let camera = Camera::default();
        let ray = Ray::from_camera(Vec2::ZERO, &camera);
        assert!((ray.direction - camera.forward()).length() < 1e-4);
        assert_eq!(ray.origin, camera.eye);
    }

    #[test]
    fn off_centre_ray_still_starts_at_eye() {
        let camera = Camera::default();
        let ray = Ray::from_camera(Vec2::new(0.7, -0.4), &camera);
        assert_eq!(ray.origin, camera.eye);

        // Passes through the same point the near-plane unprojection gives
        let inv = camera.build_matrix().inverse();
        let on_near = unproject(inv, Vec2::new(0.7, -0.4), 0.0);
        let along = (on_near - ray.origin).normalize();
        assert!((along - ray.direction).length() < 1e-3);
    }

    #[test]
    fn upper_ndc_points_upward() {
        let camera = Camera::default();
        let ray = Ray::from_camera(Vec2::new(0.0, 0.5), &camera);
        assert!(ray.direction.y > 0.0);
        let ray = Ray::from_camera(Vec2::new(-0.5, 0.0), &camera);
        assert!(ray.direction.x < 0.0);
    }

    #[test]
    fn sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert!((t - 4.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0).is_none());
    }

    #[test]
    fn sphere_hit_from_inside_uses_far_side() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn triangle_hit_and_miss() {
        let tri = [
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::NEG_Z);
        assert!((ray.intersect_triangle(tri).unwrap() - 3.0).abs() < 1e-5);

        // Behind the origin
        let away = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Z);
        assert!(away.intersect_triangle(tri).is_none());

        // Outside the edges
        let wide = Ray::new(Vec3::new(5.0, 0.0, 3.0), Vec3::NEG_Z);
        assert!(wide.intersect_triangle(tri).is_none());
    }

    #[test]
    fn transformed_ray_moves_origin() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X);
        let local = ray.transformed(Mat4::from_translation(-Vec3::X));
        assert!(local.origin.length() < 1e-6);
        assert!((local.direction - Vec3::X).length() < 1e-6);
    }
}
