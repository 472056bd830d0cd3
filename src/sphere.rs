use super::ray::Ray;
use super::vec::{Point3, Vec3};

/// Ray parameter returned by [`intersect_sphere`] when the ray misses.
pub const MISS: f32 = -1.0;

/// Solves `a*t^2 + b*t + c = 0` for the ray against the sphere and returns the
/// near root, whatever its sign. Returns [`MISS`] when the discriminant is negative.
pub fn intersect_sphere(origin: Point3, dir: Vec3, center: Point3, radius: f32) -> f32 {
    let oc = origin - center;
    let a = dir.dot(dir);
    let b = 2.0 * oc.dot(dir);

    // b^2 - 4ac rewritten as 4(a*r^2 - |oc x dir|^2); the two large terms of the textbook
    // form cancel to nothing in f32 once the sphere is far from the ray origin
    let perp = oc.cross(dir);
    let discriminant = 4.0 * (a * radius * radius - perp.dot(perp));
    if discriminant < 0.0 {
        return MISS;
    }

    (-b - discriminant.sqrt()) / (2.0 * a)
}

#[derive(Clone, Copy, Debug)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn intersect(&self, ray: &Ray) -> f32 {
        intersect_sphere(ray.origin(), ray.direction(), self.center, self.radius)
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, position: Point3) -> Vec3 {
        (position - self.center).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_towards_center() {
        let origin = Vec3::new(0.0, 0.0, -30.0);
        let center = Vec3::new(0.0, 0.0, 360.0);
        let t = intersect_sphere(origin, Vec3::new(0.0, 0.0, 1.0), center, 100.0);
        assert!(t > 0.0);
        assert!((t - ((center - origin).length() - 100.0)).abs() < 1e-3);
    }

    #[test]
    fn test_hit_off_axis_direction() {
        let origin = Vec3::new(10.0, -20.0, 5.0);
        let center = Vec3::new(-40.0, 30.0, 60.0);
        let dir = (center - origin).normalized();
        let t = intersect_sphere(origin, dir, center, 12.0);
        assert!((t - ((center - origin).length() - 12.0)).abs() < 1e-2);
    }

    #[test]
    fn test_miss() {
        let t = intersect_sphere(
            Vec3::new(50.0, 0.0, -30.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 100.0),
            10.0,
        );
        assert!(t < 0.0);
    }

    #[test]
    fn test_far_tiny_sphere() {
        let center = Vec3::new(0.0, 0.0, 100000.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        // 1.58 units off-axis, outside the radius
        let t = intersect_sphere(Vec3::new(-1.5, -0.5, -30.0), dir, center, 1.0);
        assert_eq!(t, MISS);
        let t = intersect_sphere(Vec3::new(1.5, 0.5, -30.0), dir, center, 1.0);
        assert_eq!(t, MISS);
        // 0.71 units off-axis, inside the radius
        let t = intersect_sphere(Vec3::new(-0.5, 0.5, -30.0), dir, center, 1.0);
        assert!((t - (100030.0 - 0.5f32.sqrt())).abs() < 0.1);
    }

    #[test]
    fn test_sphere_behind_origin_gives_negative_root() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -100.0), 10.0);
        let ray = Ray::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.intersect(&ray) <= 0.0);
    }

    #[test]
    fn test_tangent_ray() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert!((sphere.intersect(&ray) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_normal_points_outward() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0);
        let n = sphere.normal_at(Vec3::new(0.0, 0.0, 3.0));
        assert!((n.z() + 1.0).abs() < 1e-6);
    }
}
