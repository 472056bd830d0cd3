use super::vec::{Point3, Vec3};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn origin(&self) -> Point3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn at(&self, t: f32) -> Point3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, -30.0), Vec3::new(0.0, 0.0, 1.0));
        let p = ray.at(10.0);
        assert!((p.z() + 20.0).abs() < 1e-6);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), 2.0);
    }
}
