use super::ray::Ray;
use super::vec::Vec3;

/// Orthographic camera: one ray per pixel, all looking down +z from the plane `z = plane_z`.
pub struct Camera {
    half_width: u32,
    half_height: u32,
    pixel_aspect: f32,
    plane_z: f32,
    direction: Vec3,
}

impl Camera {
    pub fn new(width: u32, height: u32, pixel_aspect: f32, plane_z: f32) -> Self {
        Self {
            // Integer halves; odd sizes sit half a pixel off-center
            half_width: width / 2,
            half_height: height / 2,
            pixel_aspect,
            plane_z,
            direction: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let x_world = x as f32 - self.half_width as f32 + 0.5;
        let y_world = (y as f32 - self.half_height as f32 + 0.5) * self.pixel_aspect;
        Ray::new(Vec3::new(x_world, y_world, self.plane_z), self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rays_are_centered_on_pixels() {
        let camera = Camera::new(4, 2, 1.0, -30.0);
        let top_left = camera.get_ray(0, 0);
        assert_eq!(top_left.origin(), Vec3::new(-1.5, -0.5, -30.0));
        let bottom_right = camera.get_ray(3, 1);
        assert_eq!(bottom_right.origin(), Vec3::new(1.5, 0.5, -30.0));
    }

    #[test]
    fn test_pixel_aspect_scales_y_only() {
        let camera = Camera::new(10, 10, 2.0, 0.0);
        let ray = camera.get_ray(0, 0);
        assert_eq!(ray.origin().x(), -4.5);
        assert_eq!(ray.origin().y(), -9.0);
    }

    #[test]
    fn test_direction_is_constant() {
        let camera = Camera::new(8, 8, 1.0, -30.0);
        assert_eq!(camera.get_ray(0, 0).direction(), camera.get_ray(7, 5).direction());
        assert_eq!(camera.get_ray(3, 3).direction(), Vec3::new(0.0, 0.0, 1.0));
    }
}
