use super::camera::Camera;
use super::config::RenderConfig;
use super::light::DirectionalLight;
use super::noise::NoiseSource;
use super::sphere::Sphere;

/// Outcome of shading one pixel. Every variant carries a palette index in `[0, steps]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Miss,
    // Luminance came out negative
    Fallback(usize),
    Lit(usize),
}

impl Shade {
    pub fn index(self) -> usize {
        match self {
            Shade::Miss => 0,
            Shade::Fallback(index) | Shade::Lit(index) => index,
        }
    }
}

/// Everything needed to turn a pixel coordinate into a palette index.
/// Built once per render, read-only afterwards.
pub struct Shader {
    camera: Camera,
    sphere: Sphere,
    light: DirectionalLight,
    ambient: f32,
    noise_multiple: f32,
    steps: usize,
    fallback_index: usize,
}

impl Shader {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            camera: Camera::new(
                config.width,
                config.height,
                config.pixel_aspect,
                config.camera_z,
            ),
            sphere: Sphere::new(config.sphere_center, config.sphere_radius),
            light: DirectionalLight::new(config.light_dir, config.diffuse_weight),
            ambient: config.ambient,
            noise_multiple: config.noise_multiple,
            steps: config.steps,
            fallback_index: config.fallback_index.min(config.steps),
        }
    }

    pub fn shade<N: NoiseSource + ?Sized>(&self, x: u32, y: u32, noise: &N) -> Shade {
        let ray = self.camera.get_ray(x, y);

        let t = self.sphere.intersect(&ray);
        if t <= 0.0 {
            return Shade::Miss;
        }

        let normal = self.sphere.normal_at(ray.at(t));
        let lum = self.light.diffuse(normal) + self.ambient;

        if lum < 0.0 {
            return Shade::Fallback(self.fallback_index);
        }

        let per = noise.get_noise(x as f32, y as f32);
        Shade::Lit(self.quantize(lum, per * self.noise_multiple))
    }

    // steps * lum * amplified noise, clamped to [0, steps] and truncated; NaN lands on 0
    fn quantize(&self, lum: f32, amplified: f32) -> usize {
        let steps = self.steps as f32;
        let mut value = steps * lum * amplified;
        if value > steps {
            value = steps;
        }
        if value < 0.0 {
            value = 0.0;
        }
        value as usize
    }
}
