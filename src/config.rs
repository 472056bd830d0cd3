use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::noise::NoiseConfig;
use crate::palette::Rgb;
use crate::vec::{Point3, Vec3};

/// Scene, shading and output settings for one render. Every field is optional in TOML.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// 1.0 for square pixels
    pub pixel_aspect: f32,
    /// z of the plane the orthographic rays start from
    pub camera_z: f32,
    pub sphere_center: Point3,
    pub sphere_radius: f32,
    /// Direction the light travels in, normalized before use
    pub light_dir: Vec3,
    pub max_color: Rgb,
    pub steps: usize,
    pub noise_multiple: f32,
    pub ambient: f32,
    pub diffuse_weight: f32,
    pub fallback_index: usize,
    pub noise: NoiseConfig,
    pub output_path: PathBuf,
    pub threads: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
            pixel_aspect: 1.0,
            camera_z: -30.0,
            sphere_center: Vec3::new(0.0, 0.0, 360.0),
            sphere_radius: 382.0,
            // Shines from the top left
            light_dir: Vec3::new(1.0, -1.0, 2.0),
            max_color: Rgb::new(105, 2, 116),
            steps: 255,
            noise_multiple: 7.0,
            ambient: 0.05,
            diffuse_weight: 0.95,
            fallback_index: 42,
            noise: NoiseConfig::default(),
            output_path: PathBuf::from("raytrace.ppm"),
            threads: None,
        }
    }
}

impl RenderConfig {
    pub fn from_toml(input: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(input).context("invalid render config")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let mut input = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut input))
            .with_context(|| format!("couldn't read config file {}", path.display()))?;
        Self::from_toml(&input).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!("image size must be non-zero, got {}x{}", self.width, self.height);
        }
        if !(self.sphere_radius > 0.0) {
            bail!("sphere radius must be positive, got {}", self.sphere_radius);
        }
        if !(self.pixel_aspect > 0.0) {
            bail!("pixel aspect must be positive, got {}", self.pixel_aspect);
        }
        if self.steps == 0 {
            bail!("palette needs at least one step");
        }
        if !(self.light_dir.length() > 0.0) {
            bail!("light direction {} has no length", self.light_dir);
        }
        if self.noise.octaves == 0 {
            bail!("noise needs at least one octave");
        }
        if self.threads == Some(0) {
            bail!("thread count must be at least 1");
        }
        Ok(())
    }
}
