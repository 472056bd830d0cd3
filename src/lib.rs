//! Renders a Lambert-shaded sphere, textured with coherent noise, to a plain-text P3 image.
//!
//! One orthographic ray per pixel is tested against the sphere. Hits are shaded with a
//! single directional light plus ambient, scaled by a noise sample and quantized into a
//! precomputed black-to-color palette.

pub mod camera;
pub mod config;
pub mod light;
pub mod noise;
pub mod palette;
pub mod ray;
pub mod render;
pub mod shading;
pub mod sphere;
pub mod vec;

pub use config::RenderConfig;
pub use noise::{ConstantNoise, FractalNoise, NoiseConfig, NoiseSource};
pub use render::{RenderStats, Renderer};
