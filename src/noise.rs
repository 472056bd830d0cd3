//! Coherent 2D noise used to texture the sphere.
//!
//! The renderer only sees [`NoiseSource`]. [`FractalNoise`] is the built-in gradient
//! (Perlin-type) generator with optional fractal layering; [`ConstantNoise`] returns a
//! fixed value and is handy when the output has to be predictable.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Deserialize;

pub trait NoiseSource {
    /// Deterministic for a given generator and coordinates, nominally in [-1, 1].
    fn get_noise(&self, x: f32, y: f32) -> f32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    Perlin,
    PerlinFractal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractalType {
    Fbm,
    Billow,
    RigidMulti,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interp {
    Linear,
    Hermite,
    Quintic,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    pub kind: NoiseKind,
    pub seed: u64,
    pub frequency: f32,
    pub fractal_type: FractalType,
    pub interp: Interp,
    pub octaves: u32,
    pub lacunarity: f32,
    pub gain: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::PerlinFractal,
            seed: 1337,
            frequency: 0.08,
            fractal_type: FractalType::Fbm,
            interp: Interp::Quintic,
            octaves: 8,
            lacunarity: 1.5,
            gain: 0.02,
        }
    }
}

/// Always returns the same value.
#[derive(Clone, Copy, Debug)]
pub struct ConstantNoise(pub f32);

impl NoiseSource for ConstantNoise {
    fn get_noise(&self, _x: f32, _y: f32) -> f32 {
        self.0
    }
}

const GRAD_X: [f32; 12] = [1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0];
const GRAD_Y: [f32; 12] = [1.0, 1.0, -1.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0, -1.0, 1.0, -1.0];

pub struct FractalNoise {
    config: NoiseConfig,
    perm: [u8; 512],
    perm12: [u8; 512],
    fractal_bounding: f32,
}

impl FractalNoise {
    pub fn new(config: &NoiseConfig) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut StdRng::seed_from_u64(config.seed));

        let mut perm = [0u8; 512];
        let mut perm12 = [0u8; 512];
        for (i, &p) in table.iter().chain(table.iter()).enumerate() {
            perm[i] = p;
            perm12[i] = p % 12;
        }

        Self {
            config: config.clone(),
            perm,
            perm12,
            fractal_bounding: fractal_bounding(config.octaves, config.gain),
        }
    }

    fn grad_coord(&self, offset: u8, x: i32, y: i32, xd: f32, yd: f32) -> f32 {
        let inner = self.perm[(y & 0xff) as usize + offset as usize] as usize;
        let lut = self.perm12[(x & 0xff) as usize + inner] as usize;
        xd * GRAD_X[lut] + yd * GRAD_Y[lut]
    }

    fn single_perlin(&self, offset: u8, x: f32, y: f32) -> f32 {
        let x0 = x.floor() as i32;
        let y0 = y.floor() as i32;
        let x1 = x0 + 1;
        let y1 = y0 + 1;

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;

        let (xs, ys) = match self.config.interp {
            Interp::Linear => (xd0, yd0),
            Interp::Hermite => (hermite(xd0), hermite(yd0)),
            Interp::Quintic => (quintic(xd0), quintic(yd0)),
        };

        let xf0 = lerp(
            self.grad_coord(offset, x0, y0, xd0, yd0),
            self.grad_coord(offset, x1, y0, xd1, yd0),
            xs,
        );
        let xf1 = lerp(
            self.grad_coord(offset, x0, y1, xd0, yd1),
            self.grad_coord(offset, x1, y1, xd1, yd1),
            xs,
        );
        lerp(xf0, xf1, ys)
    }

    fn fractal(&self, mut x: f32, mut y: f32) -> f32 {
        // Each octave draws its offset from the permutation table
        let octave =
            |i: u32, x: f32, y: f32| self.single_perlin(self.perm[(i & 0xff) as usize], x, y);

        let first = octave(0, x, y);
        let mut sum = match self.config.fractal_type {
            FractalType::Fbm => first,
            FractalType::Billow => first.abs() * 2.0 - 1.0,
            FractalType::RigidMulti => 1.0 - first.abs(),
        };

        let mut amp = 1.0;
        for i in 1..self.config.octaves {
            x *= self.config.lacunarity;
            y *= self.config.lacunarity;
            amp *= self.config.gain;

            let n = octave(i, x, y);
            match self.config.fractal_type {
                FractalType::Fbm => sum += n * amp,
                FractalType::Billow => sum += (n.abs() * 2.0 - 1.0) * amp,
                FractalType::RigidMulti => sum -= (1.0 - n.abs()) * amp,
            }
        }

        match self.config.fractal_type {
            FractalType::RigidMulti => sum,
            _ => sum * self.fractal_bounding,
        }
    }
}

impl NoiseSource for FractalNoise {
    fn get_noise(&self, x: f32, y: f32) -> f32 {
        let x = x * self.config.frequency;
        let y = y * self.config.frequency;

        match self.config.kind {
            NoiseKind::Perlin => self.single_perlin(0, x, y),
            NoiseKind::PerlinFractal => self.fractal(x, y),
        }
    }
}

fn fractal_bounding(octaves: u32, gain: f32) -> f32 {
    let mut amp = gain;
    let mut total = 1.0;
    for _ in 1..octaves {
        total += amp;
        amp *= gain;
    }
    1.0 / total
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

fn hermite(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
