//! Linear black-to-color ramp, with every entry pre-formatted as a P3 pixel line.

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Entry `i` of `steps + 1` is `round(max_color * i / steps)` per channel.
pub fn build_palette(max_color: Rgb, steps: usize) -> Vec<Rgb> {
    let channel = |max: u8, i: usize| -> u8 {
        if steps == 0 {
            return max;
        }
        (max as f64 * i as f64 / steps as f64).round() as u8
    };

    (0..=steps)
        .map(|i| {
            Rgb::new(
                channel(max_color.r, i),
                channel(max_color.g, i),
                channel(max_color.b, i),
            )
        })
        .collect()
}

pub struct Palette {
    colors: Vec<Rgb>,
    lines: Vec<String>,
}

impl Palette {
    pub fn new(max_color: Rgb, steps: usize) -> Self {
        let colors = build_palette(max_color, steps);
        let lines = colors
            .iter()
            .map(|c| format!("{} {} {}\n", c.r, c.g, c.b))
            .collect();
        Self { colors, lines }
    }

    /// Highest valid index.
    pub fn steps(&self) -> usize {
        self.colors.len() - 1
    }

    /// `"R G B\n"` for the entry at `index`.
    pub fn line(&self, index: usize) -> &str {
        &self.lines[index]
    }
}
