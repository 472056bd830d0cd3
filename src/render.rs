//! Rendering driver: shades every pixel and streams the raster as a P3 image.
//!
//! Pixels are written top row first, left to right, since P3 encodes position purely by
//! stream order. Rows are shaded in parallel a band at a time and each band is written
//! out in order before the next starts, so at most one band is held in memory.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::config::RenderConfig;
use crate::noise::NoiseSource;
use crate::palette::Palette;
use crate::shading::{Shade, Shader};

/// Rows shaded per parallel batch.
const BAND_ROWS: u32 = 64;

/// Largest channel value declared in the header.
pub const MAX_CHANNEL_VALUE: u32 = 255;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub pixels: u64,
    pub hits: u64,
    pub fallbacks: u64,
}

impl RenderStats {
    fn record(&mut self, shade: Shade) {
        self.pixels += 1;
        match shade {
            Shade::Miss => {}
            Shade::Fallback(_) => {
                self.hits += 1;
                self.fallbacks += 1;
            }
            Shade::Lit(_) => self.hits += 1,
        }
    }
}

pub fn write_header<W: Write>(out: &mut W, width: u32, height: u32) -> Result<()> {
    // ASCII
    writeln!(out, "P3")?;
    // Dimensions
    writeln!(out, "{} {}", width, height)?;
    // Max color
    writeln!(out, "{}", MAX_CHANNEL_VALUE)?;
    Ok(())
}

pub struct Renderer<'a> {
    config: &'a RenderConfig,
    shader: Shader,
    palette: Palette,
    pool: rayon::ThreadPool,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Result<Self> {
        config.validate()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads.unwrap_or(0))
            .build()
            .context("couldn't build render thread pool")?;

        Ok(Self {
            config,
            shader: Shader::new(config),
            palette: Palette::new(config.max_color, config.steps),
            pool,
        })
    }

    /// Writes the whole image to `out`. Any write error aborts the render.
    pub fn render<N, W>(&self, noise: &N, out: W) -> Result<RenderStats>
    where
        N: NoiseSource + Sync + ?Sized,
        W: Write,
    {
        let (width, height) = (self.config.width, self.config.height);
        let start = Instant::now();
        info!("rendering {}x{} image", width, height);

        let mut out = BufWriter::new(out);
        write_header(&mut out, width, height)?;

        let mut stats = RenderStats::default();
        let mut band_start = 0;
        while band_start < height {
            let band_end = (band_start + BAND_ROWS).min(height);
            let rows = self.shade_band(band_start..band_end, noise);

            for row in rows {
                for shade in row {
                    stats.record(shade);
                    out.write_all(self.palette.line(shade.index()).as_bytes())?;
                }
                // Blank line after every row
                out.write_all(b"\n")?;
            }
            debug!("wrote rows {}..{}", band_start, band_end);
            band_start = band_end;
        }
        out.flush().context("couldn't flush image output")?;

        if stats.fallbacks > 0 {
            warn!(
                "{} pixels had negative luminance and used the fallback color",
                stats.fallbacks
            );
        }
        info!(
            "done in {:.2} seconds, {} of {} pixels hit the sphere",
            start.elapsed().as_secs_f32(),
            stats.hits,
            stats.pixels
        );
        Ok(stats)
    }

    /// Renders to `config.output_path`.
    pub fn render_to_file<N>(&self, noise: &N) -> Result<RenderStats>
    where
        N: NoiseSource + Sync + ?Sized,
    {
        let path = &self.config.output_path;
        info!("writing {}", path.display());
        let file = File::create(path)
            .with_context(|| format!("couldn't create output file {}", path.display()))?;
        self.render(noise, file)
            .with_context(|| format!("failed writing {}", path.display()))
    }

    // Collecting an indexed parallel iterator keeps rows in order
    fn shade_band<N>(&self, rows: std::ops::Range<u32>, noise: &N) -> Vec<Vec<Shade>>
    where
        N: NoiseSource + Sync + ?Sized,
    {
        let width = self.config.width;
        self.pool.install(|| {
            rows.into_par_iter()
                .map(|y| {
                    (0..width)
                        .map(|x| self.shader.shade(x, y, noise))
                        .collect::<Vec<_>>()
                })
                .collect()
        })
    }
}
