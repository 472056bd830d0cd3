use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use log::{error, info};
use structopt::StructOpt;

use noise_sphere::{FractalNoise, RenderConfig, Renderer};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// TOML file with render settings; defaults are used for anything it leaves out
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    #[structopt(long)]
    pub seed: Option<u64>,
    /// Validate the settings without rendering
    #[structopt(short = "n", long)]
    pub dry_run: bool,
}

fn run(opts: Opt) -> Result<()> {
    let mut config = match &opts.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if let Some(output) = opts.output {
        config.output_path = output;
    }
    if let Some(seed) = opts.seed {
        config.noise.seed = seed;
    }

    let renderer = Renderer::new(&config)?;
    if opts.dry_run {
        info!("config ok, skipping render");
        return Ok(());
    }

    let noise = FractalNoise::new(&config.noise);
    renderer.render_to_file(&noise)?;
    Ok(())
}

fn main() -> ExitCode {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Opt::from_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
