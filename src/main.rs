use std::{error::Error, fs, path::PathBuf};

use log::{info, LevelFilter};
use structopt::StructOpt;

use rust_rt_core::{parsing::load_scene, render};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rust_rt_core",
    about = "casts one ray per pixel through a scene and exports the nearest hits"
)]
struct Opt {
    #[structopt(long, parse(from_os_str))]
    scene: PathBuf,

    #[structopt(long, default_value = "512")]
    width: usize,

    #[structopt(long, default_value = "512")]
    height: usize,

    /// output basename, `.png` and `.exr` are appended
    #[structopt(short, long, parse(from_os_str), default_value = "output/hits")]
    output: PathBuf,

    /// defaults to the number of cpus
    #[structopt(short, long)]
    threads: Option<usize>,

    #[structopt(short, long)]
    verbose: bool,
}

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_logger(if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let threads = opt.threads.unwrap_or_else(num_cpus::get);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!("using {} threads", threads);

    let scene = load_scene(&opt.scene)?;
    let film = render::cast(&scene, opt.width, opt.height, !opt.verbose);

    if let Some(parent) = opt.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let png_filename = opt.output.with_extension("png");
    let exr_filename = opt.output.with_extension("exr");
    render::write_normals_png(&film, &png_filename)?;
    render::write_depth_exr(&film, &exr_filename)?;
    info!(
        "wrote {} and {}",
        png_filename.display(),
        exr_filename.display()
    );
    Ok(())
}
