use std::time::Instant;

use clap::Parser;
use log::{error, info, warn};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use rayshade::camera::Perspective;
use rayshade::error::RenderError;
use rayshade::output::{resolve_output, save_image_as_png};
use rayshade::render::{render, render_sequential};
use rayshade::scene::Scene;

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("rayshade - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            warn!("Could not size the render pool to {} threads: {}", threads, e);
        }
    }

    let result = if args.bench {
        run_benchmark()
    } else {
        run(&args)
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), RenderError> {
    let target = resolve_output(args.name.as_deref())?;
    let scene = target.scene.build();
    let perspective = Perspective::reference();

    let image = render(&scene, &perspective)?;
    save_image_as_png(&image, &target.path)
}

/// Render the reference scene on one thread and on the pool, and compare.
fn run_benchmark() -> Result<(), RenderError> {
    info!("🏁 Starting benchmark mode - comparing sequential and parallel rendering");

    let scene = Scene::reference();
    let perspective = Perspective::reference();

    let sequential_start = Instant::now();
    let sequential = render_sequential(&scene, &perspective)?;
    let sequential_time = sequential_start.elapsed();

    let parallel_start = Instant::now();
    let parallel = render(&scene, &perspective)?;
    let parallel_time = parallel_start.elapsed();

    let speedup = sequential_time.as_secs_f32() / parallel_time.as_secs_f32().max(f32::EPSILON);

    info!("================== BENCHMARK RESULTS ==================");
    info!("Resolution: {}x{}", perspective.width(), perspective.height());
    info!("--------------------------------------------------------");
    info!("Sequential:   {:>8.3}s      1.0x", sequential_time.as_secs_f32());
    info!(
        "Parallel:     {:>8.3}s    {:>6.1}x    {} threads",
        parallel_time.as_secs_f32(),
        speedup,
        rayon::current_num_threads()
    );
    info!("========================================================");

    if sequential.as_raw() == parallel.as_raw() {
        info!("✅ Sequential and parallel frames are byte-identical");
    } else {
        warn!("❌ Sequential and parallel frames differ");
    }

    Ok(())
}
