use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use envblend_demo::scene::demo_host;
use envblend_demo::schedule::SampleSchedule;
use envblend_demo::trace::{self, Trace, TraceFrame};
use envblend_driver::config::ManagerConfig;
use envblend_driver::manager::EnvironmentManager;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path =
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/manager.ron"));
    let mut output_path: Option<PathBuf> = None;
    let mut frames = 1800u32;
    let mut delta_time = 1.0f32 / 60.0;
    let mut sample_every = 60u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = PathBuf::from(arg_value(&args, i, "--config"));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(arg_value(&args, i, "--output")));
            }
            "--frames" => {
                i += 1;
                frames = parse_arg(&args, i, "--frames");
            }
            "--dt" => {
                i += 1;
                delta_time = parse_arg(&args, i, "--dt");
            }
            "--sample-every" => {
                i += 1;
                sample_every = parse_arg::<u32>(&args, i, "--sample-every").max(1);
            }
            "--help" | "-h" => {
                eprintln!("Usage: envblend-demo [OPTIONS]");
                eprintln!("  --config <path>        Manager config RON (default: assets/manager.ron)");
                eprintln!("  --output <path>        Save the sampled trace as JSON");
                eprintln!("  --frames <n>           Frames to simulate (default: 1800)");
                eprintln!("  --dt <seconds>         Seconds per frame (default: 1/60)");
                eprintln!("  --sample-every <n>     Trace one frame in n (default: 60)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match ManagerConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };
    let base_dir = config_path.parent().unwrap_or(Path::new("."));
    let registry = match config.preload_registry(base_dir) {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let host = demo_host(&config.sun_light_name);
    let mut manager = EnvironmentManager::new(host, registry, &config);
    let mut schedule = SampleSchedule::day_cycle();
    let mut trace = Trace::default();

    log::info!("Running {} frames at {:.4}s per frame", frames, delta_time);
    for frame in 0..frames {
        if let Some(step) = schedule.poll(delta_time) {
            if let Err(e) = manager.blend_to_named(&step.preset, step.blend_seconds) {
                log::warn!("Schedule step skipped: {}", e);
            }
        }

        manager.tick(delta_time);

        if frame % sample_every == 0 {
            let time = (frame + 1) as f32 * delta_time;
            trace.frames.push(TraceFrame::observe(
                &manager,
                &config.sun_light_name,
                frame,
                time,
            ));
        }
    }

    println!("\n## Environment Trace\n");
    println!("{}", trace::format_markdown(&trace));

    if let Some(ref path) = output_path {
        match trace::save_trace(path, &trace) {
            Ok(()) => log::info!("Saved trace to {}", path.display()),
            Err(e) => {
                log::error!("Failed to save trace to {}: {}", path.display(), e);
                process::exit(1);
            }
        }
    }

    log::info!("Demo complete.");
}

fn arg_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn parse_arg<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match arg_value(args, i, flag).parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid {} value: {}", flag, arg_value(args, i, flag));
            process::exit(1);
        }
    }
}
