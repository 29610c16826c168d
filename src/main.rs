//! Eddy Pipes native entry point
//!
//! Runs the simulations headless into a vertex batch and reports what
//! happened. A windowed host only needs to upload `VertexBatch::as_bytes`.

use std::process::ExitCode;

use eddy_pipes::renderer::{CommandList, VertexBatch};
use eddy_pipes::{Settings, Simulation, SimulationHost};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> ExitCode {
    env_logger::init();

    let mut dump = false;
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dump" => dump = true,
            _ => path = Some(arg),
        }
    }

    let settings = match path {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    log::info!(
        "Eddy Pipes (native) starting: {} simulations, {}x{} window",
        settings.simulations,
        settings.window_width,
        settings.window_height
    );

    let window = settings.window_size();
    let mut host = SimulationHost::new(settings.host.clone());
    for _ in 0..settings.simulations {
        host.push(Simulation::magnet(settings.magnet.clone()));
    }
    host.split_horizontally(window);
    host.begin();

    let mut batch = VertexBatch::new(window);
    let mut swaps = vec![0u64; host.len()];
    for frame in 0..settings.frames {
        host.frame(FRAME_DT, &mut batch);

        for (index, sim) in host.simulations().iter().enumerate() {
            let Some(magnet) = sim.as_magnet() else {
                continue;
            };
            if magnet.swap_count() != swaps[index] {
                swaps[index] = magnet.swap_count();
                log::info!(
                    "Frame {frame}: simulation {index} now in {:?} pipe",
                    magnet.active_pipe()
                );
            }
        }
    }

    for (index, sim) in host.simulations().iter().enumerate() {
        if let Some(magnet) = sim.as_magnet() {
            println!(
                "simulation {index}: {:.1}s simulated, {} pipe swaps, {:?} pipe, speed {:.3}",
                sim.clock().simulated,
                magnet.swap_count(),
                magnet.active_pipe(),
                magnet.magnet_speed()
            );
        }
    }
    println!(
        "last frame: {} triangles ({} bytes, stride {})",
        batch.triangle_count(),
        batch.as_bytes().len(),
        VertexBatch::layout().array_stride
    );

    if dump {
        let mut list = CommandList::new(window);
        host.render(&mut list);
        match list.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize frame: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
