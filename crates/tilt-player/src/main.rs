//! Headless animation driver.
//!
//! Stand-in for the windowed event loop: owns the process clock, takes one
//! elapsed reading per frame, samples the scene pose against it, and logs
//! the result. Usage: `tilt-player [frames] [cycle_ms]`.

use std::time::{Duration, Instant};

use log::{debug, error, info};
use tilt_animation_core::Config;
use tilt_scene::PinballScene;

const FRAME_MS: u64 = 16;
const DEFAULT_FRAMES: u64 = 128;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_FRAMES,
    };
    let config = match args.next() {
        Some(arg) => Config {
            cycle_ms: arg.parse()?,
        },
        None => Config::default(),
    };

    let scene = PinballScene::with_config(config)?;
    info!(
        "stepping {} frames, cycle {} ms, {} channels, accent {}",
        frames,
        scene.clock().cycle_ms(),
        scene.rig().len(),
        scene.accent().name()
    );

    let start = Instant::now();
    for frame in 0..frames {
        // One reading per frame; every channel is sampled against it.
        let elapsed_ms = start.elapsed().as_millis() as u64;
        let pose = scene.pose_at(elapsed_ms).map_err(|err| {
            error!("{} failure at frame {frame}: {err}", err.category());
            err
        })?;

        debug!(
            "frame {frame} t={:.3}s ball=({:.2}, {:.2}) plunger_z={:.2} levers=({:.1}, {:.1})",
            pose.time,
            pose.ball.x,
            pose.ball.z,
            pose.plunger.z,
            pose.lever_left_deg,
            pose.lever_right_deg,
        );

        std::thread::sleep(Duration::from_millis(FRAME_MS));
    }

    let last = scene.pose_at(start.elapsed().as_millis() as u64)?;
    info!(
        "done: final cycle time {:.3}s, camera eye z {:.2}",
        last.time, last.camera.eye.z
    );
    Ok(())
}
