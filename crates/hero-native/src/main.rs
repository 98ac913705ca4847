//! Drives the engine through a scripted scroll timeline at a fixed frame
//! cadence and logs convergence and frame summaries. Useful for eyeballing
//! timing changes without a browser.

use std::thread;
use std::time::Duration;

use glam::Vec2;
use hero_core::{EngineConfig, HeroEngine, ScrollGeometry};

const FRAME_MS: u64 = 16;
const LOG_EVERY: u32 = 15;

// (frames to run, scroll target as a fraction of the scrollable distance)
const TIMELINE: &[(u32, f32)] = &[
    (90, 0.35),  // ease into scene 1
    (45, 0.35),  // hold
    (120, 0.9),  // fast jump toward the final scene
    (150, 1.0),  // settle at the end
];

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let viewport = Vec2::new(1440.0, 900.0);
    // The hero layout uses a 400vh scroll container.
    let container_height = 4.0 * viewport.y;

    let config = EngineConfig {
        float_count: 4,
        ..EngineConfig::default()
    };
    let mut engine = HeroEngine::new(config, viewport)?;

    for &(frames, target) in TIMELINE {
        let scrolled = target * (container_height - viewport.y);
        engine.on_scroll(ScrollGeometry {
            container_top: -scrolled,
            container_height,
            viewport_height: viewport.y,
        });
        log::info!("scroll target -> {target:.2}");

        for n in 0..frames {
            let frame = engine.tick();
            if n % LOG_EVERY == 0 {
                let scenes: Vec<String> = frame
                    .scenes
                    .iter()
                    .map(|s| format!("{:.2}/{:.2}", s.scene_opacity, s.text_opacity))
                    .collect();
                log::info!(
                    "p={:.4} bar={:>5.1}% scenes(bg/text)=[{}]",
                    engine.current_progress(),
                    frame.progress_fill * 100.0,
                    scenes.join(" ")
                );
            }
            thread::sleep(Duration::from_millis(FRAME_MS));
        }
        log::info!(
            "segment done: current={:.4} converged={}",
            engine.current_progress(),
            engine.converged()
        );
    }

    Ok(())
}
