//! Neon Chomp headless demo
//!
//! Drives the engine with synthetic 60 Hz frame timestamps and a scripted
//! key sequence, then prints the final session snapshot. Useful for
//! exercising the core without a graphical host.

use neon_chomp::audio::LogAudio;
use neon_chomp::sim::GameState;
use neon_chomp::{Engine, Surface, Tuning};

/// Surface that just counts frames; the demo has nothing to paint
struct HeadlessSurface {
    frames: u64,
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (768, 512)
    }

    fn present(&mut self, state: &GameState) {
        self.frames += 1;
        if self.frames % 120 == 0 {
            log::info!(
                "t={:.1}s score={} pellets_left={}",
                state.clock,
                state.score,
                state.pellets_remaining
            );
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xC0FFEE);
    log::info!("Neon Chomp headless demo (seed {seed})");

    let mut engine = Engine::new(seed, Tuning::default()).with_audio(Box::new(LogAudio));
    engine.bind_surface(Box::new(HeadlessSurface { frames: 0 }));
    engine.start();

    // Sweep the outer corridors: right along the top, down the far side,
    // back left, then up. Repeats until the session ends or time runs out.
    let script = ["ArrowRight", "ArrowDown", "ArrowLeft", "ArrowUp"];
    let mut now_ms = 0.0;
    let mut frame_count = 0u64;

    while engine.frame(now_ms) {
        now_ms += 1000.0 / 60.0;
        frame_count += 1;
        // New leg of the sweep every two seconds
        if frame_count % 120 == 0 {
            let key = script[(frame_count / 120) as usize % script.len()];
            engine.handle_key(key);
        }
        // A minute of sim time is plenty for a demo
        if now_ms > 60_000.0 {
            break;
        }
    }

    let snapshot = engine.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
