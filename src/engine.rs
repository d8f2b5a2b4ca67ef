//! Host-facing engine: the render-loop state machine
//!
//! The host owns frame pacing (an animation-callback loop, a timer, or a
//! test harness) and calls [`Engine::frame`] with wall-clock timestamps;
//! the engine turns those into bounded deltas for the simulation, drains
//! tick events into the audio sink, and paints the bound surface. A `false`
//! return from `frame` tells the host to stop scheduling.

use serde::Serialize;

use crate::audio::{AudioSink, NullAudio, Sound};
use crate::input;
use crate::sim::{GameEvent, GameState, GameStatus, tick};
use crate::tuning::Tuning;

/// Drawing surface supplied by the host. Presentation detail lives outside
/// the core; the engine only needs somewhere to paint each frame.
pub trait Surface {
    /// Pixel dimensions of the target
    fn size(&self) -> (u32, u32);
    /// Paint the current simulation state
    fn present(&mut self, state: &GameState);
}

/// Read-only session readout for the host HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub score: u32,
}

/// One game instance: simulation state, surface binding, audio sink, and
/// frame timing. Owning everything here keeps the engine instantiable many
/// times (tests, multiple mounts) with no shared globals.
pub struct Engine {
    state: GameState,
    surface: Option<Box<dyn Surface>>,
    audio: Box<dyn AudioSink>,
    /// Timestamp of the previous frame; `None` means the next frame is a
    /// baseline that only establishes timing
    last_time_ms: Option<f64>,
}

impl Engine {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::new(seed, tuning),
            surface: None,
            audio: Box::new(NullAudio),
            last_time_ms: None,
        }
    }

    /// Replace the audio collaborator (optional; defaults to a null sink)
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Bind or rebind the drawing surface. Rebinding (e.g. the host
    /// recreated its canvas) never disturbs simulation state.
    pub fn bind_surface(&mut self, surface: Box<dyn Surface>) {
        let (w, h) = surface.size();
        log::info!("surface bound: {w}x{h}");
        self.surface = Some(surface);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.state.status,
            score: self.state.score,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Forward a key event from the host. Returns true when the key was
    /// recognized (host should suppress its default behavior).
    pub fn handle_key(&mut self, key: &str) -> bool {
        input::apply_key(&mut self.state, key)
    }

    /// Begin ticking from the current world state (Idle may follow a win;
    /// starting does not reset anything). The host schedules frames after
    /// this returns.
    pub fn start(&mut self) {
        self.halt();
        self.state.status = GameStatus::Running;
        self.audio.play(Sound::AmbientBegin);
        log::info!("session started (seed {})", self.state.seed());
    }

    /// Fully reinitialize grid, actors, score, and timing, then run.
    /// Callable mid-game: the old loop is canceled and a fresh baseline
    /// frame follows.
    pub fn restart(&mut self) {
        self.halt();
        self.state.reset();
        self.state.status = GameStatus::Running;
        self.audio.play(Sound::AmbientBegin);
        log::info!("session restarted (seed {})", self.state.seed());
    }

    /// Cancel frame timing so the next start behaves as a fresh baseline.
    /// Idempotent: only an active loop emits the ambient-stop cue.
    fn halt(&mut self) {
        if self.last_time_ms.take().is_some() {
            self.audio.play(Sound::AmbientEnd);
        }
    }

    /// Advance one frame at wall-clock time `now_ms` (milliseconds).
    ///
    /// Returns true while the host should keep scheduling frames. The first
    /// frame after a (re)start establishes the timestamp and advances
    /// nothing; a frame with no surface bound skips the tick entirely
    /// (not ready, not an error).
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.state.status != GameStatus::Running {
            return false;
        }

        let Some(last) = self.last_time_ms else {
            self.last_time_ms = Some(now_ms);
            return true;
        };
        self.last_time_ms = Some(now_ms);

        let Some(surface) = self.surface.as_mut() else {
            return true;
        };

        let dt = (((now_ms - last) / 1000.0).max(0.0) as f32).min(self.state.tuning.max_frame_dt);
        tick(&mut self.state, dt);

        for event in self.state.drain_events() {
            self.audio.play(match event {
                GameEvent::PelletEaten => Sound::PelletEaten,
                GameEvent::AdversaryContact => Sound::AdversaryContact,
                GameEvent::GameOver => Sound::GameOver,
            });
        }

        surface.present(&self.state);

        if self.state.status != GameStatus::Running {
            // The loop stops itself on collision or pellet exhaustion
            self.halt();
            return false;
        }
        true
    }
}
