//! Audio collaborator boundary
//!
//! The engine emits fire-and-forget notifications; whatever the host does
//! with them (or fails to do, e.g. autoplay blocked by policy) never feeds
//! back into simulation state.

/// Sound cues emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Start the looping background track
    AmbientBegin,
    /// Stop the looping background track
    AmbientEnd,
    PelletEaten,
    AdversaryContact,
    GameOver,
}

/// Host-supplied audio sink. Implementations must swallow playback
/// failures; there is no return value to consume.
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
}

/// Default sink when the host supplies no audio
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}
}

/// Sink that logs each cue; used by the headless demo
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, sound: Sound) {
        log::debug!("audio cue: {sound:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_audio_accepts_everything() {
        let mut sink = NullAudio;
        sink.play(Sound::AmbientBegin);
        sink.play(Sound::PelletEaten);
        sink.play(Sound::GameOver);
    }
}
