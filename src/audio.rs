//! Sound-effect mapping for the presentation layer
//!
//! The simulation only emits [`GameEvent`]s; this module maps each event to
//! the sound asset a frontend should play. Playback itself is out of scope
//! for the core, so the only sink shipped here logs what would be played.

use crate::sim::GameEvent;

/// Sound asset identifier to play for a game event. Fire-and-forget; the
/// core never waits on playback.
pub fn sound_asset(event: GameEvent) -> &'static str {
    match event {
        GameEvent::Bounce => "boing.wav",
        GameEvent::Teleport(kind) => kind.teleport_sound(),
        GameEvent::Win => "chaching.wav",
        GameEvent::Lose => "shatter.wav",
    }
}

/// Playback seam a frontend implements.
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}

/// Sink for headless runs: logs the asset that would be played.
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, event: GameEvent) {
        log::debug!("play {}", sound_asset(event));
    }
}
