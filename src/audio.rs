use std::io::{self, Write};

use crate::config::Level;

/// Every sound effect the game can request.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundCue {
    Startup,
    Hover,
    StartGame,
    FoodExplosion,
    AnimateTo3d,
    RotateBoard,
    SpinBoard,
    Crash,
    GameOver,
    Ok,
    Victory,
}

/// Background music, one track per difficulty level.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MusicTrack {
    Song1,
    Song2,
    Song3,
}

impl MusicTrack {
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Slow => Self::Song1,
            Level::Medium => Self::Song2,
            Level::Fast => Self::Song3,
        }
    }
}

/// Fire-and-forget audio sink.
///
/// Nothing in the game depends on playback succeeding; implementations
/// swallow their own errors and never block the caller.
pub trait AudioService {
    fn play(&mut self, cue: SoundCue);
    fn play_music(&mut self, track: MusicTrack);
    fn stop_music(&mut self);
    fn stop_everything(&mut self);
}

/// Silent implementation for `--mute` and for tests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioService for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
    fn play_music(&mut self, _track: MusicTrack) {}
    fn stop_music(&mut self) {}
    fn stop_everything(&mut self) {}
}

/// Terminal audio: rings the bell for the cues that matter mid-game.
///
/// Music is not representable here, so the track methods are no-ops.
#[derive(Debug, Default)]
pub struct BellAudio;

const BEL: &[u8] = b"\x07";

impl AudioService for BellAudio {
    fn play(&mut self, cue: SoundCue) {
        let rings: usize = match cue {
            SoundCue::FoodExplosion | SoundCue::Hover => 0,
            SoundCue::Crash | SoundCue::Victory => 2,
            _ => 1,
        };

        let mut stdout = io::stdout();
        for _ in 0..rings {
            let _ = stdout.write_all(BEL);
        }
        let _ = stdout.flush();
    }

    fn play_music(&mut self, _track: MusicTrack) {}
    fn stop_music(&mut self) {}
    fn stop_everything(&mut self) {}
}

/// Test spy that records every cue in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub cues: Vec<SoundCue>,
    pub music: Vec<MusicTrack>,
}

#[cfg(test)]
impl AudioService for RecordingAudio {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    fn play_music(&mut self, track: MusicTrack) {
        self.music.push(track);
    }

    fn stop_music(&mut self) {}
    fn stop_everything(&mut self) {}
}

#[cfg(test)]
mod tests {
    use crate::config::Level;

    use super::{AudioService, MusicTrack, RecordingAudio, SoundCue};

    #[test]
    fn each_level_has_its_own_track() {
        assert_eq!(MusicTrack::for_level(Level::Slow), MusicTrack::Song1);
        assert_eq!(MusicTrack::for_level(Level::Medium), MusicTrack::Song2);
        assert_eq!(MusicTrack::for_level(Level::Fast), MusicTrack::Song3);
    }

    #[test]
    fn recording_audio_keeps_cue_order() {
        let mut audio = RecordingAudio::default();
        audio.play(SoundCue::StartGame);
        audio.play(SoundCue::FoodExplosion);

        assert_eq!(audio.cues, vec![SoundCue::StartGame, SoundCue::FoodExplosion]);
    }
}
