//! Sound cues for moves and game ends.
//!
//! Playback is fire-and-forget. A missing device or clip costs sound, never
//! game state.

use std::path::Path;

use tracing::{debug, instrument};

use crate::games::tictactoe::{PlaceResult, Player};

/// One of the four sounds the game makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum SoundCue {
    /// X placed a mark.
    MoveX,
    /// O placed a mark.
    MoveO,
    /// Someone completed a line.
    Win,
    /// The board filled up with no line.
    Tie,
}

impl SoundCue {
    /// Clip file name looked up in the assets directory.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::MoveX => "xSound.wav",
            SoundCue::MoveO => "oSound.wav",
            SoundCue::Win => "winSound.wav",
            SoundCue::Tie => "tieSound.wav",
        }
    }

    /// Move cue for a mark.
    pub fn for_mark(mark: Player) -> Self {
        match mark {
            Player::X => SoundCue::MoveX,
            Player::O => SoundCue::MoveO,
        }
    }

    /// Cues to play after a placement, in order.
    ///
    /// The move cue always comes first; a deciding move adds the outcome cue.
    pub fn for_result(result: PlaceResult, mover: Player) -> Vec<Self> {
        let mut cues = Vec::with_capacity(2);
        if let Some(mark) = result.placed_mark(mover) {
            cues.push(Self::for_mark(mark));
        }
        match result {
            PlaceResult::Won { .. } => cues.push(SoundCue::Win),
            PlaceResult::Tied => cues.push(SoundCue::Tie),
            PlaceResult::Ignored | PlaceResult::Placed { .. } => {}
        }
        cues
    }
}

/// Something that can play a cue without blocking the caller.
pub trait AudioNotifier {
    /// Starts playing `cue`. Failures are swallowed.
    fn play(&self, cue: SoundCue);
}

/// Notifier that plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioNotifier for SilentAudio {
    fn play(&self, cue: SoundCue) {
        debug!(%cue, "Sound cue (muted)");
    }
}

/// Error raised while setting up audio output.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AudioError {
    /// No usable output device.
    #[display("No audio output device: {}", _0)]
    Device(String),
    /// A clip could not be read from disk.
    #[display("Failed to read {}: {}", path, reason)]
    Read {
        /// Path that was tried.
        path: String,
        /// Underlying I/O error.
        reason: String,
    },
    /// A clip was read but is not a playable audio file.
    #[display("Failed to decode {}: {}", path, reason)]
    Decode {
        /// Path that was tried.
        path: String,
        /// Decoder error.
        reason: String,
    },
}

impl std::error::Error for AudioError {}

/// Builds the notifier for this run.
///
/// Falls back to [`SilentAudio`] when muted, when built without the `audio`
/// feature, or when no output device can be opened.
#[instrument(skip(assets_dir), fields(assets_dir = %assets_dir.as_ref().display()))]
pub fn open_notifier(assets_dir: impl AsRef<Path>, mute: bool) -> Box<dyn AudioNotifier> {
    if mute {
        tracing::info!("Sound muted");
        return Box::new(SilentAudio);
    }
    open_device(assets_dir.as_ref())
}

#[cfg(feature = "audio")]
fn open_device(assets_dir: &Path) -> Box<dyn AudioNotifier> {
    match rodio_backend::RodioAudio::open(assets_dir) {
        Ok(audio) => Box::new(audio),
        Err(e) => {
            tracing::warn!(error = %e, "Audio disabled");
            Box::new(SilentAudio)
        }
    }
}

#[cfg(not(feature = "audio"))]
fn open_device(_assets_dir: &Path) -> Box<dyn AudioNotifier> {
    tracing::info!("Built without the audio feature, playing silently");
    Box::new(SilentAudio)
}

#[cfg(feature = "audio")]
pub use rodio_backend::RodioAudio;

#[cfg(feature = "audio")]
mod rodio_backend {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
    use strum::IntoEnumIterator;
    use tracing::{debug, info, warn};

    use super::{AudioError, AudioNotifier, SoundCue};

    /// Plays cues on the default output device.
    ///
    /// Clips are read into memory once; each play decodes from that buffer
    /// into a detached sink.
    pub struct RodioAudio {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: HashMap<SoundCue, Arc<[u8]>>,
    }

    impl std::fmt::Debug for RodioAudio {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("RodioAudio")
                .field("clips", &self.clips.keys().collect::<Vec<_>>())
                .finish()
        }
    }

    impl RodioAudio {
        /// Opens the default device and loads whatever clips are present.
        pub fn open(assets_dir: &Path) -> Result<Self, AudioError> {
            let (stream, handle) =
                OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;

            let mut clips = HashMap::new();
            for cue in SoundCue::iter() {
                match load_clip(&assets_dir.join(cue.file_name())) {
                    Ok(bytes) => {
                        clips.insert(cue, bytes);
                    }
                    Err(e) => warn!(%cue, error = %e, "Sound cue disabled"),
                }
            }
            info!(loaded = clips.len(), "Audio ready");

            Ok(Self {
                _stream: stream,
                handle,
                clips,
            })
        }
    }

    fn load_clip(path: &Path) -> Result<Arc<[u8]>, AudioError> {
        let shown = path.display().to_string();
        let bytes: Arc<[u8]> = std::fs::read(path)
            .map_err(|e| AudioError::Read {
                path: shown.clone(),
                reason: e.to_string(),
            })?
            .into();
        Decoder::new(Cursor::new(Arc::clone(&bytes))).map_err(|e| AudioError::Decode {
            path: shown,
            reason: e.to_string(),
        })?;
        Ok(bytes)
    }

    impl AudioNotifier for RodioAudio {
        fn play(&self, cue: SoundCue) {
            let Some(bytes) = self.clips.get(&cue) else {
                debug!(%cue, "No clip loaded");
                return;
            };
            let Ok(sink) = Sink::try_new(&self.handle) else {
                return;
            };
            let Ok(source) = Decoder::new(Cursor::new(Arc::clone(bytes))) else {
                return;
            };
            sink.append(source);
            sink.detach();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_move_plays_only_move_cue() {
        let result = PlaceResult::Placed {
            mark: Player::O,
            next: Player::X,
        };
        assert_eq!(SoundCue::for_result(result, Player::O), vec![SoundCue::MoveO]);
    }

    #[test]
    fn test_winning_move_plays_move_then_win() {
        let result = PlaceResult::Won { player: Player::X };
        assert_eq!(
            SoundCue::for_result(result, Player::X),
            vec![SoundCue::MoveX, SoundCue::Win]
        );
    }

    #[test]
    fn test_tying_move_plays_move_then_tie() {
        assert_eq!(
            SoundCue::for_result(PlaceResult::Tied, Player::X),
            vec![SoundCue::MoveX, SoundCue::Tie]
        );
    }

    #[test]
    fn test_ignored_click_is_silent() {
        assert!(SoundCue::for_result(PlaceResult::Ignored, Player::X).is_empty());
    }

    #[test]
    fn test_muted_notifier_never_fails() {
        let audio = open_notifier("does/not/exist", true);
        audio.play(SoundCue::Win);
    }
}
