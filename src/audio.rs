//! Background music with graceful degradation
//!
//! The simulation never depends on audio. A backend that fails to start or
//! errors mid-call downgrades the manager to a silent no-op; the match
//! carries on without sound.

use std::fmt;

/// Error surfaced by a music backend; always recovered by the manager
#[derive(Debug)]
pub struct AudioError(pub String);

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio backend error: {}", self.0)
    }
}

impl std::error::Error for AudioError {}

/// Playback operations a backend must provide
pub trait MusicBackend {
    /// Start looping the background track
    fn play_loop(&mut self) -> Result<(), AudioError>;
    fn pause(&mut self) -> Result<(), AudioError>;
    fn resume(&mut self) -> Result<(), AudioError>;
    /// Volume in `0.0..=1.0`
    fn set_volume(&mut self, volume: f32) -> Result<(), AudioError>;
}

/// Backend used when no audio device is available
pub struct SilentBackend;

impl MusicBackend for SilentBackend {
    fn play_loop(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
    fn pause(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
    fn resume(&mut self) -> Result<(), AudioError> {
        Ok(())
    }
    fn set_volume(&mut self, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Music manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn MusicBackend>>,
    paused: bool,
    volume: f32,
}

impl AudioManager {
    pub fn new(backend: Box<dyn MusicBackend>, volume: f32) -> Self {
        Self {
            backend: Some(backend),
            paused: false,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Manager with audio disabled from the start
    pub fn disabled() -> Self {
        Self {
            backend: None,
            paused: false,
            volume: 0.0,
        }
    }

    /// Whether a backend is still attached
    pub fn enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Music currently paused (by mute)?
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Set the volume and start the loop; failure disables audio
    pub fn start(&mut self) {
        let volume = self.volume;
        self.call(|b| b.set_volume(volume));
        self.call(|b| b.play_loop());
    }

    /// Pause or resume playback to match the simulation's mute flag
    ///
    /// Idempotent: setting the same state twice is a no-op.
    pub fn set_muted(&mut self, muted: bool) {
        if muted == self.paused {
            return;
        }
        self.paused = muted;
        if muted {
            self.call(|b| b.pause());
        } else {
            self.call(|b| b.resume());
        }
    }

    /// Run one backend op, dropping the backend on failure
    fn call(&mut self, op: impl FnOnce(&mut dyn MusicBackend) -> Result<(), AudioError>) {
        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = op(backend.as_mut()) {
                log::warn!("{e}; disabling audio");
                self.backend = None;
            }
        }
    }
}
