use crate::config::SoundConfig;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Fire-and-forget sound cues. Failures are logged and swallowed; a broken
/// player must never stall a spin.
pub trait AudioCues {
    fn spin_cue(&self);
    fn win_cue(&self);
}

/// Silent implementation for sessions with no player configured.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioCues for NullAudio {
    fn spin_cue(&self) {}
    fn win_cue(&self) {}
}

/// Plays cue files by spawning a configured player command, detached.
#[derive(Debug)]
pub struct PlayerAudio {
    player: Vec<String>,
    spin: Option<PathBuf>,
    win: Option<PathBuf>,
}

impl PlayerAudio {
    /// Builds the player from config; `None` when no player is set or its
    /// command line does not parse.
    pub fn from_config(sounds: &SoundConfig) -> Option<Self> {
        let raw = sounds.player.as_deref()?;
        let player = match shell_words::split(raw) {
            Ok(argv) if !argv.is_empty() => argv,
            Ok(_) => return None,
            Err(e) => {
                log::error!("Unparseable sound player command '{raw}': {e}");
                return None;
            }
        };
        Some(Self {
            player,
            spin: sounds.spin.clone(),
            win: sounds.win.clone(),
        })
    }

    /// Boxed cue implementation for a session: the player when one is
    /// configured, otherwise silence.
    pub fn cues(sounds: &SoundConfig) -> Box<dyn AudioCues> {
        match Self::from_config(sounds) {
            Some(player) => Box::new(player),
            None => Box::new(NullAudio),
        }
    }

    fn play(&self, file: &Path) {
        let result = Command::new(&self.player[0])
            .args(&self.player[1..])
            .arg(file)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = result {
            log::error!("Failed to play cue {}: {e}", file.display());
        }
    }
}

impl AudioCues for PlayerAudio {
    fn spin_cue(&self) {
        if let Some(file) = &self.spin {
            self.play(file);
        }
    }

    fn win_cue(&self) {
        if let Some(file) = &self.win {
            self.play(file);
        }
    }
}
