use crate::events::AppEvent;
use crate::sys::store::{MUTE_KEY, PrefStore};
use crate::ui::audio::AudioCues;
use crate::ui::surface::{Side, Surface, WheelFrame};
use rand::rngs::StdRng;
use spindle::entry::{Entry, Verse};
use spindle::{SPIN_DURATION, SpinError, SpinOutcome};
use std::time::Duration;

/// Work the runtime owes the session after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    /// Deliver [`AppEvent::Reveal`] once the spin animation has played out.
    RevealAfter(Duration),
    /// Tear everything down.
    Shutdown,
}

/// One live wheel session: the fixed entry set, the verse pool, and whatever
/// a spin leaves behind. All mutation flows through [`Session::handle`];
/// collaborators sit behind trait objects so the session never touches a
/// screen, a speaker or a disk directly.
pub struct Session {
    entries: Vec<Entry>,
    pool: Vec<Verse>,
    rotation: f64,
    in_flight: Option<SpinOutcome>,
    winner: Option<Entry>,
    verses: (Option<Verse>, Option<Verse>),
    muted: bool,
    rng: StdRng,
    surface: Box<dyn Surface>,
    audio: Box<dyn AudioCues>,
    store: Box<dyn PrefStore>,
}

impl Session {
    /// A wheel with no entries is a configuration bug, rejected up front.
    ///
    /// The mute preference is read back from the store; like the original
    /// widget, an unset preference means muted.
    pub fn new(
        entries: Vec<Entry>,
        pool: Vec<Verse>,
        surface: Box<dyn Surface>,
        audio: Box<dyn AudioCues>,
        store: Box<dyn PrefStore>,
        rng: StdRng,
    ) -> Result<Self, SpinError> {
        if entries.is_empty() {
            return Err(SpinError::EmptyWheel);
        }
        let muted = store
            .get(MUTE_KEY)
            .map(|value| value == "true")
            .unwrap_or(true);
        let mut session = Self {
            entries,
            pool,
            rotation: 0.0,
            in_flight: None,
            winner: None,
            verses: (None, None),
            muted,
            rng,
            surface,
            audio,
            store,
        };
        session.render_wheel(false);
        Ok(session)
    }

    pub fn handle(&mut self, event: AppEvent) -> Option<Followup> {
        match event {
            AppEvent::Spin => self.spin(),
            AppEvent::Reveal => {
                self.reveal();
                None
            }
            AppEvent::Dismiss => {
                if self.winner.take().is_some() {
                    self.surface.winner(None);
                }
                None
            }
            AppEvent::ToggleMute => {
                self.muted = !self.muted;
                self.store.set(MUTE_KEY, if self.muted { "true" } else { "false" });
                log::info!("Sound cues {}", if self.muted { "muted" } else { "on" });
                None
            }
            AppEvent::RotateVerses => {
                self.rotate_verses();
                None
            }
            AppEvent::Quit => Some(Followup::Shutdown),
        }
    }

    fn spin(&mut self) -> Option<Followup> {
        if self.in_flight.is_some() {
            log::debug!("Spin ignored, wheel already in motion");
            return None;
        }

        let outcome = match spindle::spin(&self.entries, self.rotation, &mut self.rng) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::error!("Spin failed: {e}");
                return None;
            }
        };

        if !self.muted {
            self.audio.spin_cue();
        }
        self.winner = None;
        self.rotation = outcome.new_rotation;
        self.in_flight = Some(outcome);
        self.render_wheel(true);

        Some(Followup::RevealAfter(SPIN_DURATION))
    }

    fn reveal(&mut self) {
        let Some(outcome) = self.in_flight.take() else {
            return;
        };
        self.winner = self.entries.get(outcome.winner_index).cloned();
        if !self.muted {
            self.audio.win_cue();
        }
        self.render_wheel(false);
        self.surface.winner(self.winner.as_ref());
    }

    fn rotate_verses(&mut self) {
        self.verses = match spindle::pick_two_distinct(&self.pool, &mut self.rng) {
            Some((left, right)) => (Some(left.clone()), Some(right.clone())),
            None => (None, None),
        };
        self.surface.verse(Side::Left, self.verses.0.as_ref());
        self.surface.verse(Side::Right, self.verses.1.as_ref());
    }

    fn render_wheel(&mut self, is_spinning: bool) {
        self.surface.wheel(&WheelFrame {
            rotation: self.rotation,
            is_spinning,
            entries: &self.entries,
        });
    }

    pub fn is_spinning(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn winner(&self) -> Option<&Entry> {
        self.winner.as_ref()
    }

    pub fn verses(&self) -> (Option<&Verse>, Option<&Verse>) {
        (self.verses.0.as_ref(), self.verses.1.as_ref())
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}
