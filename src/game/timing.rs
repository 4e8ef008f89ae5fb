use crate::config::Config;
use crate::game::note::{Note, NoteResult};

/// Per-grade timing leniency, in milliseconds either side of a note.
/// The widest window doubles as the validity boundary: a press earlier than
/// `time_ms - widest()` cannot target the note at all.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitWindows {
    pub great_ms: f32,
    pub good_ms: f32,
    pub miss_ms: f32,
}

impl Default for HitWindows {
    fn default() -> Self {
        Self {
            great_ms: crate::config::GREAT_WINDOW_MS,
            good_ms: crate::config::GOOD_WINDOW_MS,
            miss_ms: crate::config::MISS_WINDOW_MS,
        }
    }
}

impl HitWindows {
    pub fn from_config(config: &Config) -> Self {
        Self {
            great_ms: config.great_window_ms,
            good_ms: config.good_window_ms,
            miss_ms: config.miss_window_ms,
        }
    }

    #[inline(always)]
    pub fn widest(&self) -> f32 {
        self.miss_ms
    }

    /// Earliest moment a press can meaningfully target `note`.
    #[inline(always)]
    pub fn earliest_valid_ms(&self, note: &Note) -> f32 {
        note.time_ms - self.widest()
    }

    /// Grade for a press `delta_ms` away from the note, or None when the
    /// press falls outside every window.
    pub fn grade_for(&self, delta_ms: f32) -> Option<NoteResult> {
        let delta = delta_ms.abs();
        match delta {
            _ if delta <= self.great_ms => Some(NoteResult::Great),
            _ if delta <= self.good_ms => Some(NoteResult::Good),
            _ if delta <= self.miss_ms => Some(NoteResult::Miss),
            _ => None,
        }
    }
}
