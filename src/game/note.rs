#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoteType {
    Tap,
    Roll,
    Swell,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoteResult {
    Great,
    Good,
    Miss,
}

#[derive(Clone, Debug)]
pub struct Note {
    pub time_ms: f32,
    pub note_type: NoteType,
    /// Accent (big) note, hit with both hands at once.
    pub accent: bool,
    /// Set exactly once, by the judge, when the note is resolved.
    pub result: Option<NoteResult>,
}

impl Note {
    pub fn new(time_ms: f32, note_type: NoteType, accent: bool) -> Self {
        Self {
            time_ms,
            note_type,
            accent,
            result: None,
        }
    }

    #[inline(always)]
    pub fn is_judged(&self) -> bool {
        self.result.is_some()
    }

    /// Swells and rolls are mashable and accents take both hands at once;
    /// none of them carries a usable alternation expectation.
    #[inline(always)]
    pub fn is_passthrough(&self) -> bool {
        matches!(self.note_type, NoteType::Roll | NoteType::Swell) || self.accent
    }
}

/// Borrowed view over the alive notes the playfield keeps for the current
/// window. The slice is owned and re-windowed by the caller each frame, so a
/// view is built per query and never stored.
#[derive(Copy, Clone)]
pub struct AliveNotes<'a> {
    notes: &'a [Note],
}

impl<'a> AliveNotes<'a> {
    pub fn new(notes: &'a [Note]) -> Self {
        Self { notes }
    }

    /// Earliest alive note still waiting on a judgement.
    pub fn next_unjudged(&self) -> Option<&'a Note> {
        self.notes.iter().find(|n| !n.is_judged())
    }

    /// Latest alive note, in timeline order, that has been judged.
    pub fn last_judged(&self) -> Option<&'a Note> {
        self.notes.iter().rev().find(|n| n.is_judged())
    }
}
