use crate::game::note::Note;

/// A span of the song with no active notes, taken from the chart.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BreakSpan {
    pub start_ms: f32,
    pub end_ms: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ChartData {
    pub notes: Vec<Note>,
    pub breaks: Vec<BreakSpan>,
}

impl ChartData {
    /// Fails fast on out-of-order notes or inverted breaks; every lookup
    /// downstream assumes a time-ordered chart. Equal note times are fine,
    /// insertion order breaks the tie.
    pub fn new(notes: Vec<Note>, breaks: Vec<BreakSpan>) -> Result<Self, String> {
        if let Some(pair) = notes.windows(2).find(|pair| pair[1].time_ms < pair[0].time_ms) {
            return Err(format!(
                "chart notes out of order: {}ms followed by {}ms",
                pair[0].time_ms, pair[1].time_ms
            ));
        }

        for b in &breaks {
            if b.end_ms < b.start_ms {
                return Err(format!(
                    "break ends at {}ms before it starts at {}ms",
                    b.end_ms, b.start_ms
                ));
            }
        }

        Ok(Self { notes, breaks })
    }

    pub fn first_note(&self) -> Option<&Note> {
        self.notes.first()
    }

    /// First note starting at or after `time_ms`.
    pub fn next_note_at_or_after(&self, time_ms: f32) -> Option<&Note> {
        self.notes.iter().find(|n| n.time_ms >= time_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::note::NoteType;

    fn tap(time_ms: f32) -> Note {
        Note::new(time_ms, NoteType::Tap, false)
    }

    #[test]
    fn rejects_unordered_notes() {
        let result = ChartData::new(vec![tap(500.0), tap(400.0)], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_inverted_break() {
        let result = ChartData::new(
            vec![tap(100.0)],
            vec![BreakSpan {
                start_ms: 900.0,
                end_ms: 800.0,
            }],
        );
        assert!(result.is_err());
    }

    #[test]
    fn accepts_tied_note_times() {
        let chart = ChartData::new(vec![tap(100.0), tap(100.0), tap(200.0)], Vec::new());
        assert!(chart.is_ok());
    }

    #[test]
    fn next_note_lookup_is_inclusive() {
        let chart = ChartData::new(vec![tap(100.0), tap(300.0)], Vec::new()).unwrap();
        assert_eq!(
            chart.next_note_at_or_after(300.0).map(|n| n.time_ms),
            Some(300.0)
        );
        assert_eq!(
            chart.next_note_at_or_after(150.0).map(|n| n.time_ms),
            Some(300.0)
        );
        assert!(chart.next_note_at_or_after(301.0).is_none());
    }
}
