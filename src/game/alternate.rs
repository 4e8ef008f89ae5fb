use crate::core::input::{DrumAction, InputEdge, Side};
use crate::game::gate::GateSchedule;
use crate::game::note::AliveNotes;
use crate::game::stats::SessionTally;
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Blocked,
}

/// Don't hit the same side twice in a row.
///
/// The whole machine is the side of the most recently accepted press;
/// blocked presses never touch it.
#[derive(Clone, Debug, Default)]
pub struct AlternateRule {
    last_side: Option<Side>,
}

impl AlternateRule {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn last_side(&self) -> Option<Side> {
        self.last_side
    }

    /// Forget the previous side, so play resumes with no alternation
    /// expectation. Runs from the frame tick, not from `evaluate`.
    pub fn reset(&mut self) {
        self.last_side = None;
    }

    /// Accept or reject one press. Total over its inputs; the only
    /// mutations are the accepting branches below.
    pub fn evaluate(
        &mut self,
        action: DrumAction,
        now_ms: f32,
        notes: &AliveNotes,
        gate: &GateSchedule,
    ) -> bool {
        // While suspended every press passes, and memory stays as it was.
        // Clearing is the frame tick's job; a press can land inside a
        // suspended period before the first tick has run.
        if gate.is_suspended(now_ms) {
            return true;
        }

        let pending = notes.next_unjudged();
        let last = notes.last_judged();
        let side = action.side();

        // A swell, roll or accent next to the cursor makes any side valid.
        if pending.is_some_and(|n| n.is_passthrough()) || last.is_some_and(|n| n.is_passthrough())
        {
            self.last_side = Some(side);
            return true;
        }

        // First press since construction or the last reset.
        let Some(last_side) = self.last_side else {
            self.last_side = Some(side);
            return true;
        };

        if side != last_side {
            self.last_side = Some(side);
            return true;
        }

        false
    }
}

/// Sits between the key-binding layer and note judging: presses that repeat
/// a side are swallowed before they can reach the judge, releases go through
/// untouched.
pub struct InputGate {
    gate: GateSchedule,
    rule: AlternateRule,
    tally: SessionTally,
}

impl InputGate {
    pub fn new(gate: GateSchedule) -> Self {
        Self {
            gate,
            rule: AlternateRule::new(),
            tally: SessionTally::default(),
        }
    }

    /// Once per rendered frame. Inside a suspended period the rule's memory
    /// is cleared whether or not any input arrived this frame.
    pub fn on_frame(&mut self, now_ms: f32) {
        if self.gate.is_suspended(now_ms) {
            self.rule.reset();
        }
    }

    pub fn on_edge(&mut self, edge: InputEdge, now_ms: f32, notes: &AliveNotes) -> Verdict {
        if !edge.pressed {
            self.tally.record_release();
            return Verdict::Pass;
        }

        let passed = self.rule.evaluate(edge.action, now_ms, notes, &self.gate);
        self.tally.record_press(edge.action.side(), passed);

        if passed {
            Verdict::Pass
        } else {
            debug!(
                "blocked {:?} at {:.0}ms, last accepted side {:?}",
                edge.action,
                now_ms,
                self.rule.last_side()
            );
            Verdict::Blocked
        }
    }

    pub fn tally(&self) -> &SessionTally {
        &self.tally
    }

    pub fn rule(&self) -> &AlternateRule {
        &self.rule
    }
}
