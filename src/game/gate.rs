use crate::game::chart::ChartData;
use crate::game::intervals::{Interval, IntervalSet};
use crate::game::timing::HitWindows;

/// One millisecond; keeps a suspension span strictly before the earliest
/// valid hit moment of the note that ends it.
const BOUNDARY_EPSILON_MS: f32 = 1.0;

/// Precomputed schedule of the periods during which alternation is not
/// enforced: the lead-in before the first note becomes hittable, and each
/// break up to the point the first note after it becomes hittable.
#[derive(Clone, Debug, Default)]
pub struct GateSchedule {
    suspended: IntervalSet,
}

impl GateSchedule {
    pub fn from_chart(chart: &ChartData, windows: &HitWindows) -> Self {
        let mut periods = Vec::with_capacity(chart.breaks.len() + 1);

        if let Some(first) = chart.first_note() {
            periods.push(Interval::new(
                f32::NEG_INFINITY,
                windows.earliest_valid_ms(first) - BOUNDARY_EPSILON_MS,
            ));

            for b in &chart.breaks {
                // A break with nothing after it contributes no span: the
                // tail of the session stays enforced.
                if let Some(next) = chart.next_note_at_or_after(b.end_ms) {
                    periods.push(Interval::new(
                        b.start_ms,
                        windows.earliest_valid_ms(next) - BOUNDARY_EPSILON_MS,
                    ));
                }
            }
        }

        Self {
            suspended: IntervalSet::new(periods),
        }
    }

    /// Schedule that never suspends; the degraded mode when a chart was
    /// rejected at load.
    pub fn never() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn is_suspended(&self, time_ms: f32) -> bool {
        self.suspended.contains(time_ms)
    }
}
