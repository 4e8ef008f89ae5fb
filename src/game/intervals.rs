use std::cmp::Ordering;

/// Half-open span `[start, end)` on the song timeline, in milliseconds.
/// `start` may be `f32::NEG_INFINITY` for spans with no lower bound.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub start: f32,
    pub end: f32,
}

impl Interval {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline(always)]
    pub fn contains(&self, time_ms: f32) -> bool {
        self.start <= time_ms && time_ms < self.end
    }
}

/// A set of half-open intervals answering point-membership queries.
///
/// Input may be unsorted or overlapping; construction sorts and merges so
/// each query is a single binary search against disjoint spans.
#[derive(Clone, Debug, Default)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    pub fn new(mut intervals: Vec<Interval>) -> Self {
        // An empty or inverted span can never contain a point.
        intervals.retain(|iv| iv.start < iv.end);
        intervals.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));

        let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
        for iv in intervals {
            match merged.last_mut() {
                Some(last) if iv.start <= last.end => last.end = last.end.max(iv.end),
                _ => merged.push(iv),
            }
        }

        Self { intervals: merged }
    }

    pub fn contains(&self, time_ms: f32) -> bool {
        let idx = match self.intervals.binary_search_by(|iv| {
            iv.start
                .partial_cmp(&time_ms)
                .unwrap_or(Ordering::Less)
        }) {
            Ok(i) => i,
            Err(0) => return false,
            Err(i) => i - 1,
        };
        self.intervals[idx].contains(time_ms)
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}
