//! Merge Intervals (LeetCode 56).
//!
//! Intervals are closed `[start, end]` with `start <= end`. Intervals that
//! overlap or touch (`[1, 4]` and `[4, 5]`) are merged. The result is sorted
//! by start and pairwise disjoint.

use crate::error::{Error, Result};
use crate::traits::{Problem, Variant};

pub type Interval = [i32; 2];

/// Sort by start, then extend the last merged interval or open a new one.
pub fn sort_and_sweep(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|iv| iv[0]);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for [start, end] in sorted {
        match merged.last_mut() {
            Some(last) if start <= last[1] => last[1] = last[1].max(end),
            _ => merged.push([start, end]),
        }
    }
    merged
}

/// Sort starts and ends independently.
///
/// A merged interval closes at `ends[i]` whenever the next start lies beyond
/// it; pairing the i-th start with the i-th end is valid because every
/// interval opened before that point has also closed.
pub fn split_endpoints(intervals: &[Interval]) -> Vec<Interval> {
    let mut starts: Vec<i32> = intervals.iter().map(|iv| iv[0]).collect();
    let mut ends: Vec<i32> = intervals.iter().map(|iv| iv[1]).collect();
    starts.sort_unstable();
    ends.sort_unstable();

    let mut merged = Vec::new();
    let mut open = 0;
    for i in 0..starts.len() {
        if i + 1 == starts.len() || starts[i + 1] > ends[i] {
            merged.push([starts[open], ends[i]]);
            open = i + 1;
        }
    }
    merged
}

/// Validating entry point: rejects intervals with `start > end`.
pub fn merge(intervals: &[Interval]) -> Result<Vec<Interval>> {
    if let Some(bad) = intervals.iter().find(|iv| iv[0] > iv[1]) {
        return Err(Error::invalid(
            MergeIntervals::SLUG,
            format!("interval [{}, {}] has start after end", bad[0], bad[1]),
        ));
    }
    Ok(sort_and_sweep(intervals))
}

pub struct MergeIntervals;

impl Problem for MergeIntervals {
    type Input = Vec<Interval>;
    type Output = Vec<Interval>;
    const ID: u32 = 56;
    const SLUG: &'static str = "merge-intervals";
    const TITLE: &'static str = "Merge Intervals";

    fn variants() -> Vec<Variant<Vec<Interval>, Vec<Interval>>> {
        vec![
            Variant::new("sort_and_sweep", |iv: &Vec<Interval>| sort_and_sweep(iv)),
            Variant::new("split_endpoints", |iv: &Vec<Interval>| split_endpoints(iv)),
        ]
    }

    fn demo_cases() -> Vec<Vec<Interval>> {
        vec![
            vec![[1, 3], [2, 6], [8, 10], [15, 18]],
            vec![[1, 4], [4, 5]],
            vec![[1, 4], [0, 4]],
            vec![[1, 4], [2, 3]],
            vec![],
        ]
    }
}
