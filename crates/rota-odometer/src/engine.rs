// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The pruned product walk over per-picker schedule sets.
//!
//! For every index vector the odometer visits, pickers are committed in
//! order; each candidate schedule is tested against the schedules already
//! committed. A conflict at picker *j* abandons the day immediately — the
//! pickers after *j* are never touched — and advances the counter at level
//! *j*, which skips the whole conflicting prefix. Pruning changes how fast
//! the space is walked, not what comes out of it: the emitted set is
//! identical to filtering the full cartesian product, and the tests below
//! hold the engine to that against an independent brute-force reference.
//!
//! The walk is a tight synchronous loop with no suspension points and no
//! I/O. Monitors are polled once per outer iteration, so cancellation
//! (time limits, day limits, interrupts) takes effect between
//! combinations; a day is either emitted whole or not at all.

use crate::{compat::is_compatible, odometer::Odometer, permutation::PermutationSets};
use rota_model::{day::Day, index::PickerIndex};
use rota_search::{
    collector::DayCollector,
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    result::{EnumerationOutcome, TerminationReason},
    stats::EnumerationStatistics,
};

/// Walks the cartesian product of every picker's schedule set and emits
/// exactly the mutually-compatible complete days, in lexicographic order
/// of the index vector (picker 0 most significant).
///
/// The enumerator borrows the schedule sets; it holds no mutable state of
/// its own, so one instance can drive any number of runs.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleEnumerator<'a> {
    sets: &'a PermutationSets,
    first_index_range: Option<(usize, usize)>,
}

impl<'a> ScheduleEnumerator<'a> {
    /// Creates an enumerator over the full product space.
    #[inline]
    pub fn new(sets: &'a PermutationSets) -> Self {
        Self {
            sets,
            first_index_range: None,
        }
    }

    /// Creates an enumerator restricted to first-picker indices in
    /// `[start, end)`. Partitioning the first picker's range across
    /// independent enumerators walks disjoint slices whose concatenation,
    /// in slice order, equals the full walk.
    #[inline]
    pub fn with_first_index_range(sets: &'a PermutationSets, start: usize, end: usize) -> Self {
        Self {
            sets,
            first_index_range: Some((start, end)),
        }
    }

    fn odometer(&self) -> Odometer {
        let radixes = self.sets.sizes();
        match self.first_index_range {
            Some((start, end)) => Odometer::with_first_digit_range(radixes, start, end),
            None => Odometer::new(radixes),
        }
    }

    /// Runs the walk to completion (or early termination), handing every
    /// complete valid day to `collector` and lifecycle events to `monitor`.
    pub fn run<C, M>(&self, collector: &mut C, monitor: &mut M) -> EnumerationOutcome
    where
        C: DayCollector,
        M: SearchMonitor,
    {
        let start_time = std::time::Instant::now();
        let mut stats = EnumerationStatistics {
            used_threads: 1,
            ..EnumerationStatistics::default()
        };

        monitor.on_enter_search();

        let num_pickers = self.sets.num_pickers();
        let mut odometer = self.odometer();
        let mut committed = Vec::with_capacity(num_pickers);

        let reason = loop {
            if odometer.is_finished() {
                break TerminationReason::Exhausted;
            }

            monitor.on_step();
            if let SearchCommand::Terminate(msg) = monitor.search_command() {
                break TerminationReason::Aborted(msg);
            }

            stats.on_combination();

            // Commit pickers in order against the day built so far.
            let mut conflict_level = None;
            for (picker, &schedule) in odometer.digits().iter().enumerate() {
                let candidate = &self.sets.set(PickerIndex::new(picker))[schedule];
                if is_compatible(candidate, &committed) {
                    committed.push(candidate.clone());
                } else {
                    conflict_level = Some(picker);
                    break;
                }
            }

            match conflict_level {
                None => {
                    let day = Day::new(std::mem::take(&mut committed));
                    committed = Vec::with_capacity(num_pickers);

                    stats.on_day();
                    monitor.on_day_found(&day);
                    collector.collect(day);

                    odometer.advance();
                }
                Some(level) => {
                    committed.clear();
                    stats.on_prune();
                    odometer.advance_from(level);
                }
            }
        };

        monitor.on_exit_search();
        stats.elapsed = start_time.elapsed();

        if let TerminationReason::Aborted(msg) = &reason {
            tracing::debug!(reason = msg.as_str(), "enumeration stopped early");
        }

        EnumerationOutcome::new(reason, stats)
    }

    /// Returns a lazy iterator over the valid days, in the same order the
    /// monitored run emits them. Nothing is materialized up front; each
    /// `next` walks the odometer until the next valid day.
    #[inline]
    pub fn days(&self) -> ValidDays<'a> {
        ValidDays {
            sets: self.sets,
            odometer: self.odometer(),
        }
    }
}

/// A lazy iterator over the valid days of a product space.
#[derive(Debug, Clone)]
pub struct ValidDays<'a> {
    sets: &'a PermutationSets,
    odometer: Odometer,
}

impl Iterator for ValidDays<'_> {
    type Item = Day;

    fn next(&mut self) -> Option<Self::Item> {
        let num_pickers = self.sets.num_pickers();

        while !self.odometer.is_finished() {
            let mut committed = Vec::with_capacity(num_pickers);
            let mut conflict_level = None;

            for (picker, &schedule) in self.odometer.digits().iter().enumerate() {
                let candidate = &self.sets.set(PickerIndex::new(picker))[schedule];
                if is_compatible(candidate, &committed) {
                    committed.push(candidate.clone());
                } else {
                    conflict_level = Some(picker);
                    break;
                }
            }

            match conflict_level {
                None => {
                    self.odometer.advance();
                    return Some(Day::new(committed));
                }
                Some(level) => {
                    self.odometer.advance_from(level);
                }
            }
        }

        None
    }
}

impl std::iter::FusedIterator for ValidDays<'_> {}
