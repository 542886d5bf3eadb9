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

use rota_model::{complexity::Complexity, day::Day, index::PickerIndex, problem::Problem};
use rota_odometer::{engine::ScheduleEnumerator, permutation::PermutationSets};
use rota_search::{
    collector::VecCollector,
    monitor::{
        composite::CompositeMonitor, day_limit::DayLimitMonitor, interrupt::InterruptMonitor,
        time_limit::TimeLimitMonitor,
    },
    result::{EnumerationOutcome, TerminationReason},
    stats::EnumerationStatistics,
};
use std::sync::atomic::{AtomicBool, AtomicU64};

/// The default ceiling on the projected combination count. Instances that
/// project beyond this are refused unless the caller raises or disables
/// the ceiling.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 1_000_000;

/// The error type for a refused solve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// The projected combination count exceeds the configured ceiling.
    /// Enumerating anyway would attempt effectively unbounded work.
    SearchSpaceTooLarge {
        /// The projected combination count of the instance.
        projected: Complexity,
        /// The configured ceiling.
        ceiling: u64,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SearchSpaceTooLarge { projected, ceiling } => write!(
                f,
                "projected combination count {} exceeds the ceiling of {}; \
                 raise or disable the ceiling to enumerate anyway",
                projected, ceiling
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// The result of a completed solve: the collected days, why the run
/// stopped, and the statistics gathered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOutcome {
    days: Vec<Day>,
    reason: TerminationReason,
    statistics: EnumerationStatistics,
}

impl SolverOutcome {
    /// Returns the collected days, in enumeration order.
    #[inline]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Consumes the outcome and returns the collected days.
    #[inline]
    pub fn into_days(self) -> Vec<Day> {
        self.days
    }

    /// Returns the number of collected days.
    #[inline]
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// Returns why the run stopped.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// Returns the statistics gathered during the run.
    #[inline]
    pub fn statistics(&self) -> &EnumerationStatistics {
        &self.statistics
    }

    /// Returns `true` if the collected days are the complete set of valid
    /// assignments (the space was exhausted rather than aborted).
    #[inline]
    pub fn is_exhaustive(&self) -> bool {
        matches!(self.reason, TerminationReason::Exhausted)
    }
}

impl std::fmt::Display for SolverOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SolverOutcome({} days, {})",
            self.days.len(),
            self.reason
        )
    }
}

/// Orchestrates one enumeration run end to end.
///
/// Build with `SolverBuilder`. A `Solver` holds configuration only; it can
/// run any number of instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    day_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    max_combinations: Option<u64>,
    num_threads: usize,
}

impl Default for Solver {
    fn default() -> Self {
        SolverBuilder::new().build()
    }
}

impl Solver {
    /// Returns the configured day limit, if any.
    #[inline]
    pub fn day_limit(&self) -> Option<u64> {
        self.day_limit
    }

    /// Returns the configured time limit, if any.
    #[inline]
    pub fn time_limit(&self) -> Option<std::time::Duration> {
        self.time_limit
    }

    /// Returns the configured combination-count ceiling, if any.
    #[inline]
    pub fn max_combinations(&self) -> Option<u64> {
        self.max_combinations
    }

    /// Returns the configured number of worker threads.
    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Enumerates every valid day of the instance, subject to the
    /// configured limits.
    pub fn solve(&self, problem: &Problem) -> Result<SolverOutcome, SolveError> {
        let stop_flag = AtomicBool::new(false);
        self.solve_with_interrupt(problem, &stop_flag)
    }

    /// Enumerates every valid day of the instance, additionally observing
    /// an external stop flag. Setting the flag stops the run cooperatively;
    /// the days collected so far are returned with an aborted reason.
    pub fn solve_with_interrupt(
        &self,
        problem: &Problem,
        stop_flag: &AtomicBool,
    ) -> Result<SolverOutcome, SolveError> {
        let start_time = std::time::Instant::now();

        let projected = problem.complexity();
        if let Some(ceiling) = self.max_combinations {
            if projected.exceeds(ceiling) {
                return Err(SolveError::SearchSpaceTooLarge { projected, ceiling });
            }
        }

        tracing::info!(%problem, projected = %projected, "starting enumeration");
        let sets = PermutationSets::generate(problem);

        let days_found = AtomicU64::new(0);
        let num_workers = self.plan_workers(&sets);

        let (days, reason, mut statistics) = if num_workers <= 1 {
            self.run_sequential(&sets, stop_flag, &days_found)
        } else {
            self.run_partitioned(&sets, stop_flag, &days_found, num_workers)
        };

        statistics.used_threads = num_workers.max(1);
        statistics.elapsed = start_time.elapsed();

        tracing::info!(
            days = days.len(),
            reason = %reason,
            elapsed_ms = statistics.elapsed.as_millis() as u64,
            "enumeration finished"
        );

        Ok(SolverOutcome {
            days,
            reason,
            statistics,
        })
    }

    /// Picks the worker count: never more threads than first-picker
    /// schedules, and a picker-less instance runs sequentially.
    fn plan_workers(&self, sets: &PermutationSets) -> usize {
        if sets.num_pickers() == 0 {
            return 1;
        }
        self.num_threads
            .min(sets.set(PickerIndex::new(0)).len())
            .max(1)
    }

    /// Assembles the monitor stack shared by every worker.
    fn build_monitor<'a>(
        &self,
        stop_flag: &'a AtomicBool,
        days_found: &'a AtomicU64,
    ) -> CompositeMonitor<'a> {
        let mut monitor = CompositeMonitor::with_capacity(3);
        monitor.add_monitor(InterruptMonitor::new(stop_flag));
        monitor.add_monitor(DayLimitMonitor::new(days_found, self.day_limit));
        if let Some(limit) = self.time_limit {
            monitor.add_monitor(TimeLimitMonitor::new(limit));
        }
        monitor
    }

    fn run_sequential(
        &self,
        sets: &PermutationSets,
        stop_flag: &AtomicBool,
        days_found: &AtomicU64,
    ) -> (Vec<Day>, TerminationReason, EnumerationStatistics) {
        let mut monitor = self.build_monitor(stop_flag, days_found);
        let mut collector = VecCollector::new();
        let outcome = ScheduleEnumerator::new(sets).run(&mut collector, &mut monitor);

        let (reason, statistics) = split_outcome(outcome);
        (collector.into_days(), reason, statistics)
    }

    /// Partitions the first picker's index range into contiguous slices and
    /// runs one independent sequential enumerator per slice. Workers share
    /// nothing mutable but the stop flag and the day counter; each owns its
    /// collector, and the buffers are merged append-only in slice order, so
    /// an exhausted partitioned run produces exactly the sequential output.
    fn run_partitioned(
        &self,
        sets: &PermutationSets,
        stop_flag: &AtomicBool,
        days_found: &AtomicU64,
        num_workers: usize,
    ) -> (Vec<Day>, TerminationReason, EnumerationStatistics) {
        let first_size = sets.set(PickerIndex::new(0)).len();
        let chunk = first_size.div_ceil(num_workers);

        let mut worker_results = Vec::with_capacity(num_workers);
        std::thread::scope(|scope| {
            let mut handles = Vec::with_capacity(num_workers);

            for worker in 0..num_workers {
                let start = worker * chunk;
                let end = ((worker + 1) * chunk).min(first_size);

                let handle = scope.spawn(move || {
                    let mut monitor = self.build_monitor(stop_flag, days_found);
                    let mut collector = VecCollector::new();
                    let enumerator = ScheduleEnumerator::with_first_index_range(sets, start, end);
                    let outcome = enumerator.run(&mut collector, &mut monitor);
                    (collector, outcome)
                });
                handles.push(handle);
            }

            for handle in handles {
                worker_results.push(handle.join().expect("enumeration worker panicked"));
            }
        });

        let mut days = Vec::new();
        let mut statistics = EnumerationStatistics::default();
        let mut abort_reason: Option<String> = None;

        for (collector, outcome) in worker_results {
            days.extend(collector.into_days());
            statistics.absorb(outcome.statistics());
            if abort_reason.is_none() {
                if let TerminationReason::Aborted(msg) = outcome.reason() {
                    abort_reason = Some(msg.clone());
                }
            }
        }

        let reason = match abort_reason {
            Some(msg) => TerminationReason::Aborted(msg),
            None => TerminationReason::Exhausted,
        };

        (days, reason, statistics)
    }
}

fn split_outcome(outcome: EnumerationOutcome) -> (TerminationReason, EnumerationStatistics) {
    let statistics = outcome.statistics().clone();
    let reason = outcome.reason().clone();
    (reason, statistics)
}

/// Builder for `Solver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverBuilder {
    day_limit: Option<u64>,
    time_limit: Option<std::time::Duration>,
    max_combinations: Option<u64>,
    num_threads: usize,
}

impl Default for SolverBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBuilder {
    /// Creates a builder with the default configuration: no day or time
    /// limit, the default combination ceiling, one thread.
    #[inline]
    pub fn new() -> Self {
        Self {
            day_limit: None,
            time_limit: None,
            max_combinations: Some(DEFAULT_MAX_COMBINATIONS),
            num_threads: 1,
        }
    }

    /// Stops the run after the given number of valid days.
    #[inline]
    pub fn with_day_limit(mut self, limit: u64) -> Self {
        self.day_limit = Some(limit);
        self
    }

    /// Stops the run after the given wall-clock budget.
    #[inline]
    pub fn with_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Refuses instances whose projected combination count exceeds the
    /// given ceiling.
    #[inline]
    pub fn with_max_combinations(mut self, ceiling: u64) -> Self {
        self.max_combinations = Some(ceiling);
        self
    }

    /// Disables the combination-count ceiling entirely.
    #[inline]
    pub fn without_combination_ceiling(mut self) -> Self {
        self.max_combinations = None;
        self
    }

    /// Partitions the first picker's index range across the given number
    /// of worker threads. One thread means plain sequential enumeration.
    #[inline]
    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    /// Builds the configured `Solver`.
    #[inline]
    pub fn build(self) -> Solver {
        Solver {
            day_limit: self.day_limit,
            time_limit: self.time_limit,
            max_combinations: self.max_combinations,
            num_threads: self.num_threads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_model::problem::ProblemBuilder;
    use std::sync::atomic::Ordering;

    /// Two timeslots, two pickees; pickers' picks configurable by index.
    fn instance(picker_picks: &[&[usize]]) -> Problem {
        let mut builder = ProblemBuilder::new();
        let alice = builder.add_pickee("Alice", "alice@example.com");
        let bob = builder.add_pickee("Bob", "bob@example.com");
        let pickees = [alice, bob];
        builder.add_timeslot("Morning");
        builder.add_timeslot("Evening");
        for (i, picks) in picker_picks.iter().enumerate() {
            builder.add_picker(
                format!("P{}", i + 1),
                format!("p{}@example.com", i + 1),
                picks.iter().map(|&p| pickees[p]).collect(),
            );
        }
        builder.build().expect("fixture must be valid")
    }

    #[test]
    fn test_disjoint_picks_yield_all_four_days() {
        let problem = instance(&[&[0], &[1]]);
        let outcome = SolverBuilder::new()
            .build()
            .solve(&problem)
            .expect("solve failed");

        assert!(outcome.is_exhaustive());
        assert_eq!(outcome.num_days(), 4);
        assert_eq!(outcome.statistics().days_found, 4);
    }

    #[test]
    fn test_contested_pick_yields_two_days() {
        let problem = instance(&[&[0], &[0]]);
        let outcome = SolverBuilder::new()
            .build()
            .solve(&problem)
            .expect("solve failed");

        assert!(outcome.is_exhaustive());
        assert_eq!(outcome.num_days(), 2);
        for day in outcome.days() {
            assert!(!day.has_double_booking(problem.num_pickees()));
        }
    }

    #[test]
    fn test_parallel_run_matches_sequential_output() {
        let problem = instance(&[&[0, 1], &[0], &[1]]);

        let sequential = SolverBuilder::new()
            .build()
            .solve(&problem)
            .expect("sequential solve failed");
        let parallel = SolverBuilder::new()
            .with_threads(3)
            .build()
            .solve(&problem)
            .expect("parallel solve failed");

        assert!(parallel.is_exhaustive());
        assert_eq!(parallel.days(), sequential.days());
        assert_eq!(
            parallel.statistics().days_found,
            sequential.statistics().days_found
        );
        assert!(parallel.statistics().used_threads > 1);
    }

    #[test]
    fn test_more_threads_than_first_set_is_capped() {
        let problem = instance(&[&[0], &[1]]);
        let outcome = SolverBuilder::new()
            .with_threads(64)
            .build()
            .solve(&problem)
            .expect("solve failed");

        // First picker has only two schedules, so only two workers run.
        assert_eq!(outcome.statistics().used_threads, 2);
        assert_eq!(outcome.num_days(), 4);
    }

    #[test]
    fn test_day_limit_stops_sequential_run_exactly() {
        let problem = instance(&[&[0], &[1]]);
        let outcome = SolverBuilder::new()
            .with_day_limit(2)
            .build()
            .solve(&problem)
            .expect("solve failed");

        assert!(!outcome.is_exhaustive());
        assert_eq!(outcome.num_days(), 2);
    }

    #[test]
    fn test_ceiling_refuses_oversized_instances() {
        let problem = instance(&[&[0], &[0]]); // 4 projected combinations
        let result = SolverBuilder::new()
            .with_max_combinations(3)
            .build()
            .solve(&problem);

        match result {
            Err(SolveError::SearchSpaceTooLarge { ceiling, projected }) => {
                assert_eq!(ceiling, 3);
                assert_eq!(projected.exact(), Some(4));
            }
            other => panic!("expected SearchSpaceTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_ceiling_accepts_anything_projectable() {
        let problem = instance(&[&[0], &[0]]);
        let outcome = SolverBuilder::new()
            .without_combination_ceiling()
            .build()
            .solve(&problem)
            .expect("solve failed");
        assert_eq!(outcome.num_days(), 2);
    }

    #[test]
    fn test_interrupt_flag_stops_run_before_start() {
        let problem = instance(&[&[0], &[1]]);
        let stop_flag = AtomicBool::new(false);
        stop_flag.store(true, Ordering::Relaxed);

        let outcome = SolverBuilder::new()
            .build()
            .solve_with_interrupt(&problem, &stop_flag)
            .expect("solve failed");

        assert!(!outcome.is_exhaustive());
        assert_eq!(outcome.num_days(), 0);
    }

    #[test]
    fn test_pickerless_instance_yields_one_empty_day() {
        let problem = instance(&[]);
        let outcome = SolverBuilder::new()
            .build()
            .solve(&problem)
            .expect("solve failed");

        assert!(outcome.is_exhaustive());
        assert_eq!(outcome.num_days(), 1);
        assert_eq!(outcome.days()[0].num_pickers(), 0);
    }

    #[test]
    fn test_solve_is_deterministic_across_runs() {
        let problem = instance(&[&[0, 1], &[1]]);
        let solver = SolverBuilder::new().build();

        let first = solver.solve(&problem).expect("first solve failed");
        let second = solver.solve(&problem).expect("second solve failed");
        assert_eq!(first.days(), second.days());
    }
}
