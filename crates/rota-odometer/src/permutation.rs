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

//! Per-picker schedule generation.
//!
//! A picker with picks $p_1..p_P$ over $T$ timeslots admits every schedule
//! whose multiset of entries is the pick list plus $T - P$ open markers.
//! Generation starts from the canonical sorted arrangement (picks ascending
//! by index, open markers last) and repeatedly takes the lexicographic next
//! arrangement until the array wraps back to sorted order.
//!
//! The open markers are duplicates of one another, and the next-arrangement
//! step treats equal elements as interchangeable, so each *distinct*
//! schedule is visited exactly once. Generating raw permutations of $T$
//! positions instead would overcount every schedule $(T-P)!$ times.

use rota_model::{
    day::DaySchema,
    index::{PickeeIndex, PickerIndex},
    problem::Problem,
    slot::SlotEntry,
};

/// Rearranges `entries` into the lexicographically next arrangement.
///
/// Returns `true` if a next arrangement exists; returns `false` after
/// wrapping the slice back to its sorted (first) arrangement. Equal
/// elements are treated as indistinguishable, so repeated application from
/// the sorted order enumerates each distinct arrangement exactly once.
pub fn next_arrangement(entries: &mut [SlotEntry]) -> bool {
    if entries.len() < 2 {
        return false;
    }

    // Find the longest non-increasing suffix; the element before it is the
    // pivot to bump.
    let mut i = entries.len() - 1;
    while i > 0 && entries[i - 1] >= entries[i] {
        i -= 1;
    }

    if i == 0 {
        // Whole slice is non-increasing: this was the last arrangement.
        entries.reverse();
        return false;
    }

    // Find the rightmost element strictly greater than the pivot.
    let mut j = entries.len() - 1;
    while entries[j] <= entries[i - 1] {
        j -= 1;
    }

    entries.swap(i - 1, j);
    entries[i..].reverse();
    true
}

/// Generates the full ordered set of distinct schedules for one picker.
///
/// The first schedule is the canonical sorted arrangement; subsequent
/// schedules follow in lexicographic order. The result has exactly
/// $T!/(T-P)!$ members.
pub fn schedules_for_picker(picks: &[PickeeIndex], num_slots: usize) -> Vec<DaySchema> {
    debug_assert!(
        picks.len() <= num_slots,
        "called `schedules_for_picker` with more picks than slots: {} picks, {} slots",
        picks.len(),
        num_slots
    );

    let mut arrangement: Vec<SlotEntry> = picks
        .iter()
        .map(|&pick| SlotEntry::pickee(pick))
        .collect();
    arrangement.resize(num_slots, SlotEntry::open());
    arrangement.sort_unstable();

    let mut schedules = Vec::new();
    loop {
        schedules.push(DaySchema::new(arrangement.clone()));
        if !next_arrangement(&mut arrangement) {
            break;
        }
    }

    schedules
}

/// The per-picker schedule sets an enumeration run walks.
///
/// Sets are generated eagerly, once per run, and held read-only afterwards.
/// Memory is bounded by each picker's own factorial, never by the product
/// across pickers; the product space is only ever *walked*, via the
/// odometer, not materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationSets {
    sets: Vec<Vec<DaySchema>>,
}

impl PermutationSets {
    /// Generates the schedule set of every picker in the instance.
    pub fn generate(problem: &Problem) -> Self {
        let num_slots = problem.num_timeslots();
        let mut sets = Vec::with_capacity(problem.num_pickers());
        let mut total = 0u64;

        for picker in problem.pickers() {
            let schedules = schedules_for_picker(picker.picks(), num_slots);
            total += schedules.len() as u64;
            tracing::debug!(
                picker = picker.name(),
                num_schedules = schedules.len(),
                "generated schedule set"
            );
            sets.push(schedules);
        }

        tracing::debug!(total_schedules = total, "schedule generation finished");
        PermutationSets { sets }
    }

    /// Returns the number of pickers (one schedule set each).
    #[inline]
    pub fn num_pickers(&self) -> usize {
        self.sets.len()
    }

    /// Returns the ordered schedule set of the specified picker.
    ///
    /// # Panics
    ///
    /// Panics if `picker_index` is not in `0..num_pickers()`.
    #[inline]
    pub fn set(&self, picker_index: PickerIndex) -> &[DaySchema] {
        let index = picker_index.get();
        debug_assert!(
            index < self.num_pickers(),
            "called `PermutationSets::set` with picker index out of bounds: the len is {} but the index is {}",
            self.num_pickers(),
            index
        );

        &self.sets[index]
    }

    /// Returns the size of every picker's schedule set, in picker order.
    /// These are the radixes the odometer counts in.
    #[inline]
    pub fn sizes(&self) -> Vec<usize> {
        self.sets.iter().map(Vec::len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_model::index::PickeeIndex;
    use rota_model::problem::ProblemBuilder;
    use std::collections::HashSet;

    fn picks(indices: &[usize]) -> Vec<PickeeIndex> {
        indices.iter().map(|&i| PickeeIndex::new(i)).collect()
    }

    /// T!/(T-P)! without bignum acrobatics; fine for test-sized inputs.
    fn falling_factorial(t: usize, p: usize) -> usize {
        (0..p).map(|k| t - k).product::<usize>().max(1)
    }

    #[test]
    fn test_cardinality_matches_falling_factorial() {
        for (p, t) in [(0usize, 0usize), (0, 3), (1, 1), (1, 3), (2, 2), (2, 4), (3, 3), (3, 5)] {
            let schedules = schedules_for_picker(&picks(&(0..p).collect::<Vec<_>>()), t);
            assert_eq!(
                schedules.len(),
                falling_factorial(t, p),
                "wrong cardinality for P={p}, T={t}"
            );
        }
    }

    #[test]
    fn test_schedules_are_pairwise_distinct() {
        let schedules = schedules_for_picker(&picks(&[0, 1]), 4);
        let unique: HashSet<_> = schedules.iter().collect();
        assert_eq!(unique.len(), schedules.len());
    }

    #[test]
    fn test_open_padding_is_not_overcounted() {
        // One pick over three slots: 3 placements, not 3! = 6.
        let schedules = schedules_for_picker(&picks(&[0]), 3);
        assert_eq!(schedules.len(), 3);
    }

    #[test]
    fn test_zero_picks_yield_single_all_open_schedule() {
        let schedules = schedules_for_picker(&[], 3);
        assert_eq!(schedules.len(), 1);
        assert!(schedules[0].entries().iter().all(|entry| entry.is_open()));
    }

    #[test]
    fn test_zero_timeslots_yield_single_empty_schedule() {
        let schedules = schedules_for_picker(&[], 0);
        assert_eq!(schedules.len(), 1);
        assert_eq!(schedules[0].num_slots(), 0);
    }

    #[test]
    fn test_first_schedule_is_sorted_and_order_is_lexicographic() {
        let schedules = schedules_for_picker(&picks(&[1, 0]), 3);

        // First arrangement is the canonical sorted one, regardless of the
        // order the picker listed its picks in.
        let first: Vec<_> = schedules[0].entries().to_vec();
        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(first, sorted);

        // Subsequent arrangements are strictly increasing.
        for window in schedules.windows(2) {
            assert!(window[0].entries() < window[1].entries());
        }
    }

    #[test]
    fn test_scenario_single_pick_two_slots() {
        // Picker with one pick over [Morning, Evening]:
        // exactly {[pick, open], [open, pick]} in that order.
        let schedules = schedules_for_picker(&picks(&[0]), 2);
        assert_eq!(schedules.len(), 2);
        assert_eq!(
            schedules[0].entries(),
            &[SlotEntry::pickee(PickeeIndex::new(0)), SlotEntry::open()]
        );
        assert_eq!(
            schedules[1].entries(),
            &[SlotEntry::open(), SlotEntry::pickee(PickeeIndex::new(0))]
        );
    }

    #[test]
    fn test_next_arrangement_wraps_to_sorted() {
        let mut entries = vec![
            SlotEntry::pickee(PickeeIndex::new(0)),
            SlotEntry::pickee(PickeeIndex::new(1)),
        ];
        let sorted = entries.clone();

        assert!(next_arrangement(&mut entries)); // [1, 0]
        assert!(!next_arrangement(&mut entries)); // wrapped
        assert_eq!(entries, sorted);
    }

    #[test]
    fn test_permutation_sets_generate() {
        let mut builder = ProblemBuilder::new();
        let alice = builder.add_pickee("Alice", "a@example.com");
        let bob = builder.add_pickee("Bob", "b@example.com");
        builder.add_timeslot("Morning");
        builder.add_timeslot("Evening");
        builder.add_picker("P1", "p1@example.com", vec![alice]);
        builder.add_picker("P2", "p2@example.com", vec![alice, bob]);
        let problem = builder.build().expect("build failed");

        let sets = PermutationSets::generate(&problem);
        assert_eq!(sets.num_pickers(), 2);
        assert_eq!(sets.set(PickerIndex::new(0)).len(), 2);
        assert_eq!(sets.set(PickerIndex::new(1)).len(), 2);
        assert_eq!(sets.sizes(), vec![2, 2]);
    }
}
