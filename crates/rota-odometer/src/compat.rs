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

use rota_model::day::DaySchema;

/// Decides whether `candidate` can join a partially-built day without two
/// pickers claiming the same pickee in the same timeslot.
///
/// Returns `true` iff for every slot position, the candidate's entry is
/// either open or differs from every committed schema's entry at that
/// position. Open entries never conflict with anything, including other
/// open entries. Cost is O(committed × slots); pure, no allocation.
///
/// Committing pickers one by one with this predicate guarantees full
/// pairwise compatibility of the finished day by induction.
pub fn is_compatible(candidate: &DaySchema, committed: &[DaySchema]) -> bool {
    debug_assert!(
        committed
            .iter()
            .all(|schema| schema.num_slots() == candidate.num_slots()),
        "called `is_compatible` with schemas of inconsistent lengths"
    );

    for (slot, &entry) in candidate.entries().iter().enumerate() {
        if entry.is_open() {
            continue;
        }
        for schema in committed {
            if schema.entries()[slot] == entry {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_model::index::PickeeIndex;
    use rota_model::slot::SlotEntry;

    fn entry(i: usize) -> SlotEntry {
        SlotEntry::pickee(PickeeIndex::new(i))
    }

    fn schema(entries: Vec<SlotEntry>) -> DaySchema {
        DaySchema::new(entries)
    }

    #[test]
    fn test_empty_day_accepts_anything() {
        let candidate = schema(vec![entry(0), entry(1)]);
        assert!(is_compatible(&candidate, &[]));
    }

    #[test]
    fn test_same_pickee_same_slot_conflicts() {
        let committed = [schema(vec![entry(0), SlotEntry::open()])];
        let candidate = schema(vec![entry(0), SlotEntry::open()]);
        assert!(!is_compatible(&candidate, &committed));
    }

    #[test]
    fn test_same_pickee_different_slot_is_fine() {
        let committed = [schema(vec![entry(0), SlotEntry::open()])];
        let candidate = schema(vec![SlotEntry::open(), entry(0)]);
        assert!(is_compatible(&candidate, &committed));
    }

    #[test]
    fn test_open_never_conflicts_with_open_or_pickee() {
        let committed = [
            schema(vec![entry(0), SlotEntry::open()]),
            schema(vec![SlotEntry::open(), SlotEntry::open()]),
        ];
        let candidate = schema(vec![SlotEntry::open(), SlotEntry::open()]);
        assert!(is_compatible(&candidate, &committed));
    }

    #[test]
    fn test_conflict_against_any_committed_schema() {
        // The conflict sits in the *second* committed schema.
        let committed = [
            schema(vec![entry(0), SlotEntry::open()]),
            schema(vec![SlotEntry::open(), entry(1)]),
        ];
        let candidate = schema(vec![SlotEntry::open(), entry(1)]);
        assert!(!is_compatible(&candidate, &committed));
    }

    #[test]
    fn test_zero_slot_schemas_are_trivially_compatible() {
        let committed = [schema(Vec::new())];
        let candidate = schema(Vec::new());
        assert!(is_compatible(&candidate, &committed));
    }
}
