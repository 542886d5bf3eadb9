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

use crate::{
    index::{PickerIndex, SlotIndex},
    problem::Problem,
    slot::SlotEntry,
};
use fixedbitset::FixedBitSet;

/// One picker's candidate assignment across all timeslot positions.
///
/// A schema of length $T$ holds the picker's picks plus $T - P$ open
/// entries; the multiset of entries is a permutation of the pick list
/// padded with open markers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DaySchema {
    entries: Vec<SlotEntry>,
}

impl DaySchema {
    /// Constructs a schema from its slot entries.
    #[inline]
    pub fn new(entries: Vec<SlotEntry>) -> Self {
        Self { entries }
    }

    /// Returns the number of slots in this schema.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry at the specified slot position.
    ///
    /// # Panics
    ///
    /// Panics if `slot_index` is not in `0..num_slots()`.
    #[inline]
    pub fn entry(&self, slot_index: SlotIndex) -> SlotEntry {
        let index = slot_index.get();
        debug_assert!(
            index < self.num_slots(),
            "called `DaySchema::entry` with slot index out of bounds: the len is {} but the index is {}",
            self.num_slots(),
            index
        );

        self.entries[index]
    }

    /// Returns a slice of all entries, in slot order.
    #[inline]
    pub fn entries(&self) -> &[SlotEntry] {
        &self.entries
    }

    /// Returns the number of entries that reference a pickee.
    #[inline]
    pub fn num_assigned(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_pickee()).count()
    }
}

/// One complete candidate assignment: one `DaySchema` per picker, in
/// picker order.
///
/// A day is structurally just the tuple of schemas; whether it is *valid*
/// (no pickee claimed twice in the same timeslot) is a separate question
/// answered by [`Day::has_double_booking`]. The enumeration engine only
/// ever emits valid days.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Day {
    schemas: Vec<DaySchema>,
}

impl Day {
    /// Constructs a day from one schema per picker.
    ///
    /// # Panics
    ///
    /// Panics if the schemas do not all have the same length.
    pub fn new(schemas: Vec<DaySchema>) -> Self {
        if let Some(first) = schemas.first() {
            assert!(
                schemas.iter().all(|s| s.num_slots() == first.num_slots()),
                "called Day::new with schemas of inconsistent lengths"
            );
        }

        Self { schemas }
    }

    /// Returns the number of pickers in this day.
    #[inline]
    pub fn num_pickers(&self) -> usize {
        self.schemas.len()
    }

    /// Returns the number of slots per schema, or zero for an empty day.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.schemas.first().map_or(0, DaySchema::num_slots)
    }

    /// Returns the schema for the specified picker.
    ///
    /// # Panics
    ///
    /// Panics if `picker_index` is not in `0..num_pickers()`.
    #[inline]
    pub fn schema(&self, picker_index: PickerIndex) -> &DaySchema {
        let index = picker_index.get();
        debug_assert!(
            index < self.num_pickers(),
            "called `Day::schema` with picker index out of bounds: the len is {} but the index is {}",
            self.num_pickers(),
            index
        );

        &self.schemas[index]
    }

    /// Returns a slice of all schemas, in picker order.
    #[inline]
    pub fn schemas(&self) -> &[DaySchema] {
        &self.schemas
    }

    /// Returns `true` if any timeslot position carries the same pickee in
    /// more than one schema. Open entries never count as a booking.
    ///
    /// `num_pickees` sizes the membership set; it must be at least the
    /// largest pickee index appearing in the day plus one.
    pub fn has_double_booking(&self, num_pickees: usize) -> bool {
        let mut claimed = FixedBitSet::with_capacity(num_pickees);

        for slot in 0..self.num_slots() {
            claimed.clear();
            for schema in &self.schemas {
                let Some(pickee) = schema.entries()[slot].as_pickee() else {
                    continue;
                };
                if claimed.contains(pickee.get()) {
                    return true;
                }
                claimed.insert(pickee.get());
            }
        }

        false
    }

    /// Returns a displayable table of this day resolved against the
    /// instance the day was enumerated from.
    #[inline]
    pub fn render<'a>(&'a self, problem: &'a Problem) -> DayDisplay<'a> {
        DayDisplay { day: self, problem }
    }
}

/// A `Display` adapter pairing a `Day` with its `Problem` so entries can be
/// rendered with entity names instead of raw indices.
#[derive(Clone, Copy, Debug)]
pub struct DayDisplay<'a> {
    day: &'a Day,
    problem: &'a Problem,
}

impl std::fmt::Display for DayDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.day.num_pickers() == 0 {
            return writeln!(f, "   (No pickers)");
        }

        write!(f, "   {:<12}", "Timeslot")?;
        for picker in self.problem.pickers() {
            write!(f, " | {:<12}", picker.name())?;
        }
        writeln!(f)?;

        write!(f, "   {:-<12}", "")?;
        for _ in 0..self.day.num_pickers() {
            write!(f, "-+-{:-<12}", "")?;
        }
        writeln!(f)?;

        for (slot, timeslot) in self.problem.timeslots().iter().enumerate() {
            write!(f, "   {:<12}", timeslot.name())?;
            for schema in self.day.schemas() {
                let cell = match schema.entries()[slot].as_pickee() {
                    Some(pickee) => self.problem.pickee(pickee).name(),
                    None => "-",
                };
                write!(f, " | {:<12}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::PickeeIndex;
    use crate::problem::ProblemBuilder;

    fn entry(i: usize) -> SlotEntry {
        SlotEntry::pickee(PickeeIndex::new(i))
    }

    fn schema(entries: Vec<SlotEntry>) -> DaySchema {
        DaySchema::new(entries)
    }

    #[test]
    fn test_schema_accessors() {
        let s = schema(vec![entry(1), SlotEntry::open(), entry(0)]);
        assert_eq!(s.num_slots(), 3);
        assert_eq!(s.num_assigned(), 2);
        assert_eq!(s.entry(SlotIndex::new(0)), entry(1));
        assert_eq!(s.entry(SlotIndex::new(1)), SlotEntry::open());
    }

    #[test]
    fn test_day_accessors() {
        let day = Day::new(vec![
            schema(vec![entry(0), SlotEntry::open()]),
            schema(vec![SlotEntry::open(), entry(1)]),
        ]);
        assert_eq!(day.num_pickers(), 2);
        assert_eq!(day.num_slots(), 2);
        assert_eq!(
            day.schema(PickerIndex::new(1)).entries(),
            &[SlotEntry::open(), entry(1)]
        );
    }

    #[test]
    #[should_panic(expected = "inconsistent lengths")]
    fn test_day_rejects_mismatched_schema_lengths() {
        let _ = Day::new(vec![
            schema(vec![entry(0)]),
            schema(vec![entry(1), SlotEntry::open()]),
        ]);
    }

    #[test]
    fn test_empty_day_is_valid() {
        let day = Day::new(Vec::new());
        assert_eq!(day.num_pickers(), 0);
        assert_eq!(day.num_slots(), 0);
        assert!(!day.has_double_booking(0));
    }

    #[test]
    fn test_double_booking_detected_per_slot() {
        // Both schemas claim pickee 0 in slot 0.
        let conflicting = Day::new(vec![
            schema(vec![entry(0), SlotEntry::open()]),
            schema(vec![entry(0), SlotEntry::open()]),
        ]);
        assert!(conflicting.has_double_booking(2));

        // Same pickee in different slots is fine.
        let disjoint = Day::new(vec![
            schema(vec![entry(0), SlotEntry::open()]),
            schema(vec![SlotEntry::open(), entry(0)]),
        ]);
        assert!(!disjoint.has_double_booking(2));
    }

    #[test]
    fn test_open_entries_never_conflict() {
        let day = Day::new(vec![
            schema(vec![SlotEntry::open(), SlotEntry::open()]),
            schema(vec![SlotEntry::open(), SlotEntry::open()]),
            schema(vec![SlotEntry::open(), SlotEntry::open()]),
        ]);
        assert!(!day.has_double_booking(1));
    }

    #[test]
    fn test_render_resolves_names() {
        let mut builder = ProblemBuilder::new();
        let alice = builder.add_pickee("Alice", "a@example.com");
        builder.add_timeslot("Morning");
        builder.add_timeslot("Evening");
        builder.add_picker("P1", "p1@example.com", vec![alice]);
        let problem = builder.build().expect("build failed");

        let day = Day::new(vec![schema(vec![entry(0), SlotEntry::open()])]);
        let rendered = format!("{}", day.render(&problem));

        assert!(rendered.contains("Timeslot"));
        assert!(rendered.contains("P1"));
        assert!(rendered.contains("Morning"));
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("-"));
    }
}
