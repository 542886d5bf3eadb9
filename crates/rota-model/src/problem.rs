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
    complexity::Complexity,
    entity::{Pickee, Picker, Timeslot},
    index::{PickeeIndex, PickerIndex, SlotIndex},
    slot::SlotEntry,
};
use rustc_hash::FxHashSet;

/// The immutable problem instance: pickees, pickers with resolved pick
/// lists, and the ordered timeslot sequence.
///
/// A `Problem` is built once at load time and passed by reference into
/// permutation generation and enumeration. There is no ambient global
/// state; everything the engine needs travels through this value.
///
/// Invariants (enforced by `ProblemBuilder::build`):
/// - Every pick references an existing pickee.
/// - Picks within one picker are pairwise distinct.
/// - No picker has more picks than there are timeslots.
/// - The pickee count stays below the slot-entry sentinel capacity.
///
/// Construction:
/// - Use `ProblemBuilder` and call `ProblemBuilder::build` to obtain a
///   validated `Problem`.
#[derive(Clone, Debug)]
pub struct Problem {
    pickees: Vec<Pickee>,
    pickers: Vec<Picker>,
    timeslots: Vec<Timeslot>,
}

impl Problem {
    /// Returns the number of pickees in the instance.
    #[inline]
    pub fn num_pickees(&self) -> usize {
        self.pickees.len()
    }

    /// Returns the number of pickers in the instance.
    #[inline]
    pub fn num_pickers(&self) -> usize {
        self.pickers.len()
    }

    /// Returns the number of timeslots in the instance.
    #[inline]
    pub fn num_timeslots(&self) -> usize {
        self.timeslots.len()
    }

    /// Returns a slice of all pickees, in document order.
    #[inline]
    pub fn pickees(&self) -> &[Pickee] {
        &self.pickees
    }

    /// Returns a slice of all pickers, in document order.
    #[inline]
    pub fn pickers(&self) -> &[Picker] {
        &self.pickers
    }

    /// Returns a slice of all timeslots, in position order.
    #[inline]
    pub fn timeslots(&self) -> &[Timeslot] {
        &self.timeslots
    }

    /// Returns the pickee at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `pickee_index` is not in `0..num_pickees()`.
    #[inline]
    pub fn pickee(&self, pickee_index: PickeeIndex) -> &Pickee {
        let index = pickee_index.get();
        debug_assert!(
            index < self.num_pickees(),
            "called `Problem::pickee` with pickee index out of bounds: the len is {} but the index is {}",
            self.num_pickees(),
            index
        );

        &self.pickees[index]
    }

    /// Returns the picker at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `picker_index` is not in `0..num_pickers()`.
    #[inline]
    pub fn picker(&self, picker_index: PickerIndex) -> &Picker {
        let index = picker_index.get();
        debug_assert!(
            index < self.num_pickers(),
            "called `Problem::picker` with picker index out of bounds: the len is {} but the index is {}",
            self.num_pickers(),
            index
        );

        &self.pickers[index]
    }

    /// Returns the timeslot at the specified index.
    ///
    /// # Panics
    ///
    /// Panics if `slot_index` is not in `0..num_timeslots()`.
    #[inline]
    pub fn timeslot(&self, slot_index: SlotIndex) -> &Timeslot {
        let index = slot_index.get();
        debug_assert!(
            index < self.num_timeslots(),
            "called `Problem::timeslot` with slot index out of bounds: the len is {} but the index is {}",
            self.num_timeslots(),
            index
        );

        &self.timeslots[index]
    }

    /// Returns the projected size of this instance's combination space.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem(num_pickers: {}, num_pickees: {}, num_timeslots: {})",
            self.num_pickers(),
            self.num_pickees(),
            self.num_timeslots()
        )
    }
}

/// The error type for problem construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemBuildError {
    /// A picker has more picks than there are timeslots.
    TooManyPicks {
        /// The display name of the offending picker.
        picker: String,
        /// The number of picks that picker made.
        num_picks: usize,
        /// The number of timeslots in the instance.
        num_timeslots: usize,
    },
    /// A picker lists the same pickee twice.
    DuplicatePick {
        /// The display name of the offending picker.
        picker: String,
        /// The pickee that appears more than once.
        pick: PickeeIndex,
    },
    /// A pick references a pickee index outside the pickee table.
    UnknownPickee {
        /// The display name of the offending picker.
        picker: String,
        /// The out-of-range pickee index.
        pick: PickeeIndex,
    },
    /// The pickee count reached the slot-entry sentinel capacity.
    CapacityExceeded {
        /// The number of pickees in the instance.
        num_pickees: usize,
    },
}

impl std::fmt::Display for ProblemBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyPicks {
                picker,
                num_picks,
                num_timeslots,
            } => write!(
                f,
                "picker '{}' made {} picks but there are only {} timeslots",
                picker, num_picks, num_timeslots
            ),
            Self::DuplicatePick { picker, pick } => {
                write!(f, "picker '{}' lists {} more than once", picker, pick)
            }
            Self::UnknownPickee { picker, pick } => {
                write!(f, "picker '{}' references unknown {}", picker, pick)
            }
            Self::CapacityExceeded { num_pickees } => write!(
                f,
                "instance has {} pickees, exceeding the supported capacity of {}",
                num_pickees,
                SlotEntry::CAPACITY
            ),
        }
    }
}

impl std::error::Error for ProblemBuildError {}

/// A mutable builder that assembles and validates a `Problem`.
///
/// Entities are appended in document order and receive their dense index
/// from the insertion position. All structural validation happens in
/// `build`, so a successfully built `Problem` never needs re-checking.
#[derive(Clone, Debug, Default)]
pub struct ProblemBuilder {
    pickees: Vec<Pickee>,
    pickers: Vec<Picker>,
    timeslots: Vec<Timeslot>,
}

impl ProblemBuilder {
    /// Creates a new, empty `ProblemBuilder`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pickee and returns its index.
    #[inline]
    pub fn add_pickee(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> PickeeIndex {
        let index = PickeeIndex::new(self.pickees.len());
        self.pickees.push(Pickee::new(name, email));
        index
    }

    /// Appends a timeslot and returns its position index.
    #[inline]
    pub fn add_timeslot(&mut self, name: impl Into<String>) -> SlotIndex {
        let index = SlotIndex::new(self.timeslots.len());
        self.timeslots.push(Timeslot::new(name));
        index
    }

    /// Appends a picker with an already-resolved pick list and returns its
    /// index. Validation of the pick list happens in `build`.
    #[inline]
    pub fn add_picker(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        picks: Vec<PickeeIndex>,
    ) -> PickerIndex {
        let index = PickerIndex::new(self.pickers.len());
        self.pickers.push(Picker::new(name, email, picks));
        index
    }

    /// Validates the accumulated entities and builds the immutable
    /// `Problem`.
    pub fn build(self) -> Result<Problem, ProblemBuildError> {
        if self.pickees.len() >= SlotEntry::CAPACITY {
            return Err(ProblemBuildError::CapacityExceeded {
                num_pickees: self.pickees.len(),
            });
        }

        let num_timeslots = self.timeslots.len();
        let mut seen = FxHashSet::default();
        for picker in &self.pickers {
            if picker.num_picks() > num_timeslots {
                return Err(ProblemBuildError::TooManyPicks {
                    picker: picker.name().to_owned(),
                    num_picks: picker.num_picks(),
                    num_timeslots,
                });
            }

            seen.clear();
            for &pick in picker.picks() {
                if pick.get() >= self.pickees.len() {
                    return Err(ProblemBuildError::UnknownPickee {
                        picker: picker.name().to_owned(),
                        pick,
                    });
                }
                if !seen.insert(pick) {
                    return Err(ProblemBuildError::DuplicatePick {
                        picker: picker.name().to_owned(),
                        pick,
                    });
                }
            }
        }

        Ok(Problem {
            pickees: self.pickees,
            pickers: self.pickers,
            timeslots: self.timeslots,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_accessors() {
        let mut builder = ProblemBuilder::new();
        let alice = builder.add_pickee("Alice", "alice@example.com");
        let bob = builder.add_pickee("Bob", "bob@example.com");
        builder.add_timeslot("Morning");
        builder.add_timeslot("Evening");
        builder.add_picker("P1", "p1@example.com", vec![alice]);
        builder.add_picker("P2", "p2@example.com", vec![bob, alice]);

        let problem = builder.build().expect("build failed");
        assert_eq!(problem.num_pickees(), 2);
        assert_eq!(problem.num_pickers(), 2);
        assert_eq!(problem.num_timeslots(), 2);
        assert_eq!(problem.pickee(alice).name(), "Alice");
        assert_eq!(problem.picker(PickerIndex::new(1)).picks(), &[bob, alice]);
        assert_eq!(problem.timeslot(SlotIndex::new(0)).name(), "Morning");
    }

    #[test]
    fn test_too_many_picks_is_rejected() {
        let mut builder = ProblemBuilder::new();
        let alice = builder.add_pickee("Alice", "a@example.com");
        let bob = builder.add_pickee("Bob", "b@example.com");
        builder.add_timeslot("Only");
        builder.add_picker("P1", "p1@example.com", vec![alice, bob]);

        match builder.build() {
            Err(ProblemBuildError::TooManyPicks {
                picker,
                num_picks,
                num_timeslots,
            }) => {
                assert_eq!(picker, "P1");
                assert_eq!(num_picks, 2);
                assert_eq!(num_timeslots, 1);
            }
            other => panic!("expected TooManyPicks, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_pick_is_rejected() {
        let mut builder = ProblemBuilder::new();
        let alice = builder.add_pickee("Alice", "a@example.com");
        builder.add_timeslot("Morning");
        builder.add_timeslot("Evening");
        builder.add_picker("P1", "p1@example.com", vec![alice, alice]);

        match builder.build() {
            Err(ProblemBuildError::DuplicatePick { picker, pick }) => {
                assert_eq!(picker, "P1");
                assert_eq!(pick, alice);
            }
            other => panic!("expected DuplicatePick, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_pickee_is_rejected() {
        let mut builder = ProblemBuilder::new();
        builder.add_pickee("Alice", "a@example.com");
        builder.add_timeslot("Morning");
        builder.add_picker("P1", "p1@example.com", vec![PickeeIndex::new(7)]);

        match builder.build() {
            Err(ProblemBuildError::UnknownPickee { picker, pick }) => {
                assert_eq!(picker, "P1");
                assert_eq!(pick, PickeeIndex::new(7));
            }
            other => panic!("expected UnknownPickee, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_instance_builds() {
        let problem = ProblemBuilder::new().build().expect("build failed");
        assert_eq!(problem.num_pickees(), 0);
        assert_eq!(problem.num_pickers(), 0);
        assert_eq!(problem.num_timeslots(), 0);
    }

    #[test]
    fn test_display() {
        let mut builder = ProblemBuilder::new();
        builder.add_pickee("Alice", "a@example.com");
        builder.add_timeslot("Morning");
        let problem = builder.build().expect("build failed");
        assert_eq!(
            format!("{}", problem),
            "Problem(num_pickers: 0, num_pickees: 1, num_timeslots: 1)"
        );
    }
}
