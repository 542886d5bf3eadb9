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

use crate::index::PickeeIndex;

/// One position of a schedule: either a pickee reference or an open slot.
///
/// Instead of using `Option<PickeeIndex>`, this type uses a sentinel encoding
/// to avoid the additional discriminant that `Option` typically introduces.
/// Schedules are cloned and compared in the innermost enumeration loops, so
/// keeping each entry to a single machine word improves cache locality and
/// reduces memory traffic.
///
/// Encoding:
/// - Values below [`SlotEntry::CAPACITY`] reference a concrete pickee.
/// - The maximal value is reserved as the open-slot sentinel.
///
/// The derived ordering doubles as the canonical schedule order: pickee
/// entries sort ascending by index and open entries sort after every pickee
/// entry. Permutation generation relies on this total order.
///
/// The sentinel imposes a capacity limit on the number of distinct pickees.
/// The limit is checked explicitly wherever entries are constructed; it is
/// never silently truncated.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotEntry(usize);

impl SlotEntry {
    const OPEN_SENTINEL: usize = usize::MAX;

    /// The maximum number of distinct pickees an instance may contain.
    /// Pickee indices must be strictly below this value.
    pub const CAPACITY: usize = Self::OPEN_SENTINEL;

    /// Creates an open (unassigned) slot entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rota_model::slot::SlotEntry;
    ///
    /// let entry = SlotEntry::open();
    /// assert!(entry.is_open());
    /// assert_eq!(entry.as_pickee(), None);
    /// ```
    #[inline]
    pub const fn open() -> Self {
        SlotEntry(Self::OPEN_SENTINEL)
    }

    /// Creates a slot entry referencing the given pickee.
    ///
    /// # Panics
    ///
    /// Panics if the pickee index collides with the open-slot sentinel.
    /// The loader rejects such instances long before any entry is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rota_model::slot::SlotEntry;
    /// # use rota_model::index::PickeeIndex;
    ///
    /// let entry = SlotEntry::pickee(PickeeIndex::new(3));
    /// assert!(entry.is_pickee());
    /// assert_eq!(entry.as_pickee(), Some(PickeeIndex::new(3)));
    /// ```
    #[inline]
    pub fn pickee(index: PickeeIndex) -> Self {
        assert!(
            index.get() < Self::CAPACITY,
            "called `SlotEntry::pickee` with an index that collides with the open-slot sentinel: {}",
            index.get()
        );

        SlotEntry(index.get())
    }

    /// Returns `true` if this entry is an open slot.
    #[inline]
    pub const fn is_open(self) -> bool {
        self.0 == Self::OPEN_SENTINEL
    }

    /// Returns `true` if this entry references a pickee.
    #[inline]
    pub const fn is_pickee(self) -> bool {
        !self.is_open()
    }

    /// Converts the entry into an optional pickee index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rota_model::slot::SlotEntry;
    /// # use rota_model::index::PickeeIndex;
    ///
    /// assert_eq!(SlotEntry::open().as_pickee(), None);
    /// assert_eq!(
    ///     SlotEntry::pickee(PickeeIndex::new(1)).as_pickee(),
    ///     Some(PickeeIndex::new(1))
    /// );
    /// ```
    #[inline]
    pub fn as_pickee(self) -> Option<PickeeIndex> {
        if self.is_open() {
            None
        } else {
            Some(PickeeIndex::new(self.0))
        }
    }
}

impl From<Option<PickeeIndex>> for SlotEntry {
    fn from(value: Option<PickeeIndex>) -> Self {
        match value {
            Some(index) => SlotEntry::pickee(index),
            None => SlotEntry::open(),
        }
    }
}

impl std::fmt::Debug for SlotEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_open() {
            write!(f, "Open")
        } else {
            write!(f, "Pickee({})", self.0)
        }
    }
}

impl std::fmt::Display for SlotEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
