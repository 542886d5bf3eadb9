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

//! Mixed-radix counting over per-picker schedule indices.
//!
//! The counter holds one digit per picker, digit 0 most significant, each
//! digit ranging over that picker's schedule-set size. `advance` is the
//! ordinary rightmost increment with leftward carry. `advance_from` zeroes
//! every digit right of a level and carries at that level; it is the
//! mechanism behind conflict pruning — once a prefix of committed pickers
//! conflicts, every combination sharing that prefix is skipped in one step
//! without ever visiting it.
//!
//! Digit 0 may be restricted to a subrange so independent workers can walk
//! disjoint slices of the product space.

/// A mixed-radix counter over the cartesian product of schedule indices.
///
/// A counter with zero digits represents the product of zero sets, which
/// has exactly one (empty) element: it starts unfinished and finishes on
/// the first advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer {
    digits: Vec<usize>,
    radixes: Vec<usize>,
    /// Exclusive upper bound for digit 0; `radixes[0]` unless restricted.
    first_digit_end: usize,
    finished: bool,
}

impl Odometer {
    /// Creates a counter over the full product space of the given radixes.
    pub fn new(radixes: Vec<usize>) -> Self {
        let end = radixes.first().copied().unwrap_or(1);
        Self::with_first_digit_range(radixes, 0, end)
    }

    /// Creates a counter whose first digit ranges over `[start, end)`,
    /// walking only that slice of the product space.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the range is not within the first radix.
    pub fn with_first_digit_range(radixes: Vec<usize>, start: usize, end: usize) -> Self {
        debug_assert!(
            start <= end,
            "called `Odometer::with_first_digit_range` with start {} beyond end {}",
            start,
            end
        );
        debug_assert!(
            radixes.is_empty() || end <= radixes[0],
            "called `Odometer::with_first_digit_range` with end {} beyond the first radix {}",
            end,
            radixes[0]
        );

        let mut digits = vec![0; radixes.len()];
        // An empty slice, or any radix of zero, makes the product empty.
        let finished = (!radixes.is_empty() && start >= end) || radixes.iter().any(|&r| r == 0);
        if let Some(first) = digits.first_mut() {
            *first = start;
        }

        Self {
            digits,
            radixes,
            first_digit_end: end,
            finished,
        }
    }

    /// Returns the current index vector.
    #[inline]
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Returns the number of digits (one per picker).
    #[inline]
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` once the counter has stepped past its last value.
    /// The current digits are only meaningful while this is `false`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Steps to the next index vector: increment the last digit, carrying
    /// leftward. Returns `false` when the counter overflows past its final
    /// value.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.digits.is_empty() {
            self.finished = true;
            return false;
        }
        self.advance_from(self.digits.len() - 1)
    }

    /// Zeroes every digit right of `level` and carries at `level`,
    /// skipping all combinations that share the current prefix through
    /// `level`. Returns `false` when the counter overflows.
    ///
    /// `advance_from(num_digits - 1)` is exactly `advance`, so the pruned
    /// walk visits the surviving index vectors in the same order the plain
    /// counter would.
    pub fn advance_from(&mut self, level: usize) -> bool {
        debug_assert!(
            level < self.digits.len(),
            "called `Odometer::advance_from` with level out of bounds: the len is {} but the level is {}",
            self.digits.len(),
            level
        );
        debug_assert!(!self.finished, "called `Odometer::advance_from` on a finished counter");

        for digit in &mut self.digits[level + 1..] {
            *digit = 0;
        }

        let mut current = level;
        loop {
            self.digits[current] += 1;
            let end = if current == 0 {
                self.first_digit_end
            } else {
                self.radixes[current]
            };

            if self.digits[current] < end {
                return true;
            }
            if current == 0 {
                self.finished = true;
                return false;
            }
            self.digits[current] = 0;
            current -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects every index vector the counter visits under plain advance.
    fn walk(mut odometer: Odometer) -> Vec<Vec<usize>> {
        let mut visited = Vec::new();
        while !odometer.is_finished() {
            visited.push(odometer.digits().to_vec());
            odometer.advance();
        }
        visited
    }

    #[test]
    fn test_full_walk_visits_product_in_lexicographic_order() {
        let visited = walk(Odometer::new(vec![2, 3]));
        assert_eq!(
            visited,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn test_zero_digits_yield_one_empty_vector() {
        let visited = walk(Odometer::new(Vec::new()));
        assert_eq!(visited, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_zero_radix_yields_nothing() {
        let visited = walk(Odometer::new(vec![2, 0]));
        assert!(visited.is_empty());
    }

    #[test]
    fn test_single_digit_counts_to_radix() {
        let visited = walk(Odometer::new(vec![4]));
        assert_eq!(visited, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_advance_from_zeroes_suffix_and_carries() {
        let mut odometer = Odometer::new(vec![2, 2, 3]);

        // Move somewhere into the middle: [0, 1, 2].
        for _ in 0..5 {
            assert!(odometer.advance());
        }
        assert_eq!(odometer.digits(), &[0, 1, 2]);

        // A conflict at level 1 skips every [0, 1, _] combination.
        assert!(odometer.advance_from(1));
        assert_eq!(odometer.digits(), &[1, 0, 0]);
    }

    #[test]
    fn test_advance_from_level_zero_can_finish() {
        let mut odometer = Odometer::new(vec![2, 2]);
        assert_eq!(odometer.digits(), &[0, 0]);

        assert!(odometer.advance_from(0)); // -> [1, 0]
        assert_eq!(odometer.digits(), &[1, 0]);

        assert!(!odometer.advance_from(0));
        assert!(odometer.is_finished());
    }

    #[test]
    fn test_advance_from_last_level_equals_advance() {
        let mut a = Odometer::new(vec![2, 3]);
        let mut b = Odometer::new(vec![2, 3]);

        while !a.is_finished() {
            a.advance();
            b.advance_from(b.num_digits() - 1);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_first_digit_range_partition_covers_whole_space() {
        let full = walk(Odometer::new(vec![4, 2]));

        let mut merged = Vec::new();
        for (start, end) in [(0usize, 2usize), (2, 3), (3, 4)] {
            merged.extend(walk(Odometer::with_first_digit_range(
                vec![4, 2],
                start,
                end,
            )));
        }

        assert_eq!(merged, full);
    }

    #[test]
    fn test_empty_first_digit_range_is_finished() {
        let odometer = Odometer::with_first_digit_range(vec![3, 2], 1, 1);
        assert!(odometer.is_finished());
    }
}
