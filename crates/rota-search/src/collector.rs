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

//! # Day Collectors
//!
//! The sink side of enumeration. The engine hands every complete valid day
//! to a `DayCollector` in emission order; what happens to it — counting,
//! materializing, streaming to a callback — is the collector's business.
//! No deduplication is ever needed: every index vector the engine visits
//! produces a structurally distinct day.

use rota_model::day::Day;

/// Accepts complete valid days as they are produced, in the order emitted by
/// the enumeration engine.
pub trait DayCollector {
    /// Takes ownership of one complete valid day.
    fn collect(&mut self, day: Day);
}

/// A collector that only counts the days it is given.
///
/// Useful when the caller cares about the number of valid assignments but
/// not the assignments themselves, or as a cheap sink in benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingCollector {
    count: u64,
}

impl CountingCollector {
    /// Creates a new `CountingCollector`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of days collected so far.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }
}

impl DayCollector for CountingCollector {
    #[inline]
    fn collect(&mut self, _day: Day) {
        self.count += 1;
    }
}

/// A collector that materializes every day it is given, preserving emission
/// order. Exposes the total count, indexed access, and restartable
/// traversal via `iter`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VecCollector {
    days: Vec<Day>,
}

impl VecCollector {
    /// Creates a new, empty `VecCollector`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `VecCollector` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            days: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of days collected so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no day has been collected yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns a slice of the collected days, in emission order.
    #[inline]
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Returns an iterator over the collected days. The iterator can be
    /// recreated as often as needed.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }

    /// Consumes the collector and returns the collected days.
    #[inline]
    pub fn into_days(self) -> Vec<Day> {
        self.days
    }
}

impl DayCollector for VecCollector {
    #[inline]
    fn collect(&mut self, day: Day) {
        self.days.push(day);
    }
}

impl<'a> IntoIterator for &'a VecCollector {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// A collector that forwards every day to a closure, for streaming
/// consumers that do not want to materialize anything.
#[derive(Debug, Clone)]
pub struct FnCollector<F>
where
    F: FnMut(Day),
{
    sink: F,
}

impl<F> FnCollector<F>
where
    F: FnMut(Day),
{
    /// Creates a new `FnCollector` wrapping the given closure.
    #[inline]
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

impl<F> DayCollector for FnCollector<F>
where
    F: FnMut(Day),
{
    #[inline]
    fn collect(&mut self, day: Day) {
        (self.sink)(day);
    }
}
