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

/// Statistics collected during an enumeration run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnumerationStatistics {
    /// Number of complete valid days found.
    pub days_found: u64,
    /// Number of index vectors the odometer visited (valid or pruned).
    pub combinations_examined: u64,
    /// Number of index vectors abandoned at a conflicting picker prefix.
    pub prefixes_pruned: u64,
    /// Number of threads used during the run.
    pub used_threads: usize,
    /// Total duration of the run.
    pub elapsed: std::time::Duration,
}

impl EnumerationStatistics {
    /// Records one visited index vector.
    #[inline]
    pub fn on_combination(&mut self) {
        self.combinations_examined += 1;
    }

    /// Records one abandoned prefix.
    #[inline]
    pub fn on_prune(&mut self) {
        self.prefixes_pruned += 1;
    }

    /// Records one complete valid day.
    #[inline]
    pub fn on_day(&mut self) {
        self.days_found += 1;
    }

    /// Merges another run's counters into this one. Durations do not add
    /// up across parallel workers; the caller sets the wall-clock time.
    pub fn absorb(&mut self, other: &EnumerationStatistics) {
        self.days_found += other.days_found;
        self.combinations_examined += other.combinations_examined;
        self.prefixes_pruned += other.prefixes_pruned;
    }
}

impl std::fmt::Display for EnumerationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Enumeration Statistics:")?;
        writeln!(f, "  Days Found: {}", self.days_found)?;
        writeln!(f, "  Combinations Examined: {}", self.combinations_examined)?;
        writeln!(f, "  Prefixes Pruned: {}", self.prefixes_pruned)?;
        writeln!(f, "  Used Threads: {}", self.used_threads)?;
        writeln!(f, "  Elapsed (secs): {:.3}", self.elapsed.as_secs_f64())
    }
}

/// Builder for `EnumerationStatistics`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationStatisticsBuilder {
    days_found: u64,
    combinations_examined: u64,
    prefixes_pruned: u64,
    used_threads: usize,
    elapsed: std::time::Duration,
}

impl Default for EnumerationStatisticsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumerationStatisticsBuilder {
    /// Creates a new `EnumerationStatisticsBuilder` with default values.
    #[inline]
    pub fn new() -> Self {
        Self {
            days_found: 0,
            combinations_examined: 0,
            prefixes_pruned: 0,
            used_threads: 1,
            elapsed: std::time::Duration::ZERO,
        }
    }

    /// Sets the number of days found.
    #[inline]
    pub fn days_found(mut self, days_found: u64) -> Self {
        self.days_found = days_found;
        self
    }

    /// Sets the number of combinations examined.
    #[inline]
    pub fn combinations_examined(mut self, combinations_examined: u64) -> Self {
        self.combinations_examined = combinations_examined;
        self
    }

    /// Sets the number of prefixes pruned.
    #[inline]
    pub fn prefixes_pruned(mut self, prefixes_pruned: u64) -> Self {
        self.prefixes_pruned = prefixes_pruned;
        self
    }

    /// Sets the number of threads used.
    #[inline]
    pub fn used_threads(mut self, used_threads: usize) -> Self {
        self.used_threads = used_threads;
        self
    }

    /// Sets the total duration of the run.
    #[inline]
    pub fn elapsed(mut self, elapsed: std::time::Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Builds the `EnumerationStatistics` instance.
    #[inline]
    pub fn build(self) -> EnumerationStatistics {
        EnumerationStatistics {
            days_found: self.days_found,
            combinations_examined: self.combinations_examined,
            prefixes_pruned: self.prefixes_pruned,
            used_threads: self.used_threads,
            elapsed: self.elapsed,
        }
    }
}
