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

use crate::stats::EnumerationStatistics;

/// Why an enumeration run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// The entire combination space was walked. The collected days are
    /// the complete set of valid assignments.
    Exhausted,
    /// A monitor stopped the walk early (day limit, time limit, interrupt).
    /// The string contains the monitor's reason. The collected days are a
    /// valid prefix of the complete set; no partial day is ever emitted.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "search space exhausted"),
            TerminationReason::Aborted(reason) => write!(f, "aborted: {}", reason),
        }
    }
}

/// The result of one enumeration run: why it stopped and what it counted.
/// The days themselves live in whatever collector the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationOutcome {
    reason: TerminationReason,
    statistics: EnumerationStatistics,
}

impl EnumerationOutcome {
    #[inline]
    pub fn new(reason: TerminationReason, statistics: EnumerationStatistics) -> Self {
        Self { reason, statistics }
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

    /// Returns `true` if the full combination space was walked.
    #[inline]
    pub fn is_exhaustive(&self) -> bool {
        matches!(self.reason, TerminationReason::Exhausted)
    }

    /// Returns `true` if a monitor stopped the run early.
    #[inline]
    pub fn was_aborted(&self) -> bool {
        matches!(self.reason, TerminationReason::Aborted(_))
    }
}

impl std::fmt::Display for EnumerationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EnumerationOutcome({}, {} days found)",
            self.reason, self.statistics.days_found
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::EnumerationStatisticsBuilder;

    #[test]
    fn test_exhausted_outcome() {
        let stats = EnumerationStatisticsBuilder::new().days_found(4).build();
        let outcome = EnumerationOutcome::new(TerminationReason::Exhausted, stats);

        assert!(outcome.is_exhaustive());
        assert!(!outcome.was_aborted());
        assert_eq!(outcome.statistics().days_found, 4);
    }

    #[test]
    fn test_aborted_outcome() {
        let stats = EnumerationStatisticsBuilder::new().build();
        let outcome = EnumerationOutcome::new(
            TerminationReason::Aborted("time limit reached".to_string()),
            stats,
        );

        assert!(!outcome.is_exhaustive());
        assert!(outcome.was_aborted());
        match outcome.reason() {
            TerminationReason::Aborted(msg) => assert_eq!(msg, "time limit reached"),
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn test_display() {
        let stats = EnumerationStatisticsBuilder::new().days_found(2).build();
        let outcome = EnumerationOutcome::new(TerminationReason::Exhausted, stats);
        assert_eq!(
            format!("{}", outcome),
            "EnumerationOutcome(search space exhausted, 2 days found)"
        );
    }
}
