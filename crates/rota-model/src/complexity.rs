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

use crate::problem::Problem;

/// Represents the projected size of an instance's combination space.
///
/// Each picker with $P$ picks over $T$ timeslots contributes $T!/(T-P)!$
/// distinct schedules, and the enumerator walks the cartesian product of all
/// pickers' schedule sets, so the candidate space is
/// $\prod_i T!/(T-P_i)!$.
///
/// Since this product explodes factorially with modest pick lists, the value
/// is stored in **logarithmic space** ($\log_{10}$); an exact `u128` count is
/// kept alongside while it is still representable. Callers use the exact
/// count to enforce ceilings and the log form for reporting.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct Complexity {
    /// The base-10 logarithm of the total combination count.
    log_val: f64,
    /// The exact combination count, if it fits into a `u128`.
    exact: Option<u128>,
}

impl Complexity {
    /// Calculates the projected combination count for the given instance.
    pub fn new(problem: &Problem) -> Self {
        let num_timeslots = problem.num_timeslots();

        let mut log_val = 0.0f64;
        let mut exact: Option<u128> = Some(1);

        for picker in problem.pickers() {
            // Falling factorial T * (T-1) * ... * (T-P+1).
            for k in 0..picker.num_picks() {
                let factor = (num_timeslots - k) as u128;
                log_val += (factor as f64).log10();
                exact = exact.and_then(|total| total.checked_mul(factor));
            }
        }

        Complexity { log_val, exact }
    }

    /// Returns the exact combination count, or `None` if it exceeds `u128`.
    #[inline]
    pub fn exact(&self) -> Option<u128> {
        self.exact
    }

    /// Returns `true` if the projected count exceeds the given ceiling.
    #[inline]
    pub fn exceeds(&self, ceiling: u64) -> bool {
        match self.exact {
            Some(total) => total > ceiling as u128,
            // Beyond u128 range, every practical ceiling is exceeded.
            None => true,
        }
    }

    /// Returns the raw Log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }

    /// Returns the exponent (order of magnitude).
    /// E.g., for $1.2 \times 10^{42}$, returns 42.
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    /// E.g., for $1.2 \times 10^{42}$, returns 1.2.
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.exact {
            Some(total) => write!(f, "{}", total),
            None => write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ProblemBuilder;

    fn instance(num_timeslots: usize, pick_counts: &[usize]) -> Problem {
        let mut builder = ProblemBuilder::new();
        let max_picks = pick_counts.iter().copied().max().unwrap_or(0);
        let pickees: Vec<_> = (0..max_picks)
            .map(|i| builder.add_pickee(format!("pickee-{i}"), format!("p{i}@example.com")))
            .collect();
        for t in 0..num_timeslots {
            builder.add_timeslot(format!("slot-{t}"));
        }
        for (i, &count) in pick_counts.iter().enumerate() {
            builder.add_picker(
                format!("picker-{i}"),
                format!("picker{i}@example.com"),
                pickees[..count].to_vec(),
            );
        }
        builder.build().expect("fixture must be valid")
    }

    #[test]
    fn test_single_picker_falling_factorial() {
        // One picker, 2 picks over 3 slots: 3!/(3-2)! = 6.
        let problem = instance(3, &[2]);
        let complexity = problem.complexity();
        assert_eq!(complexity.exact(), Some(6));
    }

    #[test]
    fn test_product_over_pickers() {
        // Two pickers with 1 pick over 2 slots each: 2 * 2 = 4.
        let problem = instance(2, &[1, 1]);
        assert_eq!(problem.complexity().exact(), Some(4));
    }

    #[test]
    fn test_zero_picks_counts_one() {
        // A pickless picker contributes exactly one schedule.
        let problem = instance(2, &[0]);
        assert_eq!(problem.complexity().exact(), Some(1));

        // So does an instance without pickers at all.
        let empty = instance(3, &[]);
        assert_eq!(empty.complexity().exact(), Some(1));
    }

    #[test]
    fn test_exceeds_ceiling() {
        let problem = instance(3, &[2, 2]); // 6 * 6 = 36
        let complexity = problem.complexity();
        assert!(complexity.exceeds(35));
        assert!(!complexity.exceeds(36));
    }

    #[test]
    fn test_log_value_matches_exact() {
        let problem = instance(4, &[3, 2]); // 24 * 12 = 288
        let complexity = problem.complexity();
        assert_eq!(complexity.exact(), Some(288));
        assert!((complexity.raw() - 288f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn test_display_small_value() {
        let problem = instance(2, &[1, 1]);
        assert_eq!(format!("{}", problem.complexity()), "4");
    }
}
