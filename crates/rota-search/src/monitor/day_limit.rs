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

//! # Day Count Monitor
//!
//! A search monitor that tracks the number of valid days discovered using a
//! shared `AtomicU64` counter, and optionally terminates the enumeration when
//! a configured global limit is reached. Multiple monitors can share the same
//! counter to enforce a cross-worker limit during partitioned enumeration.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use rota_model::day::Day;
use std::sync::atomic::{AtomicU64, Ordering};

/// A monitor that terminates the search when a specified number of valid days
/// has been found, or continues indefinitely if no limit is set, just
/// updating the day count.
#[derive(Debug)]
pub struct DayLimitMonitor<'a> {
    days_found: &'a AtomicU64,
    day_limit: Option<u64>,
}

impl<'a> DayLimitMonitor<'a> {
    /// Creates a new `DayLimitMonitor`.
    #[inline]
    pub fn new(days_found: &'a AtomicU64, day_limit: Option<u64>) -> Self {
        Self {
            days_found,
            day_limit,
        }
    }

    /// Creates a new `DayLimitMonitor` with a specified day limit.
    #[inline]
    pub fn with_limit(days_found: &'a AtomicU64, limit: u64) -> Self {
        Self::new(days_found, Some(limit))
    }

    /// Creates a new `DayLimitMonitor` without a day limit.
    #[inline]
    pub fn without_limit(days_found: &'a AtomicU64) -> Self {
        Self::new(days_found, None)
    }

    /// Checks if the day limit has been reached.
    #[inline]
    fn reached_limit(&self) -> bool {
        if let Some(limit) = self.day_limit {
            return self.days_found.load(Ordering::Relaxed) >= limit;
        }
        false
    }
}

impl SearchMonitor for DayLimitMonitor<'_> {
    fn name(&self) -> &str {
        "DayLimitMonitor"
    }

    fn on_enter_search(&mut self) {}

    fn on_exit_search(&mut self) {}

    fn on_day_found(&mut self, _day: &Day) {
        self.days_found.fetch_add(1, Ordering::Relaxed);
    }

    fn on_step(&mut self) {}

    fn search_command(&self) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("global day limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }
}
