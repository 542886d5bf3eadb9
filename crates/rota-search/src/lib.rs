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

//! # Rota Search
//!
//! **Search control shared by the rota enumeration engines.**
//!
//! Exhaustive enumeration benefits from modular instrumentation and control:
//! budgets (day counts, wall-clock time), external interrupts, and result
//! collection are orthogonal concerns that should not be entangled in the
//! engine's hot loop. This crate provides those seams:
//!
//! * **`monitor`**: The `SearchMonitor` trait and its implementations —
//!   composite fan-out, atomic interrupt, day-count limit, and a wall-clock
//!   time limit with step-filtered clock checks.
//! * **`collector`**: The `DayCollector` trait plus counting, materializing,
//!   and closure-adapter collectors for valid days.
//! * **`result`**: Termination reasons and the enumeration outcome type.
//! * **`stats`**: Statistics gathered across an enumeration run.

pub mod collector;
pub mod monitor;
pub mod result;
pub mod stats;
