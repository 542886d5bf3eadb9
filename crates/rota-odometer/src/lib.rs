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

//! # Rota Odometer
//!
//! **The enumeration engine of the rota day-assignment enumerator.**
//!
//! The engine answers one question exhaustively: which complete days — one
//! schedule per picker — place no pickee into the same timeslot twice?
//!
//! Three pieces cooperate:
//!
//! * **`permutation`**: For each picker, the full set of distinct schedules
//!   obtained by permuting the pick list padded with open slots. Open slots
//!   are indistinguishable, so generation walks lexicographic next
//!   arrangements from the canonical sorted order, which visits each
//!   distinct schedule exactly once — a picker with $P$ picks over $T$
//!   timeslots yields exactly $T!/(T-P)!$ schedules, never $T!$.
//! * **`odometer`**: A mixed-radix counter over per-picker schedule indices,
//!   picker 0 most significant. Besides the plain carry it supports a
//!   level-targeted advance that zeroes the suffix — the mechanism behind
//!   conflict pruning — and a first-digit subrange for partitioned runs.
//! * **`compat` / `engine`**: The pure compatibility predicate and the
//!   `ScheduleEnumerator` that walks the product space, committing pickers
//!   in order and abandoning a prefix the moment it conflicts. Every day
//!   the engine emits is complete and valid, and the emitted set is
//!   provably identical to brute-force product-then-filter (the test suite
//!   checks this against an independent reference on small instances).

pub mod compat;
pub mod engine;
pub mod odometer;
pub mod permutation;
