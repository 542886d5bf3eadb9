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

//! # Rota Solver
//!
//! **High-level orchestration of the rota enumeration engine.**
//!
//! The solver ties the pieces together for callers who want an answer, not
//! a toolbox: it projects the combination count and refuses hopeless
//! instances, generates the per-picker schedule sets, assembles the monitor
//! stack (interrupt, day limit, optional time limit), runs the walk either
//! sequentially or partitioned across scoped threads over the first
//! picker's index range, and returns the collected days together with the
//! termination reason and statistics.

pub mod solver;

pub use solver::{
    DEFAULT_MAX_COMBINATIONS, SolveError, Solver, SolverBuilder, SolverOutcome,
};
