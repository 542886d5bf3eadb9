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

//! # Rota Model
//!
//! **The Core Domain Model for the Rota Day-Assignment Enumerator.**
//!
//! This crate defines the fundamental data structures used to represent a
//! day-assignment instance: pickees that can be claimed, pickers with ordered
//! preference lists, and the fixed sequence of timeslots that gives every
//! schedule its shape. It serves as the data interchange layer between the
//! problem definition (user input) and the enumeration engine
//! (`rota_odometer`).
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **construction** and **enumeration**:
//!
//! * **`index`**: Strongly-typed index newtypes (`PickerIndex`, `PickeeIndex`,
//!   `SlotIndex`) to prevent logical indexing errors.
//! * **`entity`**: The immutable entity records loaded from the input document.
//! * **`slot`**: `SlotEntry`, a sentinel-encoded optional pickee reference —
//!   one machine word per schedule position.
//! * **`problem`**: The `Problem` (immutable, optimized for enumeration) and
//!   `ProblemBuilder` (mutable, validating) pair.
//! * **`complexity`**: The projected size of the combination space, used to
//!   refuse hopeless instances before any work starts.
//! * **`day`**: `DaySchema` (one picker's slot row) and `Day` (one complete
//!   candidate assignment), including double-booking validation.
//! * **`loading`**: The JSON input-document loader and its error types.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types. You cannot accidentally use
//!     a `PickerIndex` to access a timeslot.
//! 2.  **Determinism**: Entities are identified by dense indices assigned in
//!     document order. Sorting and equality never depend on addresses, so
//!     enumeration order is reproducible across runs and platforms.
//! 3.  **Fail-Fast**: The builder and the loader validate inputs eagerly so
//!     that the engine never encounters an invalid instance.

pub mod complexity;
pub mod day;
pub mod entity;
pub mod index;
pub mod loading;
pub mod problem;
pub mod slot;
