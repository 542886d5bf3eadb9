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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Newtype wrappers around `usize` that prevent mixing indices from different
//! domains (pickers vs. pickees vs. timeslots). Each index type compiles down
//! to a transparent `usize` with no runtime overhead.
//!
//! Entities are identified by the dense index assigned at load time, in
//! document order. All sorting and equality in the workspace goes through
//! these indices, which keeps enumeration order deterministic and
//! reproducible across runs and platforms.
//!
//! The `typed_index!` macro is exported so downstream crates can mint their
//! own index spaces with the same shape (see `rota_search`'s `MonitorIndex`).

/// Defines a zero-cost, strongly typed index newtype over `usize`.
///
/// The generated type provides `new`/`get`, ordering, hashing, `Display` and
/// `Debug` as `Name(i)`, and conversions to and from `usize`.
///
/// # Examples
///
/// ```rust
/// rota_model::typed_index!(
///     /// An index into some table.
///     TableIndex
/// );
///
/// let idx = TableIndex::new(3);
/// assert_eq!(idx.get(), 3);
/// assert_eq!(format!("{}", idx), "TableIndex(3)");
/// ```
#[macro_export]
macro_rules! typed_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new index from a raw `usize`.
            #[inline(always)]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the underlying `usize` index.
            #[inline(always)]
            pub const fn get(self) -> usize {
                self.0
            }

            /// Checks if the index is zero.
            #[inline(always)]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl ::std::convert::From<usize> for $name {
            fn from(index: usize) -> Self {
                Self::new(index)
            }
        }

        impl ::std::convert::From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }
    };
}

typed_index!(
    /// A typed index identifying one picker, in document order.
    PickerIndex
);

typed_index!(
    /// A typed index identifying one pickee, in document order.
    PickeeIndex
);

typed_index!(
    /// A typed index identifying one timeslot position, in document order.
    SlotIndex
);
