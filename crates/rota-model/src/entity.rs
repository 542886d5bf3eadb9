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

//! The immutable entity records a problem instance is made of.
//!
//! All three entity types are created once at load time and never mutated.
//! Identity is the dense index an entity receives in its owning table
//! (document order); the records themselves carry only display data and,
//! for pickers, the resolved ordered pick list.

use crate::index::PickeeIndex;

/// An entity that can be selected into a timeslot by a picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pickee {
    name: String,
    email: String,
}

impl Pickee {
    /// Creates a new pickee record.
    #[inline]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the display name of this pickee.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address of this pickee.
    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for Pickee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pickee({} <{}>)", self.name, self.email)
    }
}

/// An entity with an ordered list of preferred pickees to place into
/// timeslots. The pick list is already resolved to pickee indices; the
/// loader guarantees the picks are distinct and no longer than the
/// timeslot sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Picker {
    name: String,
    email: String,
    picks: Vec<PickeeIndex>,
}

impl Picker {
    /// Creates a new picker record with an already-resolved pick list.
    #[inline]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        picks: Vec<PickeeIndex>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            picks,
        }
    }

    /// Returns the display name of this picker.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address of this picker.
    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the ordered, resolved pick list.
    #[inline]
    pub fn picks(&self) -> &[PickeeIndex] {
        &self.picks
    }

    /// Returns the number of picks this picker made.
    #[inline]
    pub fn num_picks(&self) -> usize {
        self.picks.len()
    }
}

impl std::fmt::Display for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Picker({} <{}>, {} picks)",
            self.name,
            self.email,
            self.picks.len()
        )
    }
}

/// One position in the fixed, ordered sequence defining a day's structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timeslot {
    name: String,
}

impl Timeslot {
    /// Creates a new timeslot record.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the display name of this timeslot.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Timeslot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timeslot({})", self.name)
    }
}
