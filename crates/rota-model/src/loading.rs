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

//! Problem instance loader for the day-assignment domain.
//!
//! This module turns JSON documents into a validated `Problem`. The input
//! format is a record with three named collections:
//!
//! ```json
//! {
//!   "pickees":   [ { "name": "...", "email": "..." }, ... ],
//!   "pickers":   [ { "name": "...", "email": "...", "picks": ["..."] }, ... ],
//!   "timeslots": [ { "name": "..." }, ... ]
//! }
//! ```
//!
//! Pickers reference their picks by pickee *name*; the loader resolves those
//! names into dense pickee indices and rejects unresolved references with an
//! error that names both the picker and the offending pick. Collection order
//! defines entity indices, so loading the same document always produces the
//! same instance and, downstream, the same enumeration order.
//!
//! The loader accepts any reader, file path, or string slice, making it
//! convenient to integrate with tests and tooling.

use crate::{
    index::PickeeIndex,
    problem::{Problem, ProblemBuildError, ProblemBuilder},
};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// The error type for the problem loading process.
#[derive(Debug)]
pub enum ProblemLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The document is not structurally valid JSON for the expected schema.
    Malformed(serde_json::Error),
    /// Two pickees share the same name, making pick resolution ambiguous.
    DuplicatePickeeName(String),
    /// A picker's pick name does not match any pickee name.
    UnresolvedPick(UnresolvedPickError),
    /// The resolved entities violate a structural invariant.
    Build(ProblemBuildError),
}

/// Details about a pick that could not be resolved to a pickee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedPickError {
    /// The display name of the picker whose pick failed to resolve.
    pub picker: String,
    /// The pick name that matched no pickee.
    pub pick: String,
}

impl std::fmt::Display for UnresolvedPickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not find pick '{}' of picker '{}'",
            self.pick, self.picker
        )
    }
}

impl std::error::Error for UnresolvedPickError {}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed(e) => write!(f, "Malformed document: {e}"),
            Self::DuplicatePickeeName(name) => {
                write!(f, "Duplicate pickee name '{name}' makes picks ambiguous")
            }
            Self::UnresolvedPick(e) => write!(f, "{e}"),
            Self::Build(e) => write!(f, "Invalid instance: {e}"),
        }
    }
}

impl std::error::Error for ProblemLoaderError {}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ProblemLoaderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e)
    }
}

impl From<UnresolvedPickError> for ProblemLoaderError {
    fn from(e: UnresolvedPickError) -> Self {
        Self::UnresolvedPick(e)
    }
}

impl From<ProblemBuildError> for ProblemLoaderError {
    fn from(e: ProblemBuildError) -> Self {
        Self::Build(e)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PickeeRecord {
    name: String,
    email: String,
}

#[derive(Debug, Clone, Deserialize)]
struct PickerRecord {
    name: String,
    email: String,
    picks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TimeslotRecord {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct DocumentRecord {
    pickees: Vec<PickeeRecord>,
    pickers: Vec<PickerRecord>,
    timeslots: Vec<TimeslotRecord>,
}

/// A loader for day-assignment problem documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemLoader;

impl ProblemLoader {
    /// Creates a new `ProblemLoader`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Loads a problem from a generic reader.
    pub fn from_reader<R: Read>(&self, rdr: R) -> Result<Problem, ProblemLoaderError> {
        let document: DocumentRecord = serde_json::from_reader(rdr)?;
        self.resolve(document)
    }

    /// Loads a problem from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Problem, ProblemLoaderError> {
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }

    /// Loads a problem from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Problem, ProblemLoaderError> {
        let document: DocumentRecord = serde_json::from_str(s)?;
        self.resolve(document)
    }

    /// Resolves pick names to pickee indices and builds the instance.
    fn resolve(&self, document: DocumentRecord) -> Result<Problem, ProblemLoaderError> {
        let mut builder = ProblemBuilder::new();

        let mut by_name: FxHashMap<String, PickeeIndex> = FxHashMap::default();
        for pickee in document.pickees {
            let index = builder.add_pickee(pickee.name.clone(), pickee.email);
            if by_name.insert(pickee.name.clone(), index).is_some() {
                return Err(ProblemLoaderError::DuplicatePickeeName(pickee.name));
            }
        }

        for timeslot in document.timeslots {
            builder.add_timeslot(timeslot.name);
        }

        for picker in document.pickers {
            let mut picks = Vec::with_capacity(picker.picks.len());
            for pick in picker.picks {
                let index = by_name.get(&pick).copied().ok_or(UnresolvedPickError {
                    picker: picker.name.clone(),
                    pick,
                })?;
                picks.push(index);
            }
            builder.add_picker(picker.name, picker.email, picks);
        }

        let problem = builder.build()?;
        tracing::debug!(
            num_pickees = problem.num_pickees(),
            num_pickers = problem.num_pickers(),
            num_timeslots = problem.num_timeslots(),
            "loaded problem instance"
        );

        Ok(problem)
    }
}
