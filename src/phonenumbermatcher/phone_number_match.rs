// Copyright (C) 2009 The Libphonenumber Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

use crate::phonenumber::PhoneNumber;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidMatchError {
    #[error("The matched raw string must not be empty")]
    EmptyRawString,
}

/// The immutable match of a phone number within a piece of text. Matches may
/// be found using [`crate::PhoneNumberMatcher`].
///
/// A match consists of the phone number as well as the `start` and `end`
/// offsets of the corresponding subsequence of the searched text. Use
/// `raw_string` to obtain a copy of the matched subsequence.
///
/// Equality is structural over all three fields, so two matches built from
/// the same triple compare equal no matter where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberMatch {
    /// The start index into the searched text.
    start: usize,
    /// The matched substring of the searched text.
    raw_string: String,
    /// The matched phone number.
    number: PhoneNumber,
}

impl PhoneNumberMatch {
    pub fn new(
        start: usize,
        raw_string: String,
        number: PhoneNumber,
    ) -> Result<Self, InvalidMatchError> {
        if raw_string.is_empty() {
            return Err(InvalidMatchError::EmptyRawString);
        }
        Ok(Self {
            start,
            raw_string,
            number,
        })
    }

    /// Returns the start index of the matched phone number within the
    /// searched text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end index of the matched phone number within the
    /// searched text.
    pub fn end(&self) -> usize {
        self.start + self.raw_string.len()
    }

    /// Returns the raw substring matched.
    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    /// Returns the phone number matched by the receiver.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}
