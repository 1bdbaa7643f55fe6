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

/// Where the country calling code of a parsed number came from. Only set by
/// [`crate::PhoneNumberUtil::parse_and_keep_raw_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    FromNumberWithPlusSign,
    FromNumberWithIdd,
    FromNumberWithoutPlusSign,
    FromDefaultCountry,
}

/// A parsed phone number. Equality is structural over all fields.
///
/// The national number is stored numerically, so a leading zero of an
/// italian-style number cannot survive the conversion; the
/// `italian_leading_zero` flag together with `number_of_leading_zeros`
/// preserves the exact digit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    pub country_code: i32,
    pub national_number: u64,
    pub extension: Option<String>,
    pub italian_leading_zero: bool,
    /// Only meaningful when `italian_leading_zero` is set; defaults to one.
    pub number_of_leading_zeros: Option<i32>,
    pub raw_input: Option<String>,
    pub country_code_source: Option<CountryCodeSource>,
    pub preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros.unwrap_or(1)
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
            .unwrap_or(CountryCodeSource::FromDefaultCountry)
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code.as_deref().unwrap_or("")
    }
}
