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

//! The numbering-plan metadata model: one immutable record per region
//! describing prefixes, digit-length constraints and structural patterns for
//! each number category, plus the smaller side tables for alternate formats
//! and short/emergency numbers. How these records get to disk (and back) is
//! not this crate's concern; the compiled-in table below is plain Rust.

mod compiled;
mod store;

pub(crate) use compiled::compiled_store;
pub use store::MetadataStore;

/// The structural description of one number category within a region: a
/// full-match validation pattern plus the set of digit counts a number of
/// this category may have.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneNumberDesc {
    pub national_number_pattern: Option<String>,
    /// Sorted set of lengths a national significant number of this type may
    /// have. The single value `-1` means no numbers of this type exist at
    /// all; an empty list means the lengths are inherited from the general
    /// description.
    pub possible_length: Vec<i32>,
    /// Lengths valid only for local dialling (e.g. US numbers without the
    /// area code). Never overlaps with `possible_length`.
    pub possible_length_local_only: Vec<i32>,
    pub example_number: Option<String>,
}

impl PhoneNumberDesc {
    pub fn national_number_pattern(&self) -> &str {
        self.national_number_pattern.as_deref().unwrap_or("")
    }

    pub fn has_national_number_pattern(&self) -> bool {
        self.national_number_pattern.is_some()
    }

    pub fn example_number(&self) -> &str {
        self.example_number.as_deref().unwrap_or("")
    }

    pub fn has_example_number(&self) -> bool {
        self.example_number.is_some()
    }
}

/// One formatting rule: numbers fully matching `pattern` (and whose prefix
/// matches the last of `leading_digits_pattern`, when present) are rendered
/// by substituting the capture groups into `format`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberFormat {
    pub pattern: String,
    pub format: String,
    pub leading_digits_pattern: Vec<String>,
    pub national_prefix_formatting_rule: Option<String>,
    pub national_prefix_optional_when_formatting: bool,
    pub domestic_carrier_code_formatting_rule: Option<String>,
}

impl NumberFormat {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn national_prefix_formatting_rule(&self) -> &str {
        self.national_prefix_formatting_rule.as_deref().unwrap_or("")
    }

    pub fn set_national_prefix_formatting_rule(&mut self, rule: String) {
        self.national_prefix_formatting_rule = Some(rule);
    }

    pub fn clear_national_prefix_formatting_rule(&mut self) {
        self.national_prefix_formatting_rule = None;
    }

    pub fn domestic_carrier_code_formatting_rule(&self) -> &str {
        self.domestic_carrier_code_formatting_rule
            .as_deref()
            .unwrap_or("")
    }
}

/// The numbering plan of a single region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneMetadata {
    /// Region identifier, e.g. "US". Unique across the table.
    pub id: String,
    pub country_code: i32,
    pub international_prefix: Option<String>,
    pub national_prefix: Option<String>,
    /// Pattern used when stripping the national prefix during parsing. Falls
    /// back to `national_prefix` when absent. May capture a carrier code.
    pub national_prefix_for_parsing: Option<String>,
    pub national_prefix_transform_rule: Option<String>,
    pub preferred_extn_prefix: Option<String>,
    /// When several regions share a country calling code, this anchored
    /// pattern picks the right one from the national number.
    pub leading_digits: Option<String>,
    /// Exactly one region per shared country calling code carries this flag;
    /// it resolves calling-code lookups deterministically.
    pub main_country_for_code: bool,
    pub same_mobile_and_fixed_line_pattern: bool,

    pub general_desc: PhoneNumberDesc,
    pub fixed_line: PhoneNumberDesc,
    pub mobile: PhoneNumberDesc,
    pub toll_free: PhoneNumberDesc,
    pub premium_rate: PhoneNumberDesc,
    pub shared_cost: PhoneNumberDesc,
    pub voip: PhoneNumberDesc,
    pub personal_number: PhoneNumberDesc,
    pub pager: PhoneNumberDesc,
    pub uan: PhoneNumberDesc,
    pub voicemail: PhoneNumberDesc,

    pub number_format: Vec<NumberFormat>,
    /// When present, used instead of `number_format` for international
    /// presentations.
    pub intl_number_format: Vec<NumberFormat>,
}

impl PhoneMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &str {
        self.international_prefix.as_deref().unwrap_or("")
    }

    pub fn national_prefix(&self) -> &str {
        self.national_prefix.as_deref().unwrap_or("")
    }

    pub fn has_national_prefix(&self) -> bool {
        self.national_prefix.is_some()
    }

    pub fn national_prefix_for_parsing(&self) -> &str {
        self.national_prefix_for_parsing
            .as_deref()
            .or(self.national_prefix.as_deref())
            .unwrap_or("")
    }

    pub fn national_prefix_transform_rule(&self) -> &str {
        self.national_prefix_transform_rule
            .as_deref()
            .unwrap_or("")
    }

    pub fn preferred_extn_prefix(&self) -> &str {
        self.preferred_extn_prefix.as_deref().unwrap_or("")
    }

    pub fn has_preferred_extn_prefix(&self) -> bool {
        self.preferred_extn_prefix.is_some()
    }

    pub fn leading_digits(&self) -> &str {
        self.leading_digits.as_deref().unwrap_or("")
    }

    pub fn has_leading_digits(&self) -> bool {
        self.leading_digits.is_some()
    }

    pub fn main_country_for_code(&self) -> bool {
        self.main_country_for_code
    }

    pub fn same_mobile_and_fixed_line_pattern(&self) -> bool {
        self.same_mobile_and_fixed_line_pattern
    }
}

/// Per-region record restricted to the emergency and short-code categories.
/// Entirely absent for most regions; absence means "no short numbers known".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortNumberMetadata {
    pub id: String,
    pub emergency: PhoneNumberDesc,
    pub short_code: PhoneNumberDesc,
}

impl ShortNumberMetadata {
    pub fn id(&self) -> &str {
        &self.id
    }
}
