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

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::{
    interfaces::MatcherApi,
    metadata::ShortNumberMetadata,
    phonenumber::PhoneNumber,
    phonenumberutil::{PhoneNumberUtil, PHONE_NUMBER_UTIL},
    regex_based_matcher::RegexBasedMatcher,
};

pub static SHORT_NUMBER_INFO: LazyLock<ShortNumberInfo> =
    LazyLock::new(|| ShortNumberInfo::new());

/// Methods for getting information about short phone numbers, such as short
/// codes and emergency numbers.
pub struct ShortNumberInfo {
    phone_util: &'static PhoneNumberUtil,

    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// In these countries, if extra digits are dialled after an emergency
    /// number, the call does not connect anymore, so a prefix match must not
    /// be reported as dialable.
    regions_where_emergency_numbers_must_be_exact: HashSet<&'static str>,
}

impl ShortNumberInfo {
    pub(crate) fn new() -> Self {
        let mut exact_regions = HashSet::new();
        exact_regions.insert("BR");
        exact_regions.insert("CL");
        exact_regions.insert("NI");
        Self {
            phone_util: &PHONE_NUMBER_UTIL,
            matcher_api: Box::new(RegexBasedMatcher::new()),
            regions_where_emergency_numbers_must_be_exact: exact_regions,
        }
    }

    fn metadata_for_region(&self, region_code: &str) -> Option<&ShortNumberMetadata> {
        self.phone_util.short_metadata_for_region(region_code)
    }

    // In the case of short numbers sharing a country calling code, the region
    // whose short-code pattern matches the number wins; otherwise the first
    // region of the list is as good as any.
    fn region_code_for_short_number_from_region_list<'a>(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &'a [String],
    ) -> Option<&'a str> {
        if region_codes.is_empty() {
            return None;
        }
        if region_codes.len() == 1 {
            return Some(&region_codes[0]);
        }
        let national_number = PhoneNumberUtil::get_national_significant_number(phone_number);
        for region_code in region_codes {
            let Some(metadata) = self.metadata_for_region(region_code) else {
                continue;
            };
            if self
                .matcher_api
                .match_national_number(&national_number, &metadata.short_code, false)
            {
                return Some(region_code);
            }
        }
        Some(&region_codes[0])
    }

    /// Check whether a short number is a possible number for all regions
    /// sharing its country calling code. Only the number's length is
    /// consulted, not the short-code patterns.
    pub fn is_possible_short_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_codes = self
            .phone_util
            .region_codes_for_country_code(phone_number.country_code());
        let short_number = PhoneNumberUtil::get_national_significant_number(phone_number);
        let short_number_length = short_number.len() as i32;
        for region_code in region_codes {
            let Some(metadata) = self.metadata_for_region(region_code) else {
                continue;
            };
            if metadata
                .short_code
                .possible_length
                .contains(&short_number_length)
            {
                return true;
            }
        }
        false
    }

    /// Tests whether a short number matches a valid pattern. Note that this
    /// doesn't verify the number is actually in use, which is impossible to
    /// tell by just looking at the number itself.
    pub fn is_valid_short_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_codes = self
            .phone_util
            .region_codes_for_country_code(phone_number.country_code());
        let Some(region_code) =
            self.region_code_for_short_number_from_region_list(phone_number, region_codes)
        else {
            return false;
        };
        self.is_valid_short_number_for_region(phone_number, region_code)
    }

    pub fn is_valid_short_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> bool {
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return false;
        };
        let short_number = PhoneNumberUtil::get_national_significant_number(phone_number);
        if !metadata
            .short_code
            .possible_length
            .contains(&(short_number.len() as i32))
        {
            return false;
        }
        self.matcher_api
            .match_national_number(&short_number, &metadata.short_code, false)
    }

    /// Returns true if the given number, exactly as dialed, might be used to
    /// connect to an emergency service in the given region.
    ///
    /// This accepts a number with extra digits appended in regions where that
    /// still connects (e.g. "9116666666" in the US connects to 911), and
    /// rejects it where it doesn't (e.g. "9111" in Brazil). Numbers starting
    /// with a star or a plus sign are rejected, since dialling those together
    /// with an emergency code generally does not connect.
    pub fn connects_to_emergency_number(&self, number: &str, region_code: &str) -> bool {
        if number.trim_start().starts_with('*') {
            return false;
        }
        self.matches_emergency_number_helper(number, region_code, true /* allows prefix match */)
    }

    /// Returns true if the given number exactly matches an emergency service
    /// number in the given region.
    ///
    /// In contrast to `connects_to_emergency_number`, leading star signs are
    /// ignored and no trailing digits are tolerated.
    pub fn is_emergency_number(&self, number: &str, region_code: &str) -> bool {
        let number = number.trim_start().trim_start_matches('*');
        self.matches_emergency_number_helper(
            number,
            region_code,
            false, /* doesn't allow prefix match */
        )
    }

    fn matches_emergency_number_helper(
        &self,
        number: &str,
        region_code: &str,
        allow_prefix_match: bool,
    ) -> bool {
        let Ok(extracted_number) = self.phone_util.extract_possible_number(number) else {
            return false;
        };
        if self.phone_util.starts_with_plus_chars_pattern(extracted_number) {
            // Returns false if the number starts with a plus sign. We don't
            // believe dialing the country code before emergency numbers (e.g.
            // +1911) works.
            return false;
        }
        let Some(metadata) = self.metadata_for_region(region_code) else {
            return false;
        };
        if !metadata.emergency.has_national_number_pattern() {
            return false;
        }
        let normalized_number = self.phone_util.normalize_digits_only(extracted_number);
        let allow_prefix_match_for_region = allow_prefix_match
            && !self
                .regions_where_emergency_numbers_must_be_exact
                .contains(region_code);
        self.matcher_api.match_national_number(
            &normalized_number,
            &metadata.emergency,
            allow_prefix_match_for_region,
        )
    }
}
