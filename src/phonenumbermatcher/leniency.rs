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

use crate::{
    phonenumber::PhoneNumber,
    phonenumbermatcher::matcher,
    phonenumberutil::PhoneNumberUtil,
};

/// Possible outcomes when testing if a phone number candidate in text is a
/// possible number. The levels are totally ordered: a candidate accepted at
/// some level is accepted at every more lenient level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Leniency {
    /// Phone numbers accepted are possible, but not necessarily valid.
    Possible,
    /// Phone numbers accepted are possible and valid. Numbers written in
    /// national format must have their national prefix present if it is
    /// usually written for a number of this type.
    Valid,
    /// Numbers accepted are valid and are grouped in a possible way for this
    /// locale. For example, a US number written as "65 02 53 00 00" and
    /// "650253 0000" are not accepted at this leniency level, whereas
    /// "650 253 0000", "650 2530000" or "6502530000" are. Numbers with more
    /// than one "/" are also dropped.
    StrictGrouping,
    /// Numbers accepted are valid and are grouped in the same way that we
    /// would have formatted it, or as a single block.
    ExactGrouping,
}

impl Leniency {
    /// Returns true if `number` is a verified number according to this
    /// leniency.
    pub(crate) fn verify(
        &self,
        number: &PhoneNumber,
        candidate: &str,
        util: &PhoneNumberUtil,
    ) -> bool {
        match self {
            Leniency::Possible => util.is_possible_number(number),
            Leniency::Valid => {
                util.is_valid_number(number)
                    && matcher::contains_only_valid_x_chars(number, candidate, util)
                    && matcher::is_national_prefix_present_if_required(number, util)
            }
            Leniency::StrictGrouping => {
                self.verify_grouping(number, candidate, util, matcher::all_number_groups_remain_grouped)
            }
            Leniency::ExactGrouping => {
                self.verify_grouping(number, candidate, util, matcher::all_number_groups_are_exactly_present)
            }
        }
    }

    fn verify_grouping(
        &self,
        number: &PhoneNumber,
        candidate: &str,
        util: &PhoneNumberUtil,
        checker: matcher::NumberGroupingChecker,
    ) -> bool {
        util.is_valid_number(number)
            && matcher::contains_only_valid_x_chars(number, candidate, util)
            && !matcher::contains_more_than_one_slash_in_national_number(number, candidate, util)
            && matcher::is_national_prefix_present_if_required(number, util)
            && matcher::check_number_grouping_is_valid(number, candidate, util, checker)
    }
}
