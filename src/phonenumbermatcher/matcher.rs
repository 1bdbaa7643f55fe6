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

use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::{
    metadata::NumberFormat,
    phonenumber::{CountryCodeSource, PhoneNumber},
    phonenumbermatcher::{Leniency, PhoneNumberMatch},
    phonenumberutil::{
        helper_constants::{
            MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, PLUS_CHARS, VALID_PUNCTUATION,
        },
        helper_functions::create_extn_pattern,
        MatchType, PhoneNumberFormat, PhoneNumberUtil,
    },
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::RegexCache,
};

pub(super) type NumberGroupingChecker =
    fn(&PhoneNumberUtil, &PhoneNumber, &str, &[String]) -> bool;

static REG_EXPS: LazyLock<MatcherRegExps> = LazyLock::new(|| MatcherRegExps::new());

struct MatcherRegExps {
    /// The phone number pattern used by the scan loop, similar to the viable
    /// phone number pattern of the parser, with these differences:
    /// - All captures are limited in order to place an upper bound to the
    ///   text matched by the pattern.
    /// - Leading punctuation / plus signs are limited.
    /// - Consecutive occurrences of punctuation are limited.
    /// - Number of digits is limited.
    pattern: Regex,

    /// Matches strings that look like publication pages. Example:
    /// "Computing Complete Answers to Queries in the Presence of Limited
    /// Access Patterns. Chen Li. VLDB J. 12(3): 211-227 (2003)."
    /// The string "211-227 (2003)" is not a telephone number.
    pub_pages: Regex,

    /// Matches strings that look like dates using "/" as a separator.
    /// Examples: 3/10/2011, 31/10/96 or 08/31/95.
    slash_separated_dates: Regex,

    /// Matches timestamps. Examples: "2012-01-02 08:00". The trailing
    /// ":\d\d" is covered by `time_stamps_suffix`.
    time_stamps: Regex,
    time_stamps_suffix: Regex,

    /// Pattern to check that brackets match. Opening brackets should be
    /// closed within the phone number. This also checks that there is
    /// something inside the brackets. Having no brackets at all is also
    /// fine.
    matching_brackets: Regex,

    /// Patterns used to extract phone numbers from a larger phone-number-like
    /// pattern. These are ordered according to specificity. For example,
    /// white-space is last since that is frequently used in numbers, not just
    /// to separate two numbers. We have separate patterns since we don't want
    /// to break up the phone-number-like text on more than one different kind
    /// of symbol at one time, although symbols of the same type (e.g. space)
    /// can be safely grouped together.
    inner_matches: Vec<Regex>,

    /// Punctuation that may be at the start of a phone number: brackets and
    /// plus signs.
    lead_class_pattern: Regex,

    /// Trailing characters to chop off a candidate before reparsing it.
    unwanted_end_char_pattern: Regex,

    /// Characters after which the rest of the candidate is likely a second
    /// phone number.
    second_number_start_pattern: Regex,

    non_digits_pattern: Regex,

    currency_symbol_pattern: Regex,

    regex_cache: RegexCache,
}

/// Builds the repetition quantifier "{lower,upper}".
fn limit(lower: usize, upper: usize) -> String {
    format!("{{{},{}}}", lower, upper)
}

impl MatcherRegExps {
    fn new() -> Self {
        let opening_parens = "(\\[\u{FF08}\u{FF3B}";
        let closing_parens = ")\\]\u{FF09}\u{FF3D}";
        let non_parens = format!("[^{}{}]", opening_parens, closing_parens);
        // Limit on the number of pairs of brackets in a phone number.
        let bracket_pair_limit = limit(0, 3);
        let matching_brackets = format!(
            "(?:[{op}])?(?:{np}+[{cp}])?{np}+(?:[{op}]{np}+[{cp}]){limit}{np}*",
            op = opening_parens,
            cp = closing_parens,
            np = non_parens,
            limit = bracket_pair_limit,
        );

        let lead_class_chars = format!("{}{}", opening_parens, PLUS_CHARS);
        let lead_class = format!("[{}]", lead_class_chars);

        // Limit on the number of leading (plus) characters.
        let lead_limit = limit(0, 2);
        // Limit on the number of consecutive punctuation characters.
        let punctuation_limit = limit(0, 4);
        // The maximum number of digits allowed in a digit-separated block.
        // As we allow all digits in a single block, this should be set high
        // enough to accommodate the entire national number and the maximum
        // country calling code.
        let digit_block_limit = MAX_LENGTH_FOR_NSN + MAX_LENGTH_COUNTRY_CODE;
        // Limit on the number of blocks separated by punctuation. Uses
        // digit_block_limit since some formats use spaces to separate each
        // digit.
        let block_limit = limit(0, digit_block_limit);

        let punctuation = format!("[{}]{}", VALID_PUNCTUATION, punctuation_limit);
        let digit_sequence = format!("\\p{{Nd}}{}", limit(1, digit_block_limit));

        let pattern = format!(
            "(?i)(?:{lead}{punct}){lead_limit}{digits}(?:{punct}{digits}){block_limit}(?:{extn})?",
            lead = lead_class,
            punct = punctuation,
            lead_limit = lead_limit,
            digits = digit_sequence,
            block_limit = block_limit,
            extn = create_extn_pattern(false),
        );

        Self {
            pattern: Regex::new(&pattern).unwrap(),
            pub_pages: Regex::new("\\d{1,5}-+\\d{1,5}\\s{0,4}\\(\\d{1,4}").unwrap(),
            slash_separated_dates: Regex::new(
                "(?:(?:[0-3]?\\d/[01]?\\d)|(?:[01]?\\d/[0-3]?\\d))/(?:[12]\\d{3}|\\d{2})",
            )
            .unwrap(),
            time_stamps: Regex::new("[12]\\d{3}[-/]?[01]\\d[-/]?[0-3]\\d +[0-2]\\d$").unwrap(),
            time_stamps_suffix: Regex::new(":[0-5]\\d").unwrap(),
            matching_brackets: Regex::new(&matching_brackets).unwrap(),
            inner_matches: vec![
                // Breaks on the slash - e.g. "651-234-2345/332-445-1234"
                Regex::new("/+(.*)").unwrap(),
                // Note that the bracket here is inside the capturing group,
                // since we consider it part of the phone number. Breaks on
                // "ab/cd" - e.g. "the phone number is 650) 253-0000".
                Regex::new("(\\([^(]*)").unwrap(),
                // Breaks on a hyphen - e.g. "12345 - 332-445-1234 is my
                // number." We require a space on either side of the hyphen
                // for it to be considered a separator.
                Regex::new("(?:\\p{Z}-|-\\p{Z})\\p{Z}*(.+)").unwrap(),
                // Various types of wide hyphens. Note we have decided not to
                // enforce a space here, since it's possible that it's
                // supposed to be used to break two numbers without spaces,
                // and we haven't found many instances where it's used
                // explicitly.
                Regex::new("[\u{2012}-\u{2015}\u{FF0D}]\\p{Z}*(.+)").unwrap(),
                // Breaks on a full stop - e.g. "12345. 332-445-1234 is my
                // number."
                Regex::new("\\.+\\p{Z}*([^.]+)").unwrap(),
                // Breaks on space - e.g. "3324451234 332-445-1234"
                Regex::new("\\p{Z}+(\\P{Z}+)").unwrap(),
            ],
            lead_class_pattern: Regex::new(&lead_class).unwrap(),
            unwanted_end_char_pattern: Regex::new("[^\\p{N}\\p{L}#]+$").unwrap(),
            second_number_start_pattern: Regex::new(r"[\\/] *x").unwrap(),
            non_digits_pattern: Regex::new("(\\D+)").unwrap(),
            currency_symbol_pattern: Regex::new("\\p{Sc}").unwrap(),
            regex_cache: RegexCache::with_capacity(32),
        }
    }
}

/// A stateful scanner that extracts phone numbers from a piece of text.
/// Instances are not thread-safe, each consumer should own its own matcher
/// per input text. Vends matches lazily through [`Iterator`]; iteration
/// never revisits consumed text, emitted matches are non-overlapping and
/// start-ascending, and a fresh matcher over the same text reproduces the
/// same sequence.
pub struct PhoneNumberMatcher<'a> {
    phone_util: &'a PhoneNumberUtil,
    /// The text searched for phone numbers.
    text: &'a str,
    /// The region (ISO 3166-1 alpha-2) where phone numbers without an
    /// explicit country calling code are assumed to be dialed from.
    preferred_region: String,
    leniency: Leniency,
    /// The number of candidates left to examine before the scan gives up.
    /// This limits duration in case of false positive rich text.
    max_tries: u64,
    /// Byte offset of the next scan into `text`.
    search_index: usize,
}

impl<'a> PhoneNumberMatcher<'a> {
    pub fn new(
        phone_util: &'a PhoneNumberUtil,
        text: &'a str,
        region_code: &str,
        leniency: Leniency,
        max_tries: u64,
    ) -> Self {
        Self {
            phone_util,
            text,
            preferred_region: region_code.to_string(),
            leniency,
            max_tries,
            search_index: 0,
        }
    }

    /// Attempts to find the next subsequence in the searched text that
    /// represents a phone number, scanning from the given byte index.
    fn find(&mut self, mut index: usize) -> Option<PhoneNumberMatch> {
        while self.max_tries > 0 {
            let matched = REG_EXPS.pattern.find_at(self.text, index)?;
            let start = matched.start();
            // Check for extra numbers at the end.
            let candidate = trim_after_first_match(
                &REG_EXPS.second_number_start_pattern,
                &self.text[start..matched.end()],
            );
            if let Some(found) = self.extract_match(candidate, start) {
                return Some(found);
            }
            // Move past the leading character of the failed candidate and
            // retry from there.
            index = start
                + candidate
                    .chars()
                    .next()
                    .map_or(1, |leading_char| leading_char.len_utf8());
            self.max_tries -= 1;
        }
        None
    }

    /// Attempts to extract a match from `candidate`, which begins at byte
    /// `offset` of the searched text.
    fn extract_match(&mut self, candidate: &'a str, offset: usize) -> Option<PhoneNumberMatch> {
        // Skip a match that is more likely to be a date.
        if REG_EXPS.slash_separated_dates.is_match(candidate) {
            return None;
        }
        // Skip potential time-stamps.
        if REG_EXPS.time_stamps.is_match(candidate) {
            let following_text = &self.text[offset + candidate.len()..];
            if REG_EXPS.time_stamps_suffix.matches_start(following_text) {
                return None;
            }
        }
        // Try to come up with a valid match given the entire candidate.
        if let Some(found) = self.parse_and_verify(candidate, offset) {
            return Some(found);
        }
        // If that failed, try to find an "inner match" - there might be a
        // phone number within this candidate.
        self.extract_inner_match(candidate, offset)
    }

    /// Attempts to extract a match from `candidate` if the whole candidate
    /// does not qualify as a match, by breaking it on likely group
    /// separators.
    fn extract_inner_match(
        &mut self,
        candidate: &'a str,
        offset: usize,
    ) -> Option<PhoneNumberMatch> {
        for possible_inner_match in &REG_EXPS.inner_matches {
            let mut is_first_match = true;
            for group_match in possible_inner_match.captures_iter(candidate) {
                if self.max_tries == 0 {
                    return None;
                }
                let whole_match = group_match.get(0)?;
                if is_first_match {
                    // We should handle any group before this one too.
                    let group = trim_after_first_match(
                        &REG_EXPS.unwanted_end_char_pattern,
                        &candidate[..whole_match.start()],
                    );
                    if let Some(found) = self.parse_and_verify(group, offset) {
                        return Some(found);
                    }
                    self.max_tries -= 1;
                    is_first_match = false;
                }
                if self.max_tries == 0 {
                    return None;
                }
                if let Some(inner) = group_match.get(1) {
                    let group = trim_after_first_match(
                        &REG_EXPS.unwanted_end_char_pattern,
                        inner.as_str(),
                    );
                    if let Some(found) = self.parse_and_verify(group, offset + inner.start()) {
                        return Some(found);
                    }
                    self.max_tries -= 1;
                }
            }
        }
        None
    }

    /// Parses a phone number from `candidate` and verifies it matches the
    /// requested leniency. If parsing and verification succeed, a
    /// corresponding match is returned, otherwise this method returns None.
    fn parse_and_verify(&mut self, candidate: &'a str, offset: usize) -> Option<PhoneNumberMatch> {
        // Check the candidate doesn't contain any formatting which would
        // indicate that it really isn't a phone number.
        if !REG_EXPS.matching_brackets.full_match(candidate)
            || REG_EXPS.pub_pages.is_match(candidate)
        {
            return None;
        }

        // If leniency is set to Valid or stricter, we also want to skip
        // numbers that are surrounded by latin alphabetic characters, to
        // skip cases like abc8005001234 or 8005001234def.
        if self.leniency >= Leniency::Valid {
            // If the candidate is not at the start of the text, and does not
            // start with phone-number punctuation, check the previous
            // character.
            if offset > 0 && !REG_EXPS.lead_class_pattern.matches_start(candidate) {
                if let Some(previous_char) = self.text[..offset].chars().next_back() {
                    if is_invalid_punctuation_symbol(previous_char)
                        || is_latin_letter(previous_char)
                    {
                        return None;
                    }
                }
            }
            let last_char_index = offset + candidate.len();
            if let Some(next_char) = self.text[last_char_index..].chars().next() {
                if is_invalid_punctuation_symbol(next_char) || is_latin_letter(next_char) {
                    return None;
                }
            }
        }

        let mut number = self
            .phone_util
            .parse_and_keep_raw_input(candidate, &self.preferred_region)
            .ok()?;
        if !self.leniency.verify(&number, candidate, self.phone_util) {
            return None;
        }
        // The raw input parsing artifacts are not part of the match contract;
        // callers get the matched substring through the match itself.
        number.country_code_source = None;
        number.raw_input = None;
        number.preferred_domestic_carrier_code = None;
        PhoneNumberMatch::new(offset, candidate.to_string(), number).ok()
    }
}

impl<'a> Iterator for PhoneNumberMatcher<'a> {
    type Item = PhoneNumberMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.find(self.search_index)?;
        self.search_index = found.end();
        Some(found)
    }
}

/// Trims away any characters after the first match of `pattern` in
/// `candidate`, returning the trimmed version.
fn trim_after_first_match<'a>(pattern: &Regex, candidate: &'a str) -> &'a str {
    match pattern.find(candidate) {
        Some(trailing_chars_match) => &candidate[..trailing_chars_match.start()],
        None => candidate,
    }
}

/// Helper method to determine if a character is a latin-script letter or
/// not. For our purposes, combining marks should also return true since we
/// assume they have been added to a preceding latin character.
pub(super) fn is_latin_letter(letter: char) -> bool {
    let code_point = letter as u32;
    if letter.is_alphabetic() {
        // Basic Latin through Latin Extended-B, plus Latin Extended
        // Additional.
        code_point < 0x0250 || (0x1E00..=0x1EFF).contains(&code_point)
    } else {
        // Combining marks are a subset of non-spacing-mark.
        (0x0300..=0x036F).contains(&code_point)
    }
}

pub(super) fn is_invalid_punctuation_symbol(character: char) -> bool {
    character == '%'
        || REG_EXPS
            .currency_symbol_pattern
            .is_match(character.encode_utf8(&mut [0; 4]))
}

pub(super) fn contains_only_valid_x_chars(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
) -> bool {
    // The characters 'x' and 'X' can be (1) a carrier code, in which case
    // they always precede the national significant number or (2) an
    // extension sign, in which case they always precede the extension
    // number. We assume a carrier code is more than 1 digit, so the first
    // case has to have more than 1 consecutive 'x' or 'X', whereas the
    // second case can only have exactly 1 'x' or 'X'.
    let mut chars = candidate.char_indices().peekable();
    while let Some((index, character)) = chars.next() {
        let Some(&(next_index, next_char)) = chars.peek() else {
            break;
        };
        if character != 'x' && character != 'X' {
            continue;
        }
        if next_char == 'x' || next_char == 'X' {
            // This is the carrier code case, in which the 'X's always
            // precede the national significant number.
            chars.next();
            let rest = &candidate[next_index..];
            if !matches!(
                util.is_number_match_with_one_string(number, rest),
                Ok(MatchType::NsnMatch)
            ) {
                return false;
            }
        } else if util.normalize_digits_only(&candidate[index..]) != number.extension() {
            // This is the extension sign case, in which the 'x' or 'X'
            // should always precede the extension number.
            return false;
        }
    }
    true
}

pub(super) fn contains_more_than_one_slash_in_national_number(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
) -> bool {
    let Some(first_slash_index) = candidate.find('/') else {
        return false;
    };
    let after_first_slash = &candidate[first_slash_index + 1..];
    let Some(second_slash_offset) = after_first_slash.find('/') else {
        return false;
    };

    // If the first slash is after the country calling code, this is a
    // candidate like "+49/69/1234567", where the slashes act as grouping
    // punctuation rather than marking several numbers.
    let candidate_has_country_code = matches!(
        number.country_code_source(),
        CountryCodeSource::FromNumberWithPlusSign | CountryCodeSource::FromNumberWithoutPlusSign
    );
    let mut country_code_buffer = itoa::Buffer::new();
    let country_code = country_code_buffer.format(number.country_code());
    if candidate_has_country_code
        && util.normalize_digits_only(&candidate[..first_slash_index]) == country_code
    {
        // Any more slashes and this is guaranteed to be two numbers.
        return after_first_slash[second_slash_offset + 1..].contains('/');
    }
    true
}

pub(super) fn is_national_prefix_present_if_required(
    number: &PhoneNumber,
    util: &PhoneNumberUtil,
) -> bool {
    // First, check how we deduced the country code. If it was written in
    // international format, then the national prefix is not required.
    if number.country_code_source() != CountryCodeSource::FromDefaultCountry {
        return true;
    }
    let phone_number_region = util.get_region_code_for_country_code(number.country_code());
    let Some(metadata) = util.metadata_for_region(phone_number_region) else {
        return true;
    };
    // Check if a national prefix should be present when formatting this
    // number.
    let national_number = PhoneNumberUtil::get_national_significant_number(number);
    let format_rule =
        match util.choose_formatting_pattern_for_number(&metadata.number_format, &national_number) {
            Ok(format_rule) => format_rule,
            Err(err) => {
                warn!("Invalid metadata format pattern: {}", err);
                return false;
            }
        };
    let Some(format_rule) = format_rule else {
        return true;
    };
    // To do this, we check that a national prefix formatting rule was
    // present and that it wasn't just the first group capturing pattern,
    // e.g. "(\d+)".
    if format_rule.national_prefix_formatting_rule().is_empty() {
        return true;
    }
    if format_rule.national_prefix_optional_when_formatting {
        // The national prefix is optional in these cases, so we don't need
        // to check if it was present.
        return true;
    }
    if util.formatting_rule_has_first_group_only(format_rule.national_prefix_formatting_rule()) {
        // National prefix not needed for this number.
        return true;
    }
    // Normalize the remainder and check if we found a national prefix
    // and/or carrier code at the start of the raw input.
    let mut raw_input = util.normalize_digits_only(number.raw_input());
    match util.maybe_strip_national_prefix_and_carrier_code(metadata, &mut raw_input) {
        Ok((stripped, _carrier_code)) => stripped,
        Err(err) => {
            warn!("Invalid metadata national prefix pattern: {}", err);
            false
        }
    }
}

/// The national significant number split into the digit groups a formatter
/// would emit, derived from the international format where the groups are
/// joined by '-'.
fn get_national_number_groups(util: &PhoneNumberUtil, number: &PhoneNumber) -> Option<Vec<String>> {
    // This will be in the form "tel:+CC-DG1-DG2-DGX;ext=EXT" where DG1..DGX
    // represents groups of digits.
    let formatted = util.format(number, PhoneNumberFormat::RFC3966).ok()?;
    let rfc3966_format: &str = &formatted;
    // We remove the extension part from the formatted string before
    // splitting it into different groups.
    let end_index = rfc3966_format.find(';').unwrap_or(rfc3966_format.len());
    // The country code will have a '-' following it.
    let start_index = rfc3966_format.find('-').map_or(0, |index| index + 1);
    if start_index > end_index {
        return None;
    }
    Some(
        rfc3966_format[start_index..end_index]
            .split('-')
            .map(str::to_owned)
            .collect(),
    )
}

/// As above, but formatting the national significant number with the given
/// (alternate) formatting pattern instead.
fn get_national_number_groups_for_pattern(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    formatting_pattern: &NumberFormat,
) -> Option<Vec<String>> {
    let national_significant_number = PhoneNumberUtil::get_national_significant_number(number);
    let formatted = util
        .format_nsn_using_pattern(
            &national_significant_number,
            formatting_pattern,
            PhoneNumberFormat::RFC3966,
        )
        .ok()?;
    Some(formatted.split('-').map(str::to_owned).collect())
}

pub(super) fn check_number_grouping_is_valid(
    number: &PhoneNumber,
    candidate: &str,
    util: &PhoneNumberUtil,
    checker: NumberGroupingChecker,
) -> bool {
    // Digits replaced with their ASCII values, other characters untouched.
    let normalized_candidate = dec_from_char::normalize_decimals(candidate);
    if let Some(formatted_number_groups) = get_national_number_groups(util, number) {
        if checker(util, number, &normalized_candidate, &formatted_number_groups) {
            return true;
        }
    }
    // If this didn't pass, see if there are any alternate formats that
    // match, and try them instead.
    let Some(alternate_formats) = util.alternate_formats_for_country_code(number.country_code())
    else {
        return false;
    };
    let national_significant_number = PhoneNumberUtil::get_national_significant_number(number);
    for alternate_format in alternate_formats {
        if let Some(leading_digits) = alternate_format.leading_digits_pattern.first() {
            // There is only one leading digits pattern for alternate
            // formats.
            let Ok(pattern) = REG_EXPS.regex_cache.get_regex(leading_digits) else {
                continue;
            };
            if !pattern.matches_start(&national_significant_number) {
                // Leading digits don't match; skip this format.
                continue;
            }
        }
        let Some(formatted_number_groups) =
            get_national_number_groups_for_pattern(util, number, alternate_format)
        else {
            continue;
        };
        if checker(util, number, &normalized_candidate, &formatted_number_groups) {
            return true;
        }
    }
    false
}

pub(super) fn all_number_groups_remain_grouped(
    util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_number_groups: &[String],
) -> bool {
    let mut from_index = 0;
    if number.country_code_source() != CountryCodeSource::FromDefaultCountry {
        // First skip the country code if the normalized candidate contained
        // it.
        let mut country_code_buffer = itoa::Buffer::new();
        let country_code = country_code_buffer.format(number.country_code());
        if let Some(index) = normalized_candidate.find(country_code) {
            from_index = index + country_code.len();
        }
    }
    // Check each group of consecutive digits are not broken into separate
    // groupings.
    for (i, group) in formatted_number_groups.iter().enumerate() {
        // Fails if the substring of the candidate starting from from_index
        // doesn't contain the consecutive digits in this group.
        let Some(group_offset) = normalized_candidate[from_index..].find(group.as_str()) else {
            return false;
        };
        let group_start = from_index + group_offset;
        from_index = group_start + group.len();
        if i == 0 && from_index < normalized_candidate.len() {
            // We are at the position right after the NDC. We get the region
            // used for formatting information based on the country code in
            // the phone number, rather than the number itself, as we do not
            // need to distinguish between different countries with the same
            // country calling code and this is faster.
            let region = util.get_region_code_for_country_code(number.country_code());
            if util.get_ndd_prefix_for_region(region, true).is_some()
                && normalized_candidate[from_index..]
                    .chars()
                    .next()
                    .is_some_and(|next_char| next_char.is_ascii_digit())
            {
                // There is no formatting symbol after the NDC. In this case,
                // we only accept the number if there is no formatting symbol
                // at all in the number, except for extensions. This is only
                // important for countries with national prefixes.
                let national_significant_number =
                    PhoneNumberUtil::get_national_significant_number(number);
                return normalized_candidate[group_start..]
                    .starts_with(&national_significant_number);
            }
        }
    }
    // The check here makes sure that we haven't mistakenly already used the
    // extension to match the last group of the subscriber number. Note the
    // extension cannot have formatting in-between digits.
    normalized_candidate[from_index..].contains(number.extension())
}

pub(super) fn all_number_groups_are_exactly_present(
    _util: &PhoneNumberUtil,
    number: &PhoneNumber,
    normalized_candidate: &str,
    formatted_number_groups: &[String],
) -> bool {
    let candidate_groups: Vec<&str> = REG_EXPS
        .non_digits_pattern
        .split(normalized_candidate)
        .collect();
    if candidate_groups.is_empty() {
        return false;
    }
    // First we check if the national significant number is formatted as a
    // block. We use contains and not equals, since the national significant
    // number can be present with a prefix such as a national number prefix,
    // or the country code itself.
    if candidate_groups.len() == 1 {
        return true;
    }
    // Set this to the last group, skipping it if the number has an
    // extension.
    let last_group_index = if number.has_extension() {
        candidate_groups.len() - 2
    } else {
        candidate_groups.len() - 1
    };
    let national_significant_number = PhoneNumberUtil::get_national_significant_number(number);
    if candidate_groups[last_group_index].contains(&national_significant_number) {
        return true;
    }
    // Starting from the end, go through in reverse, excluding the first
    // group, and check the candidate and number groups are the same.
    let mut candidate_index = last_group_index as isize;
    let mut formatted_index = formatted_number_groups.len() as isize - 1;
    while formatted_index > 0 && candidate_index >= 0 {
        if candidate_groups[candidate_index as usize]
            != formatted_number_groups[formatted_index as usize].as_str()
        {
            return false;
        }
        formatted_index -= 1;
        candidate_index -= 1;
    }
    // Now check the first group. There may be a national prefix at the
    // start, so we only check that the candidate group ends with the
    // formatted number group.
    candidate_index >= 0
        && candidate_groups[candidate_index as usize]
            .ends_with(formatted_number_groups[0].as_str())
}
