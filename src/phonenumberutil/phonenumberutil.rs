use std::{borrow::Cow, cmp::max, collections::HashSet};

use log::{trace, warn};
use regex::Regex;

use crate::{
    i18n,
    interfaces::MatcherApi,
    macros::owned_from_cow_or,
    metadata::{
        compiled_store, MetadataStore, NumberFormat, PhoneMetadata, PhoneNumberDesc,
        ShortNumberMetadata,
    },
    phonenumber::{CountryCodeSource, PhoneNumber},
    phonenumbermatcher::{Leniency, PhoneNumberMatcher},
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::InvalidRegexError,
};

use super::{
    enums::{MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType},
    errors::{
        ExtractNumberError, GetExampleNumberError, GetExampleNumberErrorInternal, NotANumberError,
        ParseError, ParseErrorInternal, ValidationResultErr,
    },
    helper_constants::{
        DEFAULT_EXTN_PREFIX, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        RFC3966_EXTN_PREFIX,
    },
    helper_functions::{
        self, copy_core_fields_only, get_supported_types_for_metadata,
        is_national_number_suffix_of_the_other, normalize_helper,
        prefix_number_with_country_calling_code, test_number_length,
        test_number_length_with_unknown_type,
    },
    regexps::PhoneNumberRegExpsAndMappings,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, InvalidRegexError>;

pub struct PhoneNumberUtil {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// Helper class holding useful regular expressions and character mappings.
    reg_exps: PhoneNumberRegExpsAndMappings,

    /// The compiled-in numbering plans, keyed by region and by country
    /// calling code.
    store: MetadataStore,
}

impl PhoneNumberUtil {
    pub(super) fn new() -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            reg_exps: PhoneNumberRegExpsAndMappings::new(),
            store: compiled_store(),
        }
    }

    pub fn get_supported_regions(&self) -> Vec<&str> {
        self.store.supported_regions().collect()
    }

    pub fn get_supported_types_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<PhoneNumberType>> {
        self.store
            .metadata_for_region(region_code)
            .map(|metadata| {
                let mut types = HashSet::new();
                get_supported_types_for_metadata(metadata, &mut types);
                types
            })
            .or_else(|| {
                warn!("Invalid or unknown region code provided: {}", region_code);
                None
            })
    }

    pub(crate) fn starts_with_plus_chars_pattern(&self, phone_number: &str) -> bool {
        self.reg_exps
            .plus_chars_pattern
            .consume_start(phone_number)
            .is_some()
    }

    pub(crate) fn formatting_rule_has_first_group_only(
        &self,
        national_prefix_formatting_rule: &str,
    ) -> bool {
        return national_prefix_formatting_rule.is_empty()
            || self
                .reg_exps
                .formatting_rule_has_first_group_only_regex
                .full_match(national_prefix_formatting_rule);
    }

    pub fn get_ndd_prefix_for_region(
        &self,
        region_code: &str,
        strip_non_digits: bool,
    ) -> Option<String> {
        self.store
            .metadata_for_region(region_code)
            .and_then(|metadata| {
                let mut prefix = metadata.national_prefix().to_owned();
                if strip_non_digits {
                    prefix = prefix.replace("~", "");
                }
                Some(prefix)
            })
            .or_else(|| {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                None
            })
    }

    fn is_valid_region_code(&self, region_code: &str) -> bool {
        return self.store.is_valid_region_code(region_code);
    }

    pub(crate) fn metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.store.metadata_for_region(region_code)
    }

    pub(crate) fn alternate_formats_for_country_code(
        &self,
        country_calling_code: i32,
    ) -> Option<&[NumberFormat]> {
        self.store
            .alternate_formats_for_country_code(country_calling_code)
    }

    pub(crate) fn region_codes_for_country_code(&self, country_calling_code: i32) -> &[String] {
        self.store.region_codes_for_country_code(country_calling_code)
    }

    pub(crate) fn short_metadata_for_region(
        &self,
        region_code: &str,
    ) -> Option<&ShortNumberMetadata> {
        self.store.short_metadata_for_region(region_code)
    }

    /// Returns the region code that matches the specific country calling code.
    /// In the case of no region code being found, the unknown region code will
    /// be returned.
    pub fn get_region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        return self.store.region_code_for_country_code(country_calling_code);
    }

    pub fn get_country_code_for_region(&self, region_code: &str) -> i32 {
        self.store
            .metadata_for_region(region_code)
            .map(|metadata| metadata.country_code())
            .unwrap_or_else(|| {
                warn!("Invalid or unknown region code ({}) provided.", region_code);
                0
            })
    }

    pub fn format<'b>(
        &self,
        phone_number: &'b PhoneNumber,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        if phone_number.national_number() == 0 {
            let raw_input = phone_number.raw_input();
            if !raw_input.is_empty() {
                // Unparseable numbers that kept their raw input just use that.
                // This is the only case where a number can be formatted as E164
                // without a leading '+' symbol (but the original number wasn't
                // parseable anyway).
                return Ok(Cow::Borrowed(raw_input));
            }
        }
        let country_calling_code = phone_number.country_code();
        let mut formatted_number = Self::get_national_significant_number(phone_number);

        if matches!(number_format, PhoneNumberFormat::E164) {
            // Early exit for E164 case (even if the country calling code is
            // invalid) since no formatting of the national number needs to be
            // applied. Extensions are not formatted.
            prefix_number_with_country_calling_code(
                country_calling_code,
                PhoneNumberFormat::E164,
                &mut formatted_number,
            );
            return Ok(Cow::Owned(formatted_number));
        }
        // Note here that all NANPA formatting rules are contained by US, so we
        // use that to format NANPA numbers. The same applies to Russian Fed
        // regions - rules are contained by Russia.
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let metadata = self.store.metadata_for_region(region_code);

        if let Some(metadata) = metadata {
            if let Cow::Owned(s) = self.format_nsn(&formatted_number, metadata, number_format)? {
                formatted_number = s;
            }
            if let Some(formatted_extension) =
                Self::get_formatted_extension(phone_number, metadata, number_format)
            {
                formatted_number.push_str(&formatted_extension);
            }
            prefix_number_with_country_calling_code(
                country_calling_code,
                number_format,
                &mut formatted_number,
            );
        }
        Ok(Cow::Owned(formatted_number))
    }

    pub fn get_national_significant_number(phone_number: &PhoneNumber) -> String {
        // If leading zero(s) have been set, we prefix this now. Note this is
        // not a national prefix. Ensure the number of leading zeros is at
        // least 0 so we don't crash in the case of malicious input.
        let zeros_start = if phone_number.italian_leading_zero() {
            "0".repeat(max(phone_number.number_of_leading_zeros(), 0) as usize)
        } else {
            "".to_string()
        };

        let mut buf = itoa::Buffer::new();
        let national_number = buf.format(phone_number.national_number());

        return fast_cat::concat_str!(&zeros_start, national_number);
    }

    fn format_nsn<'b>(
        &self,
        phone_number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        self.format_nsn_with_carrier(phone_number, metadata, number_format, "")
    }

    fn format_nsn_with_carrier<'b>(
        &self,
        number: &'b str,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<Cow<'b, str>> {
        // When the intl_number_formats exists, we use that to format national
        // number for the INTERNATIONAL format instead of using the
        // number_formats.
        let available_formats = if metadata.intl_number_format.len() == 0
            || number_format == PhoneNumberFormat::National
        {
            &metadata.number_format
        } else {
            &metadata.intl_number_format
        };
        let formatting_pattern =
            self.choose_formatting_pattern_for_number(available_formats, number)?;
        if let Some(formatting_pattern) = formatting_pattern {
            self.format_nsn_using_pattern_with_carrier(
                number,
                formatting_pattern,
                number_format,
                carrier_code,
            )
        } else {
            Ok(Cow::Borrowed(number))
        }
    }

    pub(crate) fn choose_formatting_pattern_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>> {
        for format in available_formats {
            if !format
                .leading_digits_pattern
                // We always use the last leading_digits_pattern, as it is the
                // most detailed.
                .last()
                .map(|last| {
                    self.reg_exps
                        .regexp_cache
                        .get_regex(&last)
                        .and_then(|regex| Ok(regex.consume_start(national_number).is_some()))
                })
                // default not continue
                .unwrap_or(Ok(true))?
            {
                continue;
            }
            let pattern_to_match = self.reg_exps.regexp_cache.get_regex(format.pattern())?;
            if pattern_to_match.full_match(national_number) {
                return Ok(Some(format));
            }
        }
        return Ok(None);
    }

    // Note that carrier_code is optional - if an empty string, no carrier code
    // replacement will take place.
    fn format_nsn_using_pattern_with_carrier<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
        carrier_code: &str,
    ) -> Result<Cow<'b, str>> {
        let mut number_format_rule = Cow::Borrowed(formatting_pattern.format());
        if matches!(number_format, PhoneNumberFormat::National)
            && carrier_code.len() > 0
            && formatting_pattern
                .domestic_carrier_code_formatting_rule()
                .len()
                > 0
        {
            // Replace the $CC in the formatting rule with the desired carrier
            // code.
            let mut carrier_code_formatting_rule =
                Cow::Borrowed(formatting_pattern.domestic_carrier_code_formatting_rule());

            if let Cow::Owned(s) = self
                .reg_exps
                .carrier_code_pattern
                .replace(&carrier_code_formatting_rule, carrier_code)
            {
                carrier_code_formatting_rule = Cow::Owned(s);
            }
            if let Cow::Owned(s) = self
                .reg_exps
                .first_group_capturing_pattern
                .replace(&number_format_rule, carrier_code_formatting_rule)
            {
                number_format_rule = Cow::Owned(s);
            }
        } else {
            // Use the national prefix formatting rule instead.
            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();

            if matches!(number_format, PhoneNumberFormat::National)
                && national_prefix_formatting_rule.len() > 0
            {
                // Apply the national_prefix_formatting_rule as the
                // formatting_pattern contains only information on how the
                // national significant number should be formatted at this
                // point.
                if let Cow::Owned(s) = self
                    .reg_exps
                    .first_group_capturing_pattern
                    .replace(&number_format_rule, national_prefix_formatting_rule)
                {
                    number_format_rule = Cow::Owned(s);
                }
            }
        }

        let pattern_to_match = self
            .reg_exps
            .regexp_cache
            .get_regex(formatting_pattern.pattern())?;

        let mut formatted_number =
            pattern_to_match.replace_all(national_number, number_format_rule);

        if matches!(number_format, PhoneNumberFormat::RFC3966) {
            // First consume any leading punctuation, if any was present.
            if let Some(rest) = self
                .reg_exps
                .separator_pattern
                .consume_start(&formatted_number)
            {
                formatted_number = Cow::Owned(rest.to_string());
            }
            // Then replace all separators with a "-".
            if let Cow::Owned(s) = self
                .reg_exps
                .separator_pattern
                .replace_all(&formatted_number, "-")
            {
                formatted_number = Cow::Owned(s)
            }
        }
        Ok(formatted_number)
    }

    /// Simple wrapper of format_nsn_using_pattern_with_carrier for the common
    /// case of no carrier code.
    pub(crate) fn format_nsn_using_pattern<'b>(
        &self,
        national_number: &'b str,
        formatting_pattern: &NumberFormat,
        number_format: PhoneNumberFormat,
    ) -> Result<Cow<'b, str>> {
        self.format_nsn_using_pattern_with_carrier(
            national_number,
            formatting_pattern,
            number_format,
            "",
        )
    }

    // Returns the formatted extension of a phone number, if the phone number
    // had an extension specified else None.
    fn get_formatted_extension(
        phone_number: &PhoneNumber,
        metadata: &PhoneMetadata,
        number_format: PhoneNumberFormat,
    ) -> Option<String> {
        if !phone_number.has_extension() || phone_number.extension().is_empty() {
            return None;
        }

        let prefix = if matches!(number_format, PhoneNumberFormat::RFC3966) {
            RFC3966_EXTN_PREFIX
        } else if metadata.has_preferred_extn_prefix() {
            metadata.preferred_extn_prefix()
        } else {
            DEFAULT_EXTN_PREFIX
        };
        Some(fast_cat::concat_str!(prefix, phone_number.extension()))
    }

    pub fn format_by_pattern(
        &self,
        phone_number: &PhoneNumber,
        number_format: PhoneNumberFormat,
        user_defined_formats: &[NumberFormat],
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        // Note get_region_code_for_country_code() is used because formatting
        // information for regions which share a country calling code is
        // contained by only one region for performance reasons. For example,
        // for NANPA regions it will be contained in the metadata for US.
        let national_significant_number = Self::get_national_significant_number(phone_number);
        let region_code = self.get_region_code_for_country_code(country_calling_code);
        let Some(metadata) = self.store.metadata_for_region(region_code) else {
            return Ok(national_significant_number);
        };

        let formatting_pattern = self.choose_formatting_pattern_for_number(
            user_defined_formats,
            &national_significant_number,
        )?;

        let mut formatted_number = if let Some(formatting_pattern) = formatting_pattern {
            // Before we do a replacement of the national prefix pattern $NP
            // with the national prefix, we need to copy the rule so that
            // subsequent replacements for different numbers have the
            // appropriate national prefix.
            let mut num_format_copy = formatting_pattern.clone();

            let national_prefix_formatting_rule =
                formatting_pattern.national_prefix_formatting_rule();
            if !national_prefix_formatting_rule.is_empty() {
                let national_prefix = metadata.national_prefix();
                if !national_prefix.is_empty() {
                    // Replace $NP with national prefix and $FG with the first
                    // group ($1).
                    let rule = national_prefix_formatting_rule
                        .replace("$NP", national_prefix)
                        .replace("$FG", "$1");
                    num_format_copy.set_national_prefix_formatting_rule(rule);
                } else {
                    // We don't want to have a rule for how to format the
                    // national prefix if there isn't one.
                    num_format_copy.clear_national_prefix_formatting_rule();
                }
            }
            self.format_nsn_using_pattern(
                &national_significant_number,
                &num_format_copy,
                number_format,
            )?
            .to_string()
        } else {
            national_significant_number
        };
        if let Some(extension) =
            Self::get_formatted_extension(phone_number, metadata, PhoneNumberFormat::National)
        {
            formatted_number.push_str(&extension);
        }
        prefix_number_with_country_calling_code(
            country_calling_code,
            number_format,
            &mut formatted_number,
        );
        Ok(formatted_number)
    }

    pub fn format_national_number_with_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        carrier_code: &str,
    ) -> Result<String> {
        let country_calling_code = phone_number.country_code();
        let national_significant_number = Self::get_national_significant_number(phone_number);
        let region_code = self.get_region_code_for_country_code(country_calling_code);

        // Note get_region_code_for_country_code() is used because formatting
        // information for regions which share a country calling code is
        // contained by only one region for performance reasons. For example,
        // for NANPA regions it will be contained in the metadata for US.
        let Some(metadata) = self.store.metadata_for_region(region_code) else {
            return Ok(national_significant_number);
        };

        let mut formatted_number = owned_from_cow_or!(
            self.format_nsn_with_carrier(
                &national_significant_number,
                metadata,
                PhoneNumberFormat::National,
                carrier_code,
            )?,
            national_significant_number
        );
        if let Some(formatted_extension) =
            Self::get_formatted_extension(phone_number, metadata, PhoneNumberFormat::National)
        {
            formatted_number.push_str(&formatted_extension);
        }

        prefix_number_with_country_calling_code(
            country_calling_code,
            PhoneNumberFormat::National,
            &mut formatted_number,
        );

        Ok(formatted_number)
    }

    pub fn format_national_number_with_preferred_carrier_code(
        &self,
        phone_number: &PhoneNumber,
        fallback_carrier_code: &str,
    ) -> Result<String> {
        let carrier_code = if !phone_number.preferred_domestic_carrier_code().is_empty() {
            phone_number.preferred_domestic_carrier_code()
        } else {
            fallback_carrier_code
        };
        self.format_national_number_with_carrier_code(phone_number, carrier_code)
    }

    /// Returns the type of the provided number, or `Unknown` when no category
    /// pattern of its region matches.
    pub fn get_number_type(&self, phone_number: &PhoneNumber) -> PhoneNumberType {
        match self.get_number_type_internal(phone_number) {
            Ok(number_type) => number_type,
            Err(err) => {
                warn!("Invalid metadata pattern while resolving number type: {}", err);
                PhoneNumberType::Unknown
            }
        }
    }

    fn get_number_type_internal(&self, phone_number: &PhoneNumber) -> Result<PhoneNumberType> {
        let region_code = self.get_region_code_for_number_internal(phone_number)?;
        let Some(metadata) = self.store.metadata_for_region(region_code) else {
            return Ok(PhoneNumberType::Unknown);
        };
        let national_significant_number = Self::get_national_significant_number(phone_number);
        Ok(self.get_number_type_helper(&national_significant_number, metadata))
    }

    /// Returns the region where a phone number is from, or the unknown region
    /// code when no region matches. This could be used for geocoding at the
    /// region level.
    pub fn get_region_code_for_number(&self, phone_number: &PhoneNumber) -> &str {
        match self.get_region_code_for_number_internal(phone_number) {
            Ok(region_code) => region_code,
            Err(err) => {
                warn!("Invalid metadata leading digits pattern: {}", err);
                i18n::RegionCode::get_unknown()
            }
        }
    }

    fn get_region_code_for_number_internal(&self, phone_number: &PhoneNumber) -> Result<&str> {
        let country_calling_code = phone_number.country_code();
        let region_codes = self.store.region_codes_for_country_code(country_calling_code);
        if region_codes.len() == 0 {
            trace!(
                "Missing/invalid country calling code ({})",
                country_calling_code
            );
            return Ok(i18n::RegionCode::get_unknown());
        }
        if region_codes.len() == 1 {
            return Ok(&region_codes[0]);
        }
        self.get_region_code_for_number_from_region_list(phone_number, region_codes)
    }

    fn get_region_code_for_number_from_region_list<'b>(
        &self,
        phone_number: &PhoneNumber,
        region_codes: &'b [String],
    ) -> Result<&'b str> {
        let national_number = Self::get_national_significant_number(phone_number);
        for code in region_codes {
            // Metadata cannot be empty because the region codes come from the
            // country calling code map.
            let Some(metadata) = self.store.metadata_for_region(code) else {
                continue;
            };
            if metadata.has_leading_digits() {
                if self
                    .reg_exps
                    .regexp_cache
                    .get_regex(metadata.leading_digits())?
                    .matches_start(&national_number)
                {
                    return Ok(code);
                }
            } else if self.get_number_type_helper(&national_number, metadata)
                != PhoneNumberType::Unknown
            {
                return Ok(code);
            }
        }
        return Ok(i18n::RegionCode::get_unknown());
    }

    fn get_number_type_helper(
        &self,
        national_number: &str,
        metadata: &PhoneMetadata,
    ) -> PhoneNumberType {
        if !self.is_number_matching_desc(national_number, &metadata.general_desc) {
            trace!("Number '{national_number}' type unknown - doesn't match general national number pattern");
            return PhoneNumberType::Unknown;
        }
        if self.is_number_matching_desc(national_number, &metadata.premium_rate) {
            trace!("Number '{national_number}' is a premium number.");
            return PhoneNumberType::PremiumRate;
        }
        if self.is_number_matching_desc(national_number, &metadata.toll_free) {
            trace!("Number '{national_number}' is a toll-free number.");
            return PhoneNumberType::TollFree;
        }
        if self.is_number_matching_desc(national_number, &metadata.shared_cost) {
            trace!("Number '{national_number}' is a shared cost number.");
            return PhoneNumberType::SharedCost;
        }
        if self.is_number_matching_desc(national_number, &metadata.voip) {
            trace!("Number '{national_number}' is a VOIP (Voice over IP) number.");
            return PhoneNumberType::VoIP;
        }
        if self.is_number_matching_desc(national_number, &metadata.personal_number) {
            trace!("Number '{national_number}' is a personal number.");
            return PhoneNumberType::PersonalNumber;
        }
        if self.is_number_matching_desc(national_number, &metadata.pager) {
            trace!("Number '{national_number}' is a pager number.");
            return PhoneNumberType::Pager;
        }
        if self.is_number_matching_desc(national_number, &metadata.uan) {
            trace!("Number '{national_number}' is a UAN.");
            return PhoneNumberType::UAN;
        }
        if self.is_number_matching_desc(national_number, &metadata.voicemail) {
            trace!("Number '{national_number}' is a voicemail number.");
            return PhoneNumberType::VoiceMail;
        }

        let is_fixed_line = self.is_number_matching_desc(national_number, &metadata.fixed_line);
        if is_fixed_line {
            if metadata.same_mobile_and_fixed_line_pattern() {
                trace!(
                    "Number '{national_number}': fixed-line and mobile patterns equal,\
                 number is fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            } else if self.is_number_matching_desc(national_number, &metadata.mobile) {
                trace!(
                    "Number '{national_number}': Fixed-line and mobile patterns differ, but number is \
                        still fixed-line or mobile"
                );
                return PhoneNumberType::FixedLineOrMobile;
            }
            trace!("Number '{national_number}' is a fixed line number.");
            return PhoneNumberType::FixedLine;
        }
        // Otherwise, test to see if the number is mobile. Only do this if
        // certain that the patterns for mobile and fixed line aren't the same.
        if !metadata.same_mobile_and_fixed_line_pattern()
            && self.is_number_matching_desc(national_number, &metadata.mobile)
        {
            trace!("Number '{national_number}' is a mobile number.");
            return PhoneNumberType::Mobile;
        }
        trace!("Number'{national_number}' type unknown - doesn't match any specific number type pattern.");
        return PhoneNumberType::Unknown;
    }

    fn is_number_matching_desc(
        &self,
        national_number: &str,
        number_desc: &PhoneNumberDesc,
    ) -> bool {
        // Check if any possible number lengths are present; if so, we use them
        // to avoid checking the validation pattern if they don't match. If
        // they are absent, this means they match the general description,
        // which we have already checked before checking a specific number
        // type.
        let actual_length = national_number.len() as i32;
        if number_desc.possible_length.len() > 0
            && !number_desc.possible_length.contains(&actual_length)
        {
            return false;
        }
        // very common name, so specify mod
        helper_functions::is_match(self.matcher_api.as_ref(), national_number, number_desc)
    }

    /// Tests whether the number matches a valid pattern of its claimed region.
    /// Numbers whose region cannot be resolved are never valid.
    pub fn is_valid_number(&self, phone_number: &PhoneNumber) -> bool {
        let region_code = self.get_region_code_for_number(phone_number);
        self.is_valid_number_for_region(phone_number, region_code)
    }

    pub fn is_valid_number_for_region(
        &self,
        phone_number: &PhoneNumber,
        region_code: &str,
    ) -> bool {
        let Some(metadata) = self.store.metadata_for_region(region_code) else {
            return false;
        };
        if metadata.country_code() != phone_number.country_code() {
            return false;
        }
        let national_significant_number = Self::get_national_significant_number(phone_number);
        self.get_number_type_helper(&national_significant_number, metadata)
            != PhoneNumberType::Unknown
    }

    /// A lighter check than validity: only the country calling code and the
    /// digit count are consulted, never the per-category patterns. Local-only
    /// lengths count as possible.
    pub fn is_possible_number(&self, phone_number: &PhoneNumber) -> bool {
        self.is_possible_number_with_reason(phone_number).is_ok()
    }

    pub fn is_possible_number_for_string(
        &self,
        number: &str,
        region_dialing_from: &str,
    ) -> bool {
        match self.parse(number, region_dialing_from) {
            Ok(phone_number) => self.is_possible_number(&phone_number),
            Err(_) => false,
        }
    }

    pub fn is_possible_number_with_reason(
        &self,
        phone_number: &PhoneNumber,
    ) -> std::result::Result<NumberLengthType, ValidationResultErr> {
        self.is_possible_number_for_type_with_reason(phone_number, PhoneNumberType::Unknown)
    }

    pub fn is_possible_number_for_type_with_reason(
        &self,
        phone_number: &PhoneNumber,
        phone_number_type: PhoneNumberType,
    ) -> std::result::Result<NumberLengthType, ValidationResultErr> {
        let national_number = Self::get_national_significant_number(phone_number);
        let country_code = phone_number.country_code();
        // Note: for regions that share a country calling code, like NANPA
        // numbers, we just use the rules from the default region (US in this
        // case) since the get_region_code_for_number will not work if the
        // number is possible but not valid.
        let region_code = self.store.region_code_for_country_code(country_code);
        let Some(metadata) = self.store.metadata_for_region(region_code) else {
            return Err(ValidationResultErr::InvalidCountryCode);
        };
        if metadata.country_code() != country_code {
            return Err(ValidationResultErr::InvalidCountryCode);
        }
        test_number_length(&national_number, metadata, phone_number_type)
    }

    /// Attempts to extract a possible number from the string passed in.
    ///
    /// It starts from the beginning of the string, and skips to the first
    /// character that could signal the start of a phone number. Trailing
    /// characters that can not form part of a phone number are also removed.
    pub(crate) fn extract_possible_number<'a>(
        &self,
        number: &'a str,
    ) -> std::result::Result<&'a str, ExtractNumberError> {
        let Some(start_match) = self.reg_exps.valid_start_char_pattern.find(number) else {
            return Err(ExtractNumberError::NoValidStartCharacter);
        };
        let mut number = &number[start_match.start()..];

        // Remove trailing non-alpha non-numerical characters.
        let mut bytes_to_trim = 0;
        for char in number.chars().rev() {
            if !self
                .reg_exps
                .unwanted_end_char_pattern
                .full_match(&char.to_string())
            {
                break;
            }
            bytes_to_trim += char.len_utf8();
        }
        number = &number[..number.len() - bytes_to_trim];
        if number.is_empty() {
            return Err(ExtractNumberError::NotANumber);
        }

        // Check for extra numbers at the end.
        if let Some(captures) = self
            .reg_exps
            .capture_up_to_second_number_start_pattern
            .captures(number)
        {
            if let Some(up_to_second_number) = captures.get(1) {
                number = up_to_second_number.as_str();
            }
        }
        Ok(number)
    }

    /// Checks to see if the string of characters could possibly be a phone
    /// number at all. At the moment, checks to see that the string begins with
    /// at least 2 digits, ignoring any punctuation commonly found in phone
    /// numbers. This method does not require the number to be normalized in
    /// advance - but does assume that leading non-number symbols have been
    /// removed, such as by the method extract_possible_number.
    pub fn is_viable_phone_number(&self, number: &str) -> bool {
        if number.len() < MIN_LENGTH_FOR_NSN {
            return false;
        }
        self.reg_exps.valid_phone_number_pattern.full_match(number)
    }

    /// Normalizes a string of characters representing a phone number. This
    /// converts wide-ascii and arabic-indic numerals to European numerals, and
    /// strips punctuation and alpha characters - unless there are at least
    /// three latin letters, in which case the letters are converted to their
    /// keypad digits first.
    pub(crate) fn normalize(&self, number: &mut String) {
        if self.reg_exps.valid_alpha_phone_pattern.full_match(number) {
            normalize_helper(&self.reg_exps.alpha_phone_mappings, true, number);
        } else {
            *number = self.normalize_digits_only(number);
        }
    }

    /// Normalizes a string of characters representing a phone number. This
    /// strips all characters which are not decimal digits and converts any
    /// non-ASCII decimal digit to its ASCII counterpart.
    pub fn normalize_digits_only(&self, number: &str) -> String {
        dec_from_char::normalize_decimals(number)
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect()
    }

    /// Strips any extension (as in, the part of the number dialled after the
    /// call is connected, usually indicated with extn, ext, x or similar) from
    /// the end of the number, and returns it.
    pub(crate) fn maybe_strip_extension(&self, number: &mut String) -> Option<String> {
        let captures = self.reg_exps.extn_pattern.captures(number)?;
        let whole_match = captures.get(0)?;
        // If we find a potential extension, and the number preceding this is a
        // viable number, we assume it is an extension.
        if !self.is_viable_phone_number(&number[..whole_match.start()]) {
            return None;
        }
        // The numbers are captured into groups in the regular expression.
        let extension = captures
            .iter()
            .skip(1)
            .flatten()
            .next()
            .map(|group| group.as_str().to_string());
        if extension.is_some() {
            number.truncate(whole_match.start());
        }
        extension
    }

    // Strips the IDD from the start of the number if present. Helper function
    // used by maybe_strip_international_prefix_and_normalize.
    fn parse_prefix_as_idd(&self, idd_pattern: &Regex, number: &mut String) -> bool {
        let Some(rest) = idd_pattern.consume_start(number) else {
            return false;
        };
        // Only strip this if the first digit after the match is not a 0, since
        // country calling codes cannot begin with 0.
        if let Some(captures) = self.reg_exps.capturing_digit_pattern.captures(rest) {
            let normalized_group = self.normalize_digits_only(&captures[1]);
            if normalized_group == "0" {
                return false;
            }
        }
        *number = rest.to_string();
        true
    }

    /// Strips any international prefix (such as +, 00, 011) present in the
    /// number, normalizes the resulting number, and reports the source of the
    /// country calling code if one was stripped.
    pub(crate) fn maybe_strip_international_prefix_and_normalize(
        &self,
        possible_idd_prefix: &str,
        number: &mut String,
    ) -> Result<CountryCodeSource> {
        if number.is_empty() {
            return Ok(CountryCodeSource::FromDefaultCountry);
        }
        if let Some(rest) = self.reg_exps.plus_chars_pattern.consume_start(number) {
            let mut rest = rest.to_string();
            // Can now normalize the rest of the number since we've consumed
            // the "+" sign at the start.
            self.normalize(&mut rest);
            *number = rest;
            return Ok(CountryCodeSource::FromNumberWithPlusSign);
        }
        // Attempt to parse the first digits as an international prefix.
        let idd_pattern = self.reg_exps.regexp_cache.get_regex(possible_idd_prefix)?;
        self.normalize(number);
        Ok(if self.parse_prefix_as_idd(&idd_pattern, number) {
            CountryCodeSource::FromNumberWithIdd
        } else {
            CountryCodeSource::FromDefaultCountry
        })
    }

    /// Strips any national prefix (such as 0, 1) present in the number. When a
    /// prefix was stripped and the pattern captured a carrier code, the code
    /// is returned as well.
    pub(crate) fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        metadata: &PhoneMetadata,
        number: &mut String,
    ) -> Result<(bool, Option<String>)> {
        let possible_national_prefix = metadata.national_prefix_for_parsing();
        if number.is_empty() || possible_national_prefix.is_empty() {
            // Early return for numbers of zero length or with no national
            // prefix possible.
            return Ok((false, None));
        }
        // Attempt to parse the first digits as a national prefix.
        let prefix_pattern = self
            .reg_exps
            .regexp_cache
            .get_regex(possible_national_prefix)?;
        let Some(prefix_captures) = prefix_pattern.captures_start(number) else {
            return Ok((false, None));
        };
        let general_desc = &metadata.general_desc;
        // Check if the original number is viable.
        let is_viable_original_number =
            helper_functions::is_match(self.matcher_api.as_ref(), number, general_desc);
        // prefix_captures.len() includes the whole match as group 0.
        let num_of_groups = prefix_captures.len() - 1;
        let transform_rule = metadata.national_prefix_transform_rule();
        let prefix_end = prefix_captures
            .get(0)
            .map(|whole| whole.end())
            .unwrap_or(0);
        if transform_rule.is_empty()
            || num_of_groups == 0
            || prefix_captures.get(num_of_groups).is_none()
        {
            // If the original number was viable, and the resultant number is
            // not, we return.
            let stripped_number = number[prefix_end..].to_string();
            if is_viable_original_number
                && !helper_functions::is_match(
                    self.matcher_api.as_ref(),
                    &stripped_number,
                    general_desc,
                )
            {
                return Ok((false, None));
            }
            let carrier_code = if num_of_groups > 0 && prefix_captures.get(num_of_groups).is_some()
            {
                prefix_captures
                    .get(1)
                    .map(|group| group.as_str().to_string())
            } else {
                None
            };
            *number = stripped_number;
            Ok((true, carrier_code))
        } else {
            // We have a transform rule and a captured group: transform the
            // prefix instead of just stripping it.
            let mut transformed_number = String::with_capacity(number.len());
            prefix_captures.expand(transform_rule, &mut transformed_number);
            transformed_number.push_str(&number[prefix_end..]);
            if is_viable_original_number
                && !helper_functions::is_match(
                    self.matcher_api.as_ref(),
                    &transformed_number,
                    general_desc,
                )
            {
                return Ok((false, None));
            }
            let carrier_code = if num_of_groups > 1 {
                prefix_captures
                    .get(1)
                    .map(|group| group.as_str().to_string())
            } else {
                None
            };
            *number = transformed_number;
            Ok((true, carrier_code))
        }
    }

    // Extracts country calling code from national_number, and returns it. It
    // assumes that the leading plus sign or IDD has already been removed.
    // Returns 0 if national_number doesn't start with a valid country calling
    // code, and leaves national_number unmodified in this case.
    pub(crate) fn extract_country_code(&self, national_number: &mut String) -> i32 {
        if national_number.is_empty() || national_number.starts_with('0') {
            // Country codes do not begin with a '0'.
            return 0;
        }
        for length in 1..=MAX_LENGTH_COUNTRY_CODE.min(national_number.len()) {
            let Ok(potential_country_code) = national_number[..length].parse::<i32>() else {
                break;
            };
            if self.store.has_country_code(potential_country_code) {
                *national_number = national_number[length..].to_string();
                return potential_country_code;
            }
        }
        0
    }

    /// Tries to extract a country calling code from a number. This method will
    /// return zero in `phone_number.country_code` if the country calling code
    /// cannot be extracted, and mutates `national_number` into the remainder.
    pub(crate) fn maybe_extract_country_code(
        &self,
        default_region_metadata: Option<&PhoneMetadata>,
        keep_raw_input: bool,
        national_number: &mut String,
        phone_number: &mut PhoneNumber,
    ) -> std::result::Result<(), ParseErrorInternal> {
        if national_number.is_empty() {
            return Err(ParseError::InvalidCountryCode.into());
        }
        // Set the default prefix to be something that will never match if
        // there is no default region.
        let possible_country_idd_prefix = default_region_metadata
            .map(|metadata| metadata.international_prefix())
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or("NonMatch");
        let country_code_source = self.maybe_strip_international_prefix_and_normalize(
            possible_country_idd_prefix,
            national_number,
        )?;
        if keep_raw_input {
            phone_number.country_code_source = Some(country_code_source);
        }
        if country_code_source != CountryCodeSource::FromDefaultCountry {
            if national_number.len() <= MIN_LENGTH_FOR_NSN {
                return Err(ParseError::TooShortAfterIdd.into());
            }
            let potential_country_code = self.extract_country_code(national_number);
            if potential_country_code != 0 {
                phone_number.country_code = potential_country_code;
                return Ok(());
            }
            // If this fails, they must be using a strange country calling code
            // that we don't recognize, or that doesn't exist.
            return Err(ParseError::InvalidCountryCode.into());
        } else if let Some(metadata) = default_region_metadata {
            // Check to see if the number starts with the country calling code
            // for the default region. If so, we remove the country calling
            // code, and do some checks on the validity of the number before
            // and after.
            let default_country_code = metadata.country_code();
            let mut buf = itoa::Buffer::new();
            let default_country_code_str = buf.format(default_country_code);
            if let Some(potential_national_number) =
                national_number.strip_prefix(default_country_code_str)
            {
                let mut potential_national_number = potential_national_number.to_string();
                let general_desc = &metadata.general_desc;
                self.maybe_strip_national_prefix_and_carrier_code(
                    metadata,
                    &mut potential_national_number,
                )?;
                // If the number was not valid before but is valid now, or if
                // it was too long before, we consider the number with the
                // country calling code stripped to be a better result and keep
                // that instead.
                if (!helper_functions::is_match(
                    self.matcher_api.as_ref(),
                    national_number,
                    general_desc,
                ) && helper_functions::is_match(
                    self.matcher_api.as_ref(),
                    &potential_national_number,
                    general_desc,
                )) || test_number_length_with_unknown_type(national_number, metadata)
                    == Err(ValidationResultErr::TooLong)
                {
                    *national_number = potential_national_number;
                    if keep_raw_input {
                        phone_number.country_code_source =
                            Some(CountryCodeSource::FromNumberWithoutPlusSign);
                    }
                    phone_number.country_code = default_country_code;
                    return Ok(());
                }
            }
        }
        // No country calling code present.
        phone_number.country_code = 0;
        Ok(())
    }

    // Checks to see that the region code used is valid, or if it is not valid,
    // that the number to parse starts with a + symbol so that we can attempt
    // to infer the region from the number.
    fn check_region_for_parsing(&self, number_to_parse: &str, default_region: &str) -> bool {
        if !self.is_valid_region_code(default_region) {
            if number_to_parse.is_empty() || !self.starts_with_plus_chars_pattern(number_to_parse)
            {
                return false;
            }
        }
        true
    }

    /// Parses a string and returns it as a phone number. This method will
    /// return an error if the number is not considered to be a possible
    /// number. Note that validation of whether the number is actually a valid
    /// number for a particular region is not performed. This can be done
    /// separately with is_valid_number.
    pub fn parse(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> std::result::Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, false, true)
            .map_err(|err| err.into_public())
    }

    /// Parses a string in the same way as `parse`, but records the raw input
    /// and the source of the country calling code in the returned number.
    pub fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: &str,
    ) -> std::result::Result<PhoneNumber, ParseError> {
        self.parse_helper(number_to_parse, default_region, true, true)
            .map_err(|err| err.into_public())
    }

    pub(crate) fn parse_helper(
        &self,
        number_to_parse: &str,
        default_region: &str,
        keep_raw_input: bool,
        check_region: bool,
    ) -> std::result::Result<PhoneNumber, ParseErrorInternal> {
        let national_number_str = self
            .extract_possible_number(number_to_parse)
            .map_err(|err| ParseErrorInternal::FailedToParse(err.into()))?;

        if !self.is_viable_phone_number(national_number_str) {
            trace!("The string supplied did not seem to be a phone number.");
            return Err(ParseErrorInternal::FailedToParse(
                NotANumberError::NotMatchedValidNumberPattern.into(),
            ));
        }

        if check_region && !self.check_region_for_parsing(national_number_str, default_region) {
            trace!("Missing or invalid default country.");
            return Err(ParseError::InvalidCountryCode.into());
        }

        let mut phone_number = PhoneNumber::new();
        if keep_raw_input {
            phone_number.raw_input = Some(number_to_parse.to_string());
        }

        let mut national_number = national_number_str.to_string();
        // Attempt to parse extension first, since it doesn't require
        // region-specific data and we want to have the non-normalised number
        // here.
        if let Some(extension) = self.maybe_strip_extension(&mut national_number) {
            phone_number.extension = Some(extension);
        }

        let mut country_metadata = self.store.metadata_for_region(default_region);

        // Check to see if the number is given in international format so we
        // know whether this number is from the default region or not.
        let mut normalized_national_number = national_number.clone();
        if let Err(err) = self.maybe_extract_country_code(
            country_metadata,
            keep_raw_input,
            &mut normalized_national_number,
            &mut phone_number,
        ) {
            // Strip the plus-char and try again. This can yield a number we
            // can parse when someone writes a second plus before the country
            // calling code, e.g. "+ +64 3 331 6005".
            let rest = self.reg_exps.plus_chars_pattern.consume_start(&national_number);
            match (&err, rest) {
                (
                    ParseErrorInternal::FailedToParse(ParseError::InvalidCountryCode),
                    Some(rest),
                ) => {
                    let mut rest_number = rest.to_string();
                    self.maybe_extract_country_code(
                        country_metadata,
                        keep_raw_input,
                        &mut rest_number,
                        &mut phone_number,
                    )?;
                    if phone_number.country_code() == 0 {
                        return Err(ParseError::InvalidCountryCode.into());
                    }
                    normalized_national_number = rest_number;
                }
                _ => return Err(err),
            }
        }

        let country_code = phone_number.country_code();
        if country_code != 0 {
            let phone_number_region = self.get_region_code_for_country_code(country_code);
            if phone_number_region != default_region {
                country_metadata = self.store.metadata_for_region(phone_number_region);
            }
        } else if let Some(metadata) = country_metadata {
            // If no extracted country calling code, use the region supplied
            // instead. Note the national number was already normalized while
            // looking for a country calling code.
            phone_number.country_code = metadata.country_code();
        } else if keep_raw_input {
            phone_number.country_code_source = None;
        }

        if normalized_national_number.len() < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }

        if let Some(metadata) = country_metadata {
            let mut potential_national_number = normalized_national_number.clone();
            let (_, carrier_code) = self
                .maybe_strip_national_prefix_and_carrier_code(
                    metadata,
                    &mut potential_national_number,
                )?;
            // We require that the NSN remaining after stripping the national
            // prefix and carrier code be of a possible length for the region.
            // Otherwise, we don't do the stripping, since the original number
            // could be a valid short number.
            match test_number_length_with_unknown_type(&potential_national_number, metadata) {
                Err(ValidationResultErr::TooShort)
                | Err(ValidationResultErr::InvalidLength)
                | Ok(NumberLengthType::IsPossibleLocalOnly) => {}
                _ => {
                    normalized_national_number = potential_national_number;
                    if keep_raw_input {
                        if let Some(carrier_code) = carrier_code {
                            phone_number.preferred_domestic_carrier_code = Some(carrier_code);
                        }
                    }
                }
            }
        }

        let normalized_national_number_length = normalized_national_number.len();
        if normalized_national_number_length < MIN_LENGTH_FOR_NSN {
            trace!("The string supplied is too short to be a phone number.");
            return Err(ParseError::TooShortNsn.into());
        }
        if normalized_national_number_length > MAX_LENGTH_FOR_NSN {
            trace!("The string supplied is too long to be a phone number.");
            return Err(ParseError::TooLongNsn.into());
        }

        Self::set_italian_leading_zeros_for_phone_number(
            &normalized_national_number,
            &mut phone_number,
        );
        let number_as_int: u64 = normalized_national_number.parse().map_err(|err| {
            ParseErrorInternal::FailedToParse(
                NotANumberError::FailedToParseNumberAsInt(err).into(),
            )
        })?;
        phone_number.national_number = number_as_int;
        Ok(phone_number)
    }

    // A helper function to set the values related to leading zeros in a
    // PhoneNumber.
    fn set_italian_leading_zeros_for_phone_number(
        national_number: &str,
        phone_number: &mut PhoneNumber,
    ) {
        // The national number is normalized at this point, so plain bytes are
        // fine.
        let bytes = national_number.as_bytes();
        if bytes.len() > 1 && bytes[0] == b'0' {
            phone_number.italian_leading_zero = true;
            let mut number_of_leading_zeros = 1;
            // Note that if the national number is all "0"s, the last "0" is
            // not counted as a leading zero.
            while number_of_leading_zeros < bytes.len() - 1
                && bytes[number_of_leading_zeros] == b'0'
            {
                number_of_leading_zeros += 1;
            }
            if number_of_leading_zeros != 1 {
                phone_number.number_of_leading_zeros = Some(number_of_leading_zeros as i32);
            }
        }
    }

    pub fn get_example_number(
        &self,
        region_code: &str,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_for_type(region_code, PhoneNumberType::FixedLine)
    }

    /// Returns a valid number of the requested type for the given region,
    /// based on the example numbers carried in the metadata.
    pub fn get_example_number_for_type(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberError> {
        self.get_example_number_internal(region_code, phone_number_type)
            .map_err(|err| err.into_public())
    }

    fn get_example_number_internal(
        &self,
        region_code: &str,
        phone_number_type: PhoneNumberType,
    ) -> std::result::Result<PhoneNumber, GetExampleNumberErrorInternal> {
        let Some(metadata) = self.store.metadata_for_region(region_code) else {
            warn!("Invalid or unknown region code ({}) provided.", region_code);
            return Err(GetExampleNumberError::InvalidRegionCode.into());
        };
        let desc = helper_functions::get_number_desc_by_type(metadata, phone_number_type);
        if !desc.has_example_number() {
            return Err(GetExampleNumberError::NoExampleNumber.into());
        }
        self.parse(desc.example_number(), region_code)
            .map_err(|err| GetExampleNumberError::FailedToParse(err).into())
    }

    /// Takes two phone numbers and compares them for equality.
    ///
    /// Returns `ExactMatch` if the country_code, NSN, presence of a leading
    /// zero for italian numbers and any extension present are the same.
    /// Returns `NsnMatch` if either or both has no region specified, and the
    /// NSNs and extensions are the same. Returns `ShortNsnMatch` if either or
    /// both has no region specified, or the region specified is the same, and
    /// one NSN could be a shorter version of the other number.
    ///
    /// For example, the numbers +1 345 657 1234 and 657 1234 are a
    /// `ShortNsnMatch`. The numbers +1 345 657 1234 and 345 657 are a
    /// `NoMatch`.
    pub fn is_number_match(
        &self,
        first_number_in: &PhoneNumber,
        second_number_in: &PhoneNumber,
    ) -> MatchType {
        // We only care about the fields that uniquely define a number, so we
        // copy these across explicitly.
        let mut first_number = PhoneNumber::new();
        copy_core_fields_only(first_number_in, &mut first_number);
        let mut second_number = PhoneNumber::new();
        copy_core_fields_only(second_number_in, &mut second_number);
        // Early exit if both had extensions and these are different.
        if first_number.has_extension()
            && second_number.has_extension()
            && first_number.extension() != second_number.extension()
        {
            return MatchType::NoMatch;
        }

        let first_number_country_code = first_number.country_code();
        let second_number_country_code = second_number.country_code();
        // Both had country calling code specified.
        if first_number_country_code != 0 && second_number_country_code != 0 {
            if first_number == second_number {
                return MatchType::ExactMatch;
            } else if first_number_country_code == second_number_country_code
                && is_national_number_suffix_of_the_other(&first_number, &second_number)
            {
                // A SHORT_NSN_MATCH occurs if there is a difference because of
                // the presence or absence of an 'Italian leading zero', the
                // presence or absence of an extension, or one NSN being a
                // shorter variant of the other.
                return MatchType::ShortNsnMatch;
            }
            // This is not a match.
            return MatchType::NoMatch;
        }
        // Checks cases where one or both country calling codes were not
        // specified. To make equality checks easier, we first set the country
        // codes to be equal.
        first_number.country_code = second_number_country_code;
        // If all else was the same, then this is an NSN_MATCH.
        if first_number == second_number {
            return MatchType::NsnMatch;
        }
        if is_national_number_suffix_of_the_other(&first_number, &second_number) {
            return MatchType::ShortNsnMatch;
        }
        MatchType::NoMatch
    }

    /// Takes two phone numbers as strings and compares them for equality. This
    /// is a convenience wrapper for `is_number_match`. No default region is
    /// known.
    pub fn is_number_match_with_two_strings(
        &self,
        first_number: &str,
        second_number: &str,
    ) -> std::result::Result<MatchType, ParseError> {
        match self.parse(first_number, i18n::RegionCode::get_unknown()) {
            Ok(first_number_as_proto) => {
                self.is_number_match_with_one_string(&first_number_as_proto, second_number)
            }
            Err(ParseError::InvalidCountryCode) => {
                // The first number has no country calling code. EXACT_MATCH is
                // no longer possible. We parse it as if the region was the
                // same as that for the second number, and if EXACT_MATCH is
                // returned, we replace this with NSN_MATCH.
                match self.parse(second_number, i18n::RegionCode::get_unknown()) {
                    Ok(second_number_as_proto) => self
                        .is_number_match_with_one_string(&second_number_as_proto, first_number),
                    Err(ParseError::InvalidCountryCode) => {
                        // Neither number carries a recognisable country
                        // calling code; compare them without one.
                        let first = self
                            .parse_helper(
                                first_number,
                                i18n::RegionCode::get_unknown(),
                                false,
                                false,
                            )
                            .map_err(|err| err.into_public())?;
                        let second = self
                            .parse_helper(
                                second_number,
                                i18n::RegionCode::get_unknown(),
                                false,
                                false,
                            )
                            .map_err(|err| err.into_public())?;
                        Ok(self.is_number_match(&first, &second))
                    }
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Takes two phone numbers and compares them for equality. This is a
    /// convenience wrapper for `is_number_match` where the second number is
    /// supplied as a string.
    pub fn is_number_match_with_one_string(
        &self,
        first_number: &PhoneNumber,
        second_number: &str,
    ) -> std::result::Result<MatchType, ParseError> {
        // First see if the second number has an implicit country calling
        // code, by attempting to parse it.
        match self.parse(second_number, i18n::RegionCode::get_unknown()) {
            Ok(second_number_as_proto) => {
                Ok(self.is_number_match(first_number, &second_number_as_proto))
            }
            Err(ParseError::InvalidCountryCode) => {
                // The second number has no country calling code. EXACT_MATCH
                // is no longer possible. We parse it as if the region was the
                // same as that for the first number, and if EXACT_MATCH is
                // returned, we replace this with NSN_MATCH.
                let first_number_region =
                    self.get_region_code_for_country_code(first_number.country_code());
                if first_number_region != i18n::RegionCode::get_unknown() {
                    let second_number_with_first_number_region =
                        self.parse(second_number, first_number_region)?;
                    let mut match_type = self
                        .is_number_match(first_number, &second_number_with_first_number_region);
                    if match_type == MatchType::ExactMatch {
                        match_type = MatchType::NsnMatch;
                    }
                    Ok(match_type)
                } else {
                    // If the first number didn't have a valid country calling
                    // code, then we parse the second number without one as
                    // well.
                    let second = self
                        .parse_helper(
                            second_number,
                            i18n::RegionCode::get_unknown(),
                            false,
                            false,
                        )
                        .map_err(|err| err.into_public())?;
                    Ok(self.is_number_match(first_number, &second))
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Returns an iterator over all phone numbers found in `text`, assuming
    /// numbers without an explicit country calling code were dialed from
    /// `default_region`. Candidates are verified at the [`Leniency::Valid`]
    /// level and the search is effectively unbounded.
    pub fn find_numbers<'b>(
        &'b self,
        text: &'b str,
        default_region: &str,
    ) -> PhoneNumberMatcher<'b> {
        self.find_numbers_with_leniency(text, default_region, Leniency::Valid, u64::MAX)
    }

    /// As [`Self::find_numbers`], with an explicit leniency level and a cap
    /// on the number of candidates examined before the sequence ends early.
    pub fn find_numbers_with_leniency<'b>(
        &'b self,
        text: &'b str,
        default_region: &str,
        leniency: Leniency,
        max_tries: u64,
    ) -> PhoneNumberMatcher<'b> {
        PhoneNumberMatcher::new(self, text, default_region, leniency, max_tries)
    }
}
