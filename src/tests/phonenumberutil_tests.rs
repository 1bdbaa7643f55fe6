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
    metadata::NumberFormat,
    phonenumber::{CountryCodeSource, PhoneNumber},
    phonenumberutil::errors::{GetExampleNumberError, ParseError, ValidationResultErr},
    MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
};

use super::{get_phone_util, region_code::RegionCode};

fn us_number() -> PhoneNumber {
    PhoneNumber {
        country_code: 1,
        national_number: 6502530000,
        ..Default::default()
    }
}

fn gb_number() -> PhoneNumber {
    PhoneNumber {
        country_code: 44,
        national_number: 2087389353,
        ..Default::default()
    }
}

fn it_number() -> PhoneNumber {
    PhoneNumber {
        country_code: 39,
        national_number: 236618300,
        italian_leading_zero: true,
        ..Default::default()
    }
}

fn nz_number() -> PhoneNumber {
    PhoneNumber {
        country_code: 64,
        national_number: 33316005,
        ..Default::default()
    }
}

#[test]
fn interchange_invalid_codepoints() {
    let phone_util = get_phone_util();

    let valid_inputs = vec![
        "+44\u{2013}2087654321", // U+2013, EN DASH
    ];
    for input in valid_inputs {
        assert_eq!(input, &dec_from_char::normalize_decimals(input));
        assert!(phone_util.is_viable_phone_number(input));
        phone_util.parse(input, RegionCode::gb()).unwrap();
    }

    let invalid_inputs = vec![
        "+44\u{96}2087654321",   // Invalid sequence
        "+44\u{fffe}2087654321", // U+FFFE
    ];
    for input in invalid_inputs {
        assert!(!phone_util.is_viable_phone_number(input));
        assert!(phone_util
            .parse(input, RegionCode::gb())
            .is_err_and(|err| matches!(err, ParseError::NotANumber(_))));
    }
}

#[test]
fn get_supported_regions() {
    let phone_util = get_phone_util();
    let regions = phone_util.get_supported_regions();
    assert!(regions.len() > 0);
    assert!(regions.contains(&RegionCode::us()));
    assert!(regions.contains(&RegionCode::gb()));
    assert!(regions.contains(&RegionCode::ao()));
    assert!(!regions.contains(&RegionCode::zz()));
}

#[test]
fn get_supported_types_for_region() {
    let phone_util = get_phone_util();
    let types = phone_util
        .get_supported_types_for_region(RegionCode::us())
        .expect("region should exist");
    assert!(types.contains(&PhoneNumberType::FixedLine));
    assert!(types.contains(&PhoneNumberType::Mobile));
    assert!(types.contains(&PhoneNumberType::TollFree));
    assert!(!types.contains(&PhoneNumberType::FixedLineOrMobile));
    assert!(!types.contains(&PhoneNumberType::Unknown));

    let types = phone_util
        .get_supported_types_for_region(RegionCode::gb())
        .expect("region should exist");
    assert!(types.contains(&PhoneNumberType::Pager));
    assert!(types.contains(&PhoneNumberType::PersonalNumber));
    assert!(!types.contains(&PhoneNumberType::UAN));

    assert!(phone_util
        .get_supported_types_for_region(RegionCode::zz())
        .is_none());
}

#[test]
fn get_instance_load_us_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util
        .metadata_for_region(RegionCode::us())
        .unwrap();
    assert_eq!(RegionCode::us(), metadata.id());
    assert_eq!(1, metadata.country_code());
    assert_eq!("011", metadata.international_prefix());
    assert!(metadata.has_national_prefix());
    assert_eq!(2, metadata.number_format.len());
    assert_eq!(
        "(\\d{3})(\\d{3})(\\d{4})",
        metadata.number_format[1].pattern()
    );
    assert_eq!("$1 $2 $3", metadata.number_format[1].format());
    assert_eq!(
        "[13-689]\\d{9}|2[0-35-9]\\d{8}",
        metadata.general_desc.national_number_pattern()
    );
    assert_eq!(
        "[13-689]\\d{9}|2[0-35-9]\\d{8}",
        metadata.fixed_line.national_number_pattern()
    );
    assert_eq!(1, metadata.general_desc.possible_length.len());
    assert_eq!(10, metadata.general_desc.possible_length[0]);
    assert_eq!(7, metadata.general_desc.possible_length_local_only[0]);
    assert_eq!("900\\d{7}", metadata.premium_rate.national_number_pattern());
    assert!(!metadata.shared_cost.has_national_number_pattern());
}

#[test]
fn get_instance_load_de_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util
        .metadata_for_region(RegionCode::de())
        .unwrap();
    assert_eq!(RegionCode::de(), metadata.id());
    assert_eq!(49, metadata.country_code());
    assert_eq!("00", metadata.international_prefix());
    assert_eq!("0", metadata.national_prefix());
    assert_eq!(3, metadata.number_format.len());
    assert_eq!(1, metadata.number_format[2].leading_digits_pattern.len());
    assert_eq!("1[57]", metadata.number_format[2].leading_digits_pattern[0]);
    assert_eq!("(\\d{4})(\\d{7,8})", metadata.number_format[2].pattern());
    assert_eq!("$1 $2", metadata.number_format[2].format());
    assert_eq!(8, metadata.general_desc.possible_length.len());
    assert_eq!(2, metadata.mobile.possible_length.len());
    assert_eq!("30123456", metadata.fixed_line.example_number());
    assert_eq!(10, metadata.toll_free.possible_length[0]);
    assert_eq!(
        "900([135])\\d{6}",
        metadata.premium_rate.national_number_pattern()
    );
}

#[test]
fn get_instance_load_br_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util
        .metadata_for_region(RegionCode::br())
        .unwrap();
    assert_eq!(55, metadata.country_code());
    assert_eq!("00(?:1[45]|2[135])", metadata.international_prefix());
    assert_eq!(
        "0(?:(1[245]|2[1-35]|31|4[13]|[56]5|99))?",
        metadata.national_prefix_for_parsing()
    );
    assert_eq!(
        "0 $CC ($1)",
        metadata.number_format[0].domestic_carrier_code_formatting_rule()
    );
}

#[test]
fn get_national_significant_number() {
    let number = us_number();
    assert_eq!(
        "6502530000",
        PhoneNumberUtil::get_national_significant_number(&number)
    );

    let number = PhoneNumber {
        country_code: 39,
        national_number: 312345678,
        ..Default::default()
    };
    assert_eq!(
        "312345678",
        PhoneNumberUtil::get_national_significant_number(&number)
    );

    let number = it_number();
    assert_eq!(
        "0236618300",
        PhoneNumberUtil::get_national_significant_number(&number)
    );
}

#[test]
fn get_national_significant_number_many_leading_zeros() {
    let number = PhoneNumber {
        country_code: 1,
        national_number: 650,
        italian_leading_zero: true,
        number_of_leading_zeros: Some(2),
        ..Default::default()
    };
    assert_eq!(
        "00650",
        PhoneNumberUtil::get_national_significant_number(&number)
    );

    // Malicious input is not allowed to crash us.
    let number = PhoneNumber {
        number_of_leading_zeros: Some(-3),
        ..number
    };
    assert_eq!(
        "650",
        PhoneNumberUtil::get_national_significant_number(&number)
    );
}

#[test]
fn get_region_code_for_country_code() {
    let phone_util = get_phone_util();
    assert_eq!(RegionCode::us(), phone_util.get_region_code_for_country_code(1));
    assert_eq!(RegionCode::gb(), phone_util.get_region_code_for_country_code(44));
    assert_eq!(RegionCode::nz(), phone_util.get_region_code_for_country_code(64));
    assert_eq!(RegionCode::br(), phone_util.get_region_code_for_country_code(55));
    assert_eq!(RegionCode::zz(), phone_util.get_region_code_for_country_code(999));
}

#[test]
fn get_country_code_for_region() {
    let phone_util = get_phone_util();
    assert_eq!(1, phone_util.get_country_code_for_region(RegionCode::us()));
    assert_eq!(64, phone_util.get_country_code_for_region(RegionCode::nz()));
    assert_eq!(244, phone_util.get_country_code_for_region(RegionCode::ao()));
    assert_eq!(0, phone_util.get_country_code_for_region(RegionCode::zz()));
}

#[test]
fn get_national_diallable_prefix() {
    let phone_util = get_phone_util();
    assert_eq!(
        Some("1".to_string()),
        phone_util.get_ndd_prefix_for_region(RegionCode::us(), false)
    );
    assert_eq!(
        Some("0".to_string()),
        phone_util.get_ndd_prefix_for_region(RegionCode::nz(), false)
    );
    // Regions with no national prefix still answer, with an empty prefix.
    assert_eq!(
        Some("".to_string()),
        phone_util.get_ndd_prefix_for_region(RegionCode::it(), false)
    );
    assert_eq!(
        None,
        phone_util.get_ndd_prefix_for_region(RegionCode::zz(), false)
    );
}

#[test]
fn get_region_code_for_number() {
    let phone_util = get_phone_util();
    assert_eq!(
        RegionCode::us(),
        phone_util.get_region_code_for_number(&us_number())
    );
    let bs_number = PhoneNumber {
        country_code: 1,
        national_number: 2423651234,
        ..Default::default()
    };
    assert_eq!(
        RegionCode::bs(),
        phone_util.get_region_code_for_number(&bs_number)
    );
    assert_eq!(
        RegionCode::gb(),
        phone_util.get_region_code_for_number(&gb_number())
    );
    let invalid_country_code = PhoneNumber {
        country_code: 999,
        national_number: 12345678,
        ..Default::default()
    };
    assert_eq!(
        RegionCode::get_unknown(),
        phone_util.get_region_code_for_number(&invalid_country_code)
    );
}

#[test]
fn get_example_number() {
    let phone_util = get_phone_util();
    let number = phone_util.get_example_number(RegionCode::us()).unwrap();
    assert_eq!(1, number.country_code());
    assert_eq!(1212345678, number.national_number());

    let number = phone_util
        .get_example_number_for_type(RegionCode::us(), PhoneNumberType::TollFree)
        .unwrap();
    assert_eq!(8002345678, number.national_number());

    let number = phone_util
        .get_example_number_for_type(RegionCode::de(), PhoneNumberType::Mobile)
        .unwrap();
    assert_eq!(15123456789, number.national_number());

    // CS is an invalid region, so we have no data for it.
    assert_eq!(
        Err(GetExampleNumberError::InvalidRegionCode),
        phone_util.get_example_number(RegionCode::zz())
    );
    // There are no UAN numbers at all for GB in the data.
    assert_eq!(
        Err(GetExampleNumberError::NoExampleNumber),
        phone_util.get_example_number_for_type(RegionCode::gb(), PhoneNumberType::UAN)
    );
}

#[test]
fn format_us_number() {
    let phone_util = get_phone_util();
    let number = us_number();
    assert_eq!(
        "650 253 0000",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "+1 650 253 0000",
        phone_util
            .format(&number, PhoneNumberFormat::International)
            .unwrap()
    );
    assert_eq!(
        "+16502530000",
        phone_util.format(&number, PhoneNumberFormat::E164).unwrap()
    );
    assert_eq!(
        "tel:+1-650-253-0000",
        phone_util.format(&number, PhoneNumberFormat::RFC3966).unwrap()
    );
}

#[test]
fn format_gb_number() {
    let phone_util = get_phone_util();
    let number = gb_number();
    assert_eq!(
        "(020) 8738 9353",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "+44 20 8738 9353",
        phone_util
            .format(&number, PhoneNumberFormat::International)
            .unwrap()
    );

    let mobile = PhoneNumber {
        country_code: 44,
        national_number: 7912345678,
        ..Default::default()
    };
    assert_eq!(
        "(07912) 345 678",
        phone_util.format(&mobile, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "+44 7912 345 678",
        phone_util
            .format(&mobile, PhoneNumberFormat::International)
            .unwrap()
    );
}

#[test]
fn format_de_number() {
    let phone_util = get_phone_util();
    let number = PhoneNumber {
        country_code: 49,
        national_number: 301234567,
        ..Default::default()
    };
    assert_eq!(
        "030 1234567",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "+49 30 1234567",
        phone_util
            .format(&number, PhoneNumberFormat::International)
            .unwrap()
    );
}

#[test]
fn format_it_number() {
    let phone_util = get_phone_util();
    let number = it_number();
    assert_eq!(
        "02 3661 8300",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "+39 02 3661 8300",
        phone_util
            .format(&number, PhoneNumberFormat::International)
            .unwrap()
    );
    assert_eq!(
        "+390236618300",
        phone_util.format(&number, PhoneNumberFormat::E164).unwrap()
    );
}

#[test]
fn format_nz_number() {
    let phone_util = get_phone_util();
    let number = nz_number();
    assert_eq!(
        "03-331 6005",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "+64 3-331 6005",
        phone_util
            .format(&number, PhoneNumberFormat::International)
            .unwrap()
    );
}

#[test]
fn format_number_with_extension() {
    let phone_util = get_phone_util();
    let number = PhoneNumber {
        extension: Some("1234".to_string()),
        ..nz_number()
    };
    assert_eq!(
        "03-331 6005 ext. 1234",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
    assert_eq!(
        "tel:+64-3-331-6005;ext=1234",
        phone_util.format(&number, PhoneNumberFormat::RFC3966).unwrap()
    );
    // Extensions are never present in the E164 rendering.
    assert_eq!(
        "+6433316005",
        phone_util.format(&number, PhoneNumberFormat::E164).unwrap()
    );
}

#[test]
fn format_with_raw_input_fallback() {
    let phone_util = get_phone_util();
    let number = PhoneNumber {
        raw_input: Some("012345678".to_string()),
        ..Default::default()
    };
    assert_eq!(
        "012345678",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
}

#[test]
fn format_by_pattern() {
    let phone_util = get_phone_util();
    let user_formats = vec![NumberFormat {
        pattern: r"(\d{3})(\d{3})(\d{4})".to_string(),
        format: "($1) $2-$3".to_string(),
        ..Default::default()
    }];
    let number = us_number();
    assert_eq!(
        "(650) 253-0000",
        phone_util
            .format_by_pattern(&number, PhoneNumberFormat::National, &user_formats)
            .unwrap()
    );
    assert_eq!(
        "+1 (650) 253-0000",
        phone_util
            .format_by_pattern(&number, PhoneNumberFormat::International, &user_formats)
            .unwrap()
    );
    assert_eq!(
        "tel:+1-650-253-0000",
        phone_util
            .format_by_pattern(&number, PhoneNumberFormat::RFC3966, &user_formats)
            .unwrap()
    );

    // $NP is set to '1' for the US; $FG becomes the first group.
    let user_formats = vec![NumberFormat {
        pattern: r"(\d{3})(\d{3})(\d{4})".to_string(),
        format: "$1 $2-$3".to_string(),
        national_prefix_formatting_rule: Some("$NP ($FG)".to_string()),
        ..Default::default()
    }];
    assert_eq!(
        "1 (650) 253-0000",
        phone_util
            .format_by_pattern(&number, PhoneNumberFormat::National, &user_formats)
            .unwrap()
    );
}

#[test]
fn format_number_with_carrier_code() {
    let phone_util = get_phone_util();
    // We only support this for Brazil, and only for formatting to national.
    let number = PhoneNumber {
        country_code: 55,
        national_number: 1123456789,
        ..Default::default()
    };
    assert_eq!(
        "(11) 2345-6789",
        phone_util
            .format_national_number_with_carrier_code(&number, "")
            .unwrap()
    );
    assert_eq!(
        "0 15 (11) 2345-6789",
        phone_util
            .format_national_number_with_carrier_code(&number, "15")
            .unwrap()
    );
}

#[test]
fn format_number_with_preferred_carrier_code() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse_and_keep_raw_input("0 15 11 2345 6789", RegionCode::br())
        .unwrap();
    assert_eq!("15", number.preferred_domestic_carrier_code());
    assert_eq!(
        "0 15 (11) 2345-6789",
        phone_util
            .format_national_number_with_preferred_carrier_code(&number, "14")
            .unwrap()
    );
    // The fallback carrier is used when no preference was captured.
    let number = PhoneNumber {
        country_code: 55,
        national_number: 1123456789,
        ..Default::default()
    };
    assert_eq!(
        "0 14 (11) 2345-6789",
        phone_util
            .format_national_number_with_preferred_carrier_code(&number, "14")
            .unwrap()
    );
}

#[test]
fn parse_national_number() {
    let phone_util = get_phone_util();
    let expected = us_number();
    assert_eq!(
        expected,
        phone_util.parse("(650) 253-0000", RegionCode::us()).unwrap()
    );
    assert_eq!(
        expected,
        phone_util.parse("650 253 0000", RegionCode::us()).unwrap()
    );
    // The national prefix is stripped when present.
    assert_eq!(
        expected,
        phone_util.parse("1-650-253-0000", RegionCode::us()).unwrap()
    );
    assert_eq!(
        expected,
        phone_util.parse("+1 650 253 0000", RegionCode::nz()).unwrap()
    );
    // Square brackets and slashes count as punctuation, not as digits.
    assert_eq!(
        expected,
        phone_util.parse("(650) [253]-0000", RegionCode::us()).unwrap()
    );
    assert_eq!(
        expected,
        phone_util.parse("650/253/0000", RegionCode::us()).unwrap()
    );
}

#[test]
fn parse_with_international_prefix() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse("0011 650 253 0000", RegionCode::nz())
        .unwrap();
    assert_eq!(1, number.country_code());
    assert_eq!(6502530000, number.national_number());
}

#[test]
fn parse_non_ascii() {
    let phone_util = get_phone_util();
    // Full-width plus sign and digits.
    let number = phone_util
        .parse("\u{FF0B}\u{FF11} (650) 253-0000", RegionCode::nz())
        .unwrap();
    assert_eq!(us_number(), number);
}

#[test]
fn parse_gb_number() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse("(020) 8738 9353", RegionCode::gb())
        .unwrap();
    assert_eq!(gb_number(), number);
    assert_eq!(
        "(020) 8738 9353",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
}

#[test]
fn parse_italian_number_keeps_leading_zero() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("02 3661 8300", RegionCode::it()).unwrap();
    assert!(number.italian_leading_zero());
    assert_eq!(236618300, number.national_number());
    assert_eq!(it_number(), number);

    let mobile = phone_util.parse("312 345 678", RegionCode::it()).unwrap();
    assert!(!mobile.italian_leading_zero());
    assert_eq!(312345678, mobile.national_number());
}

#[test]
fn parse_nz_number() {
    let phone_util = get_phone_util();
    assert_eq!(
        nz_number(),
        phone_util.parse("03-331 6005", RegionCode::nz()).unwrap()
    );
    assert_eq!(
        nz_number(),
        phone_util.parse("+64 3 331 6005", RegionCode::us()).unwrap()
    );
    // A "tel:" URI prefix is skipped over when looking for the number start.
    assert_eq!(
        nz_number(),
        phone_util
            .parse("tel:+64 3 331 6005", RegionCode::us())
            .unwrap()
    );
}

#[test]
fn parse_de_number() {
    let phone_util = get_phone_util();
    let number = phone_util.parse("030/1234567", RegionCode::de()).unwrap();
    assert_eq!(49, number.country_code());
    assert_eq!(301234567, number.national_number());
    assert_eq!(
        "030 1234567",
        phone_util.format(&number, PhoneNumberFormat::National).unwrap()
    );
}

#[test]
fn parse_number_with_alpha_chars() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse("1800 six-flag", RegionCode::us())
        .unwrap();
    assert_eq!(1, number.country_code());
    assert_eq!(8007493524, number.national_number());
    assert_eq!(PhoneNumberType::TollFree, phone_util.get_number_type(&number));
}

#[test]
fn parse_extensions() {
    let phone_util = get_phone_util();
    let expected = PhoneNumber {
        extension: Some("3456".to_string()),
        ..nz_number()
    };
    assert_eq!(
        expected,
        phone_util
            .parse("03 331 6005 ext 3456", RegionCode::nz())
            .unwrap()
    );
    assert_eq!(
        expected,
        phone_util
            .parse("03-331 6005 extn. 3456", RegionCode::nz())
            .unwrap()
    );
    assert_eq!(
        expected,
        phone_util.parse("03 331 6005 x3456", RegionCode::nz()).unwrap()
    );
    assert_eq!(
        "03-331 6005 ext. 3456",
        phone_util.format(&expected, PhoneNumberFormat::National).unwrap()
    );
}

#[test]
fn parse_rejects_garbage() {
    let phone_util = get_phone_util();
    assert!(phone_util
        .parse("this is not a phone number", RegionCode::us())
        .is_err_and(|err| matches!(err, ParseError::NotANumber(_))));
    assert!(phone_util
        .parse("", RegionCode::us())
        .is_err_and(|err| matches!(err, ParseError::NotANumber(_))));
}

#[test]
fn parse_rejects_invalid_country_code() {
    let phone_util = get_phone_util();
    // 210 is not a valid country calling code.
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse("+210 3456 56789", RegionCode::nz())
    );
    // No default region to infer a country calling code from.
    assert_eq!(
        Err(ParseError::InvalidCountryCode),
        phone_util.parse("123 456 7890", RegionCode::get_unknown())
    );
}

#[test]
fn parse_rejects_wrong_lengths() {
    let phone_util = get_phone_util();
    assert_eq!(
        Err(ParseError::TooShortNsn),
        phone_util.parse("+49 0", RegionCode::de())
    );
    assert_eq!(
        Err(ParseError::TooLongNsn),
        phone_util.parse("+1 650253000000000000", RegionCode::us())
    );
    // An IDD with nothing usable after it.
    assert_eq!(
        Err(ParseError::TooShortAfterIdd),
        phone_util.parse("011", RegionCode::us())
    );
}

#[test]
fn parse_and_keep_raw_input() {
    let phone_util = get_phone_util();
    let number = phone_util
        .parse_and_keep_raw_input("800 six-flag", RegionCode::us())
        .unwrap();
    assert_eq!(1, number.country_code());
    assert_eq!(8007493524, number.national_number());
    assert_eq!("800 six-flag", number.raw_input());
    assert_eq!(
        CountryCodeSource::FromDefaultCountry,
        number.country_code_source()
    );

    let number = phone_util
        .parse_and_keep_raw_input("+1 650 253 0000", RegionCode::us())
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromNumberWithPlusSign,
        number.country_code_source()
    );

    let number = phone_util
        .parse_and_keep_raw_input("0011 650 253 0000", RegionCode::nz())
        .unwrap();
    assert_eq!(
        CountryCodeSource::FromNumberWithIdd,
        number.country_code_source()
    );
}

#[test]
fn get_number_type() {
    let phone_util = get_phone_util();
    let premium = PhoneNumber {
        country_code: 1,
        national_number: 9002345678,
        ..Default::default()
    };
    assert_eq!(PhoneNumberType::PremiumRate, phone_util.get_number_type(&premium));

    let toll_free = PhoneNumber {
        country_code: 1,
        national_number: 8002345678,
        ..Default::default()
    };
    assert_eq!(PhoneNumberType::TollFree, phone_util.get_number_type(&toll_free));

    // US fixed-line and mobile patterns are identical, so the type cannot be
    // narrowed down further.
    assert_eq!(
        PhoneNumberType::FixedLineOrMobile,
        phone_util.get_number_type(&us_number())
    );

    let gb_mobile = PhoneNumber {
        country_code: 44,
        national_number: 7912345678,
        ..Default::default()
    };
    assert_eq!(PhoneNumberType::Mobile, phone_util.get_number_type(&gb_mobile));
    assert_eq!(PhoneNumberType::FixedLine, phone_util.get_number_type(&gb_number()));

    let ao_mobile = PhoneNumber {
        country_code: 244,
        national_number: 923123456,
        ..Default::default()
    };
    assert_eq!(PhoneNumberType::Mobile, phone_util.get_number_type(&ao_mobile));
    let ao_fixed = PhoneNumber {
        country_code: 244,
        national_number: 222123456,
        ..Default::default()
    };
    assert_eq!(PhoneNumberType::FixedLine, phone_util.get_number_type(&ao_fixed));

    let too_long = PhoneNumber {
        country_code: 1,
        national_number: 65025300000,
        ..Default::default()
    };
    assert_eq!(PhoneNumberType::Unknown, phone_util.get_number_type(&too_long));
}

#[test]
fn is_valid_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_valid_number(&us_number()));
    assert!(phone_util.is_valid_number(&gb_number()));
    assert!(phone_util.is_valid_number(&it_number()));
    assert!(phone_util.is_valid_number(&nz_number()));

    // A local number on its own is possible but not valid.
    let local_only = PhoneNumber {
        country_code: 1,
        national_number: 2530000,
        ..Default::default()
    };
    assert!(!phone_util.is_valid_number(&local_only));

    let invalid_gb = PhoneNumber {
        country_code: 44,
        national_number: 791234567,
        ..Default::default()
    };
    assert!(!phone_util.is_valid_number(&invalid_gb));
}

#[test]
fn is_valid_number_for_region() {
    let phone_util = get_phone_util();
    let bs_number = PhoneNumber {
        country_code: 1,
        national_number: 2423651234,
        ..Default::default()
    };
    assert!(phone_util.is_valid_number(&bs_number));
    assert!(phone_util.is_valid_number_for_region(&bs_number, RegionCode::bs()));
    // BS and US share a country calling code but not numbering ranges.
    assert!(!phone_util.is_valid_number_for_region(&bs_number, RegionCode::us()));
    assert!(!phone_util.is_valid_number_for_region(&us_number(), RegionCode::bs()));
    assert!(!phone_util.is_valid_number_for_region(&us_number(), RegionCode::zz()));
}

#[test]
fn is_possible_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_possible_number(&us_number()));
    assert!(phone_util.is_possible_number_for_string("650 253 0000", RegionCode::us()));
    assert!(phone_util.is_possible_number_for_string("+1 650 253 0000", RegionCode::gb()));
    assert!(!phone_util.is_possible_number_for_string("I want a Pizza", RegionCode::us()));
}

#[test]
fn is_possible_number_with_reason() {
    let phone_util = get_phone_util();
    assert_eq!(
        Ok(NumberLengthType::IsPossible),
        phone_util.is_possible_number_with_reason(&us_number())
    );

    let local_only = PhoneNumber {
        country_code: 1,
        national_number: 2530000,
        ..Default::default()
    };
    assert_eq!(
        Ok(NumberLengthType::IsPossibleLocalOnly),
        phone_util.is_possible_number_with_reason(&local_only)
    );

    let too_short = PhoneNumber {
        country_code: 1,
        national_number: 253000,
        ..Default::default()
    };
    assert_eq!(
        Err(ValidationResultErr::TooShort),
        phone_util.is_possible_number_with_reason(&too_short)
    );

    let too_long = PhoneNumber {
        country_code: 1,
        national_number: 65025300000,
        ..Default::default()
    };
    assert_eq!(
        Err(ValidationResultErr::TooLong),
        phone_util.is_possible_number_with_reason(&too_long)
    );

    let unknown_country = PhoneNumber {
        country_code: 0,
        national_number: 2530000,
        ..Default::default()
    };
    assert_eq!(
        Err(ValidationResultErr::InvalidCountryCode),
        phone_util.is_possible_number_with_reason(&unknown_country)
    );
}

#[test]
fn is_viable_phone_number() {
    let phone_util = get_phone_util();
    assert!(phone_util.is_viable_phone_number("13568757"));
    assert!(phone_util.is_viable_phone_number("+1 650 253 0000"));
    assert!(phone_util.is_viable_phone_number("65 02 53 00 00"));
    // Two digits without punctuation are allowed for short numbers.
    assert!(phone_util.is_viable_phone_number("12"));
    assert!(!phone_util.is_viable_phone_number("1"));
    assert!(!phone_util.is_viable_phone_number("alpha"));
}

#[test]
fn normalize_digits_only() {
    let phone_util = get_phone_util();
    assert_eq!(
        "03456234",
        phone_util.normalize_digits_only("034-56&+a#234")
    );
    // Full-width digits are converted to their ASCII counterparts.
    assert_eq!(
        "6502530000",
        phone_util.normalize_digits_only("\u{FF16}50 253 0000")
    );
}

#[test]
fn is_number_match_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        Ok(MatchType::ExactMatch),
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "+64 03 331 6005")
    );
    assert_eq!(
        Ok(MatchType::ExactMatch),
        phone_util.is_number_match_with_two_strings("+643 331-6005", "+64 3 331 6005")
    );
    assert_eq!(
        MatchType::ExactMatch,
        phone_util.is_number_match(&nz_number(), &nz_number())
    );
}

#[test]
fn is_number_match_nsn_matches() {
    let phone_util = get_phone_util();
    // The second string lacks a country calling code, so an exact match is
    // downgraded.
    assert_eq!(
        Ok(MatchType::NsnMatch),
        phone_util.is_number_match_with_one_string(&nz_number(), "03 331 6005")
    );
    let no_country_code = PhoneNumber {
        country_code: 0,
        ..nz_number()
    };
    assert_eq!(
        MatchType::NsnMatch,
        phone_util.is_number_match(&nz_number(), &no_country_code)
    );
}

#[test]
fn is_number_match_short_nsn_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        Ok(MatchType::ShortNsnMatch),
        phone_util.is_number_match_with_two_strings("+1 345 657 1234", "657 1234")
    );
    // Numbers which differ only by an italian leading zero.
    let without_zero = PhoneNumber {
        italian_leading_zero: false,
        ..it_number()
    };
    assert_eq!(
        MatchType::ShortNsnMatch,
        phone_util.is_number_match(&it_number(), &without_zero)
    );
}

#[test]
fn is_number_match_non_matches() {
    let phone_util = get_phone_util();
    assert_eq!(
        Ok(MatchType::NoMatch),
        phone_util.is_number_match_with_two_strings("+64 3 331 6005", "+16502530000")
    );
    assert_eq!(
        Ok(MatchType::NoMatch),
        phone_util.is_number_match_with_two_strings("+1 345 657 1234", "+1 345 657 1235")
    );
    // Differing extensions can never match.
    let with_extension = PhoneNumber {
        extension: Some("3456".to_string()),
        ..nz_number()
    };
    let with_other_extension = PhoneNumber {
        extension: Some("3457".to_string()),
        ..nz_number()
    };
    assert_eq!(
        MatchType::NoMatch,
        phone_util.is_number_match(&with_extension, &with_other_extension)
    );
}
