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

//! Compiled-in numbering-plan table. One constructor per region keeps the
//! records readable next to the patterns they carry.

use super::{MetadataStore, NumberFormat, PhoneMetadata, PhoneNumberDesc, ShortNumberMetadata};

fn desc(pattern: &str, lengths: &[i32]) -> PhoneNumberDesc {
    PhoneNumberDesc {
        national_number_pattern: Some(pattern.to_string()),
        possible_length: lengths.to_vec(),
        ..Default::default()
    }
}

fn desc_with_example(pattern: &str, lengths: &[i32], example: &str) -> PhoneNumberDesc {
    PhoneNumberDesc {
        example_number: Some(example.to_string()),
        ..desc(pattern, lengths)
    }
}

/// Marker for a category with no numbers at all in a region; `-1` never
/// matches the length of a real phone number.
fn no_numbers() -> PhoneNumberDesc {
    PhoneNumberDesc {
        possible_length: vec![-1],
        ..Default::default()
    }
}

fn format(pattern: &str, format: &str) -> NumberFormat {
    NumberFormat {
        pattern: pattern.to_string(),
        format: format.to_string(),
        ..Default::default()
    }
}

fn format_with_leading_digits(
    pattern: &str,
    fmt: &str,
    leading_digits: &[&str],
    national_prefix_formatting_rule: Option<&str>,
) -> NumberFormat {
    NumberFormat {
        leading_digits_pattern: leading_digits.iter().map(|s| s.to_string()).collect(),
        national_prefix_formatting_rule: national_prefix_formatting_rule.map(|s| s.to_string()),
        ..format(pattern, fmt)
    }
}

fn us() -> PhoneMetadata {
    PhoneMetadata {
        id: "US".to_string(),
        country_code: 1,
        international_prefix: Some("011".to_string()),
        national_prefix: Some("1".to_string()),
        national_prefix_for_parsing: Some("1".to_string()),
        main_country_for_code: true,
        same_mobile_and_fixed_line_pattern: true,
        general_desc: PhoneNumberDesc {
            possible_length_local_only: vec![7],
            ..desc(r"[13-689]\d{9}|2[0-35-9]\d{8}", &[10])
        },
        fixed_line: PhoneNumberDesc {
            possible_length_local_only: vec![7],
            ..desc_with_example(r"[13-689]\d{9}|2[0-35-9]\d{8}", &[10], "1212345678")
        },
        mobile: PhoneNumberDesc {
            possible_length_local_only: vec![7],
            ..desc_with_example(r"[13-689]\d{9}|2[0-35-9]\d{8}", &[10], "6502530000")
        },
        toll_free: desc_with_example(r"8(?:00|66|77|88)\d{7}", &[10], "8002345678"),
        premium_rate: desc_with_example(r"900\d{7}", &[10], "9002345678"),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: no_numbers(),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![
            format(r"(\d{3})(\d{4})", "$1 $2"),
            format(r"(\d{3})(\d{3})(\d{4})", "$1 $2 $3"),
        ],
        ..Default::default()
    }
}

fn bs() -> PhoneMetadata {
    PhoneMetadata {
        id: "BS".to_string(),
        country_code: 1,
        international_prefix: Some("011".to_string()),
        national_prefix: Some("1".to_string()),
        general_desc: desc(r"242\d{7}", &[10]),
        fixed_line: desc_with_example(r"242[2-8]\d{6}", &[10], "2423651234"),
        mobile: desc_with_example(r"2423(?:5[79]|[79]5)\d{4}", &[10], "2423591234"),
        toll_free: desc_with_example(r"8(?:00|66|77|88)\d{7}", &[10], "8002345678"),
        premium_rate: no_numbers(),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: no_numbers(),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        ..Default::default()
    }
}

fn it() -> PhoneMetadata {
    PhoneMetadata {
        id: "IT".to_string(),
        country_code: 39,
        international_prefix: Some("00".to_string()),
        general_desc: desc(r"0\d{5,10}|3\d{8,9}", &[6, 7, 8, 9, 10, 11]),
        fixed_line: desc_with_example(r"0\d{5,10}", &[6, 7, 8, 9, 10, 11], "0236618300"),
        mobile: desc_with_example(r"3\d{8,9}", &[9, 10], "312345678"),
        toll_free: desc_with_example(r"80(?:0\d{6}|3\d{3})", &[6, 9], "800123456"),
        premium_rate: desc_with_example(r"89(?:2\d{3}|9\d{6})", &[6, 9], "899123456"),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: no_numbers(),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![
            format_with_leading_digits(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3", &["0[26]"], None),
            format_with_leading_digits(r"(\d{3})(\d{3})(\d{3,4})", "$1 $2 $3", &["3"], None),
        ],
        ..Default::default()
    }
}

fn gb() -> PhoneMetadata {
    PhoneMetadata {
        id: "GB".to_string(),
        country_code: 44,
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        main_country_for_code: true,
        general_desc: desc(r"[1-9]\d{9}", &[10]),
        fixed_line: desc_with_example(r"[12]\d{9}", &[10], "2012345678"),
        mobile: desc_with_example(r"7[1-57-9]\d{8}", &[10], "7912345678"),
        toll_free: desc_with_example(r"80\d{8}", &[10], "8012345678"),
        premium_rate: desc_with_example(r"9[018]\d{8}", &[10], "9012345678"),
        shared_cost: desc(r"8(?:4[3-5]|7[0-2])\d{7}", &[10]),
        voip: desc(r"56\d{8}", &[10]),
        personal_number: desc(r"70\d{8}", &[10]),
        pager: desc(r"76\d{8}", &[10]),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![
            format_with_leading_digits(
                r"(\d{2})(\d{4})(\d{4})",
                "$1 $2 $3",
                &["[12]"],
                Some("(0$1)"),
            ),
            format_with_leading_digits(
                r"(\d{4})(\d{3})(\d{3})",
                "$1 $2 $3",
                &["7"],
                Some("(0$1)"),
            ),
            format_with_leading_digits(
                r"(\d{3})(\d{3})(\d{4})",
                "$1 $2 $3",
                &["[589]"],
                Some("(0$1)"),
            ),
        ],
        ..Default::default()
    }
}

fn de() -> PhoneMetadata {
    PhoneMetadata {
        id: "DE".to_string(),
        country_code: 49,
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        general_desc: desc(r"[1-9]\d{3,10}", &[4, 5, 6, 7, 8, 9, 10, 11]),
        fixed_line: desc_with_example(
            r"[2-9]\d{3,10}",
            &[4, 5, 6, 7, 8, 9, 10, 11],
            "30123456",
        ),
        mobile: desc_with_example(r"1(?:5\d{9}|7\d{8})", &[10, 11], "15123456789"),
        toll_free: desc_with_example(r"800\d{7,9}", &[10, 11, 12], "8001234567"),
        premium_rate: desc_with_example(r"900([135])\d{6}", &[10], "9001654321"),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: desc(r"700\d{8}", &[11]),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![
            format_with_leading_digits(
                r"(\d{2})(\d{3,11})",
                "$1 $2",
                &["3[02]|40|[68]9"],
                Some("0$1"),
            ),
            format_with_leading_digits(
                r"(\d{3})(\d{3,11})",
                "$1 $2",
                &["2|3[3-9]|906|[4-9]"],
                Some("0$1"),
            ),
            format_with_leading_digits(
                r"(\d{4})(\d{7,8})",
                "$1 $2",
                &["1[57]"],
                Some("0$1"),
            ),
        ],
        ..Default::default()
    }
}

fn nz() -> PhoneMetadata {
    PhoneMetadata {
        id: "NZ".to_string(),
        country_code: 64,
        international_prefix: Some("00".to_string()),
        national_prefix: Some("0".to_string()),
        general_desc: desc(r"[289]\d{7,9}|[3-7]\d{7}", &[8, 9, 10]),
        fixed_line: desc_with_example(
            r"24099\d{3}|(?:3[2-79]|[49][2-9]|6[235-9]|7[2-57-9])\d{6}",
            &[8],
            "32345678",
        ),
        mobile: desc_with_example(r"2(?:[027]\d{7}|9\d{6,7})", &[8, 9, 10], "251234567"),
        toll_free: desc(r"508\d{6,7}|80\d{6,8}", &[8, 9, 10]),
        premium_rate: desc(r"90\d{7,9}", &[9, 10, 11]),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: no_numbers(),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![
            format_with_leading_digits(
                r"(\d)(\d{3})(\d{4})",
                "$1-$2 $3",
                &["24|[34679]"],
                Some("0$1"),
            ),
            format_with_leading_digits(
                r"(\d)(\d{3})(\d{3,5})",
                "$1-$2 $3",
                &["2[179]"],
                Some("0$1"),
            ),
        ],
        ..Default::default()
    }
}

fn br() -> PhoneMetadata {
    PhoneMetadata {
        id: "BR".to_string(),
        country_code: 55,
        international_prefix: Some("00(?:1[45]|2[135])".to_string()),
        national_prefix: Some("0".to_string()),
        // An optional carrier code may follow the national prefix when
        // dialling long distance; the capturing group keeps it for later.
        national_prefix_for_parsing: Some(r"0(?:(1[245]|2[1-35]|31|4[13]|[56]5|99))?".to_string()),
        general_desc: desc(r"[1-9]\d{7,10}", &[8, 9, 10, 11]),
        fixed_line: desc_with_example(r"[1-9]{2}[2-5]\d{7}", &[10], "1123456789"),
        mobile: desc_with_example(r"[1-9]{2}9?[6-9]\d{7}", &[10, 11], "11961234567"),
        toll_free: desc(r"800\d{6,7}", &[9, 10]),
        premium_rate: desc(r"[359]00\d{6,7}", &[9, 10]),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: no_numbers(),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![
            NumberFormat {
                domestic_carrier_code_formatting_rule: Some("0 $CC ($1)".to_string()),
                ..format_with_leading_digits(
                    r"(\d{2})(\d{4})(\d{4})",
                    "$1 $2-$3",
                    &["[1-9][1-9]"],
                    Some("($1)"),
                )
            },
            NumberFormat {
                domestic_carrier_code_formatting_rule: Some("0 $CC ($1)".to_string()),
                ..format_with_leading_digits(
                    r"(\d{2})(\d{5})(\d{4})",
                    "$1 $2-$3",
                    &["[1-9][1-9]9"],
                    Some("($1)"),
                )
            },
        ],
        ..Default::default()
    }
}

fn ao() -> PhoneMetadata {
    PhoneMetadata {
        id: "AO".to_string(),
        country_code: 244,
        international_prefix: Some("00".to_string()),
        general_desc: desc(r"[29]\d{8}", &[9]),
        fixed_line: desc_with_example(r"2\d(?:[26-9]\d|\d[26-9])\d{5}", &[9], "222123456"),
        mobile: desc_with_example(r"9[1-49]\d{7}", &[9], "923123456"),
        toll_free: no_numbers(),
        premium_rate: no_numbers(),
        shared_cost: no_numbers(),
        voip: no_numbers(),
        personal_number: no_numbers(),
        pager: no_numbers(),
        uan: no_numbers(),
        voicemail: no_numbers(),
        number_format: vec![format(r"(\d{3})(\d{3})(\d{3})", "$1 $2 $3")],
        ..Default::default()
    }
}

fn short_metadata(id: &str, emergency_pattern: &str, emergency_example: &str) -> ShortNumberMetadata {
    ShortNumberMetadata {
        id: id.to_string(),
        emergency: desc_with_example(emergency_pattern, &[3], emergency_example),
        short_code: desc(r"[1-9]\d{2,4}", &[3, 4, 5]),
    }
}

fn region_metadata() -> Vec<PhoneMetadata> {
    vec![us(), bs(), it(), gb(), de(), nz(), br(), ao()]
}

fn alternate_formats() -> Vec<(i32, Vec<NumberFormat>)> {
    vec![
        (
            1,
            vec![format(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3")],
        ),
        (
            49,
            vec![
                format(r"(\d{3})(\d{4})(\d{4})", "$1 $2 $3"),
                format(r"(\d{5})(\d{6})", "$1 $2"),
            ],
        ),
    ]
}

fn short_number_metadata() -> Vec<ShortNumberMetadata> {
    vec![
        short_metadata("US", "911|119", "911"),
        short_metadata("BS", "911|919", "911"),
        short_metadata("BR", "911|190", "190"),
        short_metadata("GB", "112|999", "999"),
        short_metadata("DE", "11[02]", "112"),
        short_metadata("IT", "11[2358]", "112"),
        short_metadata("NZ", "111", "111"),
        short_metadata("CL", "13[1-3]", "133"),
    ]
}

pub(crate) fn compiled_store() -> MetadataStore {
    MetadataStore::new(
        region_metadata(),
        alternate_formats(),
        short_number_metadata(),
    )
}
