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

use crate::phonenumber::PhoneNumber;

use super::{get_short_info, region_code::RegionCode};

fn short_number(country_code: i32, national_number: u64) -> PhoneNumber {
    PhoneNumber {
        country_code,
        national_number,
        ..Default::default()
    }
}

#[test]
fn connects_to_emergency_number_us() {
    let short_info = get_short_info();
    assert!(short_info.connects_to_emergency_number("911", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("119", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("999", RegionCode::us()));
}

#[test]
fn connects_to_emergency_number_with_extra_digits_us() {
    let short_info = get_short_info();
    // Dialling extra digits after 911 still connects in the US.
    assert!(short_info.connects_to_emergency_number("9116666666", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number("1196666666", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("9996666666", RegionCode::us()));
}

#[test]
fn connects_to_emergency_number_br() {
    let short_info = get_short_info();
    assert!(short_info.connects_to_emergency_number("911", RegionCode::br()));
    assert!(short_info.connects_to_emergency_number("190", RegionCode::br()));
    // Brazilian emergency numbers don't work when additional digits are
    // appended.
    assert!(!short_info.connects_to_emergency_number("9111", RegionCode::br()));
    assert!(!short_info.connects_to_emergency_number("1900", RegionCode::br()));
}

#[test]
fn connects_to_emergency_number_cl() {
    let short_info = get_short_info();
    assert!(short_info.connects_to_emergency_number("131", RegionCode::cl()));
    assert!(!short_info.connects_to_emergency_number("1310", RegionCode::cl()));
}

#[test]
fn connects_to_emergency_number_without_metadata() {
    let short_info = get_short_info();
    // Angola has no short number data at all, Zimbabwe is unknown entirely.
    assert!(!short_info.connects_to_emergency_number("911", RegionCode::ao()));
    assert!(!short_info.connects_to_emergency_number("222123456", RegionCode::ao()));
    assert!(!short_info.connects_to_emergency_number("911", RegionCode::zw()));
    assert!(!short_info.connects_to_emergency_number("911", RegionCode::get_unknown()));
}

#[test]
fn emergency_numbers_with_formatting() {
    let short_info = get_short_info();
    assert!(short_info.connects_to_emergency_number("9-1-1", RegionCode::us()));
    assert!(short_info.connects_to_emergency_number(" 911", RegionCode::us()));
    assert!(short_info.is_emergency_number("9-1-1", RegionCode::us()));
    assert!(short_info.is_emergency_number("1-1-2", RegionCode::gb()));
}

#[test]
fn emergency_numbers_with_plus_sign() {
    let short_info = get_short_info();
    // Dialling the country code before an emergency number doesn't connect.
    assert!(!short_info.connects_to_emergency_number("+911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("+1911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("\u{FF0B}911", RegionCode::us()));
    assert!(!short_info.is_emergency_number("+911", RegionCode::us()));
    assert!(!short_info.is_emergency_number("+1911", RegionCode::us()));
}

#[test]
fn emergency_numbers_with_star_prefix() {
    let short_info = get_short_info();
    // A leading star is dropped for the exact-match predicate but makes the
    // number undiallable.
    assert!(short_info.is_emergency_number("*911", RegionCode::us()));
    assert!(short_info.is_emergency_number("**911", RegionCode::us()));
    assert!(!short_info.connects_to_emergency_number("*911", RegionCode::us()));
}

#[test]
fn is_emergency_number_requires_exact_match() {
    let short_info = get_short_info();
    assert!(short_info.is_emergency_number("911", RegionCode::us()));
    assert!(short_info.is_emergency_number("112", RegionCode::de()));
    assert!(short_info.is_emergency_number("110", RegionCode::de()));
    assert!(!short_info.is_emergency_number("9116666666", RegionCode::us()));
    assert!(!short_info.is_emergency_number("999", RegionCode::us()));
}

#[test]
fn is_possible_short_number() {
    let short_info = get_short_info();
    assert!(short_info.is_possible_short_number(&short_number(1, 911)));
    assert!(short_info.is_possible_short_number(&short_number(64, 1234)));
    // Two digits is shorter than any short code we know about.
    assert!(!short_info.is_possible_short_number(&short_number(1, 11)));
    assert!(!short_info.is_possible_short_number(&short_number(1, 123456)));
    // No short number metadata for Angola.
    assert!(!short_info.is_possible_short_number(&short_number(244, 911)));
}

#[test]
fn is_valid_short_number() {
    let short_info = get_short_info();
    assert!(short_info.is_valid_short_number(&short_number(1, 911)));
    assert!(short_info.is_valid_short_number(&short_number(44, 999)));
    assert!(!short_info.is_valid_short_number(&short_number(1, 123456)));
    assert!(!short_info.is_valid_short_number(&short_number(244, 911)));

    assert!(short_info
        .is_valid_short_number_for_region(&short_number(64, 1234), RegionCode::nz()));
    assert!(!short_info
        .is_valid_short_number_for_region(&short_number(64, 1234), RegionCode::get_unknown()));
}
