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

use crate::metadata::{MetadataStore, PhoneMetadata};

use super::{get_phone_util, region_code::RegionCode};

fn region(id: &str, country_code: i32, main_country_for_code: bool) -> PhoneMetadata {
    PhoneMetadata {
        id: id.to_string(),
        country_code,
        main_country_for_code,
        ..Default::default()
    }
}

#[test]
fn main_country_comes_first() {
    // BS is inserted before US, yet US carries the main-country flag and must
    // win the calling-code lookup.
    let store = MetadataStore::new(
        vec![
            region("BS", 1, false),
            region("US", 1, true),
            region("GB", 44, true),
        ],
        vec![],
        vec![],
    );
    assert_eq!("US", store.region_code_for_country_code(1));
    let regions = store.region_codes_for_country_code(1);
    assert_eq!(vec!["US".to_string(), "BS".to_string()], regions);
    assert!(store.has_country_code(44));
    assert!(!store.has_country_code(2));
}

#[test]
fn unknown_region_is_never_stored() {
    let store = MetadataStore::new(vec![region("ZZ", 979, true)], vec![], vec![]);
    assert!(!store.is_valid_region_code("ZZ"));
    assert_eq!(RegionCode::get_unknown(), store.region_code_for_country_code(979));
    assert!(store.region_codes_for_country_code(979).is_empty());
}

#[test]
fn unknown_keys_resolve_to_none() {
    let store = MetadataStore::new(vec![region("US", 1, true)], vec![], vec![]);
    assert!(store.metadata_for_region("FR").is_none());
    assert!(store.alternate_formats_for_country_code(33).is_none());
    assert!(store.short_metadata_for_region("FR").is_none());
    assert_eq!(RegionCode::get_unknown(), store.region_code_for_country_code(33));
}

#[test]
fn compiled_region_codes_for_shared_calling_code() {
    let phone_util = get_phone_util();
    let regions = phone_util.region_codes_for_country_code(1);
    assert_eq!(2, regions.len());
    assert_eq!(RegionCode::us(), regions[0]);
    assert_eq!(RegionCode::bs(), regions[1]);
    assert!(phone_util.region_codes_for_country_code(2).is_empty());
}

#[test]
fn compiled_alternate_formats() {
    let phone_util = get_phone_util();
    let formats = phone_util
        .alternate_formats_for_country_code(1)
        .expect("alternate formats for NANPA should exist");
    assert_eq!(1, formats.len());
    assert_eq!("($1) $2-$3", formats[0].format());

    let formats = phone_util
        .alternate_formats_for_country_code(49)
        .expect("alternate formats for DE should exist");
    assert_eq!(2, formats.len());

    assert!(phone_util.alternate_formats_for_country_code(999).is_none());
}

#[test]
fn compiled_short_metadata() {
    let phone_util = get_phone_util();
    let metadata = phone_util
        .short_metadata_for_region(RegionCode::us())
        .expect("short metadata for US should exist");
    assert_eq!(RegionCode::us(), metadata.id());
    assert_eq!("911|119", metadata.emergency.national_number_pattern());
    assert_eq!("911", metadata.emergency.example_number());
    assert!(metadata.short_code.has_national_number_pattern());

    // CL has short numbers but no full numbering plan; AO the other way
    // around.
    assert!(phone_util.short_metadata_for_region(RegionCode::cl()).is_some());
    assert!(phone_util.metadata_for_region(RegionCode::cl()).is_none());
    assert!(phone_util.short_metadata_for_region(RegionCode::ao()).is_none());
    assert!(phone_util.metadata_for_region(RegionCode::ao()).is_some());
}
