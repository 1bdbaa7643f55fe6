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

use std::collections::{HashMap, VecDeque};

use crate::i18n;

use super::{NumberFormat, PhoneMetadata, ShortNumberMetadata};

/// Immutable, keyed repository of numbering-plan records. Built once at
/// process start; every lookup afterwards is read-only, so concurrent
/// readers need no synchronization. Unknown keys resolve to `None`, never to
/// an error.
pub struct MetadataStore {
    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<String, PhoneMetadata>,

    /// A mapping from a country calling code to the region codes which denote
    /// the regions represented by that country calling code. Note regions
    /// under NANPA share the country calling code 1. The main country for a
    /// calling code is always first in its list. This is implemented as a
    /// sorted vector to achieve better performance.
    country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)>,

    /// A mapping from a country calling code to additional acceptable
    /// formatting variants, used for matching only, never for validation.
    alternate_formats_map: HashMap<i32, Vec<NumberFormat>>,

    /// A mapping from a region code to its emergency/short-code record.
    region_to_short_metadata_map: HashMap<String, ShortNumberMetadata>,
}

impl MetadataStore {
    pub fn new(
        region_metadata: Vec<PhoneMetadata>,
        alternate_formats: Vec<(i32, Vec<NumberFormat>)>,
        short_metadata: Vec<ShortNumberMetadata>,
    ) -> Self {
        // Storing data in a temporary map to make it easier to find other
        // regions that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<i32, VecDeque<String>>::new();
        let mut region_to_metadata_map = HashMap::new();
        for metadata in region_metadata {
            let region_code = metadata.id().to_string();
            if i18n::RegionCode::get_unknown() == region_code {
                continue;
            }

            let country_calling_code = metadata.country_code();
            let regions = country_calling_code_to_region_map
                .entry(country_calling_code)
                .or_default();
            if metadata.main_country_for_code() {
                regions.push_front(region_code.clone());
            } else {
                regions.push_back(region_code.clone());
            }
            region_to_metadata_map.insert(region_code, metadata);
        }

        let mut country_calling_code_to_region_code_map: Vec<(i32, Vec<String>)> =
            country_calling_code_to_region_map
                .into_iter()
                .map(|(k, v)| (k, Vec::from(v)))
                .collect();
        // Sort all the pairs in ascending order according to country calling code.
        country_calling_code_to_region_code_map.sort_by_key(|(code, _)| *code);

        Self {
            region_to_metadata_map,
            country_calling_code_to_region_code_map,
            alternate_formats_map: alternate_formats.into_iter().collect(),
            region_to_short_metadata_map: short_metadata
                .into_iter()
                .map(|metadata| (metadata.id().to_string(), metadata))
                .collect(),
        }
    }

    pub fn metadata_for_region(&self, region_code: &str) -> Option<&PhoneMetadata> {
        self.region_to_metadata_map.get(region_code)
    }

    /// Returns the region codes that match the specific country calling code.
    /// In the case of no region code being found, the result is empty.
    pub fn region_codes_for_country_code(&self, country_calling_code: i32) -> &[String] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| {
                self.country_calling_code_to_region_code_map[index]
                    .1
                    .as_slice()
            })
            .unwrap_or(&[])
    }

    /// Returns the region code that matches the specific country calling
    /// code, or the unknown region code when there is none.
    pub fn region_code_for_country_code(&self, country_calling_code: i32) -> &str {
        self.region_codes_for_country_code(country_calling_code)
            .first()
            .map(|code| code.as_str())
            .unwrap_or(i18n::RegionCode::get_unknown())
    }

    pub fn has_country_code(&self, country_calling_code: i32) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.region_to_metadata_map.contains_key(region_code)
    }

    pub fn supported_regions(&self) -> impl Iterator<Item = &str> {
        self.region_to_metadata_map.keys().map(|k| k.as_str())
    }

    pub fn alternate_formats_for_country_code(
        &self,
        country_calling_code: i32,
    ) -> Option<&[NumberFormat]> {
        self.alternate_formats_map
            .get(&country_calling_code)
            .map(|formats| formats.as_slice())
    }

    pub fn short_metadata_for_region(&self, region_code: &str) -> Option<&ShortNumberMetadata> {
        self.region_to_short_metadata_map.get(region_code)
    }
}
