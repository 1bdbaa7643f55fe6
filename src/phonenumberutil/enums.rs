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

use strum::EnumIter;

/// Defines the various standardized formats for representing phone numbers.
///
/// `International` and `National` formats align with the ITU-T E.123
/// recommendation, but use local conventions like hyphens (-) instead of
/// spaces for separators.
///
/// For example, the Google Switzerland office number would be:
/// - **INTERNATIONAL**: `+41 44 668 1800`
/// - **NATIONAL**: `044 668 1800`
/// - **E164**: `+41446681800` (international format without formatting)
/// - **RFC3966**: `tel:+41-44-668-1800` (hyphen-separated with a "tel:" prefix)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// A standardized international format with no spaces or symbols,
    /// always starting with a `+` followed by the country code.
    E164,
    /// **International format.**
    /// Includes the country code and is formatted with separators for
    /// readability, as recommended for international display.
    International,
    /// **National format.**
    /// Used for dialing within the number's own country. It may include a
    /// national prefix (like '0') and uses local formatting conventions.
    National,
    /// **RFC3966 format.**
    /// A technical format used in contexts like web links. It starts with
    /// "tel:", uses hyphens as separators, and can include extensions.
    RFC3966,
}

/// Categorizes phone numbers based on their primary use.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberType {
    /// Traditional landline numbers tied to a specific geographic location.
    FixedLine,
    /// Numbers assigned to wireless devices like mobile phones.
    Mobile,
    /// Used in regions (e.g., the USA) where it's impossible to distinguish
    /// between fixed-line and mobile numbers by looking at the number itself.
    FixedLineOrMobile,
    /// Calls to these numbers are free for the caller, with the cost being
    /// paid by the recipient. Examples include "800" numbers in the US.
    TollFree,
    /// Numbers charging a higher rate than normal calls, often used for
    /// services like horoscopes or tech support lines.
    PremiumRate,
    /// The cost of the call is split between the caller and the recipient.
    SharedCost,
    /// Numbers used for services that transmit voice calls over the internet.
    VoIP,
    /// A number associated with a person rather than a location or device;
    /// it can be routed to different destinations as configured by the user.
    PersonalNumber,
    /// Numbers used for sending messages to paging devices.
    Pager,
    /// Universal Access Numbers: a single number a company can use to route
    /// calls to different offices or departments.
    UAN,
    /// Numbers used to directly access a voicemail service.
    VoiceMail,
    /// The number does not match any of the known patterns for its region
    /// and its type cannot be determined.
    Unknown,
}

/// Describes the degree of similarity between two phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// The two numbers are entirely different.
    NoMatch,
    /// One number is a shorter version of the other's national significant
    /// number. For example, `6502530000` is a short match for `16502530000`.
    ShortNsnMatch,
    /// The numbers share the same national significant number but may have
    /// different country codes or formatting.
    NsnMatch,
    /// The two numbers are identical in every aspect, including country
    /// code, national number, and any specified extensions.
    ExactMatch,
}

/// The possible successful outcomes when checking if a phone number's length
/// is valid. The failure outcomes live in
/// [`super::errors::ValidationResultErr`] so that the pair can be used as a
/// `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberLengthType {
    /// The number's length matches the expected length for a complete,
    /// dialable number in its region.
    IsPossible,
    /// The number's length is too short for a full national number but
    /// matches a pattern for a number that can be dialed within a specific
    /// local area (e.g., without the area code).
    IsPossibleLocalOnly,
}
