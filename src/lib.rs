mod interfaces;
mod metadata;
mod phonenumber;
mod phonenumbermatcher;
mod phonenumberutil;
mod regex_based_matcher;
mod regexp_cache;
mod shortnumberinfo;
pub mod i18n;
pub(crate) mod regex_util;

/// Small macros for boilerplate that repeats across the crate; the macro
/// names read clearer than the expanded code.
mod macros;

#[cfg(test)]
mod tests;

pub use metadata::{NumberFormat, PhoneMetadata, PhoneNumberDesc, ShortNumberMetadata};
pub use phonenumber::{CountryCodeSource, PhoneNumber};
pub use phonenumbermatcher::{InvalidMatchError, Leniency, PhoneNumberMatch, PhoneNumberMatcher};
pub use phonenumberutil::{
    errors::{ParseError, ValidationResultErr},
    MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType, PhoneNumberUtil,
    PHONE_NUMBER_UTIL,
};
pub use shortnumberinfo::{ShortNumberInfo, SHORT_NUMBER_INFO};
