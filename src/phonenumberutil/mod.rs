pub(crate) mod helper_constants;
pub(crate) mod helper_functions;
mod regexps;
pub mod enums;
pub mod errors;
pub mod phonenumberutil;

use std::sync::LazyLock;

pub use enums::{MatchType, NumberLengthType, PhoneNumberFormat, PhoneNumberType};
pub use errors::ValidationResultErr;
pub use phonenumberutil::PhoneNumberUtil;

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| PhoneNumberUtil::new());
