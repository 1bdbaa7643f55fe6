
mod metadata_tests;
mod phonenumberutil_tests;
mod shortnumber_tests;

use std::sync::Once;

use crate::{
    phonenumberutil::{PhoneNumberUtil, PHONE_NUMBER_UTIL},
    shortnumberinfo::{ShortNumberInfo, SHORT_NUMBER_INFO},
};

static ONCE: Once = Once::new();

fn init_logger() {
    ONCE.call_once(|| {
        colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .init()
    });
}

fn get_phone_util() -> &'static PhoneNumberUtil {
    init_logger();
    &PHONE_NUMBER_UTIL
}

fn get_short_info() -> &'static ShortNumberInfo {
    init_logger();
    &SHORT_NUMBER_INFO
}
