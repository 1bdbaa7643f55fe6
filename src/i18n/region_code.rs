pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn ao() -> &'static str {
        "AO"
    }

    pub fn br() -> &'static str {
        "BR"
    }

    pub fn bs() -> &'static str {
        "BS"
    }

    pub fn cl() -> &'static str {
        "CL"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn it() -> &'static str {
        "IT"
    }

    pub fn ni() -> &'static str {
        "NI"
    }

    pub fn nz() -> &'static str {
        "NZ"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zw() -> &'static str {
        "ZW"
    }

    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
