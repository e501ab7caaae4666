/// How the client behind an account is serviced.
pub mod client_types {
    pub const DIRECT: &str = "Direct";
    pub const ADVISED: &str = "Advised";
}

/// Stored values of the account holding rebalance exclusion flag.
pub mod exclusion_flags {
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
}

/// Returns the stored flag value for an exclusion state.
pub fn exclusion_flag(excluded: bool) -> &'static str {
    if excluded {
        exclusion_flags::YES
    } else {
        exclusion_flags::NO
    }
}
