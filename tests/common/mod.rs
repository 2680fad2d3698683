use ridestats::constants::{CHART_ANVIL_API_VAR, STATS_ANVIL_API_VAR};
use std::env;

/// Remove both uplink keys from the process environment.
/// Callers must hold the `#[serial]` lock.
#[allow(dead_code)]
pub fn clear_uplink_vars() {
    env::remove_var(STATS_ANVIL_API_VAR);
    env::remove_var(CHART_ANVIL_API_VAR);
}

/// Set each uplink key to the given value, or remove it when `None`.
#[allow(dead_code)]
pub fn set_uplink_vars(stats: Option<&str>, chart: Option<&str>) {
    for (key, value) in [(STATS_ANVIL_API_VAR, stats), (CHART_ANVIL_API_VAR, chart)] {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }
}

/// `Settings::from_env` loads a `.env` from the working directory or any
/// parent, which would refill keys a test removed. Tests that expect a key to
/// be absent skip when one is found.
#[allow(dead_code)]
pub fn should_skip_absence_tests() -> bool {
    dotenv::dotenv().is_ok()
}
