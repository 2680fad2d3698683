use crate::constants::{CHART_ANVIL_API_VAR, STATS_ANVIL_API_VAR};
use std::env;
use std::ffi::OsString;
use std::fmt;

/// Uplink settings read once at startup.
///
/// Both values are optional: an unset variable yields `None` and is not an
/// error. Build one with [`Settings::from_env`] and pass it by reference.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub stats_anvil_api: Option<String>,
    pub chart_anvil_api: Option<String>,
}

// Values are API keys; keep them out of logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("stats_anvil_api", &redacted(&self.stats_anvil_api))
            .field("chart_anvil_api", &redacted(&self.chart_anvil_api))
            .finish()
    }
}

fn redacted(value: &Option<String>) -> Option<&'static str> {
    value.as_ref().map(|_| "[REDACTED]")
}

impl Settings {
    /// Load `.env` (if any) and read the uplink keys from the process
    /// environment. Variables already set in the process take precedence over
    /// the file.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Read the uplink keys through an arbitrary lookup with
    /// `std::env::var_os` semantics. Each key is read independently.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let settings = Settings {
            stats_anvil_api: read_optional(&lookup, STATS_ANVIL_API_VAR),
            chart_anvil_api: read_optional(&lookup, CHART_ANVIL_API_VAR),
        };

        tracing::debug!(
            stats_configured = settings.stats_anvil_api.is_some(),
            chart_configured = settings.chart_anvil_api.is_some(),
            "Settings loaded"
        );

        settings
    }

    /// True when the stats key is present and non-empty.
    pub fn is_stats_configured(&self) -> bool {
        is_non_empty(&self.stats_anvil_api)
    }

    /// True when the chart key is present and non-empty.
    pub fn is_chart_configured(&self) -> bool {
        is_non_empty(&self.chart_anvil_api)
    }
}

fn read_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<OsString>,
{
    let value = match lookup(key)?.into_string() {
        Ok(value) => value,
        Err(raw) => {
            tracing::warn!("{} is not valid unicode, invalid bytes replaced", key);
            raw.to_string_lossy().into_owned()
        }
    };

    if value.is_empty() {
        tracing::warn!("{} is set but empty", key);
    }

    Some(value)
}

fn is_non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
