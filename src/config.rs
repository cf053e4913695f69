use crate::constants::FIXED_FRAGMENT_ENV;
use std::ffi::OsString;
use tracing::warn;

/// Startup configuration for the hello-world handler.
///
/// Read once when the process starts and handed to
/// [`HelloWorldHandler::new`](crate::HelloWorldHandler::new); nothing reads the
/// environment after that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Fragment returned for every call instead of a random pick.
    pub fixed_fragment: Option<String>,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(|value| decode_env(key, value)))
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// An unset or empty [`FIXED_FRAGMENT_ENV`] leaves fragment selection random.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let fixed_fragment = lookup(FIXED_FRAGMENT_ENV).filter(|value| !value.is_empty());

        Self { fixed_fragment }
    }

    /// Pins the fragment returned for every call.
    pub fn with_fixed_fragment(mut self, fragment: impl Into<String>) -> Self {
        let fragment = fragment.into();
        self.fixed_fragment = (!fragment.is_empty()).then_some(fragment);
        self
    }
}

/// Converts an environment value to a string, replacing invalid UTF-8.
fn decode_env(key: &str, value: OsString) -> String {
    match value.into_string() {
        Ok(value) => value,
        Err(raw) => {
            warn!("{} is not valid UTF-8, using a lossy conversion", key);
            raw.to_string_lossy().into_owned()
        }
    }
}
