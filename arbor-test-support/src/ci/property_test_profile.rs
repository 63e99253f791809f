//! Property-test run profile shared by every proptest suite.
//!
//! CI raises or lowers the case count and toggles forking through environment
//! variables; malformed overrides are logged and ignored.

use std::{env, fmt};

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable toggling forked proptest execution.
pub const ARBOR_PBT_FORK_ENV_KEY: &str = "ARBOR_PBT_FORK";

/// Case count and fork setting for property tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Builds a profile from the process environment.
    ///
    /// # Examples
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds a profile from an arbitrary key lookup.
    ///
    /// # Examples
    /// ```
    /// use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == "PROPTEST_CASES").then(|| "512".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 512);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup<F>(default_cases: u32, default_fork: bool, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            cases: override_or(&lookup, PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(&lookup, ARBOR_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

#[derive(Debug, PartialEq, Eq)]
enum OverrideError {
    NotANumber,
    ZeroCases,
    NotASwitch,
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotANumber => "expected a positive integer",
            Self::ZeroCases => "cases must be greater than zero",
            Self::NotASwitch => "expected one of true/false/1/0/yes/no/on/off",
        })
    }
}

fn override_or<T, L, P>(lookup: &L, key: &'static str, default: T, parse: P) -> T
where
    L: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Result<T, OverrideError>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(env = key, raw = %raw, %reason, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber),
    }
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotASwitch),
    }
}
