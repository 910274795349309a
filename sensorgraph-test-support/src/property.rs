//! Property-test run profile driven by the environment.
//!
//! Suites call [`ProptestRunProfile::load`] with their own default so CI can
//! raise or lower case counts in one place.

use std::env;

/// Environment variable overriding the number of proptest cases.
pub const SENSORGRAPH_PBT_CASES_ENV_KEY: &str = "SENSORGRAPH_PBT_CASES";

/// Resolved property-test settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to `default_cases` when the override
    /// is absent or invalid.
    ///
    /// # Examples
    /// ```
    /// use sensorgraph_test_support::property::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = env::var(SENSORGRAPH_PBT_CASES_ENV_KEY).map_or(default_cases, |raw| {
            parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = SENSORGRAPH_PBT_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            })
        });
        Self { cases }
    }

    /// Number of cases to run per property.
    #[rustfmt::skip]
    #[must_use]
    pub const fn cases(&self) -> u32 { self.cases }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("128", Ok(128))]
    #[case::padded(" 7 ", Ok(7))]
    fn parses_valid_counts(#[case] raw: &str, #[case] expected: Result<u32, String>) {
        assert_eq!(parse_cases(raw), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-3")]
    #[case::text("many")]
    fn rejects_invalid_counts(#[case] raw: &str) {
        assert!(parse_cases(raw).is_err());
    }
}
