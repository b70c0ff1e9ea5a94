//! Process configuration captured from the environment.

use crate::error::SyncError;
use std::env;
use std::path::PathBuf;

/// Base path of the description file, without extension.
pub const DESCRIPTION_FILE: &str = "DESCRIPTION_FILE";
/// API key presented to Pyxis in the `X-API-KEY` header.
pub const PYXIS_API_TOKEN: &str = "PYXIS_API_TOKEN";
/// Base URL the project identifier is appended to.
pub const API_URL: &str = "API_URL";
/// Identifier of the certification project to update.
pub const PROJECT_ID: &str = "PROJECT_ID";

/// Runtime configuration, read once at startup and passed into the
/// components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub description_file: PathBuf,
    pub api_token: String,
    pub api_url: String,
    pub project_id: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, SyncError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Every variable must be present and non-empty; the first missing one
    /// is reported by name.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &'static str| -> Result<String, SyncError> {
            match lookup(name) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(SyncError::MissingVariable(name)),
            }
        };

        Ok(Self {
            description_file: PathBuf::from(require(DESCRIPTION_FILE)?),
            api_token: require(PYXIS_API_TOKEN)?,
            api_url: require(API_URL)?,
            project_id: require(PROJECT_ID)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (DESCRIPTION_FILE, "/tmp/desc"),
            (PYXIS_API_TOKEN, "secret"),
            (API_URL, "https://catalog.example.com/projects/"),
            (PROJECT_ID, "abc123"),
        ])
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let env = full_env();
        let config = Config::from_lookup(|name| env.get(name).map(|v| v.to_string()))
            .expect("complete environment should produce a config");

        assert_eq!(config.description_file, PathBuf::from("/tmp/desc"));
        assert_eq!(config.api_token, "secret");
        assert_eq!(config.api_url, "https://catalog.example.com/projects/");
        assert_eq!(config.project_id, "abc123");
    }

    #[rstest]
    #[case(DESCRIPTION_FILE)]
    #[case(PYXIS_API_TOKEN)]
    #[case(API_URL)]
    #[case(PROJECT_ID)]
    fn missing_variable_is_reported_by_name(#[case] absent: &'static str) {
        let mut env = full_env();
        env.remove(absent);

        let err = Config::from_lookup(|name| env.get(name).map(|v| v.to_string()))
            .expect_err("missing variable should error");
        match err {
            SyncError::MissingVariable(name) => assert_eq!(name, absent),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[rstest]
    #[case(DESCRIPTION_FILE)]
    #[case(PYXIS_API_TOKEN)]
    #[case(API_URL)]
    #[case(PROJECT_ID)]
    fn empty_variable_is_treated_as_missing(#[case] blank: &'static str) {
        let mut env = full_env();
        env.insert(blank, "");

        let err = Config::from_lookup(|name| env.get(name).map(|v| v.to_string()))
            .expect_err("empty variable should error");
        match err {
            SyncError::MissingVariable(name) => assert_eq!(name, blank),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
