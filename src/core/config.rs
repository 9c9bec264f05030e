use std::env;
use std::time::Duration;

use crate::errors::ExampleError;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 60;

/// Interval and attempt budget for a poll-until-ready loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExampleConfig {
    pub region: Option<String>,
    pub poll: PollSettings,
}

impl ExampleConfig {
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self, ExampleError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse, or if the
    /// attempt budget is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExampleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region = lookup("AWS_REGION").filter(|r| !r.trim().is_empty());

        let interval_secs = match lookup("EXAMPLES_POLL_INTERVAL_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ExampleError::Config(format!("EXAMPLES_POLL_INTERVAL_SECS: {e}"))
            })?,
            None => DEFAULT_POLL_INTERVAL_SECS,
        };

        let max_attempts = match lookup("EXAMPLES_MAX_POLL_ATTEMPTS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                ExampleError::Config(format!("EXAMPLES_MAX_POLL_ATTEMPTS: {e}"))
            })?,
            None => DEFAULT_MAX_POLL_ATTEMPTS,
        };
        if max_attempts == 0 {
            return Err(ExampleError::Config(
                "EXAMPLES_MAX_POLL_ATTEMPTS: must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            region,
            poll: PollSettings {
                interval: Duration::from_secs(interval_secs),
                max_attempts,
            },
        })
    }
}

/// Settings for the photo label Lambda.
#[derive(Debug, Clone)]
pub struct LabelsConfig {
    pub labels_table_name: String,
}

impl LabelsConfig {
    /// # Errors
    ///
    /// Returns an error if `LABELS_TABLE_NAME` is missing or empty.
    pub fn from_env() -> Result<Self, ExampleError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// # Errors
    ///
    /// Returns an error if `LABELS_TABLE_NAME` is missing or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExampleError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let labels_table_name = lookup("LABELS_TABLE_NAME")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ExampleError::Config("LABELS_TABLE_NAME: not set".to_string()))?;
        Ok(Self { labels_table_name })
    }
}
