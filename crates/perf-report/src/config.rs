// Dweve Perf Report - Tracker performance log reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Loader configuration and environment overrides.

use crate::error::{ReportError, Result};

/// Default log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "performance/logs.txt";

/// Default maximum log size (256 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "PERF_REPORT_MAX_FILE_SIZE";

/// Settings for reading a log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Files larger than this many bytes are rejected before reading.
    pub max_file_size: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LoaderConfig {
    /// Build a config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidConfig`] if `PERF_REPORT_MAX_FILE_SIZE`
    /// is set but is not a positive integer.
    pub fn from_env() -> Result<Self> {
        Self::from_override(std::env::var(MAX_FILE_SIZE_ENV).ok().as_deref())
    }

    /// Build a config from an optional raw override value.
    pub fn from_override(max_file_size: Option<&str>) -> Result<Self> {
        let Some(raw) = max_file_size else {
            return Ok(Self::default());
        };

        match raw.trim().parse::<u64>() {
            Ok(0) => Err(ReportError::invalid_config(
                MAX_FILE_SIZE_ENV,
                "must be greater than zero",
            )),
            Ok(max_file_size) => Ok(Self { max_file_size }),
            Err(e) => Err(ReportError::invalid_config(
                MAX_FILE_SIZE_ENV,
                format!("'{}' is not a byte count: {}", raw, e),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = LoaderConfig::from_override(None).unwrap();
        assert_eq!(config.max_file_size, DEFAULT_MAX_FILE_SIZE);
    }

    #[test]
    fn test_override_parsed() {
        let config = LoaderConfig::from_override(Some(" 4096 ")).unwrap();
        assert_eq!(config.max_file_size, 4096);
    }

    #[test]
    fn test_override_rejects_garbage() {
        let err = LoaderConfig::from_override(Some("lots")).unwrap_err();
        assert!(matches!(err, ReportError::InvalidConfig { .. }));
    }

    #[test]
    fn test_override_rejects_zero() {
        assert!(LoaderConfig::from_override(Some("0")).is_err());
    }
}
