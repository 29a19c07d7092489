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

//! Structured error types for report generation.
//!
//! Every stage of the pipeline (loading, grouping, aggregation, writing)
//! returns `Result<T, ReportError>`. Nothing is recovered locally: the
//! binary prints the error and exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while generating a performance report.
///
/// # Examples
///
/// ```rust,no_run
/// use perf_report::error::ReportError;
///
/// fn open_log(path: &str) -> Result<std::fs::File, ReportError> {
///     std::fs::File::open(path).map_err(|e| ReportError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// I/O operation failed (opening or reading the log, writing output).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path (or stream name) that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Log file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Actual size in bytes
        actual: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// A non-blank log line is not valid JSON or does not match the record schema.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the log file
        line: usize,
        /// Description from the JSON parser
        message: String,
    },

    /// Grouping was requested but a record has no device context.
    #[error("Record on line {line} has no desktop_context; cannot group by device")]
    MissingContext {
        /// 1-based line number of the record
        line: usize,
    },

    /// Aggregation was attempted over a group with no records.
    #[error("No values to aggregate for metric '{metric}'")]
    EmptyGroup {
        /// Metric whose values were empty
        metric: String,
    },

    /// Invalid configuration value (e.g. a malformed environment override).
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl ReportError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
        }
    }

    /// Create a parse error for the given 1-based line.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Create an empty-group error for a metric.
    pub fn empty_group(metric: impl Into<String>) -> Self {
        Self::EmptyGroup {
            metric: metric.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is an I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
