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

//! Newline-delimited JSON log loader.
//!
//! Reads the log line by line, skips blank lines and deserializes every other
//! line into a [`Measurement`]. Loading is fail-fast: the first malformed line
//! aborts with [`ReportError::Parse`] carrying its 1-based line number.
//!
//! # Examples
//!
//! ```rust
//! use perf_report::loader::parse_measurements;
//! use std::io::Cursor;
//!
//! let log = "\n{\"results\":{\"num_threads\":1,\"num_operations\":10,\
//!     \"mocked_emitter_and_mocked_session\":0.5,\"mocked_emitter_and_real_session\":0.6,\
//!     \"mute_emitter_and_mocked_session\":0.1,\"mute_emitter_and_real_session\":0.2}}\n";
//! let records = parse_measurements(Cursor::new(log), "<memory>").unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].line, 2);
//! ```

use crate::config::LoaderConfig;
use crate::error::{ReportError, Result};
use crate::record::Measurement;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Load all measurements from the log at `path`.
///
/// The file size is checked against `config.max_file_size` before reading.
/// The file handle lives only for the duration of this call.
///
/// # Errors
///
/// - [`ReportError::Io`] if the file is missing or unreadable
/// - [`ReportError::FileTooLarge`] if it exceeds the configured limit
/// - [`ReportError::Parse`] on the first malformed non-blank line
pub fn load_measurements(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Vec<Measurement>> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| ReportError::io_error(path, e))?;
    if metadata.len() > config.max_file_size {
        return Err(ReportError::file_too_large(
            path,
            metadata.len(),
            config.max_file_size,
        ));
    }

    let file = File::open(path).map_err(|e| ReportError::io_error(path, e))?;
    let records = parse_measurements(BufReader::new(file), path)?;

    info!(path = %path.display(), records = records.len(), "loaded performance log");
    Ok(records)
}

/// Parse measurements from any buffered reader.
///
/// `source` names the input in I/O error messages.
pub fn parse_measurements<R: BufRead>(reader: R, source: impl AsRef<Path>) -> Result<Vec<Measurement>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|e| ReportError::io_error(source.as_ref(), e))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            debug!(line = line_number, "skipping blank line");
            continue;
        }

        let mut record: Measurement = serde_json::from_str(trimmed)
            .map_err(|e| ReportError::parse(line_number, e.to_string()))?;
        record.line = line_number;
        records.push(record);
    }

    Ok(records)
}
