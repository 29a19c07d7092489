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

//! Text report generation.
//!
//! Writes one block per group:
//!
//! ```text
//! Device: MacBookPro18,3
//! Number of threads: 5
//! Number of operations: 10000
//!
//!  Metric                                | Max     | Min     | Mean    | Last    |
//! --------------------------------------------------------------------------------
//!  mocked emitter and mocked session     | 1.5s    | 1.25s   | 1.38s   | 1.5s    |
//!  ...
//!
//! ```
//!
//! The device header is only written when records are grouped. Groups are
//! written one after another, so output for earlier groups stays in the
//! stream if a later group fails.

use crate::aggregate::aggregate_group;
use crate::config::LoaderConfig;
use crate::error::{ReportError, Result};
use crate::group::{group_measurements, Group, GroupMode};
use crate::loader::load_measurements;
use crate::record::{Measurement, Metric};
use crate::table::{summary_table, Cell, Table};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Report settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// How records are partitioned.
    pub group_mode: GroupMode,
    /// Metrics to tabulate, in row order.
    pub metrics: Vec<Metric>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            group_mode: GroupMode::Auto,
            metrics: Metric::ALL.to_vec(),
        }
    }
}

fn write_err(e: std::io::Error) -> ReportError {
    ReportError::io_error("<output>", e)
}

/// Write the report for `records` to `out`.
///
/// Returns the number of groups written.
///
/// # Errors
///
/// - [`ReportError::MissingContext`] if grouping applies and a record lacks context
/// - [`ReportError::EmptyGroup`] if the log is empty and grouping is disabled
/// - [`ReportError::Io`] if writing fails
pub fn write_report<W: Write>(
    out: &mut W,
    records: Vec<Measurement>,
    options: &ReportOptions,
) -> Result<usize> {
    let groups = group_measurements(records, options.group_mode)?;
    let table = summary_table();

    for group in &groups {
        write_group(out, &table, group, &options.metrics)?;
    }

    out.flush().map_err(write_err)?;
    Ok(groups.len())
}

fn write_group<W: Write>(out: &mut W, table: &Table, group: &Group, metrics: &[Metric]) -> Result<()> {
    let rows = aggregate_group(group, metrics)?;

    if let Some(key) = &group.key {
        debug!(group = %key, runs = group.len(), "writing group");
        writeln!(out, "Device: {}", key.device).map_err(write_err)?;
        writeln!(out, "Number of threads: {}", key.threads).map_err(write_err)?;
        writeln!(out, "Number of operations: {}", key.operations).map_err(write_err)?;
        writeln!(out).map_err(write_err)?;
    }

    writeln!(out, "{}", table.header_line()).map_err(write_err)?;
    writeln!(out, "{}", table.separator_line()).map_err(write_err)?;

    for row in &rows {
        let s = &row.summary;
        let line = table.row_line(&[
            Cell::Text(row.metric.label()),
            Cell::Seconds(s.max),
            Cell::Seconds(s.min),
            Cell::Seconds(s.mean),
            Cell::Seconds(s.last),
        ]);
        writeln!(out, "{}", line).map_err(write_err)?;
    }

    writeln!(out).map_err(write_err)?;
    Ok(())
}

/// Load the log at `path` and write its report to `out`.
///
/// Nothing is written if loading fails.
pub fn generate_report<W: Write>(
    path: impl AsRef<Path>,
    out: &mut W,
    loader: &LoaderConfig,
    options: &ReportOptions,
) -> Result<usize> {
    let records = load_measurements(path.as_ref(), loader)?;
    let groups = write_report(out, records, options)?;
    info!(groups, "report written");
    Ok(groups)
}
