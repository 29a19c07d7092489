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

//! Partitioning of measurements into comparable groups.
//!
//! Runs are only comparable when they were taken on the same device with the
//! same thread and operation counts. Groups are collected into an ordered map
//! in a single pass, so they come out sorted by key and each group keeps the
//! file order of its records.

use crate::error::{ReportError, Result};
use crate::record::Measurement;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Composite key identifying comparable runs.
///
/// Ordered by device, then threads, then operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    /// Device model from the record's desktop context
    pub device: String,
    /// Worker thread count of the run
    pub threads: u64,
    /// Events tracked by each thread
    pub operations: u64,
}

impl GroupKey {
    /// Key of `record`, or `None` if it has no desktop context.
    pub fn of(record: &Measurement) -> Option<Self> {
        record.device_model().map(|device| Self {
            device: device.to_string(),
            threads: record.results.num_threads,
            operations: record.results.num_operations,
        })
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} threads x {} operations)",
            self.device, self.threads, self.operations
        )
    }
}

/// Whether records are grouped by device context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    /// Group when the log carries desktop contexts; a log without any is
    /// treated as one group.
    #[default]
    Auto,
    /// Always group; a record without context is an error.
    Always,
    /// Treat the whole log as a single group.
    Never,
}

impl GroupMode {
    /// Decide whether `records` should be grouped under this mode.
    ///
    /// In `Auto` mode an empty log and a log with at least one context are
    /// grouped, so a record missing its context among others that have one
    /// is reported instead of silently merging devices.
    pub fn resolve(self, records: &[Measurement]) -> bool {
        match self {
            GroupMode::Always => true,
            GroupMode::Never => false,
            GroupMode::Auto => {
                records.is_empty() || records.iter().any(|r| r.desktop_context.is_some())
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupMode::Auto => "auto",
            GroupMode::Always => "always",
            GroupMode::Never => "never",
        }
    }
}

/// An ordered run of records sharing a key.
///
/// `key` is `None` for the implicit group produced when grouping is disabled.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Shared key, or `None` for the implicit group
    pub key: Option<GroupKey>,
    /// Member records in file order
    pub records: Vec<Measurement>,
}

impl Group {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Last record in file order.
    pub fn last(&self) -> Option<&Measurement> {
        self.records.last()
    }
}

/// Partition `records` into groups.
///
/// With grouping enabled, groups are returned in ascending key order.
/// Without it, the whole sequence becomes one group (possibly empty).
///
/// # Errors
///
/// Returns [`ReportError::MissingContext`] when grouping applies and a record
/// has no desktop context. That is always the case under [`GroupMode::Always`],
/// and under [`GroupMode::Auto`] when other records carry one.
pub fn group_measurements(records: Vec<Measurement>, mode: GroupMode) -> Result<Vec<Group>> {
    if !mode.resolve(&records) {
        debug!(records = records.len(), "grouping disabled, using a single group");
        return Ok(vec![Group { key: None, records }]);
    }

    let mut by_key: BTreeMap<GroupKey, Vec<Measurement>> = BTreeMap::new();
    for record in records {
        let Some(key) = GroupKey::of(&record) else {
            warn!(line = record.line, "record without desktop_context among grouped runs");
            return Err(ReportError::MissingContext { line: record.line });
        };
        by_key.entry(key).or_default().push(record);
    }

    debug!(groups = by_key.len(), "grouped measurements");
    Ok(by_key
        .into_iter()
        .map(|(key, records)| Group {
            key: Some(key),
            records,
        })
        .collect())
}
