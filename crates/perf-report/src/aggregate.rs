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

//! Per-metric statistics over a group of runs.

use crate::error::{ReportError, Result};
use crate::group::Group;
use crate::record::Metric;

/// Max, min, mean and last of a series of timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Largest value.
    pub max: f64,
    /// Smallest value.
    pub min: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Final value in input order.
    pub last: f64,
    /// Number of samples.
    pub count: usize,
}

/// Statistics for one metric of one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub metric: Metric,
    pub summary: Summary,
}

/// Summarize a series of values, or `None` if it is empty.
///
/// `last` is the final element of `values`, not an extreme.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let (&last, _) = values.split_last()?;

    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let sum: f64 = values.iter().sum();
    // Sums can round slightly outside [min, max] when all values are equal.
    let mean = sum / values.len() as f64;
    let mean = if min <= max { mean.clamp(min, max) } else { mean };

    Some(Summary {
        max,
        min,
        mean,
        last,
        count: values.len(),
    })
}

/// Compute statistics for each of `metrics`, in order, over `group`.
///
/// # Errors
///
/// Returns [`ReportError::EmptyGroup`] if the group has no records.
pub fn aggregate_group(group: &Group, metrics: &[Metric]) -> Result<Vec<MetricSummary>> {
    metrics
        .iter()
        .map(|&metric| {
            let values: Vec<f64> = group.records.iter().map(|r| r.value(metric)).collect();
            summarize(&values)
                .map(|summary| MetricSummary { metric, summary })
                .ok_or_else(|| ReportError::empty_group(metric.key()))
        })
        .collect()
}
