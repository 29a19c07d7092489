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

//! Performance log reporting for the tracker benchmark harness.
//!
//! The harness appends one JSON object per run to `performance/logs.txt`.
//! This crate turns that log into a plain-text table of max, min, mean and
//! last timing for each benchmarked emitter/session combination.
//!
//! ## Pipeline
//!
//! - [`loader`]: read and validate newline-delimited JSON records
//! - [`group`]: partition runs by device, thread count and operation count
//! - [`aggregate`]: per-metric statistics over a group
//! - [`table`]: fixed-width cell and row rendering
//! - [`report`]: glue that writes the whole report to any `io::Write`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use perf_report::{generate_report, LoaderConfig, ReportOptions};
//!
//! # fn main() -> perf_report::Result<()> {
//! let stdout = std::io::stdout();
//! let mut out = stdout.lock();
//! generate_report(
//!     "performance/logs.txt",
//!     &mut out,
//!     &LoaderConfig::from_env()?,
//!     &ReportOptions::default(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod config;
pub mod error;
pub mod group;
pub mod loader;
pub mod record;
pub mod report;
pub mod table;

pub use aggregate::{aggregate_group, summarize, MetricSummary, Summary};
pub use config::{LoaderConfig, DEFAULT_LOG_PATH};
pub use error::{ReportError, Result};
pub use group::{group_measurements, Group, GroupKey, GroupMode};
pub use loader::{load_measurements, parse_measurements};
pub use record::{Measurement, Metric, RunResults};
pub use report::{generate_report, write_report, ReportOptions};
