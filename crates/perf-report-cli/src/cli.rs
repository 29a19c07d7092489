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

//! Argument definitions and command execution.

use clap::{Parser, ValueEnum};
use perf_report::{
    generate_report, GroupMode, LoaderConfig, Metric, ReportError, ReportOptions,
    DEFAULT_LOG_PATH,
};
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// How runs are grouped in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupArg {
    /// Group by device when the log has device contexts
    Auto,
    /// Always group by device; records without context are an error
    Always,
    /// Aggregate all runs together
    Never,
}

impl From<GroupArg> for GroupMode {
    fn from(arg: GroupArg) -> Self {
        match arg {
            GroupArg::Auto => GroupMode::Auto,
            GroupArg::Always => GroupMode::Always,
            GroupArg::Never => GroupMode::Never,
        }
    }
}

/// Summarize tracker performance logs
///
/// Reads newline-delimited JSON benchmark results and prints max, min, mean
/// and last timing per metric, grouped by device, thread count and
/// operation count.
///
/// # Examples
///
/// ```bash
/// # Report on performance/logs.txt
/// perf-report
///
/// # Aggregate every run in another log, ignoring devices
/// perf-report results/logs.txt --group never
///
/// # Only the real-session scenarios
/// perf-report --metric mocked_emitter_and_real_session --metric mute_emitter_and_real_session
/// ```
#[derive(Debug, Parser)]
#[command(name = "perf-report")]
#[command(author, version, about = "Summarize tracker performance logs", long_about = None)]
pub struct Cli {
    /// Log file with one JSON record per line
    #[arg(value_name = "LOG_FILE", default_value = DEFAULT_LOG_PATH)]
    pub log_file: PathBuf,

    /// Grouping of runs
    #[arg(long, value_enum, default_value_t = GroupArg::Auto)]
    pub group: GroupArg,

    /// Metric to include (repeatable, default: all four in standard order)
    #[arg(long = "metric", value_name = "NAME")]
    pub metrics: Vec<Metric>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Report options derived from the arguments.
    pub fn report_options(&self) -> ReportOptions {
        let mut metrics: Vec<Metric> = Vec::with_capacity(self.metrics.len());
        for metric in &self.metrics {
            if !metrics.contains(metric) {
                metrics.push(*metric);
            }
        }
        if metrics.is_empty() {
            metrics = Metric::ALL.to_vec();
        }

        ReportOptions {
            group_mode: self.group.into(),
            metrics,
        }
    }

    /// Generate the report on stdout.
    ///
    /// Returns the number of groups written.
    ///
    /// # Errors
    ///
    /// Returns `Err` if configuration is invalid, the log cannot be read or
    /// parsed, or a group cannot be aggregated.
    pub fn execute(&self) -> Result<usize, ReportError> {
        let loader = LoaderConfig::from_env()?;
        let options = self.report_options();
        debug!(
            log_file = %self.log_file.display(),
            group = options.group_mode.as_str(),
            metrics = options.metrics.len(),
            max_file_size = loader.max_file_size,
            "starting report"
        );

        let stdout = io::stdout();
        let mut out = stdout.lock();
        generate_report(&self.log_file, &mut out, &loader, &options)
    }
}
