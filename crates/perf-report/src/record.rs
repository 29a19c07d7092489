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

//! Typed measurement records.
//!
//! One [`Measurement`] is written per run of the tracker performance harness:
//!
//! ```json
//! {"desktop_context":{"schema":"iglu:...","data":{"deviceModel":"MacBookPro18,3", ...}},
//!  "results":{"num_threads":4,"num_operations":10000,
//!             "mocked_emitter_and_mocked_session":1.25, ...},
//!  "timestamp":1650000000000,"tracker_version":"cpp-0.2.0"}
//! ```
//!
//! Fields are validated when the line is deserialized; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four benchmarked emitter/session combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Mocked emitter, mocked client session
    MockedEmitterAndMockedSession,
    /// Mocked emitter, SQLite-backed client session
    MockedEmitterAndRealSession,
    /// Emitter that drops events, mocked client session
    MuteEmitterAndMockedSession,
    /// Emitter that drops events, SQLite-backed client session
    MuteEmitterAndRealSession,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 4] = [
        Metric::MockedEmitterAndMockedSession,
        Metric::MockedEmitterAndRealSession,
        Metric::MuteEmitterAndMockedSession,
        Metric::MuteEmitterAndRealSession,
    ];

    /// Field name under `results` in the log.
    pub fn key(self) -> &'static str {
        match self {
            Metric::MockedEmitterAndMockedSession => "mocked_emitter_and_mocked_session",
            Metric::MockedEmitterAndRealSession => "mocked_emitter_and_real_session",
            Metric::MuteEmitterAndMockedSession => "mute_emitter_and_mocked_session",
            Metric::MuteEmitterAndRealSession => "mute_emitter_and_real_session",
        }
    }

    /// Display name used in the metric column.
    pub fn label(self) -> String {
        self.key().replace('_', " ")
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Metric::ALL.iter().map(|m| m.key()).collect();
                format!("unknown metric '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Self-describing desktop context attached by the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopContext {
    /// Iglu schema URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Context payload
    pub data: DesktopContextData,
}

/// Device and OS information from the desktop context.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopContextData {
    /// Hardware model, e.g. `MacBookPro18,3`
    pub device_model: String,
    /// Hardware vendor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_manufacturer: Option<String>,
    /// Logical processor count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_processor_count: Option<u64>,
    /// Operating system family (`macOS`, `Windows`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    /// Operating system version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    /// Windows service pack, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_service_pack: Option<String>,
    /// Whether the OS is 64-bit
    #[serde(
        rename = "osIs64Bit",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub os_is_64_bit: Option<bool>,
}

/// Timings and run parameters of a single harness run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResults {
    /// Threads tracking events concurrently
    pub num_threads: u64,
    /// Events tracked per thread
    pub num_operations: u64,
    /// Seconds with a mocked emitter and mocked session
    pub mocked_emitter_and_mocked_session: f64,
    /// Seconds with a mocked emitter and SQLite session
    pub mocked_emitter_and_real_session: f64,
    /// Seconds with a mute emitter and mocked session
    pub mute_emitter_and_mocked_session: f64,
    /// Seconds with a mute emitter and SQLite session
    pub mute_emitter_and_real_session: f64,
}

impl RunResults {
    /// Build results with every metric set to `seconds`.
    pub fn uniform(num_threads: u64, num_operations: u64, seconds: f64) -> Self {
        Self {
            num_threads,
            num_operations,
            mocked_emitter_and_mocked_session: seconds,
            mocked_emitter_and_real_session: seconds,
            mute_emitter_and_mocked_session: seconds,
            mute_emitter_and_real_session: seconds,
        }
    }

    /// Timing in seconds for `metric`.
    #[inline]
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::MockedEmitterAndMockedSession => self.mocked_emitter_and_mocked_session,
            Metric::MockedEmitterAndRealSession => self.mocked_emitter_and_real_session,
            Metric::MuteEmitterAndMockedSession => self.mute_emitter_and_mocked_session,
            Metric::MuteEmitterAndRealSession => self.mute_emitter_and_real_session,
        }
    }

    /// Set the timing for `metric`.
    pub fn set(&mut self, metric: Metric, seconds: f64) {
        match metric {
            Metric::MockedEmitterAndMockedSession => self.mocked_emitter_and_mocked_session = seconds,
            Metric::MockedEmitterAndRealSession => self.mocked_emitter_and_real_session = seconds,
            Metric::MuteEmitterAndMockedSession => self.mute_emitter_and_mocked_session = seconds,
            Metric::MuteEmitterAndRealSession => self.mute_emitter_and_real_session = seconds,
        }
    }
}

/// One parsed log line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Device and OS of the machine that ran the benchmark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_context: Option<DesktopContext>,
    pub results: RunResults,
    /// Unix epoch milliseconds at which the run finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
    /// Tracker library version under test
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracker_version: Option<String>,
    /// 1-based source line, set by the loader
    #[serde(skip)]
    pub line: usize,
}

impl Measurement {
    /// Create a record without device context.
    pub fn new(results: RunResults) -> Self {
        Self {
            desktop_context: None,
            results,
            timestamp: None,
            tracker_version: None,
            line: 0,
        }
    }

    /// Attach a desktop context carrying only a device model.
    pub fn with_device(mut self, device_model: impl Into<String>) -> Self {
        self.desktop_context = Some(DesktopContext {
            schema: None,
            data: DesktopContextData {
                device_model: device_model.into(),
                ..Default::default()
            },
        });
        self
    }

    /// Device model, if the record carries a desktop context.
    pub fn device_model(&self) -> Option<&str> {
        self.desktop_context
            .as_ref()
            .map(|ctx| ctx.data.device_model.as_str())
    }

    /// Timing in seconds for `metric`.
    #[inline]
    pub fn value(&self, metric: Metric) -> f64 {
        self.results.value(metric)
    }
}
