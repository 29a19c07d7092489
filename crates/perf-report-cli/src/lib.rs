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

//! Command-line front end for `perf-report`.
//!
//! Argument parsing and logging setup live here so the binary stays a thin
//! `main`. With no arguments the tool reads `performance/logs.txt` and prints
//! the grouped report to stdout.
//!
//! # Configuration
//!
//! - `PERF_REPORT_MAX_FILE_SIZE`: maximum log size in bytes
//! - `RUST_LOG`: log filter directives (logs go to stderr)

pub mod cli;
pub mod logging;
