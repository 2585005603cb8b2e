// Tiptap Bench - LFSR benchmark generation and result pivoting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tiptap Bench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **generate**: write the Catch2 benchmark source for every combination
//!   of register length, implementation family, storage width and feedback
//!   variant
//! - **pivot**: turn the Catch2 XML report of that benchmark into a
//!   semicolon-separated table, one row per register length
//!
//! # Examples
//!
//! ```no_run
//! use tiptap_cli::commands::{generate, pivot};
//! use tiptap_core::{ParameterSpace, PivotConfig};
//! use tiptap_csv::ToCsvConfig;
//!
//! # fn main() -> Result<(), tiptap_cli::error::CliError> {
//! generate(&ParameterSpace::default(), true, Some("extensive_benchmark.cpp"))?;
//! pivot(
//!     "extensiveresults.xml",
//!     "output.csv",
//!     &PivotConfig::default(),
//!     ToCsvConfig::default(),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` (for example
//! `RUST_LOG=tiptap_core=debug`) to see every recorded measurement.

pub mod cli;
pub mod commands;
pub mod error;
