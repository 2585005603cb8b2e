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

//! CLI command definitions and argument parsing.
//!
//! - [`generate`]: benchmark source generation
//! - [`pivot`]: results document to table conversion
//!
//! Every flag defaults to the constants of a full benchmark run, so both
//! commands work without arguments.

mod generate;
mod pivot;

use crate::error::CliError;
use clap::Subcommand;

pub use generate::GenerateArgs;
pub use pivot::PivotArgs;

/// Top-level CLI commands enum.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use tiptap_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Write Catch2 benchmark source for every register length
    ///
    /// Emits one TEST_CASE("N=<N>") per register length, holding a BENCHMARK
    /// for both SmallLFSR variants and every BigLFSR storage width.
    Generate(GenerateArgs),

    /// Convert a Catch2 XML benchmark report into a table
    ///
    /// Reads the mean of every benchmark, scales it, and writes one line per
    /// register length with one column per implementation.
    Pivot(PivotArgs),
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O, parsing, pivoting or output fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Generate(args) => args.execute(),
            Commands::Pivot(args) => args.execute(),
        }
    }
}
