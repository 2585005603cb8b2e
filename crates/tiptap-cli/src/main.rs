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

//! Tiptap Bench command line interface

use clap::Parser;
use std::process::ExitCode;
use tiptap_cli::cli::Commands;
use tracing_subscriber::EnvFilter;

/// Tiptap Bench - LFSR benchmark generation and result pivoting
///
/// # Examples
///
/// ```bash
/// # Write the full benchmark translation unit
/// tiptap-bench generate --prelude -o extensive_benchmark.cpp
///
/// # Pivot the Catch2 XML report into output.csv
/// tiptap-bench pivot extensiveresults.xml
/// ```
#[derive(Parser)]
#[command(name = "tiptap-bench")]
#[command(author, version, about = "Tiptap Bench - LFSR benchmark generation and result pivoting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout may carry generated source, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
