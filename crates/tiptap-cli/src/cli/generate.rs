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

//! Arguments of the `generate` command.

use crate::commands;
use crate::error::CliError;
use clap::Args;
use tiptap_core::case::{DEFAULT_N_MAX, DEFAULT_N_MIN};
use tiptap_core::ParameterSpace;

/// Parameter space and output of the generated source.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// First register length (inclusive)
    #[arg(long, default_value_t = DEFAULT_N_MIN)]
    pub n_min: u32,

    /// Last register length (inclusive)
    #[arg(long, default_value_t = DEFAULT_N_MAX)]
    pub n_max: u32,

    /// BigLFSR storage widths, in emission order
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "8,16,32,64",
        value_parser = commands::parse_bitwidth
    )]
    pub bitwidths: Vec<u32>,

    /// Wrap the sections in includes and the run_impl driver
    #[arg(long)]
    pub prelude: bool,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl GenerateArgs {
    /// Parameter space selected by the flags.
    pub fn space(&self) -> ParameterSpace {
        ParameterSpace::new(self.n_min, self.n_max, self.bitwidths.clone())
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        commands::generate(&self.space(), self.prelude, self.output.as_deref())
    }
}
