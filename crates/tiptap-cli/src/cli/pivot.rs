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

//! Arguments of the `pivot` command.

use crate::commands::{self, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::CliError;
use clap::Args;
use tiptap_core::PivotConfig;
use tiptap_csv::{AlignmentPolicy, ToCsvConfig};

/// Input report, output table and value scaling.
#[derive(Args, Debug)]
pub struct PivotArgs {
    /// Catch2 XML report
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Output table path ("-" for stdout)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Factor applied to every mean (default converts ns to ms)
    #[arg(long, default_value_t = 1e-6)]
    pub scale: f64,

    /// Pad rows with missing columns instead of failing
    #[arg(long)]
    pub pad: bool,
}

impl PivotArgs {
    /// Pivot configuration selected by the flags.
    pub fn pivot_config(&self) -> PivotConfig {
        PivotConfig {
            scale: self.scale,
            ..Default::default()
        }
    }

    /// Table configuration selected by the flags.
    pub fn csv_config(&self) -> ToCsvConfig {
        ToCsvConfig {
            alignment: if self.pad {
                AlignmentPolicy::Pad
            } else {
                AlignmentPolicy::Reject
            },
            ..Default::default()
        }
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the scale is not finite, the report cannot be read or
    /// pivoted, or the table cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        if !self.scale.is_finite() {
            return Err(CliError::invalid_input(format!(
                "scale must be a finite number, got {}",
                self.scale
            )));
        }
        commands::pivot(
            &self.input,
            &self.output,
            &self.pivot_config(),
            self.csv_config(),
        )
    }
}
