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

//! Generate command - write benchmark source

use super::with_output;
use crate::error::CliError;
use tiptap_core::{emit, EmitOptions, ParameterSpace};
use tracing::{info, warn};

/// Storage widths that name a fixed-width standard integer type.
pub const SUPPORTED_BITWIDTHS: [u32; 4] = [8, 16, 32, 64];

/// Parse one `--bitwidths` entry.
///
/// # Errors
///
/// Returns a message when the value is not a number or names a width without
/// a `std::uintN_t` type.
pub fn parse_bitwidth(value: &str) -> Result<u32, String> {
    let width: u32 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if SUPPORTED_BITWIDTHS.contains(&width) {
        Ok(width)
    } else {
        Err(format!(
            "bitwidth {width} has no std::uint{width}_t (supported: 8, 16, 32, 64)"
        ))
    }
}

/// Write generated benchmark source for `space` to `output` (stdout if `None`).
///
/// An empty range or bitwidth list is allowed and only logged.
///
/// # Errors
///
/// Returns `Err` if the output cannot be created or written.
pub fn generate(
    space: &ParameterSpace,
    prelude: bool,
    output: Option<&str>,
) -> Result<(), CliError> {
    if space.is_empty() {
        warn!(
            n_min = space.n_min,
            n_max = space.n_max,
            "empty register length range, no sections will be written"
        );
    }
    if space.bitwidths.is_empty() {
        warn!("no bitwidths configured, only the small family is benchmarked");
    }
    info!(
        sections = space.section_count(),
        cases_per_section = space.cases_per_section(),
        prelude,
        "generating benchmark source"
    );

    let options = EmitOptions { prelude };
    with_output(output, |sink| Ok(emit(space, &options, sink)?))
}
