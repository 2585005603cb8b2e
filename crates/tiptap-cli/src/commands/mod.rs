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

//! CLI command implementations

mod generate;
mod pivot;

pub use generate::{generate, parse_bitwidth, SUPPORTED_BITWIDTHS};
pub use pivot::{pivot, DEFAULT_INPUT, DEFAULT_OUTPUT};

use crate::error::CliError;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

/// Default maximum results file size (1 GB)
/// Can be overridden via TIPTAP_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Output path that selects stdout.
pub const STDOUT_PATH: &str = "-";

fn get_max_file_size() -> u64 {
    std::env::var("TIPTAP_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than `TIPTAP_MAX_FILE_SIZE` bytes (default 1 GB) are rejected
/// before any memory is allocated for them.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the file is not valid UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Run `body` against a buffered output sink.
///
/// `None` or `"-"` selects stdout; anything else is created (or truncated)
/// as a file. The sink is flushed before returning and released when this
/// function returns, whether `body` succeeded or not.
pub fn with_output<F>(path: Option<&str>, body: F) -> Result<(), CliError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), CliError>,
{
    match path {
        Some(p) if p != STDOUT_PATH => {
            let file = File::create(p).map_err(|e| CliError::io_error(p, e))?;
            let mut sink = BufWriter::new(file);
            body(&mut sink)?;
            sink.flush().map_err(|e| CliError::io_error(p, e))
        }
        _ => {
            let stdout = io::stdout();
            let mut sink = BufWriter::new(stdout.lock());
            body(&mut sink)?;
            sink.flush().map_err(|e| CliError::io_error("<stdout>", e))
        }
    }
}
