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

//! Structured error types for the Tiptap Bench CLI.
//!
//! All commands return `Result<(), CliError>`; the binary prints the error
//! and exits with status 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tiptap_core::EmitError;
use tiptap_csv::CsvError;
use tiptap_xml::XmlError;

/// The main error type for CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use tiptap_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Writing generated benchmark source failed.
    #[error("Generation error: {0}")]
    Generate(String),

    /// The results document could not be read or pivoted.
    #[error("Results error in '{path}': {message}")]
    Results {
        /// The results file
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The table could not be written.
    #[error("Table error for '{path}': {message}")]
    Table {
        /// The output file
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a results error from an XML or pivot failure.
    pub fn results(path: impl Into<PathBuf>, source: XmlError) -> Self {
        Self::Results {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a table error from a CSV failure.
    pub fn table(path: impl Into<PathBuf>, source: CsvError) -> Self {
        Self::Table {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<EmitError> for CliError {
    fn from(source: EmitError) -> Self {
        Self::Generate(source.to_string())
    }
}
