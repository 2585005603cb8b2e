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

//! Error types for table output.

use thiserror::Error;

/// Table output error types.
///
/// # Examples
///
/// ```
/// use tiptap_csv::CsvError;
///
/// let err = CsvError::MisalignedRow {
///     n: 7,
///     missing: vec!["SmallLFSR<N, true>".to_string()],
///     unexpected: vec![],
/// };
/// assert!(err.to_string().contains("N=7"));
/// assert!(err.to_string().contains("SmallLFSR<N, true>"));
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A row's columns differ from the header's.
    ///
    /// Raised under [`AlignmentPolicy::Reject`](crate::AlignmentPolicy::Reject).
    #[error(
        "Row N={n} does not match the header columns (missing: {}, unexpected: {})",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    MisalignedRow {
        /// Register length of the offending row.
        n: u32,
        /// Header columns absent from the row.
        missing: Vec<String>,
        /// Row columns absent from the header.
        unexpected: Vec<String>,
    },

    /// I/O error while writing.
    ///
    /// # Examples
    ///
    /// ```
    /// use tiptap_csv::CsvError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let csv_err = CsvError::from(io_err);
    /// assert_eq!(csv_err.to_string(), "I/O error: file not found");
    /// ```
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
