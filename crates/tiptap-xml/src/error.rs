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

//! Error types for reading results documents.

use thiserror::Error;
use tiptap_core::PivotError;

/// Errors that can occur while reading a Catch2 XML report.
///
/// # Examples
///
/// ```
/// use tiptap_xml::XmlError;
///
/// let err = XmlError::Parse {
///     line: 12,
///     column: 5,
///     message: "unexpected end of stream".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "XML parse error at line 12, column 5: unexpected end of stream"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlError {
    /// The document is not well-formed XML.
    #[error("XML parse error at line {line}, column {column}: {message}")]
    Parse {
        /// Line of the error (1-based).
        line: usize,
        /// Column of the error (1-based).
        column: usize,
        /// Parser message.
        message: String,
    },

    /// The document parsed but its structure could not be pivoted.
    #[error(transparent)]
    Pivot(#[from] PivotError),
}

/// Result type for XML operations.
pub type Result<T, E = XmlError> = std::result::Result<T, E>;
