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

//! Error types for benchmark emission and result pivoting.

use thiserror::Error;

/// Error reading a value out of a results document node.
///
/// # Examples
///
/// ```
/// use tiptap_core::NodeError;
///
/// let err = NodeError::InvalidNumber {
///     attribute: "value".to_string(),
///     value: "n/a".to_string(),
/// };
/// assert_eq!(err.to_string(), "Attribute 'value' is not a number: 'n/a'");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeError {
    /// Attribute is present but cannot be parsed as a number.
    #[error("Attribute '{attribute}' is not a number: '{value}'")]
    InvalidNumber {
        /// Attribute key.
        attribute: String,
        /// Raw attribute text.
        value: String,
    },
}

/// Error writing generated benchmark source.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The output sink rejected a write.
    #[error("Failed to write benchmark source: {0}")]
    Io(#[from] std::io::Error),
}

/// Error converting a results document into a table.
///
/// # Examples
///
/// ```
/// use tiptap_core::PivotError;
///
/// let err = PivotError::InvalidGroupName {
///     name: "N=abc".to_string(),
///     prefix: "N=".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Group name 'N=abc' is not 'N=' followed by an integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PivotError {
    /// A group node carries no name.
    #[error("Group #{index} ('{tag}') has no name attribute")]
    MissingGroupName {
        /// Position of the group among the root's children (0-based).
        index: usize,
        /// Tag of the group node.
        tag: String,
    },

    /// A group name does not encode a register length.
    #[error("Group name '{name}' is not '{prefix}' followed by an integer")]
    InvalidGroupName {
        /// The group name as found.
        name: String,
        /// Prefix expected in front of the integer.
        prefix: String,
    },

    /// A measurement has a statistic but no name to label it with.
    #[error("Measurement #{index} in group '{group}' has a statistic but no name")]
    MissingMeasurementName {
        /// Group name.
        group: String,
        /// Position of the measurement within the group (0-based).
        index: usize,
    },

    /// A statistic value could not be read.
    #[error("Invalid statistic for '{measurement}' in group '{group}': {source}")]
    InvalidStatistic {
        /// Group name.
        group: String,
        /// Measurement name.
        measurement: String,
        /// Underlying node error.
        #[source]
        source: NodeError,
    },
}

/// Result alias for pivot operations.
pub type Result<T, E = PivotError> = std::result::Result<T, E>;
