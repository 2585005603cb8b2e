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

//! Pivot table → semicolon-separated text.
//!
//! Writes a [`tiptap_core::PivotTable`] as a spreadsheet-importable table:
//! a header `N;<col1>;...;<colK>` with the columns in lexicographic order,
//! then one line per row in the order the rows were read.
//!
//! # Alignment
//!
//! Every row is expected to carry the same columns. When it does not (a
//! measurement was skipped in one group, or an identifier did not
//! canonicalize), [`AlignmentPolicy`] decides: `Reject` (default) fails with
//! [`CsvError::MisalignedRow`], `Pad` widens the header to every column seen
//! and leaves missing cells empty. A line never has a different field count
//! than the header.
//!
//! # Examples
//!
//! ```
//! use tiptap_core::{PivotRow, PivotTable};
//! use tiptap_csv::{to_csv_with_config, AlignmentPolicy, ToCsvConfig};
//!
//! let mut first = PivotRow::new(3);
//! first.values.insert("SmallLFSR<N, true>".to_string(), 2.0);
//! first.values.insert("SmallLFSR<N, false>".to_string(), 1.0);
//! let mut second = PivotRow::new(4);
//! second.values.insert("SmallLFSR<N, true>".to_string(), 3.0);
//!
//! let mut table = PivotTable::new();
//! table.push_row(first);
//! table.push_row(second);
//!
//! let config = ToCsvConfig {
//!     alignment: AlignmentPolicy::Pad,
//!     ..Default::default()
//! };
//! let csv = to_csv_with_config(&table, config).unwrap();
//! assert_eq!(csv, "N;SmallLFSR<N, false>;SmallLFSR<N, true>\n3;1;2\n4;;3\n");
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, AlignmentPolicy,
    ToCsvConfig,
};
