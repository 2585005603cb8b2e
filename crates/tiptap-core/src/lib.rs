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

//! Tiptap Bench core
//!
//! Shared model for generating LFSR benchmark source and pivoting the
//! measured results into a spreadsheet table.
//!
//! # Pipelines
//!
//! - **Generation**: [`ParameterSpace`] → [`cases`] → [`format_identifier`] →
//!   [`emit_benchmarks`] writes one Catch2 `TEST_CASE` per register length.
//! - **Pivoting**: a results document seen through [`ResultNode`] →
//!   [`pivot`] → [`PivotTable`], with identifiers reduced to column keys by
//!   [`canonicalize`].
//!
//! The two meet in [`naming`]: an identifier emitted for `N` and
//! canonicalized against the same `N` gives a key that does not depend on
//! `N`.
//!
//! # Examples
//!
//! ```
//! use tiptap_core::{canonicalize, cases, format_identifier};
//!
//! let keys: Vec<String> = cases(5, &[8])
//!     .map(|case| canonicalize(&format_identifier(&case), case.n))
//!     .collect();
//! assert_eq!(keys[0], "SmallLFSR<N, true>");
//! assert_eq!(keys[3], "BigLFSR<N, std::uint8_t, false>");
//! ```

pub mod case;
pub mod emit;
pub mod error;
pub mod naming;
pub mod node;
pub mod pivot;

pub use case::{cases, Case, Cases, Family, ParameterSpace};
pub use emit::{
    benchmark_line, emit, emit_benchmarks, emit_to_string, emit_translation_unit, section_name,
    EmitOptions,
};
pub use error::{EmitError, NodeError, PivotError};
pub use naming::{canonicalize, column_key, format_identifier, PLACEHOLDER};
pub use node::{MemoryNode, ResultNode};
pub use pivot::{parse_group_name, pivot, PivotConfig, PivotRow, PivotTable};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
