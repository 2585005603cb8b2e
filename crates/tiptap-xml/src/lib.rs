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

//! Tiptap Bench XML input
//!
//! Reads Catch2 XML benchmark reports and exposes them to the pivoter
//! through [`tiptap_core::ResultNode`].
//!
//! # Examples
//!
//! ```rust
//! use tiptap_core::PivotConfig;
//! use tiptap_xml::pivot_xml;
//!
//! let xml = r#"<?xml version="1.0"?>
//! <Catch2TestRun>
//!   <TestCase name="N=4">
//!     <BenchmarkResults name="SmallLFSR&lt;4, false>">
//!       <mean value="3000000"/>
//!     </BenchmarkResults>
//!   </TestCase>
//! </Catch2TestRun>"#;
//!
//! let table = pivot_xml(xml, &PivotConfig::default()).unwrap();
//! assert_eq!(table.columns(), vec!["SmallLFSR<N, false>"]);
//! assert_eq!(table.rows()[0].n, 4);
//! ```

mod document;
mod error;

pub use document::{ResultsDocument, XmlNode};
pub use error::{Result, XmlError};

use tiptap_core::{pivot, PivotConfig, PivotTable};

/// Parse a report and pivot it in one step.
pub fn pivot_xml(xml: &str, config: &PivotConfig) -> Result<PivotTable> {
    let doc = ResultsDocument::parse(xml)?;
    Ok(pivot(&doc.root(), config)?)
}
