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

//! roxmltree-backed results document.

use crate::error::{Result, XmlError};
use roxmltree::{Document as XmlDocument, Node};
use tiptap_core::node::{parse_number, NAME_ATTRIBUTE};
use tiptap_core::{NodeError, ResultNode};

/// A parsed Catch2 XML report.
///
/// Borrows the input text for its whole lifetime; nodes handed out by
/// [`root`](Self::root) borrow the document.
pub struct ResultsDocument<'input> {
    doc: XmlDocument<'input>,
}

impl<'input> ResultsDocument<'input> {
    /// Parse a results document.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::Parse`] with the position of the first syntax
    /// error.
    pub fn parse(text: &'input str) -> Result<Self> {
        let doc = XmlDocument::parse(text).map_err(|e| {
            let pos = e.pos();
            XmlError::Parse {
                line: pos.row as usize,
                column: pos.col as usize,
                message: e.to_string(),
            }
        })?;
        Ok(Self { doc })
    }

    /// The root element (`Catch2TestRun` for Catch2 reports).
    pub fn root(&self) -> XmlNode<'_, 'input> {
        XmlNode {
            node: self.doc.root_element(),
        }
    }
}

/// Element handle implementing [`ResultNode`].
///
/// Only element children are visible; text, comments and processing
/// instructions are skipped.
#[derive(Debug, Clone, Copy)]
pub struct XmlNode<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> XmlNode<'a, 'input> {
    /// 1-based line of the element's start tag.
    pub fn line(&self) -> usize {
        self.node
            .document()
            .text_pos_at(self.node.range().start)
            .row as usize
    }

    /// Raw attribute text.
    pub fn attribute(&self, key: &str) -> Option<&'a str> {
        self.node.attribute(key)
    }
}

impl<'a, 'input> ResultNode for XmlNode<'a, 'input> {
    fn tag(&self) -> &str {
        self.node.tag_name().name()
    }

    fn name(&self) -> Option<&str> {
        self.node.attribute(NAME_ATTRIBUTE)
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children()
            .filter(Node::is_element)
            .map(|node| XmlNode { node })
            .collect()
    }

    fn numeric_attribute(&self, key: &str) -> std::result::Result<Option<f64>, NodeError> {
        self.node
            .attribute(key)
            .map(|value| parse_number(key, value))
            .transpose()
    }
}
