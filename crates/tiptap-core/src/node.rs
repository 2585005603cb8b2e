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

//! Read-only access to a parsed results document.
//!
//! The pivoter only sees documents through [`ResultNode`], so any tree
//! representation can back it. `tiptap-xml` provides the XML backend;
//! [`MemoryNode`] is an owned tree for documents built in code.

use crate::error::NodeError;
use std::collections::BTreeMap;

/// Attribute holding a node's name.
pub const NAME_ATTRIBUTE: &str = "name";

/// Narrow accessor over one node of a results document.
///
/// Implementations are expected to be cheap handles (references or `Copy`
/// cursors into a tree), since [`children`](ResultNode::children) returns them
/// by value.
pub trait ResultNode: Sized {
    /// Element tag, e.g. `TestCase`.
    fn tag(&self) -> &str;

    /// Value of the `name` attribute, if present.
    fn name(&self) -> Option<&str>;

    /// Element children in document order.
    fn children(&self) -> Vec<Self>;

    /// Attribute parsed as a number.
    ///
    /// Returns `Ok(None)` when the attribute is absent and an error when it
    /// is present but not numeric.
    fn numeric_attribute(&self, key: &str) -> Result<Option<f64>, NodeError>;

    /// First descendant (depth-first, document order) with the given tag.
    fn find_descendant(&self, tag: &str) -> Option<Self> {
        for child in self.children() {
            if child.tag() == tag {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(tag) {
                return Some(found);
            }
        }
        None
    }
}

/// Parse an attribute value the way every backend does.
pub fn parse_number(attribute: &str, value: &str) -> Result<f64, NodeError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| NodeError::InvalidNumber {
            attribute: attribute.to_string(),
            value: value.to_string(),
        })
}

/// Owned in-memory document node.
///
/// # Examples
///
/// ```
/// use tiptap_core::{MemoryNode, ResultNode};
///
/// let group = MemoryNode::new("TestCase")
///     .with_attribute("name", "N=3")
///     .with_child(
///         MemoryNode::new("BenchmarkResults")
///             .with_attribute("name", "SmallLFSR<3, true>")
///             .with_child(MemoryNode::new("mean").with_attribute("value", "1500")),
///     );
///
/// let node = &group;
/// assert_eq!(node.name(), Some("N=3"));
/// assert_eq!(node.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryNode {
    /// Element tag.
    pub tag: String,
    /// Attributes by key.
    pub attributes: BTreeMap<String, String>,
    /// Element children in order.
    pub children: Vec<MemoryNode>,
}

impl MemoryNode {
    /// Create a node without attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Add an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: MemoryNode) -> Self {
        self.children.push(child);
        self
    }
}

impl<'a> ResultNode for &'a MemoryNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn name(&self) -> Option<&str> {
        self.attributes.get(NAME_ATTRIBUTE).map(String::as_str)
    }

    fn children(&self) -> Vec<Self> {
        let node: &'a MemoryNode = *self;
        node.children.iter().collect()
    }

    fn numeric_attribute(&self, key: &str) -> Result<Option<f64>, NodeError> {
        self.attributes
            .get(key)
            .map(|value| parse_number(key, value))
            .transpose()
    }
}
