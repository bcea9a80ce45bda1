// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::node::{Node, NodeContent};

pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node: Node::new(tag),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.node.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        let Some(value) = value else { return self };
        self.attr(name, value)
    }

    /// Appends a child node. Replaces binary content if there was any.
    pub fn append(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        match &mut self.node.content {
            NodeContent::Nodes(nodes) => nodes.push(child),
            content => *content = NodeContent::Nodes(vec![child]),
        }
        self
    }

    pub fn bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.node.content = NodeContent::Bytes(bytes.into());
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}

impl From<NodeBuilder> for Node {
    fn from(value: NodeBuilder) -> Self {
        value.build()
    }
}
