// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::node::NodeBuilder;
use crate::ParseError;

/// A tagged node of the wire tree as exposed by the transport's binary parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub content: NodeContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NodeContent {
    #[default]
    Empty,
    Nodes(Vec<Node>),
    Bytes(Vec<u8>),
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Default::default(),
            content: Default::default(),
        }
    }

    pub fn builder(tag: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(tag)
    }

    pub fn is(&self, tag: impl AsRef<str>) -> bool {
        self.tag == tag.as_ref()
    }

    pub fn attr(&self, name: impl AsRef<str>) -> Option<&str> {
        self.attrs.get(name.as_ref()).map(String::as_str)
    }

    pub fn attr_req(&self, name: impl AsRef<str>) -> Result<&str, ParseError> {
        self.attr(name.as_ref()).ok_or(ParseError::Generic {
            msg: format!(
                "Missing required attribute {} in node {}.",
                name.as_ref(),
                self.tag
            ),
        })
    }

    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let children: &[Node] = match &self.content {
            NodeContent::Nodes(nodes) => nodes.as_slice(),
            NodeContent::Empty | NodeContent::Bytes(_) => &[],
        };
        children.iter()
    }

    /// Returns the first direct child with the given tag.
    pub fn child(&self, tag: impl AsRef<str>) -> Option<&Node> {
        self.children().find(|child| child.is(tag.as_ref()))
    }

    pub fn child_req(&self, tag: impl AsRef<str>) -> Result<&Node, ParseError> {
        self.child(tag.as_ref()).ok_or(ParseError::Generic {
            msg: format!("Missing child {} in node {}.", tag.as_ref(), self.tag),
        })
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.content {
            NodeContent::Bytes(bytes) => Some(bytes.as_slice()),
            NodeContent::Empty | NodeContent::Nodes(_) => None,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, value)?;
        }

        match &self.content {
            NodeContent::Empty => write!(f, "/>"),
            NodeContent::Bytes(bytes) => write!(f, ">[{} bytes]</{}>", bytes.len(), self.tag),
            NodeContent::Nodes(nodes) => {
                write!(f, ">")?;
                for node in nodes {
                    write!(f, "{}", node)?;
                }
                write!(f, "</{}>", self.tag)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn stanza() -> Node {
        Node::builder("iq")
            .attr("id", "req-1")
            .attr("type", "set")
            .append(
                Node::builder("pair-success")
                    .append(Node::builder("device").attr("jid", "1234:5@s.whatsapp.net"))
                    .append(Node::builder("device-identity").bytes(vec![1, 2, 3])),
            )
            .build()
    }

    #[test]
    fn test_finds_children_by_tag() {
        let stanza = stanza();
        let pair_success = stanza.child("pair-success").unwrap();

        assert_eq!(
            pair_success.child("device").and_then(|n| n.attr("jid")),
            Some("1234:5@s.whatsapp.net")
        );
        assert_eq!(
            pair_success.child("device-identity").and_then(Node::bytes),
            Some([1u8, 2, 3].as_slice())
        );
        assert!(pair_success.child("biz").is_none());
        assert!(stanza.child("device").is_none());
    }

    #[test]
    fn test_reports_missing_attributes() {
        let stanza = stanza();
        assert_eq!(stanza.attr_req("id"), Ok("req-1"));
        assert_eq!(
            stanza.attr_req("from"),
            Err(ParseError::Generic {
                msg: "Missing required attribute from in node iq.".to_string()
            })
        );
    }

    #[test]
    fn test_bytes_node_has_no_children() {
        let node = Node::builder("device-identity").bytes(vec![9]).build();
        assert_eq!(node.children().count(), 0);
        assert!(Node::new("empty").bytes().is_none());
    }

    #[test]
    fn test_renders_stanza() {
        assert_snapshot!(stanza().to_string(), @r###"<iq id="req-1" type="set"><pair-success><device jid="1234:5@s.whatsapp.net"/><device-identity>[3 bytes]</device-identity></pair-success></iq>"###);
    }
}
