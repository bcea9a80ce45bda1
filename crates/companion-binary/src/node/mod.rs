// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use builder::NodeBuilder;
pub use node::{Node, NodeContent};

mod builder;
mod node;
