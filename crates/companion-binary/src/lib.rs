// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use jid::{Jid, S_WHATSAPP_NET};
pub use node::{Node, NodeBuilder, NodeContent};
pub use util::{encode_big_endian, ParseError, ValueOutOfRange, DEFAULT_BIG_ENDIAN_WIDTH};

mod jid;
pub mod node;
pub mod proto;
mod util;
