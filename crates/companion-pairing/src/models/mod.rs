// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_identity::AccountIdentity;
pub use client_config::{Browser, ClientConfig};
pub use credentials::{AuthCredentials, CredentialUpdate, Me};
pub use keys::*;
pub use signal_identity::{ProtocolAddress, SignalIdentity};

mod account_identity;
mod client_config;
mod credentials;
mod keys;
mod signal_identity;
