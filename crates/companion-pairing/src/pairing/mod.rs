// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use finalizer::{
    configure_successful_pairing, verify_device_signature, PairingFinalizer, PairingOutcome,
};

mod finalizer;
mod prefix;
