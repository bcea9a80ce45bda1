// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

//! Binary schema records exchanged during login, registration and pairing.
//!
//! Field numbers follow the protocol's published schema so that the records are wire
//! compatible with the server and the primary device. Only the fields this client reads or
//! writes are declared; unknown fields are skipped when decoding.

pub use adv::{
    AdvDeviceIdentity, AdvEncryptionType, AdvSignedDeviceIdentity, AdvSignedDeviceIdentityHmac,
};
pub use client_payload::{
    AppVersion, ClientPayload, ConnectReason, ConnectType, DevicePairingRegistrationData,
    Platform, ReleaseChannel, UserAgent, WebInfo, WebSubPlatform,
};
pub use device_props::{DeviceProps, HistorySyncConfig, PlatformType};

mod adv;
mod client_payload;
mod device_props;
