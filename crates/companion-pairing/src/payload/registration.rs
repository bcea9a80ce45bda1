// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use companion_binary::proto::{
    AppVersion, ClientPayload, DevicePairingRegistrationData, DeviceProps, HistorySyncConfig,
    PlatformType,
};
use companion_binary::{encode_big_endian, DEFAULT_BIG_ENDIAN_WIDTH};
use md5::{Digest, Md5};
use prost::Message;
use tracing::debug;

use crate::crypto::DJB_KEY_TYPE;
use crate::models::{ClientConfig, KeyMaterial};
use crate::payload::build_client_payload;
use crate::PairingError;

const SIGNED_PRE_KEY_ID_WIDTH: usize = 3;
const STORAGE_QUOTA_MB: u32 = 10 * 1024;
const RECENT_SYNC_DAYS_LIMIT: u32 = 90;

/// Builds the payload a new companion registers with, carrying its public key bundle.
pub fn build_registration_payload(
    keys: &KeyMaterial,
    config: &ClientConfig,
) -> Result<ClientPayload, PairingError> {
    debug!(
        registration_id = keys.registration_id,
        "Building registration payload"
    );

    let device_pairing_data = DevicePairingRegistrationData {
        e_regid: Some(encode_big_endian(
            keys.registration_id.into(),
            DEFAULT_BIG_ENDIAN_WIDTH,
        )?),
        e_keytype: Some(vec![DJB_KEY_TYPE]),
        e_ident: Some(keys.signed_identity_key.public.as_ref().to_vec()),
        e_skey_id: Some(encode_big_endian(
            keys.signed_pre_key.key_id.into_inner().into(),
            SIGNED_PRE_KEY_ID_WIDTH,
        )?),
        e_skey_val: Some(keys.signed_pre_key.key_pair.public.as_ref().to_vec()),
        e_skey_sig: Some(keys.signed_pre_key.signature.to_vec()),
        build_hash: Some(app_version_hash(config).to_vec()),
        device_props: Some(build_device_props(config).encode_to_vec()),
    };

    Ok(ClientPayload {
        passive: Some(false),
        pull: Some(false),
        device_pairing_data: Some(device_pairing_data),
        ..build_client_payload(config)
    })
}

/// Coarse build fingerprint of the dotted version string. Not used for any security
/// decision.
fn app_version_hash(config: &ClientConfig) -> [u8; 16] {
    let mut hash = [0u8; 16];
    hash.copy_from_slice(&Md5::digest(config.version_string().as_bytes()));
    hash
}

fn build_device_props(config: &ClientConfig) -> DeviceProps {
    let os = match config.browser.name.as_str() {
        "Mac OS" => "macOS".to_string(),
        name => name.to_string(),
    };

    DeviceProps {
        os: Some(os),
        version: Some(AppVersion::from(config.version)),
        platform_type: Some(platform_type(&config.browser.kind) as i32),
        // Always requested, independent of `sync_full_history`.
        require_full_sync: Some(true),
        history_sync_config: Some(history_sync_config()),
    }
}

fn platform_type(kind: &str) -> PlatformType {
    kind.parse().unwrap_or_else(|_| {
        debug!("Unknown browser kind {kind}, registering as {}", PlatformType::Chrome);
        PlatformType::Chrome
    })
}

fn history_sync_config() -> HistorySyncConfig {
    HistorySyncConfig {
        full_sync_days_limit: None,
        full_sync_size_mb_limit: None,
        storage_quota_mb: Some(STORAGE_QUOTA_MB),
        inline_initial_payload_in_e2ee_msg: Some(true),
        recent_sync_days_limit: Some(RECENT_SYNC_DAYS_LIMIT),
        support_call_log_history: Some(true),
        support_bot_user_agent_chat_history: Some(true),
        support_cag_reactions_and_polls: Some(true),
        support_biz_hosted_msg: Some(true),
        support_recent_sync_chunk_message_count_tuning: Some(true),
        support_hosted_group_msg: Some(true),
        support_fbid_bot_chat_history: Some(true),
        support_add_on_history_sync_migration: Some(true),
        support_message_association: Some(true),
        support_group_history: Some(true),
        on_demand_ready: Some(true),
        support_guest_chat: Some(true),
    }
}
