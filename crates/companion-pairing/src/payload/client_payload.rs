// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use companion_binary::proto::{
    AppVersion, ClientPayload, ConnectReason, ConnectType, Platform, ReleaseChannel, UserAgent,
    WebInfo, WebSubPlatform,
};
use prost::Message;

use crate::models::ClientConfig;

const OS_VERSION: &str = "macOS 13.0";
const DEVICE: &str = "Desktop";
const OS_BUILD_NUMBER: &str = "22A380";
const LOCALE_LANGUAGE: &str = "en";
const DEFAULT_COUNTRY: &str = "US";
const MOBILE_CODE_UNSET: &str = "000";

pub fn build_user_agent(config: &ClientConfig) -> UserAgent {
    UserAgent {
        platform: Some(Platform::Web as i32),
        app_version: Some(AppVersion::from(config.version)),
        mcc: Some(MOBILE_CODE_UNSET.to_string()),
        mnc: Some(MOBILE_CODE_UNSET.to_string()),
        os_version: Some(OS_VERSION.to_string()),
        manufacturer: None,
        device: Some(DEVICE.to_string()),
        os_build_number: Some(OS_BUILD_NUMBER.to_string()),
        release_channel: Some(ReleaseChannel::Release as i32),
        locale_language_iso_639_1: Some(LOCALE_LANGUAGE.to_string()),
        locale_country_iso_3166_1_alpha_2: Some(
            config
                .country_code
                .clone()
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        ),
    }
}

/// The server only needs to know the client OS when a full history sync has to be chunked
/// for it. Everything else identifies as a plain web browser.
pub fn select_web_sub_platform(config: &ClientConfig) -> WebSubPlatform {
    if !config.sync_full_history {
        return WebSubPlatform::WebBrowser;
    }

    match config.browser.name.as_str() {
        "Mac OS" | "macOS" => WebSubPlatform::Darwin,
        "Windows" => WebSubPlatform::Win32,
        _ => WebSubPlatform::WebBrowser,
    }
}

pub fn build_client_payload(config: &ClientConfig) -> ClientPayload {
    ClientPayload {
        connect_type: Some(ConnectType::WifiUnknown as i32),
        connect_reason: Some(ConnectReason::UserActivated as i32),
        user_agent: Some(build_user_agent(config)),
        web_info: Some(WebInfo {
            web_sub_platform: Some(select_web_sub_platform(config) as i32),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Serializes a payload for the transport's handshake.
pub fn encode_client_payload(payload: &ClientPayload) -> Vec<u8> {
    payload.encode_to_vec()
}
