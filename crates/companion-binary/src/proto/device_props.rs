// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::proto::AppVersion;

/// Describes the companion device to the primary device during registration.
#[derive(Clone, PartialEq, prost::Message)]
pub struct DeviceProps {
    #[prost(string, optional, tag = "1")]
    pub os: Option<String>,
    #[prost(message, optional, tag = "2")]
    pub version: Option<AppVersion>,
    #[prost(enumeration = "PlatformType", optional, tag = "3")]
    pub platform_type: Option<i32>,
    #[prost(bool, optional, tag = "4")]
    pub require_full_sync: Option<bool>,
    #[prost(message, optional, tag = "5")]
    pub history_sync_config: Option<HistorySyncConfig>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct HistorySyncConfig {
    #[prost(uint32, optional, tag = "1")]
    pub full_sync_days_limit: Option<u32>,
    #[prost(uint32, optional, tag = "2")]
    pub full_sync_size_mb_limit: Option<u32>,
    #[prost(uint32, optional, tag = "3")]
    pub storage_quota_mb: Option<u32>,
    #[prost(bool, optional, tag = "4")]
    pub inline_initial_payload_in_e2ee_msg: Option<bool>,
    #[prost(uint32, optional, tag = "5")]
    pub recent_sync_days_limit: Option<u32>,
    #[prost(bool, optional, tag = "6")]
    pub support_call_log_history: Option<bool>,
    #[prost(bool, optional, tag = "7")]
    pub support_bot_user_agent_chat_history: Option<bool>,
    #[prost(bool, optional, tag = "8")]
    pub support_cag_reactions_and_polls: Option<bool>,
    #[prost(bool, optional, tag = "9")]
    pub support_biz_hosted_msg: Option<bool>,
    #[prost(bool, optional, tag = "10")]
    pub support_recent_sync_chunk_message_count_tuning: Option<bool>,
    #[prost(bool, optional, tag = "11")]
    pub support_hosted_group_msg: Option<bool>,
    #[prost(bool, optional, tag = "12")]
    pub support_fbid_bot_chat_history: Option<bool>,
    #[prost(bool, optional, tag = "13")]
    pub support_add_on_history_sync_migration: Option<bool>,
    #[prost(bool, optional, tag = "14")]
    pub support_message_association: Option<bool>,
    #[prost(bool, optional, tag = "15")]
    pub support_group_history: Option<bool>,
    #[prost(bool, optional, tag = "16")]
    pub on_demand_ready: Option<bool>,
    #[prost(bool, optional, tag = "17")]
    pub support_guest_chat: Option<bool>,
}

/// Variant names are matched case-insensitively against the browser descriptor.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    prost::Enumeration,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[repr(i32)]
pub enum PlatformType {
    Unknown = 0,
    Chrome = 1,
    Firefox = 2,
    Ie = 3,
    Opera = 4,
    Safari = 5,
    Edge = 6,
    Desktop = 7,
    Ipad = 8,
    AndroidTablet = 9,
    Ohana = 10,
    Aloha = 11,
    Catalina = 12,
    TclTv = 13,
    IosPhone = 14,
    IosCatalyst = 15,
    AndroidPhone = 16,
    AndroidAmbiguous = 17,
    WearOs = 18,
    ArWrist = 19,
    ArDevice = 20,
    Uwp = 21,
    Vr = 22,
}
