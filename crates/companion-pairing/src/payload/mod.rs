// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use client_payload::{
    build_client_payload, build_user_agent, encode_client_payload, select_web_sub_platform,
};
pub use login::build_login_payload;
pub use registration::build_registration_payload;

mod client_payload;
mod login;
mod registration;
