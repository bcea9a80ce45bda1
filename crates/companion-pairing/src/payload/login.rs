// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use companion_binary::proto::ClientPayload;
use companion_binary::Jid;
use tracing::debug;

use crate::models::ClientConfig;
use crate::payload::build_client_payload;
use crate::PairingError;

/// Builds the payload a previously paired device logs in with.
pub fn build_login_payload(
    user_jid: &str,
    config: &ClientConfig,
) -> Result<ClientPayload, PairingError> {
    let jid = user_jid.parse::<Jid>()?;
    debug!(jid = %jid, "Building login payload");

    Ok(ClientPayload {
        passive: Some(true),
        pull: Some(true),
        username: Some(jid.numeric_user()?),
        device: Some(jid.device_index().into()),
        lid_db_migrated: Some(false),
        ..build_client_payload(config)
    })
}
