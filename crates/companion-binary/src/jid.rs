// companion-pairing/companion-binary
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ParseError;

/// Address of the server that outbound `iq` stanzas are sent to.
pub const S_WHATSAPP_NET: &str = "@s.whatsapp.net";

/// A user address of the form `user[_agent][:device]@server`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Jid {
    pub user: String,
    pub agent: Option<String>,
    pub device: Option<u16>,
    pub server: String,
}

impl Jid {
    /// The device index, 0 for the primary device.
    pub fn device_index(&self) -> u16 {
        self.device.unwrap_or_default()
    }

    /// Parses the user component as a phone number style numeric id.
    pub fn numeric_user(&self) -> Result<u64, ParseError> {
        Ok(self.user.parse::<u64>()?)
    }
}

impl FromStr for Jid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((user_combined, server)) = s.split_once('@') else {
            return Err(ParseError::Generic {
                msg: format!("Address '{}' is missing a server part.", s),
            });
        };

        let (user_agent, device) = match user_combined.split_once(':') {
            Some((user_agent, device)) => (user_agent, Some(device.parse::<u16>()?)),
            None => (user_combined, None),
        };

        let (user, agent) = match user_agent.split_once('_') {
            Some((user, agent)) => (user, Some(agent.to_string())),
            None => (user_agent, None),
        };

        Ok(Self {
            user: user.to_string(),
            agent,
            device,
            server: server.to_string(),
        })
    }
}

impl Display for Jid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user)?;
        if let Some(agent) = &self.agent {
            write!(f, "_{}", agent)?;
        }
        if let Some(device) = self.device {
            write!(f, ":{}", device)?;
        }
        write!(f, "@{}", self.server)
    }
}
