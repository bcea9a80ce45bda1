// companion-pairing/companion-pairing
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// Describes the connecting client. Read-only to the payload builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Primary, secondary and tertiary version components.
    pub version: [u32; 3],
    pub browser: Browser,
    /// ISO 3166-1 alpha-2 country code. Falls back to "US" when unset.
    pub country_code: Option<String>,
    /// Asks the primary device for a full history sync after pairing.
    pub sync_full_history: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    /// The operating system name, e.g. "Mac OS" or "Windows".
    pub name: String,
    /// The browser or client kind, e.g. "Chrome" or "Desktop".
    pub kind: String,
    pub version: String,
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The dotted version string, e.g. "2.3000.1015901307".
    pub fn version_string(&self) -> String {
        self.version
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: [2, 3000, 1015901307],
            browser: Browser::macos("Chrome"),
            country_code: None,
            sync_full_history: false,
        }
    }
}

impl Browser {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            version: version.into(),
        }
    }

    pub fn macos(kind: impl Into<String>) -> Self {
        Self::new("Mac OS", kind, "14.4.1")
    }

    pub fn windows(kind: impl Into<String>) -> Self {
        Self::new("Windows", kind, "10.0.22631")
    }

    pub fn ubuntu(kind: impl Into<String>) -> Self {
        Self::new("Ubuntu", kind, "22.04.4")
    }
}
