//! Persisted session identity.
//!
//! A client-generated identity correlating this install with a remote
//! conversation room. Stored as JSON in the platform data directory and
//! reused across restarts; regenerated only when the file is absent.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use sherpa_common::{IdentityError, SessionId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: SessionId,
    pub display_name: String,
}

impl Identity {
    pub fn generate(display_name: &str) -> Self {
        Self {
            user_id: SessionId::new(),
            display_name: display_name.to_string(),
        }
    }

    /// Load the identity stored at `path`, or generate and persist a new one
    /// if no file exists yet.
    ///
    /// A present-but-unreadable file is an error: silently minting a fresh
    /// id would detach the user from their remote room.
    pub fn load_or_generate(path: &Path, display_name: &str) -> Result<Self, IdentityError> {
        match std::fs::read_to_string(path) {
            Ok(data) => serde_json::from_str(&data)
                .map_err(|e| IdentityError::Parse(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let identity = Self::generate(display_name);
                identity.save(path)?;
                info!("generated new session identity at {}", path.display());
                Ok(identity)
            }
            Err(e) => Err(IdentityError::Io(format!("{}: {e}", path.display()))),
        }
    }

    fn save(&self, path: &Path) -> Result<(), IdentityError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| IdentityError::Io(format!("{}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| IdentityError::Parse(e.to_string()))?;
        std::fs::write(path, json)
            .map_err(|e| IdentityError::Io(format!("{}: {e}", path.display())))
    }
}

/// Default identity file location: `data_dir()/sherpa/identity.json`.
///
/// - macOS: `~/Library/Application Support/sherpa/identity.json`
/// - Linux: `$XDG_DATA_HOME/sherpa/identity.json`
pub fn default_identity_path() -> Result<PathBuf, IdentityError> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| IdentityError::Io("could not determine data directory".into()))?;
    Ok(data_dir.join("sherpa").join("identity.json"))
}
