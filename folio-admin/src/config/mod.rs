mod errors;
pub(crate) mod storage;

use std::path::PathBuf;

use folio_shell::UserProfile;
use serde::{Deserialize, Serialize};

/// The single administrator allowed to sign in to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AccountConfig {
    pub(crate) full_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) avatar_url: Option<String>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            full_name: String::from("Portfolio Admin"),
            email: String::from("admin@example.com"),
            password: String::from("change-me"),
            avatar_url: None,
        }
    }
}

impl AccountConfig {
    /// Display data published to the session once signed in.
    pub(crate) fn profile(&self) -> UserProfile {
        UserProfile::new(self.full_name.clone(), self.avatar_url.clone())
    }
}

/// Admin dashboard configuration persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AdminConfig {
    pub(crate) account: AccountConfig,
    /// Directory for panel data; defaults to `data/` next to the config file.
    pub(crate) data_dir: Option<PathBuf>,
}

impl AdminConfig {
    /// Directory where panels keep their files.
    pub(crate) fn data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => storage::default_data_dir(),
        }
    }
}
