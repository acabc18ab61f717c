use crate::key_bindings::binding_table::BindingTable;
use crate::settings::KeyBindingsSettings;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Key bindings file of a user profile
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(settings: &KeyBindingsSettings) -> Self {
        Self {
            path: settings.key_bindings_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<BindingTable> {
        let content = fs::read_to_string(&self.path).with_context(|| {
            format!("Unable to read key bindings file {}", self.path.display())
        })?;

        serde_json::from_str(&content).with_context(|| {
            format!("Unable to parse key bindings file {}", self.path.display())
        })
    }

    /// Never fails: a new profile gets the default bindings and so does a profile
    /// whose key bindings file can't be restored
    pub fn load(&self) -> BindingTable {
        if !self.path.exists() {
            log::info!(
                "Key bindings file {} doesn't exist, using defaults",
                self.path.display()
            );
            return BindingTable::with_default_bindings();
        }

        match self.try_load() {
            Ok(table) => table,
            Err(error) => {
                log::warn!("Unable to load key bindings, using defaults: {error:?}");
                BindingTable::with_default_bindings()
            }
        }
    }

    pub fn save(&self, table: &BindingTable) -> Result<()> {
        if let Some(profile_dir) = self.path.parent() {
            fs::create_dir_all(profile_dir).with_context(|| {
                format!("Unable to create profile directory {}", profile_dir.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(table).context("Unable to serialize key bindings")?;

        fs::write(&self.path, content).with_context(|| {
            format!("Unable to save key bindings file {}", self.path.display())
        })
    }
}
