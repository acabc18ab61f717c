use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub static DEFAULT_KEY_BINDINGS_FILE_NAME: &str = "key_bindings.json";

fn default_key_bindings_file_name() -> String {
    DEFAULT_KEY_BINDINGS_FILE_NAME.to_owned()
}

/// Where the user profile keeps its key bindings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyBindingsSettings {
    pub profile_dir: PathBuf,
    #[serde(default = "default_key_bindings_file_name")]
    pub file_name: String,
}

impl KeyBindingsSettings {
    pub fn new(profile_dir: impl Into<PathBuf>) -> Self {
        Self {
            profile_dir: profile_dir.into(),
            file_name: default_key_bindings_file_name(),
        }
    }

    pub fn key_bindings_path(&self) -> PathBuf {
        self.profile_dir.join(&self.file_name)
    }
}
