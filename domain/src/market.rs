use serde::{Deserialize, Deserializer, Serialize};
use smallstr::SmallString;
use std::fmt::{self, Display, Formatter};

pub type String8 = SmallString<[u8; 8]>;

/// Market code which scopes task key bindings, e.g. "XNAS" or "XTSE".
/// The empty code is the global scope that applies to every venue without its own binding.
/// Codes are trimmed on construction and on deserialization alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Venue(String8);

impl Venue {
    pub fn new(code: &str) -> Self {
        Venue(String8::from_str(code.trim()))
    }

    pub fn global() -> Self {
        Venue(String8::new())
    }

    pub fn is_global(&self) -> bool {
        self.0.is_empty()
    }

    /// Extracts a string slice containing the entire market code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Venue {
    fn default() -> Self {
        Venue::global()
    }
}

impl From<&str> for Venue {
    fn from(value: &str) -> Self {
        Venue::new(value)
    }
}

impl<'de> Deserialize<'de> for Venue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Venue::new(&code))
    }
}

impl Display for Venue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.is_global() {
            true => f.write_str("<global>"),
            false => f.write_str(self.as_str()),
        }
    }
}
