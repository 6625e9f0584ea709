use serde::{Deserialize, Serialize};

/// Configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentApiConfig {
    /// Maximum project title length, in characters.
    pub max_title_length: usize,
}

impl Default for ContentApiConfig {
    fn default() -> Self {
        Self {
            max_title_length: 120,
        }
    }
}
