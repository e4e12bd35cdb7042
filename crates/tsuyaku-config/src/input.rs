use serde::{Deserialize, Serialize};
use tsuyaku_types::{AUTO, SourceLang};

fn default_max_chars() -> usize {
    5000
}

fn default_from() -> String {
    AUTO.to_string()
}

fn default_to() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    /// Longest accepted text, counted in characters after trimming
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
    /// Source language used when a message omits `from`
    #[serde(default = "default_from")]
    pub default_from: String,
    /// Target language used when a message omits `to`
    #[serde(default = "default_to")]
    pub default_to: String,
}

impl InputConfig {
    pub fn default_source(&self) -> SourceLang {
        SourceLang::parse(&self.default_from)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            default_from: default_from(),
            default_to: default_to(),
        }
    }
}
