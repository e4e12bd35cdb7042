use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Translation backends that can appear in the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Google,
    LibreTranslate,
    MyMemory,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::LibreTranslate => "libretranslate",
            ProviderKind::MyMemory => "mymemory",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(ProviderKind::Google),
            "libretranslate" | "libre" => Ok(ProviderKind::LibreTranslate),
            "mymemory" => Ok(ProviderKind::MyMemory),
            other => Err(format!("unknown provider '{other}'")),
        }
    }
}

fn default_providers() -> Vec<ProviderKind> {
    vec![
        ProviderKind::Google,
        ProviderKind::LibreTranslate,
        ProviderKind::MyMemory,
    ]
}

fn default_google_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_libretranslate_url() -> String {
    "https://libretranslate.com".to_string()
}

fn default_mymemory_url() -> String {
    "https://api.mymemory.translated.net".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("tsuyaku/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Fallback chain, tried in this order
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
    #[serde(default = "default_google_url")]
    pub google_url: String,
    #[serde(default = "default_libretranslate_url")]
    pub libretranslate_url: String,
    /// Only needed for self-hosted or paid LibreTranslate instances
    #[serde(default)]
    pub libretranslate_api_key: Option<String>,
    #[serde(default = "default_mymemory_url")]
    pub mymemory_url: String,
    /// Transport timeout applied to every provider call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            google_url: default_google_url(),
            libretranslate_url: default_libretranslate_url(),
            libretranslate_api_key: None,
            mymemory_url: default_mymemory_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
