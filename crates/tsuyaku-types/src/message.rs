use serde::{Deserialize, Serialize};

use crate::language::{LanguageCode, SourceLang};
use crate::types::TranslationRequest;

/// Messages sent by UI collaborators (selection bubble, popup)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Message {
    Translate {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<SourceLang>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<LanguageCode>,
    },
}

impl Message {
    /// Build a request, filling omitted languages with the given defaults
    pub fn into_request(self, default_from: &SourceLang, default_to: &str) -> TranslationRequest {
        match self {
            Message::Translate { text, from, to } => TranslationRequest {
                text,
                source: from.unwrap_or_else(|| default_from.clone()),
                target: target_or_default(to, default_to),
            },
        }
    }
}

/// `to` unless it is missing or blank
pub fn target_or_default(to: Option<LanguageCode>, default_to: &str) -> LanguageCode {
    to.filter(|to| !to.trim().is_empty())
        .unwrap_or_else(|| default_to.to_string())
}
