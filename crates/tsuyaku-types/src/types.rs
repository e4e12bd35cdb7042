use serde::{Deserialize, Serialize};

use crate::language::{LanguageCode, SourceLang};

/// A single translation request, built per user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: SourceLang,
    pub target: LanguageCode,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<SourceLang>,
        target: impl Into<LanguageCode>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Outcome handed back to the caller.
///
/// On the wire this is `{"success": true, "translation": ...}` or
/// `{"success": false, "error": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireResult", into = "WireResult")]
pub enum TranslationResult {
    Success { translation: String },
    Failure { error: String },
}

impl TranslationResult {
    pub fn success(translation: impl Into<String>) -> Self {
        TranslationResult::Success {
            translation: translation.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        TranslationResult::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success { .. })
    }
}

#[derive(Serialize, Deserialize)]
struct WireResult {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<TranslationResult> for WireResult {
    fn from(value: TranslationResult) -> Self {
        match value {
            TranslationResult::Success { translation } => WireResult {
                success: true,
                translation: Some(translation),
                error: None,
            },
            TranslationResult::Failure { error } => WireResult {
                success: false,
                translation: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<WireResult> for TranslationResult {
    type Error = String;

    fn try_from(value: WireResult) -> Result<Self, Self::Error> {
        match (value.success, value.translation, value.error) {
            (true, Some(translation), _) => Ok(TranslationResult::Success { translation }),
            (true, None, _) => Err("successful result without translation".to_string()),
            (false, _, Some(error)) if !error.trim().is_empty() => {
                Ok(TranslationResult::Failure { error })
            }
            (false, _, _) => Err("failed result without error".to_string()),
        }
    }
}
