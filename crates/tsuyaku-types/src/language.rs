use std::fmt;

use serde::{Deserialize, Serialize};

/// ISO 639-1 style tag ("zh", "en", ...). Providers may accept codes outside
/// any fixed list, so this stays an open string.
pub type LanguageCode = String;

/// Wire value asking for source language auto-detection
pub const AUTO: &str = "auto";

/// Source language of a request: either a concrete code or auto-detection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLang {
    #[default]
    Auto,
    Code(LanguageCode),
}

impl SourceLang {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(AUTO) {
            SourceLang::Auto
        } else {
            SourceLang::Code(value.to_string())
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SourceLang::Auto)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SourceLang::Auto => AUTO,
            SourceLang::Code(code) => code,
        }
    }

    /// Concrete code, or `None` when detection is requested
    pub fn code(&self) -> Option<&str> {
        match self {
            SourceLang::Auto => None,
            SourceLang::Code(code) => Some(code),
        }
    }
}

impl From<String> for SourceLang {
    fn from(value: String) -> Self {
        SourceLang::parse(&value)
    }
}

impl From<&str> for SourceLang {
    fn from(value: &str) -> Self {
        SourceLang::parse(value)
    }
}

impl From<SourceLang> for String {
    fn from(value: SourceLang) -> Self {
        match value {
            SourceLang::Auto => AUTO.to_string(),
            SourceLang::Code(code) => code,
        }
    }
}

impl fmt::Display for SourceLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_is_parsed_from_wire_value() {
        assert_eq!(SourceLang::parse("auto"), SourceLang::Auto);
        assert_eq!(SourceLang::parse("AUTO"), SourceLang::Auto);
        assert_eq!(SourceLang::parse(""), SourceLang::Auto);
        assert_eq!(SourceLang::parse("ja"), SourceLang::Code("ja".into()));
    }

    #[test]
    fn serializes_as_bare_string() {
        let json = serde_json::to_string(&SourceLang::Code("ko".into())).unwrap();
        assert_eq!(json, "\"ko\"");

        let parsed: SourceLang = serde_json::from_str("\"auto\"").unwrap();
        assert!(parsed.is_auto());
        assert_eq!(parsed.code(), None);
    }
}
