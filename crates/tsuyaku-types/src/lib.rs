pub mod language;
pub mod message;
pub mod types;

pub use language::{AUTO, LanguageCode, SourceLang};
pub use message::{Message, target_or_default};
pub use types::{TranslationRequest, TranslationResult};
