#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Text is empty")]
    Empty,

    #[error("Text is too long: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },
}

/// Trim `text` and check it is between 1 and `max_chars` characters
pub fn validate_text(text: &str, max_chars: usize) -> Result<&str, InputError> {
    let text = text.trim();

    if text.is_empty() {
        return Err(InputError::Empty);
    }

    let len = text.chars().count();
    if len > max_chars {
        return Err(InputError::TooLong {
            len,
            max: max_chars,
        });
    }

    Ok(text)
}
