pub mod detection;
pub mod validation;

pub use detection::detect;
pub use validation::{InputError, validate_text};
