use tsuyaku_types::LanguageCode;

/// Script ranges checked in priority order. The first script present anywhere
/// in the text decides the language, so text mixing Han and kana is `zh`.
const SCRIPTS: &[(&str, &[(char, char)])] = &[
    ("zh", &[('\u{4e00}', '\u{9fa5}')]),
    ("ja", &[('\u{3040}', '\u{309f}'), ('\u{30a0}', '\u{30ff}')]),
    ("ko", &[('\u{ac00}', '\u{d7af}')]),
    ("ru", &[('\u{0400}', '\u{04ff}')]),
    ("ar", &[('\u{0600}', '\u{06ff}')]),
];

const FALLBACK: &str = "en";

/// Guess the language of `text` from the scripts it uses.
///
/// Script based only: Latin-script languages (French, German, ...) all come
/// back as `en`. Never fails.
pub fn detect(text: &str) -> LanguageCode {
    SCRIPTS
        .iter()
        .find(|(_, ranges)| text.chars().any(|c| in_ranges(c, ranges)))
        .map(|(code, _)| *code)
        .unwrap_or(FALLBACK)
        .to_string()
}

fn in_ranges(c: char, ranges: &[(char, char)]) -> bool {
    ranges.iter().any(|&(start, end)| (start..=end).contains(&c))
}
