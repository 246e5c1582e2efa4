use super::case::{capitalize, is_all_upper, is_title_case};

/// Irregular nouns the suffix rules below would mangle.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("ox", "oxen"),
];

/// Plural form of an English noun. Total: any input maps to some output,
/// and the empty string maps to itself.
///
/// Rules, first match wins: irregular table (case-insensitive lookup with
/// the input's casing restored), consonant + y → ies, s/x/z/ch/sh → es,
/// f → ves, fe → ves, default +s.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();
    if let Some((_, plural)) = IRREGULAR_PLURALS
        .iter()
        .find(|(singular, _)| *singular == lower)
    {
        if is_title_case(word) {
            return capitalize(plural);
        }
        if is_all_upper(word) {
            return plural.to_uppercase();
        }
        return (*plural).to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        if stem.chars().last().is_some_and(|prev| !is_vowel(prev)) {
            return format!("{stem}ies");
        }
    }

    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }

    if let Some(stem) = word.strip_suffix('f') {
        return format!("{stem}ves");
    }
    if let Some(stem) = word.strip_suffix("fe") {
        return format!("{stem}ves");
    }

    format!("{word}s")
}

fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}
