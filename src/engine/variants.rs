use super::case::capitalize;
use super::plural::pluralize;

/// One literal rewriting rule derived from the term pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantPair {
    pub pattern: String,
    pub substitute: String,
}

impl VariantPair {
    fn new(pattern: impl Into<String>, substitute: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            substitute: substitute.into(),
        }
    }
}

/// The eight case/plurality variants applied as whole-word rewrites.
///
/// Pairs whose pattern coincides collapse to the first-defined entry, so a
/// camelCase replacement is not folded to lower-case when the original term
/// is already lower-case. The surviving pairs are ordered longest pattern
/// first so a plural form is never consumed by its singular prefix.
pub fn whole_word_variants(original: &str, replacement: &str) -> Vec<VariantPair> {
    let plural_original = pluralize(original);
    let plural_replacement = pluralize(replacement);

    let raw = [
        VariantPair::new(original, replacement),
        VariantPair::new(original.to_lowercase(), replacement.to_lowercase()),
        VariantPair::new(original.to_uppercase(), replacement.to_uppercase()),
        VariantPair::new(capitalize(original), capitalize(replacement)),
        VariantPair::new(plural_original.as_str(), plural_replacement.as_str()),
        VariantPair::new(
            plural_original.to_lowercase(),
            plural_replacement.to_lowercase(),
        ),
        VariantPair::new(
            plural_original.to_uppercase(),
            plural_replacement.to_uppercase(),
        ),
        VariantPair::new(
            capitalize(&plural_original),
            capitalize(&plural_replacement),
        ),
    ];

    let mut pairs: Vec<VariantPair> = Vec::with_capacity(raw.len());
    for pair in raw {
        if !pairs.iter().any(|existing| existing.pattern == pair.pattern) {
            pairs.push(pair);
        }
    }

    pairs.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
    pairs
}

/// The six variants applied to filenames, in this fixed order. Filenames are
/// short; source order rather than length order is the defined behavior.
pub fn filename_variants(original: &str, replacement: &str) -> Vec<VariantPair> {
    let plural_original = pluralize(original);
    let plural_replacement = pluralize(replacement);

    vec![
        VariantPair::new(original, replacement),
        VariantPair::new(original.to_lowercase(), replacement.to_lowercase()),
        VariantPair::new(capitalize(original), capitalize(replacement)),
        VariantPair::new(plural_original.as_str(), plural_replacement.as_str()),
        VariantPair::new(
            plural_original.to_lowercase(),
            plural_replacement.to_lowercase(),
        ),
        VariantPair::new(
            capitalize(&plural_original),
            capitalize(&plural_replacement),
        ),
    ]
}
