use aho_corasick::AhoCorasick;
use regex::{Captures, Regex};

use super::case::{capitalize, is_all_upper, is_title_case};
use super::variants::VariantPair;

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Replace every whole-word occurrence of a variant pattern in one scan.
///
/// The matcher must be built leftmost-longest over `variants`, in the same
/// order, so a plural pattern is never pre-empted by its singular prefix.
/// A hit embedded in a longer identifier fails the boundary check and is
/// left for the identifier pass; skipping past it cannot shadow another
/// whole-word hit, since any overlapping match would sit against a word
/// character on at least one side.
pub(crate) fn whole_words(text: &str, matcher: &AhoCorasick, variants: &[VariantPair]) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for hit in matcher.find_iter(text) {
        let left_ok = text[..hit.start()]
            .chars()
            .next_back()
            .map_or(true, |ch| !is_word_char(ch));
        let right_ok = text[hit.end()..]
            .chars()
            .next()
            .map_or(true, |ch| !is_word_char(ch));

        if left_ok && right_ok {
            result.push_str(&text[last..hit.start()]);
            result.push_str(&variants[hit.pattern().as_usize()].substitute);
            last = hit.end();
        }
    }

    result.push_str(&text[last..]);
    result
}

/// Rewrites identifier tokens that merely *contain* a term, covering
/// camelCase and PascalCase embeddings the whole-word pass leaves alone.
pub(crate) struct IdentifierRule {
    token_re: Regex,
    needle: String,
    substitute: String,
}

impl IdentifierRule {
    pub(crate) fn new(term: &str, replacement: &str) -> Result<Self, regex::Error> {
        let token_re = Regex::new(&format!(r"(?i)\b\w*{}\w*\b", regex::escape(term)))?;
        Ok(Self {
            token_re,
            // ASCII folding keeps byte offsets valid in the original token.
            needle: term.to_ascii_lowercase(),
            substitute: capitalize(replacement),
        })
    }
}

/// Replace the first case-insensitive occurrence of the rule's term inside
/// each matching identifier token. The substitute is always the capitalized
/// replacement: a term buried inside a compound identifier sits at an
/// interior camelCase joint.
pub(crate) fn identifiers(text: &str, rule: &IdentifierRule) -> String {
    rule.token_re
        .replace_all(text, |caps: &Captures| {
            let token = &caps[0];
            match token.to_ascii_lowercase().find(&rule.needle) {
                Some(idx) => {
                    let before = &token[..idx];
                    let after = &token[idx + rule.needle.len()..];
                    format!("{before}{}{after}", rule.substitute)
                }
                None => token.to_string(),
            }
        })
        .into_owned()
}

/// Case-insensitive substring rewrite for filenames. No word boundaries:
/// filenames concatenate words without separators. The matched span's casing
/// carries over to the substitute, so `RideEffects.ts` keeps its leading
/// capital.
pub(crate) fn filename(name: &str, rules: &[(Regex, String)]) -> String {
    let mut result = name.to_string();

    for (re, substitute) in rules {
        result = re
            .replace_all(&result, |caps: &Captures| {
                let found = &caps[0];
                if is_all_upper(found) {
                    substitute.to_uppercase()
                } else if is_title_case(found) {
                    capitalize(substitute)
                } else {
                    substitute.clone()
                }
            })
            .into_owned();
    }

    result
}
