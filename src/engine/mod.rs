pub mod case;
pub mod plural;
pub mod substitute;
pub mod variants;

use aho_corasick::{AhoCorasick, MatchKind};
use lazy_static::lazy_static;
use regex::Regex;

use crate::RenameError;
use plural::pluralize;
use substitute::IdentifierRule;
use variants::VariantPair;

lazy_static! {
    // Both substitution passes assume the term is an identifier fragment.
    static ref TERM_SHAPE: Regex = Regex::new(r"^\w+$").unwrap();
}

/// The term-rewriting engine for one original/replacement pair.
///
/// Construction precompiles every matcher; the rewrite methods are pure
/// string transforms with no I/O.
pub struct Engine {
    variants: Vec<VariantPair>,
    matcher: AhoCorasick,
    identifier_rules: [IdentifierRule; 2],
    filename_rules: Vec<(Regex, String)>,
}

impl Engine {
    pub fn new(original: &str, replacement: &str) -> Result<Self, RenameError> {
        validate_term(original)?;
        validate_term(replacement)?;

        let variants = variants::whole_word_variants(original, replacement);
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(variants.iter().map(|pair| pair.pattern.as_str()))?;

        let identifier_rules = [
            IdentifierRule::new(original, replacement)?,
            IdentifierRule::new(&pluralize(original), &pluralize(replacement))?,
        ];

        let filename_rules = variants::filename_variants(original, replacement)
            .into_iter()
            .map(|pair| {
                let re = Regex::new(&format!("(?i){}", regex::escape(&pair.pattern)))?;
                Ok((re, pair.substitute))
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            variants,
            matcher,
            identifier_rules,
            filename_rules,
        })
    }

    /// Rewrite a text blob: whole words first, then the identifier-aware
    /// pass on the singular and plural term. The order is load-bearing;
    /// reordering the passes is not idempotent.
    pub fn rewrite_content(&self, text: &str) -> String {
        let mut result = substitute::whole_words(text, &self.matcher, &self.variants);
        for rule in &self.identifier_rules {
            result = substitute::identifiers(&result, rule);
        }
        result
    }

    /// Rewrite a filename with case-insensitive, boundary-free matching.
    pub fn rewrite_filename(&self, name: &str) -> String {
        substitute::filename(name, &self.filename_rules)
    }
}

fn validate_term(term: &str) -> Result<(), RenameError> {
    if term.is_empty() {
        return Err(RenameError::InvalidTerm {
            term: term.to_string(),
            reason: "term must not be empty",
        });
    }
    if !TERM_SHAPE.is_match(term) {
        return Err(RenameError::InvalidTerm {
            term: term.to_string(),
            reason: "term must contain only word characters",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_terms() {
        assert!(matches!(
            Engine::new("", "trip"),
            Err(RenameError::InvalidTerm { .. })
        ));
        assert!(matches!(
            Engine::new("ride", ""),
            Err(RenameError::InvalidTerm { .. })
        ));
        assert!(matches!(
            Engine::new("ride share", "trip"),
            Err(RenameError::InvalidTerm { .. })
        ));
    }

    #[test]
    fn rewrites_whole_words_and_embedded_identifiers() {
        let engine = Engine::new("ride", "trip").unwrap();

        let input = "export interface Ride { rideId: string; rides: Ride[]; }";
        let expected = "export interface Trip { TripId: string; trips: Trip[]; }";
        assert_eq!(engine.rewrite_content(input), expected);
    }

    #[test]
    fn rewrite_is_stable_once_no_term_remains() {
        let engine = Engine::new("ride", "controlLoop").unwrap();

        let once = engine.rewrite_content("rides and ride, plus a rideCount");
        assert_eq!(once, "controlLoops and controlLoop, plus a ControlLoopCount");
        assert_eq!(engine.rewrite_content(&once), once);
    }

    #[test]
    fn collision_winner_applies_end_to_end() {
        // Variant collapse is implementation-defined when substitutes
        // disagree; the first-defined transform wins (see variants::tests).
        let engine = Engine::new("Ride", "trip").unwrap();
        assert_eq!(engine.rewrite_content("Ride ride"), "trip trip");
    }

    #[test]
    fn rewrites_realistic_store_source() {
        let engine = Engine::new("ride", "controlLoop").unwrap();

        let input = concat!(
            "export const loadRides = createAction(\"[Ride] Load Rides\");\n",
            "export const loadRideSuccess = createAction(\n",
            "  \"[Ride] Load Ride Success\",\n",
            "  props<{ ride: any }>()\n",
            ");\n",
        );
        let expected = concat!(
            "export const loadControlLoops = createAction(\"[ControlLoop] Load ControlLoops\");\n",
            "export const loadControlLoopSuccess = createAction(\n",
            "  \"[ControlLoop] Load ControlLoop Success\",\n",
            "  props<{ controlLoop: any }>()\n",
            ");\n",
        );
        assert_eq!(engine.rewrite_content(input), expected);
    }

    #[test]
    fn filename_rewrite_round() {
        let engine = Engine::new("ride", "trip").unwrap();
        assert_eq!(engine.rewrite_filename("ride.ts"), "trip.ts");
        assert_eq!(engine.rewrite_filename("RideEffects.ts"), "TripEffects.ts");
    }
}
