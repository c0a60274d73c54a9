//! Canonical text form used for diacritic and case insensitive matching

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

/// The Combining Diacritical Marks block
const DIACRITICS: RangeInclusive<char> = '\u{300}'..='\u{36f}';

/// Reduce `s` to its canonical search form.
///
/// The input is lower-cased, canonically decomposed (NFD) and stripped of
/// combining diacritical marks, so `"Café"`, `"CAFÉ"` and `"cafe"` all map to
/// `"cafe"`. Lower-casing happens first so that characters whose lower-case
/// form decomposes (e.g. `'İ'`) are still stripped in the same pass. Marks
/// outside the diacritics block, such as Indic vowel signs, are kept.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !DIACRITICS.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Café"), "cafe");
        assert_eq!(normalize("cafe"), "cafe");
        assert_eq!(normalize("Mbappé"), "mbappe");
        assert_eq!(normalize("ÁLVARO MORATA"), "alvaro morata");
        assert_eq!(normalize("Łukasz"), "łukasz");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree() {
        assert_eq!(normalize("Le\u{301}o"), normalize("Léo"));
        assert_eq!(normalize("Le\u{301}o"), "leo");
    }

    #[test]
    fn dotted_capital_i_loses_its_dot() {
        assert_eq!(normalize("İstanbul"), "istanbul");
    }

    #[test]
    fn vowel_signs_outside_diacritics_survive() {
        assert_eq!(normalize("काम"), "काम");
        assert_ne!(normalize("काम"), normalize("किम"));
        assert_eq!(normalize("ไม้"), "ไม้");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[a-zA-Z0-9 'À-ÿĀ-ž\\-]{0,32}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
