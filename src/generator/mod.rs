//! Random credential generation with per-class guarantees.
//!
//! The generator draws one mandatory character from every enabled class,
//! fills the rest from the union of the enabled pools, and shuffles the
//! result.  All randomness comes from the OS CSPRNG — credential output
//! must never be predictable, so a seedable generator is not an option
//! here.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, TryRngCore};

use crate::errors::{PassVaultError, Result};

/// The four fixed character classes.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Glyphs removed from each class when ambiguous exclusion is on.
/// The symbol class has no ambiguous members.
const AMBIGUOUS_UPPERCASE: &[char] = &['I', 'L'];
const AMBIGUOUS_LOWERCASE: &[char] = &['l', 'o'];
const AMBIGUOUS_DIGITS: &[char] = &['1', '0'];

/// Options controlling a single `generate` call.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// Requested output length.  If fewer than the number of enabled
    /// classes, the output grows to one character per class instead.
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop visually confusable glyphs (I/L, l/o, 1/0) from the pools.
    pub exclude_ambiguous: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: true,
        }
    }
}

/// Generate a random credential string.
///
/// Guarantees at least one character from every enabled class.  Fails
/// with `InvalidGeneratorConfig` when no class is enabled; no other
/// input is rejected.
pub fn generate(options: &GeneratorOptions) -> Result<String> {
    let mut pools: Vec<Vec<char>> = Vec::with_capacity(4);
    if options.uppercase {
        pools.push(class_pool(UPPERCASE, AMBIGUOUS_UPPERCASE, options.exclude_ambiguous));
    }
    if options.lowercase {
        pools.push(class_pool(LOWERCASE, AMBIGUOUS_LOWERCASE, options.exclude_ambiguous));
    }
    if options.digits {
        pools.push(class_pool(DIGITS, AMBIGUOUS_DIGITS, options.exclude_ambiguous));
    }
    if options.symbols {
        pools.push(SYMBOLS.chars().collect());
    }

    if pools.is_empty() {
        return Err(PassVaultError::InvalidGeneratorConfig);
    }

    let mut rng = OsRng.unwrap_err();

    // One mandatory character per enabled class.
    let mut chars: Vec<char> = pools
        .iter()
        .map(|pool| pool[rng.random_range(0..pool.len())])
        .collect();

    // Fill the remainder from the union of the enabled pools.  When the
    // requested length is below the class count this loop never runs and
    // the result keeps one character per class.
    let union: Vec<char> = pools.concat();
    while chars.len() < options.length {
        chars.push(union[rng.random_range(0..union.len())]);
    }

    // Unbiased Fisher–Yates shuffle so the mandatory characters are not
    // clustered at the front.
    chars.shuffle(&mut rng);

    Ok(chars.into_iter().collect())
}

/// Build a class pool, dropping ambiguous glyphs when requested.
fn class_pool(class: &str, ambiguous: &[char], exclude: bool) -> Vec<char> {
    class
        .chars()
        .filter(|c| !exclude || !ambiguous.contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_classes(length: usize) -> GeneratorOptions {
        GeneratorOptions {
            length,
            ..GeneratorOptions::default()
        }
    }

    #[test]
    fn output_has_requested_length() {
        let out = generate(&all_classes(20)).unwrap();
        assert_eq!(out.chars().count(), 20);
    }

    #[test]
    fn output_contains_every_enabled_class() {
        let out = generate(&all_classes(32)).unwrap();
        assert!(out.chars().any(|c| UPPERCASE.contains(c)));
        assert!(out.chars().any(|c| LOWERCASE.contains(c)));
        assert!(out.chars().any(|c| DIGITS.contains(c)));
        assert!(out.chars().any(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn length_below_class_count_grows_to_class_count() {
        // Four classes enabled but only two characters requested: the
        // mandatory draws win and the output has four characters.
        let out = generate(&all_classes(2)).unwrap();
        assert_eq!(out.chars().count(), 4);
    }

    #[test]
    fn zero_length_single_class_yields_one_char() {
        let opts = GeneratorOptions {
            length: 0,
            uppercase: false,
            lowercase: true,
            digits: false,
            symbols: false,
            exclude_ambiguous: false,
        };
        let out = generate(&opts).unwrap();
        assert_eq!(out.chars().count(), 1);
        assert!(out.chars().all(|c| LOWERCASE.contains(c)));
    }

    #[test]
    fn excludes_ambiguous_glyphs_when_requested() {
        for _ in 0..20 {
            let out = generate(&all_classes(64)).unwrap();
            for c in ['I', 'L', 'l', 'o', '1', '0'] {
                assert!(!out.contains(c), "ambiguous '{c}' leaked into {out:?}");
            }
        }
    }

    #[test]
    fn ambiguous_glyphs_allowed_when_not_excluded() {
        // With exclusion off the full pools are used; over many draws the
        // ambiguous glyphs should appear at least once.
        let opts = GeneratorOptions {
            exclude_ambiguous: false,
            ..all_classes(2048)
        };
        let out = generate(&opts).unwrap();
        assert!(['I', 'L', 'l', 'o', '1', '0'].iter().any(|c| out.contains(*c)));
    }

    #[test]
    fn no_enabled_class_is_an_error() {
        let opts = GeneratorOptions {
            length: 12,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            exclude_ambiguous: true,
        };
        assert!(matches!(
            generate(&opts),
            Err(PassVaultError::InvalidGeneratorConfig)
        ));
    }

    #[test]
    fn symbols_only_pool_is_unaffected_by_exclusion() {
        let opts = GeneratorOptions {
            length: 24,
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: true,
            exclude_ambiguous: true,
        };
        let out = generate(&opts).unwrap();
        assert_eq!(out.chars().count(), 24);
        assert!(out.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn consecutive_outputs_differ() {
        let a = generate(&all_classes(24)).unwrap();
        let b = generate(&all_classes(24)).unwrap();
        assert_ne!(a, b);
    }
}
