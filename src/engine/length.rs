//! Length specifier resolution.
//!
//! A specifier is either a preset name (`short`, `medium`, `long`), anything containing a run of
//! decimal digits (`"100"`, `"100 words"`, `"about 250 words please"`), or something else, which
//! silently falls back to the `medium` budget. Resolution is total and always yields at least one
//! word.

/// Length specifier applied when callers omit one.
pub const DEFAULT_LENGTH: &str = "medium";

/// Word budget used when the specifier is neither a preset nor numeric.
pub const DEFAULT_TARGET_WORDS: usize = 200;

/// Named presets and their word budgets.
pub const LENGTH_PRESETS: [(&str, usize); 3] = [("short", 75), ("medium", 200), ("long", 400)];

/// Resolve a length specifier into a positive target word count.
///
/// Only ASCII digits count as numeric. Other Unicode decimal digits (full-width `１００`, Arabic-Indic
/// `١٠٠`) are treated like any other text, so a specifier made only of them falls back to
/// [`DEFAULT_TARGET_WORDS`].
pub fn resolve_target_words(specifier: &str) -> usize {
    let normalized = specifier.trim().to_lowercase();
    if let Some(&(_, words)) = LENGTH_PRESETS
        .iter()
        .find(|(name, _)| *name == normalized)
    {
        return words;
    }

    match first_digit_run(specifier) {
        Some(digits) => digits.parse::<usize>().unwrap_or(usize::MAX).max(1),
        None => {
            tracing::trace!(specifier, "Unrecognized length specifier; using default");
            DEFAULT_TARGET_WORDS
        }
    }
}

fn first_digit_run(specifier: &str) -> Option<&str> {
    let start = specifier.find(|c: char| c.is_ascii_digit())?;
    let rest = &specifier[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_case_insensitive() {
        assert_eq!(resolve_target_words("short"), 75);
        assert_eq!(resolve_target_words("Medium"), 200);
        assert_eq!(resolve_target_words("LONG"), 400);
        assert_eq!(resolve_target_words("  long \n"), 400);
    }

    #[test]
    fn numeric_specifiers_use_first_digit_run() {
        assert_eq!(resolve_target_words("100"), 100);
        assert_eq!(resolve_target_words("100 words"), 100);
        assert_eq!(resolve_target_words("in 3 paragraphs of 300 words"), 3);
        assert_eq!(resolve_target_words("v2"), 2);
    }

    #[test]
    fn unrecognized_specifiers_fall_back_to_default() {
        assert_eq!(resolve_target_words("gibberish"), DEFAULT_TARGET_WORDS);
        assert_eq!(resolve_target_words(""), DEFAULT_TARGET_WORDS);
        assert_eq!(resolve_target_words("   "), DEFAULT_TARGET_WORDS);
        assert_eq!(resolve_target_words("shortish"), DEFAULT_TARGET_WORDS);
    }

    #[test]
    fn non_ascii_digits_are_not_numeric() {
        assert_eq!(resolve_target_words("１００ words"), DEFAULT_TARGET_WORDS);
        assert_eq!(resolve_target_words("١٠٠"), DEFAULT_TARGET_WORDS);
        assert_eq!(resolve_target_words("١٠٠ or 40"), 40);
    }

    #[test]
    fn resolution_is_always_positive() {
        assert_eq!(resolve_target_words("0"), 1);
        assert_eq!(resolve_target_words("000 words"), 1);
        assert_eq!(
            resolve_target_words("99999999999999999999999999999999"),
            usize::MAX
        );
    }
}
